//! Chat transcript and session history.

use crate::context::SessionContext;
use crate::error::{Error, Result};
use crate::guard::InFlight;
use crate::store::PredictionStore;
use crate::types::{ChatMessage, ChatRequest, HistoryEntry, APOLOGY};
use chrono::NaiveDate;
use tracing::{debug, error};

/// State behind the chatbot view.
///
/// The transcript always starts with the greeting and only grows, except on
/// [`reset`](Self::reset). History entries are snapshots: once created they
/// do not follow the transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    history: Vec<HistoryEntry>,
    in_flight: InFlight,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// A fresh session holding only the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::greeting()],
            history: Vec::new(),
            in_flight: InFlight::default(),
        }
    }

    /// Transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Session titles, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Whether a reply is pending.
    pub fn is_waiting(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Record a user message and build the request for it.
    ///
    /// The message is appended before any network activity. If it is the
    /// first user message since the last reset a history entry titled with
    /// `input` is prepended. Cached predictions are read from `ctx` on a
    /// best-effort basis.
    pub fn submit<S: PredictionStore>(
        &mut self,
        ctx: &SessionContext<S>,
        input: &str,
        today: NaiveDate,
    ) -> Result<ChatRequest> {
        if self.in_flight.is_busy() {
            return Err(Error::Busy);
        }
        if input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let starts_session = self.messages.len() == 1;
        self.messages.push(ChatMessage::user(input));
        if starts_session {
            self.history.insert(
                0,
                HistoryEntry {
                    title: input.to_string(),
                    date: today,
                },
            );
        }
        self.in_flight.begin()?;

        debug!(starts_session, "Sending chat message");
        Ok(ctx.chat_request(input))
    }

    /// Append the assistant's reply, or the apology if the request failed.
    pub fn complete(&mut self, reply: Result<String>) -> &ChatMessage {
        self.in_flight.finish();
        let message = match reply {
            Ok(answer) => ChatMessage::assistant(answer),
            Err(e) => {
                error!(error = %e, "Chat request failed");
                ChatMessage::assistant(APOLOGY)
            }
        };
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    /// Start over with only the greeting. History is kept.
    pub fn reset(&mut self) {
        self.messages = vec![ChatMessage::greeting()];
    }

    /// Remove the history entry at `index`.
    pub fn delete_history(&mut self, index: usize) -> Result<HistoryEntry> {
        if index >= self.history.len() {
            return Err(Error::HistoryIndex {
                index,
                len: self.history.len(),
            });
        }
        Ok(self.history.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::types::{Role, GREETING};
    use serde_json::json;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn ctx() -> SessionContext<MemoryStore> {
        SessionContext::new(MemoryStore::new())
    }

    #[test]
    fn test_new_session_has_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::System);
        assert_eq!(session.messages()[0].content, GREETING);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_exchange_adds_one_message_each_way() {
        let ctx = ctx();
        let mut session = ChatSession::new();

        session.submit(&ctx, "How much water does rice need?", day()).unwrap();
        assert_eq!(session.messages().len(), 2);
        assert!(session.is_waiting());

        let reply = session.complete(Ok("Plenty.".to_string()));
        assert_eq!(reply, &ChatMessage::assistant("Plenty."));
        assert_eq!(session.messages().len(), 3);
        assert!(!session.is_waiting());
    }

    #[test]
    fn test_failed_exchange_appends_apology() {
        let ctx = ctx();
        let mut session = ChatSession::new();
        session.submit(&ctx, "hello", day()).unwrap();

        session.complete(Err(Error::Transport("connection refused".to_string())));

        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2], ChatMessage::assistant(APOLOGY));
    }

    #[test]
    fn test_history_only_on_first_message() {
        let ctx = ctx();
        let mut session = ChatSession::new();

        session.submit(&ctx, "first", day()).unwrap();
        session.complete(Ok("a".to_string()));
        session.submit(&ctx, "second", day()).unwrap();
        session.complete(Ok("b".to_string()));

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].title, "first");
        assert_eq!(session.history()[0].date, day());
    }

    #[test]
    fn test_history_is_prepended_after_reset() {
        let ctx = ctx();
        let mut session = ChatSession::new();

        session.submit(&ctx, "older", day()).unwrap();
        session.complete(Ok("a".to_string()));
        session.reset();
        session.submit(&ctx, "newer", day()).unwrap();

        let titles: Vec<&str> = session.history().iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }

    #[test]
    fn test_history_title_keeps_raw_input() {
        let ctx = ctx();
        let mut session = ChatSession::new();
        session.submit(&ctx, "  spacing kept ", day()).unwrap();
        assert_eq!(session.history()[0].title, "  spacing kept ");
        assert_eq!(session.messages()[1].content, "  spacing kept ");
    }

    #[test]
    fn test_empty_input_changes_nothing() {
        let ctx = ctx();
        let mut session = ChatSession::new();
        assert_eq!(session.submit(&ctx, "   \n", day()), Err(Error::EmptyInput));
        assert_eq!(session.messages().len(), 1);
        assert!(session.history().is_empty());
        assert!(!session.is_waiting());
    }

    #[test]
    fn test_submit_while_waiting_is_rejected() {
        let ctx = ctx();
        let mut session = ChatSession::new();
        session.submit(&ctx, "one", day()).unwrap();

        assert_eq!(session.submit(&ctx, "two", day()), Err(Error::Busy));
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_reset_keeps_history() {
        let ctx = ctx();
        let mut session = ChatSession::new();
        for question in ["a", "b", "c"] {
            session.submit(&ctx, question, day()).unwrap();
            session.complete(Ok("ok".to_string()));
        }
        let history = session.history().to_vec();

        session.reset();

        assert_eq!(session.messages(), &[ChatMessage::greeting()]);
        assert_eq!(session.history(), history.as_slice());
    }

    #[test]
    fn test_delete_history_preserves_order() {
        let ctx = ctx();
        let mut session = ChatSession::new();
        for title in ["a", "b", "c"] {
            session.submit(&ctx, title, day()).unwrap();
            session.complete(Ok("ok".to_string()));
            session.reset();
        }
        // newest first: c, b, a
        let removed = session.delete_history(1).unwrap();
        assert_eq!(removed.title, "b");

        let titles: Vec<&str> = session.history().iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a"]);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_delete_history_out_of_range() {
        let mut session = ChatSession::new();
        assert_eq!(
            session.delete_history(0),
            Err(Error::HistoryIndex { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_delete_history_does_not_touch_transcript() {
        let ctx = ctx();
        let mut session = ChatSession::new();
        session.submit(&ctx, "keep me", day()).unwrap();
        session.complete(Ok("ok".to_string()));

        session.delete_history(0).unwrap();

        assert!(session.history().is_empty());
        assert_eq!(session.messages()[1].content, "keep me");
    }

    #[test]
    fn test_request_carries_cached_predictions() {
        let ctx = ctx();
        let crop = json!({"recommendations": [{"crop": "Millet", "confidence": 87}]});
        ctx.record_crop(&crop).unwrap();

        let mut session = ChatSession::new();
        let request = session.submit(&ctx, "Why millet?", day()).unwrap();

        assert_eq!(request.question, "Why millet?");
        assert_eq!(request.crop_result, Some(crop));
        assert_eq!(request.disease_result, None);
    }
}
