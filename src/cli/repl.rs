//! Interactive chat session

use super::output::Output;
use crate::api::AgroApi;
use crate::session::Assistant;
use crate::types::Result;
use agrovision_core::{Error, PredictionStore};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// `/quit` or `/exit`
    Quit,
    /// `/new`: reset the transcript
    NewChat,
    /// `/history`: list session titles
    History,
    /// `/delete <n>`: remove the n-th history entry (1-based)
    Delete(usize),
    /// `/help`
    Help,
    /// Anything that is not a command
    Message(String),
    /// A slash command that could not be understood
    Invalid(String),
}

impl ReplCommand {
    /// Classify a line of input.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix('/') else {
            return ReplCommand::Message(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("quit" | "exit"), None, _) => ReplCommand::Quit,
            (Some("new"), None, _) => ReplCommand::NewChat,
            (Some("history"), None, _) => ReplCommand::History,
            (Some("help"), None, _) => ReplCommand::Help,
            (Some("delete"), Some(n), None) => match n.parse::<usize>() {
                Ok(n) if n >= 1 => ReplCommand::Delete(n),
                _ => ReplCommand::Invalid(format!("'{}' is not a history number", n)),
            },
            _ => ReplCommand::Invalid(format!("Unknown command '{}'", trimmed)),
        }
    }
}

fn print_help(output: &Output) {
    output.header("Commands");
    output.kv("/new", "start a new chat (history is kept)");
    output.kv("/history", "list recent chats");
    output.kv("/delete <n>", "remove history entry n");
    output.kv("/quit", "leave");
}

/// Read lines from `input` until end of input or `/quit`.
pub async fn run_chat_loop<A, S, R>(
    assistant: &mut Assistant<A, S>,
    input: R,
    output: &Output,
) -> Result<()>
where
    A: AgroApi,
    S: PredictionStore,
    R: AsyncBufRead + Unpin,
{
    for message in assistant.chat.messages() {
        output.message(message);
    }
    output.hint("Type /help for commands.");

    let mut lines = input.lines();
    loop {
        output.prompt();
        let Some(line) = lines.next_line().await? else {
            output.newline();
            break;
        };

        match ReplCommand::parse(&line) {
            ReplCommand::Quit => break,
            ReplCommand::Help => print_help(output),
            ReplCommand::NewChat => {
                assistant.new_chat();
                for message in assistant.chat.messages() {
                    output.message(message);
                }
            }
            ReplCommand::History => output.history(assistant.chat.history()),
            ReplCommand::Delete(n) => match assistant.delete_history(n - 1) {
                Ok(entry) => output.success(&format!("Removed \"{}\"", entry.title)),
                Err(e) => output.warning(&e.to_string()),
            },
            ReplCommand::Invalid(reason) => output.warning(&reason),
            ReplCommand::Message(text) => match assistant.ask(&text).await {
                Ok(exchange) => {
                    output.message(&exchange.reply);
                    if let Some(failure) = exchange.failure {
                        output.warning(&failure.to_string());
                    }
                }
                Err(Error::EmptyInput) => {}
                Err(e) => output.warning(&e.to_string()),
            },
        }
    }
    Ok(())
}
