//! Data model shared by every front end.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Greeting that opens every chat session.
pub const GREETING: &str =
    "Hello! I am your AI agriculture assistant. Ask me anything about farming, crops, or diseases.";

/// Assistant reply used when the chat endpoint cannot be reached.
pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

// ============= Chat Types =============

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Session greeting.
    System,
    /// Farmer input.
    User,
    /// Backend reply.
    Assistant,
}

/// One entry of the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who wrote the message.
    pub role: Role,
    /// Message text, verbatim.
    pub content: String,
}

impl ChatMessage {
    /// The fixed greeting that starts a session.
    pub fn greeting() -> Self {
        Self {
            role: Role::System,
            content: GREETING.to_string(),
        }
    }

    /// A message typed by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// A reply from the assistant.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A past chat session, titled by its first user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// First user message of the session.
    pub title: String,
    /// Day the session was started.
    pub date: NaiveDate,
}

// ============= Prediction Types =============

/// One ranked crop suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    /// Crop name as returned by the backend.
    pub crop: String,
    /// Confidence in percent.
    pub confidence: f64,
}

impl CropRecommendation {
    /// `"Millet — 87%"`.
    pub fn display_line(&self) -> String {
        format!("{} — {}%", title_case(&self.crop), format_percent(self.confidence))
    }
}

/// Ranked crop suggestions for one form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropPrediction {
    /// Best first.
    pub recommendations: Vec<CropRecommendation>,
}

/// Outcome of disease detection for one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseResult {
    /// Disease label.
    pub disease: String,
    /// Confidence in percent.
    pub confidence: f64,
}

impl DiseaseResult {
    /// Label/value pairs in display order.
    pub fn display_rows(&self) -> [(&'static str, String); 2] {
        [
            ("Disease", self.disease.clone()),
            ("Confidence", format!("{}%", format_percent(self.confidence))),
        ]
    }
}

// ============= Wire Types =============

/// Body of `POST /api/chat`.
///
/// Cached predictions travel as the raw envelopes the prediction endpoints
/// returned; a missing cache entry is sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question.
    pub question: String,
    /// Last crop recommendation response, if any.
    pub crop_result: Option<Value>,
    /// Last disease detection response, if any.
    pub disease_result: Option<Value>,
}

/// Response of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply.
    pub answer: String,
}

/// Response of `GET /healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `"ok"` when the backend is up.
    pub status: String,
}

/// Interpret a raw response body as `T`.
///
/// A body carrying a string `error` field is the backend rejecting the input
/// and becomes [`Error::Backend`].
pub fn decode_envelope<T: DeserializeOwned>(raw: &Value) -> Result<T> {
    if let Some(message) = raw.get("error").and_then(Value::as_str) {
        return Err(Error::Backend(message.to_string()));
    }
    serde_json::from_value(raw.clone()).map_err(|e| Error::Decode(e.to_string()))
}

// ============= Formatting =============

/// Render a percentage without a trailing `.0`.
pub fn format_percent(value: f64) -> String {
    format!("{}", value)
}

/// Uppercase the first letter of each whitespace-separated word; other letters are kept.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recommendation_display() {
        let rec = CropRecommendation {
            crop: "Millet".to_string(),
            confidence: 87.0,
        };
        assert_eq!(rec.display_line(), "Millet — 87%");

        let rec = CropRecommendation {
            crop: "kidney beans".to_string(),
            confidence: 64.25,
        };
        assert_eq!(rec.display_line(), "Kidney Beans — 64.25%");

        let rec = CropRecommendation {
            crop: "pigeon PEAS".to_string(),
            confidence: 50.0,
        };
        assert_eq!(rec.display_line(), "Pigeon PEAS — 50%");
    }

    #[test]
    fn test_disease_rows() {
        let result = DiseaseResult {
            disease: "Tomato Early blight".to_string(),
            confidence: 93.5,
        };
        let rows = result.display_rows();
        assert_eq!(rows[0], ("Disease", "Tomato Early blight".to_string()));
        assert_eq!(rows[1], ("Confidence", "93.5%".to_string()));
    }

    #[test]
    fn test_decode_envelope_accepts_integer_confidence() {
        let raw = json!({"recommendations": [{"crop": "Millet", "confidence": 87}]});
        let prediction: CropPrediction = decode_envelope(&raw).unwrap();
        assert_eq!(prediction.recommendations.len(), 1);
        assert_eq!(prediction.recommendations[0].confidence, 87.0);
    }

    #[test]
    fn test_decode_envelope_surfaces_backend_error() {
        let raw = json!({"error": "Invalid input value provided"});
        let err = decode_envelope::<CropPrediction>(&raw).unwrap_err();
        assert_eq!(err, Error::Backend("Invalid input value provided".to_string()));
    }

    #[test]
    fn test_decode_envelope_rejects_wrong_shape() {
        let raw = json!({"label": "rust"});
        let err = decode_envelope::<DiseaseResult>(&raw).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_chat_request_sends_nulls() {
        let request = ChatRequest {
            question: "When to sow?".to_string(),
            crop_result: None,
            disease_result: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({"question": "When to sow?", "crop_result": null, "disease_result": null})
        );
    }

    #[test]
    fn test_role_wire_names() {
        let msg = ChatMessage::user("hi");
        let body = serde_json::to_value(&msg).unwrap();
        assert_eq!(body["role"], "user");
        assert_eq!(ChatMessage::greeting().role, Role::System);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("rice"), "Rice");
        assert_eq!(title_case("PIGEON  peas"), "PIGEON Peas");
        assert_eq!(title_case("mungBean"), "MungBean");
        assert_eq!(title_case(""), "");
    }
}
