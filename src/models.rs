use serde::{Deserialize, Serialize};

/// Discretized reliability band. Serialized with the Arabic display labels
/// the chat frontend shows next to an answer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfidenceLevel {
    #[serde(rename = "عالٍ")]
    High,
    #[serde(rename = "متوسط")]
    Medium,
    #[serde(rename = "منخفض")]
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "عالٍ",
            ConfidenceLevel::Medium => "متوسط",
            ConfidenceLevel::Low => "منخفض",
        }
    }
}

/// A (candidate answer, originating query) pair to evaluate. Both fields may
/// be empty; empty input degrades to neutral scores, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRequest {
    pub response_text: String,
    #[serde(default)]
    pub query_text: String,
}

/// Verdict for one verification call. Constructed fresh per call and owned
/// by the caller; nothing is persisted by the verifier itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationResult {
    pub overall_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub is_reliable: bool,
    pub warnings: Vec<String>,
    /// Empty after `verify`; filled in by the separate suggestion pass.
    pub suggestions: Vec<String>,
}
