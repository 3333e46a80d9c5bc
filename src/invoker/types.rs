use serde::Serialize;
use std::fmt;

/// Body of a `/speak` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpeakRequest {
    pub context_id: String,
    pub input: String,
}

/// Body of a `/learn` call; each entry is one line of training input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LearnRequest {
    pub context_id: String,
    pub input: Vec<String>,
}

/// Body shared by `/banSubstrings` and `/unbanSubstrings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BanRequest {
    pub context_id: String,
    pub substrings: Vec<String>,
}

/// Status and body exactly as the service returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakResponse {
    pub status: u16,
    pub body: String,
}

impl SpeakRequest {
    pub fn new(context_id: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            context_id: context_id.into(),
            input: input.into(),
        }
    }
}

impl fmt::Display for SpeakResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.status, self.body)
    }
}
