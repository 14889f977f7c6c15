//! JSON bodies exchanged with a remote authority

use crate::core::{Letter, RowHints};
use serde::{Deserialize, Serialize};

/// `POST /validate-letter`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateLetterRequest {
    pub row: usize,
    pub col: usize,
    pub letter: Letter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateLetterResponse {
    pub correct: bool,
}

/// `GET /count?letter=x`; the server also echoes the letter back
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u32,
}

/// `POST /scratch`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScratchRequest {
    pub guess: String,
}

/// Scored scratch word; extra fields such as `word` are ignored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScratchResponse {
    pub colors: RowHints,
}

/// Body of a 4xx response, when the server sends one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
