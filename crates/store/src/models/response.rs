//! Response submission DTO.

use serde::Deserialize;

use formpulse_core::response::{Answer, ResponseMetadata};

/// DTO for submitting a response. The server assigns the id and
/// timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub metadata: Option<ResponseMetadata>,
}
