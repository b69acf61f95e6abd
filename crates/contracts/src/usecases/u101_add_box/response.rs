use serde::{Deserialize, Serialize};

/// Ответ `/verify_abbreviation`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyAbbreviationResponse {
    pub exists: bool,
}
