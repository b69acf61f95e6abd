use serde::{Deserialize, Serialize};

/// Запрос `/verify_abbreviation`: есть ли такая аббревиатура в справочнике
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAbbreviationRequest {
    pub user_input: String,
    pub question_number: u8,
}

/// Запрос `/insert_abbreviation`: добавить новую аббревиатуру.
///
/// `assxName` is `null` when the user dismissed the name prompt; the
/// backend decides what to do with such an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertAbbreviationRequest {
    pub input: String,
    #[serde(rename = "assxName")]
    pub assx_name: Option<String>,
    #[serde(rename = "qNum")]
    pub q_num: u8,
}
