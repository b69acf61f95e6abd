use serde::{Deserialize, Serialize};

/// Число строк банок, которое форма читает всегда, независимо от
/// того, сколько банок реально в коробке
pub const CAN_ROW_COUNT: usize = 8;

/// Column headers of the can grid, in input order
pub const CAN_COLUMNS: [&str; 5] = [
    "Initial weight (g)",
    "Initial volume (fl oz)",
    "Final weight (g)",
    "Final volume (fl oz)",
    "Finished",
];

/// Values of one table row, in DOM order
pub type CanRow = Vec<String>;

/// Пакет банок одной коробки
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanBatch {
    #[serde(rename = "boxID")]
    pub box_id: String,
    #[serde(rename = "canData")]
    pub can_data: Vec<CanRow>,
}
