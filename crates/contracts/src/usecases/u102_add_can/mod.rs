pub mod request;

pub use request::{CanBatch, CanRow, CAN_COLUMNS, CAN_ROW_COUNT};

use crate::usecases::common::UseCaseMetadata;

pub struct AddCan;

impl UseCaseMetadata for AddCan {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "add_can"
    }

    fn display_name() -> &'static str {
        "Add cans"
    }

    fn description() -> &'static str {
        "Batch entry of up to eight cans belonging to one box"
    }
}
