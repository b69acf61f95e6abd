pub mod answers;
pub mod request;
pub mod response;

pub use answers::{BoxAnswers, QuestionStep, QUESTION_COUNT};
pub use request::{InsertAbbreviationRequest, VerifyAbbreviationRequest};
pub use response::VerifyAbbreviationResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct AddBox;

impl UseCaseMetadata for AddBox {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "add_box"
    }

    fn display_name() -> &'static str {
        "Add box"
    }

    fn description() -> &'static str {
        "Six-question wizard recording one box: flavor, purchase date, price, location, start and finish dates"
    }
}
