use serde::{Deserialize, Serialize};

use crate::usecases::u101_add_box::BoxAnswers;
use crate::usecases::u102_add_can::CanBatch;

/// Тело запроса `/submit_form`.
///
/// Бэкенд различает формы по полю `dataType`, остальные поля лежат
/// на верхнем уровне рядом с ним.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "dataType", rename_all = "lowercase")]
pub enum SubmitFormRequest {
    Box(BoxAnswers),
    Can(CanBatch),
}

impl SubmitFormRequest {
    pub fn data_type(&self) -> &'static str {
        match self {
            SubmitFormRequest::Box(_) => "box",
            SubmitFormRequest::Can(_) => "can",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_box_payload_is_flat_and_tagged() {
        let answers = BoxAnswers::from_values(["A", "B", "C", "D", "E", "F"]);
        let value = serde_json::to_value(SubmitFormRequest::Box(answers)).unwrap();
        assert_eq!(
            value,
            json!({
                "dataType": "box",
                "q1": "A", "q2": "B", "q3": "C",
                "q4": "D", "q5": "E", "q6": "F"
            })
        );
    }

    #[test]
    fn test_can_payload_shape() {
        let batch = CanBatch {
            box_id: "B1".to_string(),
            can_data: vec![vec!["1".to_string(), "2".to_string()]],
        };
        let value = serde_json::to_value(SubmitFormRequest::Can(batch)).unwrap();
        assert_eq!(
            value,
            json!({ "dataType": "can", "boxID": "B1", "canData": [["1", "2"]] })
        );
    }

    #[test]
    fn test_decode_by_tag() {
        let raw = r#"{"dataType":"can","boxID":"7.PF.2","canData":[]}"#;
        let request: SubmitFormRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.data_type(), "can");
        match request {
            SubmitFormRequest::Can(batch) => assert_eq!(batch.box_id, "7.PF.2"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }
}
