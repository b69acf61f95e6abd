use thiserror::Error;

/// Ошибки обмена формы с бэкендом
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Submit arrived before the last question was reached, while another
    /// request was still pending, or after the form was already submitted
    #[error("Form is not ready to submit")]
    NotReady,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FormError::Http { status: 500 }.to_string(), "HTTP error: 500");
        assert_eq!(
            FormError::Network("connection refused".into()).to_string(),
            "Failed to send request: connection refused"
        );
    }
}
