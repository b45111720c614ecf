/// The errors that may occur while talking to the remote store.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS and so on).
    #[error("Network error: {0}")]
    Network(String),

    /// The store answered with a non-2xx status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Could not read the server response: {0}")]
    Decode(String),

    /// The request body could not be serialized as JSON.
    #[error("Could not encode the request: {0}")]
    Encode(String),
}

impl ApiError {
    /// The variable part of the message, without the fixed prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::Network(detail) | Self::Decode(detail) | Self::Encode(detail) => detail,
            Self::Status { message, .. } => message,
        }
    }
}

/// Reasons a form submission is refused before anything is sent.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingTransactionFields,

    #[error("Name is required!")]
    MissingCategoryName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_body() {
        let err = ApiError::Status {
            status: 401,
            message: "Permission denied".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Request failed with status 401: Permission denied"
        );
    }
}
