//! Error types for the payment service.

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid CPF: expected 11 digits")]
    InvalidCpf,

    #[error("Amount must be positive")]
    NonPositiveAmount,

    #[error("Amount must have at most 2 decimal places")]
    AmountPrecision,

    #[error("Amount exceeds the maximum of 999999999999.99")]
    AmountTooLarge,

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Entity not found")]
    NotFound,
}

/// Errors from the services this one depends on (orders, customers, PIX provider).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => AppError::BadRequest(msg),
            e => AppError::BadRequest(e.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => e.into(),
            RepoError::NotFound => AppError::NotFound("Resource not found".into()),
            RepoError::Database(e) => AppError::Internal(e),
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound(what) => AppError::NotFound(what),
            GatewayError::Unavailable(e) => AppError::Upstream(e),
            GatewayError::InvalidResponse(e) => AppError::Upstream(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_not_found_maps_to_not_found() {
        let err: AppError = RepoError::NotFound.into();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_domain_error_maps_to_bad_request() {
        let err: AppError = RepoError::Domain(DomainError::InvalidCpf).into();
        assert_eq!(
            err,
            AppError::BadRequest("Invalid CPF: expected 11 digits".into())
        );
    }

    #[test]
    fn test_amount_errors_map_to_bad_request() {
        let err: AppError = DomainError::AmountPrecision.into();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_gateway_errors() {
        let err: AppError = GatewayError::NotFound("Order order123".into()).into();
        assert_eq!(err, AppError::NotFound("Order order123".into()));

        let err: AppError = GatewayError::Unavailable("timeout".into()).into();
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
