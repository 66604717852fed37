use thiserror::Error;

#[doc = r#"
    Typed failures of the report pipeline.

    Services return `anyhow::Result`, so these travel as the root cause of an
    `anyhow::Error` and can be recovered with `downcast_ref::<ReportError>()`.
"#]
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("configuration error - missing: [{}] invalid: [{}]", .missing.join(", "), .invalid.join(", "))]
    Configuration {
        missing: Vec<String>,
        invalid: Vec<String>,
    },

    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("database query failed: {0}")]
    Query(String),

    #[error("invalid movement record at row {row}: {reason}")]
    Validation { row: usize, reason: String },

    #[error("token acquisition failed: {0}")]
    Auth(String),

    #[error("mail delivery failed (status {}): {detail}", .status.map(|s| s.to_string()).unwrap_or_else(|| "none".to_string()))]
    Delivery { status: Option<u16>, detail: String },
}
