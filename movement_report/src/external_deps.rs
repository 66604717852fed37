pub use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
pub use chrono::{DateTime, Days, Local, NaiveDate, TimeZone};
pub use deadpool_tiberius::{Manager, Pool};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use num_format::{Locale, ToFormattedString};
pub use reqwest::{Client, StatusCode};
pub use tiberius::{ColumnData, Row, ToSql};
pub use urlencoding::encode;

pub use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Attachment, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
