pub mod chart_service_impl;
pub mod notification_service_impl;
pub mod query_service_impl;
pub mod report_service_impl;
pub mod smtp_notification_service_impl;
