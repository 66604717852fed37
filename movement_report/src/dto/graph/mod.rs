pub mod send_mail_request;
pub mod token_response;
