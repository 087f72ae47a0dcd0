pub mod request_log;
pub mod validate;

pub use self::request_log::log_request;
pub use self::validate::SimpleValidatedJson;
