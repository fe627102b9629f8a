mod error;
mod fetch;
mod http;
mod normalize;
mod service;
mod validate;
mod withdraw;

pub use self::error::ErrorResponse;
pub use self::fetch::FetchError;
pub use self::http::AppErrorHttp;
pub use self::normalize::NormalizationError;
pub use self::service::ServiceError;
pub use self::validate::format_validation_errors;
pub use self::withdraw::WithdrawValidationError;
