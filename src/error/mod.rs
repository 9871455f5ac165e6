mod app_error;

pub use app_error::AppError;

/// Result type shared by config, store and handler code.
pub type Result<T> = std::result::Result<T, AppError>;
