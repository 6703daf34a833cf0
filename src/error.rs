use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("API key not found. Set HONEYBADGER_API_KEY or run 'honeybadger auth --key <KEY>'.")]
    ApiKeyNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("{context}\nHTTP {status}: {body}")]
    UnexpectedStatus {
        context: String,
        status: u16,
        body: String,
    },

    #[error("{0}")]
    Precondition(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ProvisionError {
    /// Raw status code returned by the remote service, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProvisionError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ProvisionResult<T> = Result<T, ProvisionError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> ProvisionResult<T>;
    fn with_context<F>(self, f: F) -> ProvisionResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> ProvisionResult<T> {
        self.map_err(|e| ProvisionError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ProvisionResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ProvisionError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> ProvisionResult<T> {
        self.ok_or_else(|| ProvisionError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> ProvisionResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| ProvisionError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! provision_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::ProvisionError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::ProvisionError::$error_type(format!($fmt, $($arg)*))
    };
}
