use crate::error::{ProvisionError, ProvisionResult};

/// What came back from one remote call.
///
/// `Ok` is only produced for the status an operation documents as success;
/// every other HTTP answer is `UnexpectedStatus` with the raw body kept for
/// diagnostics. Failures below HTTP (DNS, TLS, refused connection, a body
/// that cannot be read or decoded) are `TransportFailure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Ok(T),
    UnexpectedStatus { status: u16, body: String },
    TransportFailure(String),
}

impl<T> Reply<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Reply::Ok(_))
    }

    /// Turn anything but `Ok` into a terminal error labelled with `context`.
    pub fn into_result<F>(self, context: F) -> ProvisionResult<T>
    where
        F: FnOnce() -> String,
    {
        match self {
            Reply::Ok(value) => Ok(value),
            Reply::UnexpectedStatus { status, body } => Err(ProvisionError::UnexpectedStatus {
                context: context(),
                status,
                body,
            }),
            Reply::TransportFailure(cause) => {
                Err(ProvisionError::Transport(format!("{}: {}", context(), cause)))
            }
        }
    }
}

/// Result of a team invitation. A duplicate invitation is not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invitation {
    Sent,
    AlreadyInvited,
}
