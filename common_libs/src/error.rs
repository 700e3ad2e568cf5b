use std::{fmt::{Display, Formatter}, string::FromUtf8Error};

use serde::Serialize;
use serde_json::to_string_pretty;

use std::fmt::Error;

pub type ServiceExuctionResult<T> = std::result::Result<T, ServiceError>;
pub type FormResult<T> = std::result::Result<T, FormError>;
pub type FmtResult = std::result::Result<(), Error>;

/// Everything that can go wrong during one form submission.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormError {
    pub message: String,
    pub error_kind: FormErrorKind,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub enum FormErrorKind {
    /// The word did not pass client side validation.
    InvalidInput,
    /// The service answered with a truthy `error` field.
    Application,
    /// Connection failure, timeout or non 2xx status.
    Transport,
    /// The body was not the JSON we expected.
    InvalidData,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ServiceError {
    pub message: String,
    pub error_type: ServiceErrorType,
}

#[derive(Debug, Serialize, PartialEq)]
pub enum ServiceErrorType {
    Failure,
    SerializationError,
    ResourceNotFound,
    IOError,
}

impl FormError {
    pub fn throw(msg: &str, error_kind: FormErrorKind) -> Self {
        FormError {
            message: msg.to_string(),
            error_kind,
        }
    }
}

impl ServiceError {
    pub fn throw(msg: &str, error_type: ServiceErrorType) -> Self {
        ServiceError {
            message: msg.to_lowercase(),
            error_type,
        }
    }
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", to_string_pretty(self).map_err(|_| Error)?)
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", to_string_pretty(self).map_err(|_| Error)?)
    }
}

impl std::error::Error for FormError {}
impl std::error::Error for ServiceError {}

impl From<reqwest::Error> for FormError {
    fn from(error: reqwest::Error) -> Self {
        let msg = match error.status() {
            Some(status) => format!("request failed. status: {}, error: {}", status, error),
            None if error.is_timeout() => format!("request timed out: {}", error),
            None => format!("request failed: {}", error),
        };
        FormError::throw(&msg, FormErrorKind::Transport)
    }
}

impl From<serde_json::Error> for FormError {
    fn from(error: serde_json::Error) -> Self {
        let msg = format!("json error: {}", error);
        FormError::throw(&msg, FormErrorKind::InvalidData)
    }
}

impl From<FromUtf8Error> for FormError {
    fn from(_error: FromUtf8Error) -> Self {
        FormError::throw("utf8.failed", FormErrorKind::InvalidData)
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(error: std::io::Error) -> Self {
        let msg = format!("io error: {}", error);
        ServiceError {
            message: msg,
            error_type: ServiceErrorType::IOError,
        }
    }
}

impl From<FromUtf8Error> for ServiceError {
    fn from(error: FromUtf8Error) -> Self {
        let msg = format!("io error: {}", error);
        ServiceError {
            message: msg,
            error_type: ServiceErrorType::SerializationError,
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(error: serde_json::Error) -> Self {
        let msg = format!("json error: {}", error);
        ServiceError {
            message: msg,
            error_type: ServiceErrorType::SerializationError,
        }
    }
}
