use std::error::Error;
use std::fmt;

use crate::ApiError;

#[derive(Debug)]
pub enum ApiClientError {
    Reqwest(reqwest::Error),
}

impl fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiClientError::Reqwest(_) => write!(f, "ApiClientError::Reqwest"),
        }
    }
}

impl Error for ApiClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiClientError::Reqwest(v) => Some(v),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error)
}

impl RequestError {
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            RequestError::Api(v) => Some(v),
            RequestError::Reqwest(_) => None
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            RequestError::Reqwest(v) => v.is_timeout(),
            _ => false
        }
    }
}
