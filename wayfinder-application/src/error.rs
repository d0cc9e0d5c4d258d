use std::io;

use thiserror::Error;

use wayfinder_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use wayfinder_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<wayfinder_core::usecases::Error> for AppError {
    fn from(err: wayfinder_core::usecases::Error) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<wayfinder_entities::password::ParseError> for AppError {
    fn from(err: wayfinder_entities::password::ParseError) -> Self {
        BError::from(err).into()
    }
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error(transparent)]
    Pwhash(#[from] pwhash::error::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl From<wayfinder_entities::password::ParseError> for BError {
    fn from(_: wayfinder_entities::password::ParseError) -> Self {
        Self::Parameter(ParameterError::Password)
    }
}
