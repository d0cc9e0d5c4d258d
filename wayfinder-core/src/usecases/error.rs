use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The username is invalid")]
    Username,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Email provider is not supported")]
    EmailDomain,
    #[error("Invalid password")]
    Password,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The user already exists")]
    UserExists,
    #[error("The name is invalid")]
    Name,
    #[error("The description must not be empty")]
    Description,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid date")]
    Date,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<wayfinder_entities::password::ParseError> for Error {
    fn from(_: wayfinder_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<wayfinder_entities::email::EmailAddressParseError> for Error {
    fn from(_: wayfinder_entities::email::EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<time::error::Parse> for Error {
    fn from(_: time::error::Parse) -> Self {
        Self::Date
    }
}
