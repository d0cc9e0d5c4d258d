use rocket::{
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
};

use wayfinder_application::error::AppError;
use wayfinder_core::{entities::EmailAddress, usecases::Error as ParameterError};

pub const COOKIE_EMAIL_KEY: &str = "wayfinder-user-email";

type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub struct Auth {
    account_email: Option<EmailAddress>,
}

impl Auth {
    pub fn account_email(&self) -> Result<&EmailAddress> {
        self.account_email
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    fn account_email_from_cookie(request: &Request) -> Option<EmailAddress> {
        request
            .cookies()
            .get_private(COOKIE_EMAIL_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let account_email = Self::account_email_from_cookie(request);
        Outcome::Success(Self { account_email })
    }
}

#[derive(Debug)]
pub struct Account(EmailAddress);

impl Account {
    pub fn email(&self) -> &EmailAddress {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_email() {
            Ok(email) => Outcome::Success(Account(email.clone())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}
