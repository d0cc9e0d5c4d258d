use maud::Markup;
use rocket::{
    form::Form,
    get,
    http::CookieJar,
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::view;
use crate::web::{guards::*, sqlite};
use wayfinder_application::{
    error::{AppError, BError},
    prelude::*,
};
use wayfinder_core::usecases;

#[get("/register")]
pub fn get_register(
    account: Option<Account>,
    flash: Option<FlashMessage>,
) -> Result<Markup, Redirect> {
    if account.is_some() {
        return Err(Redirect::to(uri!(super::get_home)));
    }
    Ok(view::register(flash))
}

#[derive(FromForm)]
pub struct RegisterCredentials<'r> {
    pub username: &'r str,
    pub email: &'r str,
    pub password: &'r str,
}

#[post("/register", data = "<credentials>")]
pub fn post_register(
    db: sqlite::Connections,
    credentials: Form<RegisterCredentials<'_>>,
) -> Result<Flash<Redirect>, Flash<Redirect>> {
    let back = || Redirect::to(uri!(get_register));
    let Ok(email) = credentials.email.parse() else {
        return Err(Flash::error(back(), "Please enter a valid email address."));
    };
    let new_user = usecases::NewUser {
        username: credentials.username.to_string(),
        email,
        password: credentials.password.to_string(),
    };
    match register(&db, new_user) {
        Ok(()) => Ok(Flash::success(
            Redirect::to(uri!(super::login::get_login)),
            "Welcome! You can now sign in with your email address.",
        )),
        Err(AppError::Business(BError::Parameter(err))) => {
            Err(Flash::error(back(), err.to_string()))
        }
        Err(err) => {
            warn!("Registration failed: {err}");
            Err(Flash::error(
                back(),
                "We are so sorry! An internal server error has occurred. Please try again later.",
            ))
        }
    }
}

#[post("/delete-account")]
pub fn post_delete_account(
    db: sqlite::Connections,
    account: Account,
    cookies: &CookieJar<'_>,
) -> Result<Flash<Redirect>, Flash<Redirect>> {
    // Sign out before deleting so a failed delete never leaves a
    // cookie for a half-removed account.
    cookies.remove_private(COOKIE_EMAIL_KEY);
    match delete_account(&db, account.email(), account.email()) {
        Ok(()) => Ok(Flash::success(
            Redirect::to(uri!(super::get_index)),
            "Your account has been deleted.",
        )),
        Err(err) => {
            warn!("Failed to delete account: {err}");
            Err(Flash::error(
                Redirect::to(uri!(super::get_index)),
                "Failed to delete the account.",
            ))
        }
    }
}
