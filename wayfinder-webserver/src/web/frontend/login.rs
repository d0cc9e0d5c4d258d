use maud::Markup;
use rocket::{
    form::Form,
    get,
    http::{Cookie, CookieJar, SameSite},
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
use wayfinder_core::usecases::{self, Error as ParameterError};

#[get("/login")]
pub fn get_login(account: Option<Account>, flash: Option<FlashMessage>) -> Result<Markup, Redirect> {
    if account.is_some() {
        return Err(Redirect::to(uri!(super::get_home)));
    }
    Ok(view::login(flash))
}

#[derive(FromForm)]
pub struct LoginCredentials<'r> {
    pub email: &'r str,
    pub password: &'r str,
}

#[post("/login", data = "<credentials>")]
pub fn post_login(
    db: sqlite::Connections,
    credentials: Form<LoginCredentials<'_>>,
    cookies: &CookieJar<'_>,
) -> Result<Redirect, Flash<Redirect>> {
    let back = || Redirect::to(uri!(get_login));
    let Ok(email) = credentials.email.parse() else {
        return Err(Flash::error(back(), "Invalid email or password."));
    };
    match login(
        &db,
        &usecases::Credentials {
            email: &email,
            password: credentials.password,
        },
    ) {
        Ok(user) => {
            cookies.add_private(
                Cookie::build((COOKIE_EMAIL_KEY, user.email.to_string()))
                    .http_only(true)
                    .same_site(SameSite::Lax),
            );
            Ok(Redirect::to(uri!(super::get_home)))
        }
        Err(AppError::Business(BError::Parameter(ParameterError::Credentials))) => {
            Err(Flash::error(back(), "Invalid email or password."))
        }
        Err(err) => {
            warn!("Login failed: {err}");
            Err(Flash::error(
                back(),
                "We are so sorry! An internal server error has occurred. Please try again later.",
            ))
        }
    }
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(COOKIE_EMAIL_KEY);
    Flash::success(
        Redirect::to(uri!(super::get_index)),
        "You have been signed out.",
    )
}

#[cfg(test)]
pub mod tests {
    use rocket::http::Status as HttpStatus;

    use super::*;
    use crate::web::{self, sqlite::Connections, tests::prelude::*};

    fn setup() -> (Client, Connections) {
        web::tests::rocket_test_setup(vec![("/", super::super::routes())])
    }

    pub fn user_email_cookie(response: &LocalResponse) -> Option<Cookie<'static>> {
        let cookie = response
            .headers()
            .get("Set-Cookie")
            .find(|v| v.starts_with(COOKIE_EMAIL_KEY))
            .and_then(|val| Cookie::parse_encoded(val).ok());
        cookie.map(|c| c.into_owned())
    }

    #[test]
    fn get_login() {
        let (client, _) = setup();
        let res = client.get("/login").dispatch();
        assert_eq!(res.status(), HttpStatus::Ok);
        assert!(user_email_cookie(&res).is_none());
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("action=\"/login\""));
    }

    #[test]
    fn post_login_fails() {
        let (client, pool) = setup();
        register_user(&pool, "foo@example.org", "bazbaz");
        let res = client
            .post("/login")
            .header(ContentType::Form)
            .body("email=foo%40example.org&password=invalid")
            .dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        for h in res.headers().iter() {
            match h.name.as_str() {
                "Location" => assert_eq!(h.value, "/login"),
                "Content-Length" => assert_eq!(h.value.parse::<i32>().unwrap(), 0),
                _ => { /* let these through */ }
            }
        }
    }

    #[test]
    fn post_login_success() {
        let (client, pool) = setup();
        register_user(&pool, "foo@example.org", "baz baz");
        let res = client
            .post("/login")
            .header(ContentType::Form)
            .body("email=foo%40example.org&password=baz baz")
            .dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);
        assert!(user_email_cookie(&res).is_some());
        for h in res.headers().iter() {
            match h.name.as_str() {
                "Location" => assert_eq!(h.value, "/home"),
                "Content-Length" => assert_eq!(h.value.parse::<i32>().unwrap(), 0),
                _ => { /* let these through */ }
            }
        }
    }

    #[test]
    fn post_logout_clears_cookie() {
        let (client, pool) = setup();
        register_user(&pool, "foo@example.org", "bazbaz");
        let res = client
            .post("/login")
            .header(ContentType::Form)
            .body("email=foo%40example.org&password=bazbaz")
            .dispatch();
        assert!(user_email_cookie(&res).is_some());

        let res = client.post("/logout").dispatch();
        assert_eq!(res.status(), HttpStatus::SeeOther);

        // the private cookie is gone, /home requires authentication
        let res = client.get("/home").dispatch();
        assert_eq!(res.status(), HttpStatus::Unauthorized);
    }
}
