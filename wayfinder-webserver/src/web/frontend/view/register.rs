use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::page;

pub fn register(flash: Option<FlashMessage>) -> Markup {
    page(
        "Register",
        None,
        flash,
        html! {
            main class="auth" {
                h2 { "Create an account" }
                form action="/register" method="POST" {
                    fieldset {
                        label { "Username" br;
                            input type="text" name="username" placeholder="username" required;
                        }
                        br;
                        label { "Email" br;
                            input type="email" name="email" placeholder="email address" required;
                        }
                        br;
                        label { "Password" br;
                            input type="password" name="password" placeholder="password" required;
                        }
                        br;
                        input class="btn" type="submit" value="register";
                    }
                }
                p {
                    "Already registered? "
                    a href="/login" { "Sign in here." }
                }
            }
        },
    )
}
