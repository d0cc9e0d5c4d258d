use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::page::page;

pub fn login(flash: Option<FlashMessage>) -> Markup {
    page(
        "Sign in",
        None,
        flash,
        html! {
            main class="auth" {
                h2 { "Sign in" }
                form action="/login" method="POST" {
                    fieldset {
                        label { "Email" br;
                            input type="email" name="email" placeholder="email address" required;
                        }
                        br;
                        label { "Password" br;
                            input type="password" name="password" placeholder="password" required;
                        }
                        br;
                        input class="btn" type="submit" value="sign in";
                    }
                }
                p {
                    "No account yet? "
                    a href="/register" { "Register here." }
                }
            }
        },
    )
}
