use maud::{html, Markup, DOCTYPE};
use rocket::request::FlashMessage;

use wayfinder_core::entities::EmailAddress;

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(
    title: &str,
    email: Option<&EmailAddress>,
    flash: Option<FlashMessage>,
    content: Markup,
) -> Markup {
    page_with_head(title, email, flash, content, None)
}

pub fn page_with_head(
    title: &str,
    email: Option<&EmailAddress>,
    flash: Option<FlashMessage>,
    content: Markup,
    head: Option<Markup>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href=(MAIN_CSS_URL);
                @if let Some(head) = head {
                    (head)
                }
            }
            body {
                (header(email))
                (flash_message(flash))
                (content)
            }
        }
    }
}

fn header(email: Option<&EmailAddress>) -> Markup {
    html! {
        header {
            nav class="main-nav" {
                a class="brand" href="/" { "Wayfinder" }
                a href="/map" { "Map" }
                a href="/categories" { "Discover" }
                @if let Some(email) = email {
                    a href="/home" { "Home" }
                    a href="/add-place" { "Add place" }
                    a href="/booking" { "Booking" }
                    a href="/contact" { "Contact" }
                    a href="/profile" { (email) }
                    form class="logout" action="/logout" method="POST" {
                        input type="submit" value="Sign out";
                    }
                } @else {
                    a href="/contact" { "Contact" }
                    a href="/login" { "Sign in" }
                    a href="/register" { "Register" }
                }
            }
        }
    }
}

fn flash_message(flash: Option<FlashMessage>) -> Markup {
    html! {
        @if let Some(ref flash) = flash {
            div class=(format!("flash {}", flash.kind())) {
                (flash.message())
            }
        }
    }
}
