use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::*;

pub fn booking(
    email: Option<&EmailAddress>,
    flash: Option<FlashMessage>,
    places: &[Place],
) -> Markup {
    page(
        "Booking",
        email,
        flash,
        html! {
            main class="booking" {
                h2 { "Book a guided visit" }
                p { "Tell us where and when, and we will get in touch to confirm." }
                form action="/booking" method="POST" {
                    fieldset {
                        label { "Place" br;
                            input type="text" name="place" list="place-names"
                                placeholder="place name" required;
                            datalist id="place-names" {
                                @for place in places {
                                    option value=(place.name) {}
                                }
                            }
                        }
                        br;
                        label { "Date" br;
                            input type="date" name="date" required;
                        }
                        br;
                        label { "Your name" br;
                            input type="text" name="name" required;
                        }
                        br;
                        label { "Email" br;
                            input type="email" name="email" required;
                        }
                        br;
                        label { "Phone" br;
                            input type="tel" name="phone" required;
                        }
                        br;
                        input class="btn" type="submit" value="request booking";
                    }
                }
            }
        },
    )
}
