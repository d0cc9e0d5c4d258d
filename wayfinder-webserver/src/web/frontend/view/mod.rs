use maud::{html, Markup};
use strum::IntoEnumIterator;

use wayfinder_core::{
    entities::*,
    usecases::{PlaceFilter, RatedPlace},
};

const LEAFLET_CSS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.css";
const LEAFLET_CSS_SHA512: &str="sha512-puBpdR0798OZvTTbP4A8Ix/l+A4dHDD0DGqYW6RQ+9jxkRFclaxxQb/SJAWZfWAkuyeQUytO7+7N4QKrDh+drA==";
const LEAFLET_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.4.0/leaflet.js";
const LEAFLET_JS_SHA512 : &str="sha512-QVftwZFqvtRNi0ZyCtsznlKSWOStnDORoefr1enyq5mVL4tmKB3S/EnC3rRJcxCPavG10IcrVGSmPh6Qw5lwrg==";
const MAP_JS_URL: &str = "/map.js";

mod booking;
mod dashboard;
mod login;
mod page;
mod place;
mod register;

pub use booking::*;
pub use dashboard::*;
pub use login::*;
use page::*;
pub use place::*;
pub use register::*;

pub fn index(
    email: Option<&EmailAddress>,
    flash: Option<rocket::request::FlashMessage>,
    top_spots: &[RatedPlace],
    user_count: usize,
    place_count: usize,
) -> Markup {
    page(
        "Wayfinder",
        email,
        flash,
        html! {
            div class="hero" {
                h1 { "Find your next place to wander" }
                p {
                    (place_count) " places, curated and rated by "
                    (user_count) " travelers."
                }
                (search_form(None))
            }
            div class="top-spots" {
                h2 { "Top spots" }
                @if top_spots.is_empty() {
                    p { "No places yet. Be the first to add one!" }
                } @else {
                    ul class="place-cards" {
                        @for rated in top_spots {
                            li { (place_card(rated)) }
                        }
                    }
                }
            }
        },
    )
}

pub fn search_form(search_term: Option<&str>) -> Markup {
    html! {
        div class="search-form" {
            form action="/categories" method="GET" {
                input
                    type="text"
                    name="q"
                    value=(search_term.unwrap_or(""))
                    size=(50)
                    maxlength=(200)
                    placeholder="search by name, empty = all";
                input class="btn" type="submit" value="search";
            }
        }
    }
}

pub fn map_of_places(email: Option<&EmailAddress>, places: &[Place]) -> Markup {
    let pins: Vec<MapPin> = places.iter().filter_map(MapPin::try_from_place).collect();
    page_with_head(
        "Map",
        email,
        None,
        html! {
            div id="map" {}
            (map_scripts(&pins))
        },
        Some(leaflet_css_link()),
    )
}

fn leaflet_css_link() -> Markup {
    html! {
            link
                rel="stylesheet"
                href=(LEAFLET_CSS_URL)
                integrity=(LEAFLET_CSS_SHA512)
                crossorigin="anonymous";
    }
}

pub(crate) struct MapPin {
    lat: f64,
    lng: f64,
    label: String,
}

impl MapPin {
    fn try_from_place(place: &Place) -> Option<Self> {
        place.position.map(|pos| MapPin {
            lat: pos.lat,
            lng: pos.lng,
            label: format!("{} ({})", place.name, place.category.label()),
        })
    }

    fn to_js_object_string(&self) -> String {
        format!(
            "{{lat:{},lng:{},label:{}}}",
            self.lat,
            self.lng,
            serde_json::to_string(&self.label).unwrap_or_default()
        )
    }
}

fn map_scripts(pins: &[MapPin]) -> Markup {
    let (center, zoom) = match pins.len() {
        1 => ((pins[0].lat, pins[0].lng), 13.0),
        _ => {
            // fall back to a country-wide view
            ((42.1, 43.5), 7.0)
        }
    };

    let center = format!("[{},{}]", center.0, center.1);

    let pins: String = pins
        .iter()
        .map(MapPin::to_js_object_string)
        .collect::<Vec<_>>()
        .join(",");

    html! {
      script{
        (format!("window.MAP_PINS=[{}];window.MAP_ZOOM={};window.MAP_CENTER={};",
                 pins,
                 zoom,
                 center))
      }
      script
        src=(LEAFLET_JS_URL)
        integrity=(LEAFLET_JS_SHA512)
        crossorigin="anonymous" {}
      script src=(MAP_JS_URL){}
    }
}

pub(crate) fn place_card(rated: &RatedPlace) -> Markup {
    let RatedPlace { place, avg_rating } = rated;
    html! {
        div class="place-card" {
            @if let Some(ref image) = place.image {
                img src=(format!("/uploads/{image}")) alt=(place.name);
            }
            h3 {
                a href=(format!("/place/{}", place.id)) { (place.name) }
            }
            p class="meta" {
                (place.category.label()) " · " (place.region)
            }
            (stars(f64::from(*avg_rating)))
        }
    }
}

pub(crate) fn stars(avg: f64) -> Markup {
    let full = avg.round() as usize;
    html! {
        span class="stars" title=(format!("{avg:.1} of 5")) {
            @for _ in 0..full { "★" }
            @for _ in full..5 { "☆" }
            " " (format!("{avg:.1}"))
        }
    }
}

pub(crate) fn category_select(selected: Option<Category>) -> Markup {
    html! {
        select name="category" {
            option value="" { "-- any category --" }
            @for category in Category::iter() {
                option value=(category) selected[selected == Some(category)] {
                    (category.label())
                }
            }
        }
    }
}

pub(crate) fn region_select(selected: Option<Region>) -> Markup {
    html! {
        select name="region" {
            option value="" { "-- any region --" }
            @for region in Region::iter() {
                option value=(region) selected[selected == Some(region)] {
                    (region)
                }
            }
        }
    }
}

pub fn contact(email: Option<&EmailAddress>, flash: Option<rocket::request::FlashMessage>) -> Markup {
    page(
        "Contact",
        email,
        flash,
        html! {
            main class="contact" {
                h2 { "Contact us" }
                p { "Questions about a place or a booking? Drop us a line." }
                form action="/contact" method="POST" {
                    fieldset {
                        label { "Name" br;
                            input type="text" name="name" required;
                        }
                        br;
                        label { "Email" br;
                            input type="email" name="email" required;
                        }
                        br;
                        label { "Message" br;
                            textarea name="message" rows="8" cols="50" required {}
                        }
                        br;
                        input class="btn" type="submit" value="send";
                    }
                }
            }
        },
    )
}

pub(crate) fn filter_form(filter: &PlaceFilter) -> Markup {
    html! {
        form class="filter-form" action="/categories" method="GET" {
            input
                type="text"
                name="q"
                value=(filter.text.as_deref().unwrap_or(""))
                placeholder="search by name";
            (category_select(filter.category))
            (region_select(filter.region))
            label {
                "min. rating"
                input
                    type="number"
                    name="rating"
                    min="0" max="5" step="0.5"
                    value=(filter.min_avg_rating.map(|r| f64::from(r).to_string()).unwrap_or_default());
            }
            label {
                input type="checkbox" name="favorites_only" value="true"
                    checked[filter.favorites_only];
                "favorites only"
            }
            input class="btn" type="submit" value="filter";
        }
    }
}
