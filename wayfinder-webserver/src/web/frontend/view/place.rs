use maud::{html, Markup};
use rocket::request::FlashMessage;
use strum::IntoEnumIterator;

use super::*;

pub fn place_list(
    email: Option<&EmailAddress>,
    results: &[RatedPlace],
    filter: &PlaceFilter,
) -> Markup {
    page(
        "Discover",
        email,
        None,
        html! {
            main class="discover" {
                h1 { "Discover places" }
                (filter_form(filter))
                div class="results" {
                    @if results.is_empty() {
                        p { "We are so sorry but we could not find any places
                             that match your filters." }
                    } @else {
                        ul class="place-cards" {
                            @for rated in results {
                                li { (place_card(rated)) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn place_details(
    viewer: Option<&User>,
    flash: Option<FlashMessage>,
    rated: &RatedPlace,
    ratings: &[Rating],
    is_favorite: bool,
    planned: Option<&PlannedRoute>,
) -> Markup {
    let RatedPlace { place, avg_rating } = rated;
    let email = viewer.map(|u| &u.email);
    let pins: Vec<_> = place
        .position
        .iter()
        .map(|pos| MapPin {
            lat: pos.lat,
            lng: pos.lng,
            label: place.name.clone(),
        })
        .collect();
    page_with_head(
        &place.name,
        email,
        flash,
        html! {
            main class="place-details" {
                h1 { (place.name) }
                p class="meta" {
                    (place.category.label()) " · " (place.region) " · "
                    (stars(f64::from(*avg_rating)))
                }
                @if let Some(ref image) = place.image {
                    img class="place-image" src=(format!("/uploads/{image}")) alt=(place.name);
                }
                p { (place.description) }
                @if !pins.is_empty() {
                    div id="map" class="small" {}
                    (map_scripts(&pins))
                }
                @if let Some(viewer) = viewer {
                    (place_actions(viewer, place, is_favorite, planned))
                } @else {
                    p {
                        a href="/login" { "Sign in" }
                        " to rate this place, save it as a favorite or plan a visit."
                    }
                }
                section class="ratings" {
                    h2 { "Ratings" }
                    @if ratings.is_empty() {
                        p { "No ratings yet." }
                    } @else {
                        ul class="rating-list" {
                            @for rating in ratings {
                                li { (rating_entry(viewer, rating)) }
                            }
                        }
                    }
                }
            }
        },
        Some(super::leaflet_css_link()),
    )
}

fn place_actions(
    viewer: &User,
    place: &Place,
    is_favorite: bool,
    planned: Option<&PlannedRoute>,
) -> Markup {
    html! {
        div class="actions" {
            form action=(format!("/place/{}", place.id)) method="POST" {
                input type="hidden" name="action" value="favorite";
                input type="submit"
                    value=(if is_favorite { "★ Remove favorite" } else { "☆ Add favorite" });
            }
            @if let Some(planned) = planned {
                form action=(format!("/delete_route/{}", planned.id)) method="POST" {
                    "Visit planned for " (format_date(planned.date)) " ";
                    input type="submit" value="cancel";
                }
            } @else {
                form action=(format!("/place/{}", place.id)) method="POST" {
                    input type="hidden" name="action" value="route";
                    label { "Plan a visit: "
                        input type="date" name="date" required;
                    }
                    input type="submit" value="plan";
                }
            }
            form action=(format!("/place/{}", place.id)) method="POST"
                enctype="multipart/form-data" {
                input type="hidden" name="action" value="rating";
                fieldset {
                    legend { "Rate this place" }
                    label { "Stars "
                        input type="number" name="stars" min="0" max="5" step="0.5" required;
                    }
                    br;
                    label { "Comment" br;
                        textarea name="comment" rows="4" cols="50" {}
                    }
                    br;
                    label { "Photo "
                        input type="file" name="image" accept="image/*";
                    }
                    br;
                    input class="btn" type="submit" value="submit rating";
                }
            }
            @if viewer.is_admin() {
                form class="danger" action=(format!("/delete_place/{}", place.id)) method="POST" {
                    input type="submit" value="Delete this place";
                }
            }
        }
    }
}

fn rating_entry(viewer: Option<&User>, rating: &Rating) -> Markup {
    html! {
        div class="rating" {
            (stars(f64::from(rating.stars)))
            " on " (rating.created_at)
            @if let Some(ref comment) = rating.comment {
                blockquote { (comment) }
            }
            @if let Some(ref image) = rating.image {
                img class="rating-image" src=(format!("/uploads/{image}")) alt="rating photo";
            }
            @if viewer.map(|u| u.id == rating.user_id || u.is_admin()).unwrap_or(false) {
                form action=(format!("/delete_rating/{}", rating.id)) method="POST" {
                    input type="submit" value="delete";
                }
            }
        }
    }
}

pub fn add_place(email: Option<&EmailAddress>, flash: Option<FlashMessage>) -> Markup {
    page(
        "Add a place",
        email,
        flash,
        html! {
            main class="add-place" {
                h2 { "Add a place" }
                form action="/add-place" method="POST" enctype="multipart/form-data" {
                    fieldset {
                        label { "Name" br;
                            input type="text" name="name" maxlength=(Place::max_name_len()) required;
                        }
                        br;
                        label { "Description" br;
                            textarea name="description" rows="6" cols="50" required {}
                        }
                        br;
                        select name="category" required {
                            option value="" { "-- choose a category --" }
                            @for category in Category::iter() {
                                option value=(category) { (category.label()) }
                            }
                        }
                        select name="region" required {
                            option value="" { "-- choose a region --" }
                            @for region in Region::iter() {
                                option value=(region) { (region) }
                            }
                        }
                        br;
                        label { "Latitude "
                            input type="number" name="lat" min="-90" max="90" step="any" required;
                        }
                        label { "Longitude "
                            input type="number" name="lng" min="-180" max="180" step="any" required;
                        }
                        br;
                        label { "Photo "
                            input type="file" name="image" accept="image/*";
                        }
                        br;
                        input class="btn" type="submit" value="add place";
                    }
                }
            }
        },
    )
}
