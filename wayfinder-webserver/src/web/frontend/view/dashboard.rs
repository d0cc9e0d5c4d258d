use maud::{html, Markup};
use rocket::request::FlashMessage;

use super::*;

pub fn home(
    user: &User,
    flash: Option<FlashMessage>,
    suggestions: &[RatedPlace],
    favorites: &[RatedPlace],
    route_count: usize,
) -> Markup {
    page(
        "Home",
        Some(&user.email),
        flash,
        html! {
            main class="home" {
                h1 { "Welcome back, " (user.username) "!" }
                p {
                    "You have " (route_count)
                    @if route_count == 1 { " planned route. " } @else { " planned routes. " }
                    a href="/profile" { "View your profile" }
                }
                section {
                    h2 { "Suggestions for you" }
                    @if suggestions.is_empty() {
                        p { "No places yet. " a href="/add-place" { "Add the first one!" } }
                    } @else {
                        ul class="place-cards" {
                            @for rated in suggestions {
                                li { (place_card(rated)) }
                            }
                        }
                    }
                }
                section {
                    h2 { "Your favorites" }
                    @if favorites.is_empty() {
                        p { "You have no favorites yet. Browse the "
                            a href="/categories" { "catalog" }
                            " and mark the places you love."
                        }
                    } @else {
                        ul class="place-cards" {
                            @for rated in favorites {
                                li { (place_card(rated)) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn profile(
    user: &User,
    flash: Option<FlashMessage>,
    favorites: &[RatedPlace],
    routes: &[(PlannedRoute, Place)],
    favorites_avg: f64,
) -> Markup {
    page(
        "Profile",
        Some(&user.email),
        flash,
        html! {
            main class="profile" {
                h1 { (user.username) }
                p class="meta" { (user.email) " · " (format!("{:?}", user.role)) }
                section {
                    h2 { "Planned routes" }
                    @if routes.is_empty() {
                        p { "No routes planned yet." }
                    } @else {
                        table {
                            thead {
                                tr {
                                    th { "Date"  }
                                    th { "Place" }
                                    th { }
                                }
                            }
                            tbody {
                                @for (route, place) in routes {
                                    tr {
                                        td { (format_date(route.date)) }
                                        td {
                                            a href=(format!("/place/{}", place.id)) { (place.name) }
                                        }
                                        td {
                                            form action=(format!("/delete_route/{}", route.id)) method="POST" {
                                                input type="submit" value="remove";
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                section {
                    h2 { "Favorites" }
                    @if favorites.is_empty() {
                        p { "No favorites yet." }
                    } @else {
                        p { "Average rating of your favorites: " (stars(favorites_avg)) }
                        ul class="place-cards" {
                            @for rated in favorites {
                                li { (place_card(rated)) }
                            }
                        }
                    }
                }
                section class="danger" {
                    h2 { "Account" }
                    form action="/delete-account" method="POST" {
                        input type="submit" value="Delete my account";
                    }
                    p class="meta" {
                        "Deleting your account removes your ratings, favorites and planned routes."
                    }
                }
            }
        },
    )
}
