use maud::Markup;
use rand::seq::SliceRandom;
use rocket::{
    self,
    form::Form,
    fs::TempFile,
    get, post,
    request::FlashMessage,
    response::{
        content::{RawCss, RawJavaScript},
        Flash, Redirect,
    },
    routes,
    serde::json::Json,
    uri, FromForm, Route, State,
};

use crate::web::{error::Error as ApiError, guards::*, sqlite, uploads, Cfg};
use wayfinder_application::{
    error::{AppError, BError},
    prelude::*,
};
use wayfinder_core::{
    entities::*,
    repositories::{Error as RepoError, *},
    usecases::{self, Error as ParameterError, FavoriteToggle, PlaceFilter, RatedPlace},
};

mod login;
mod register;
mod view;

#[cfg(test)]
mod tests;

const MAP_JS: &str = include_str!("map.js");
const MAIN_CSS: &str = include_str!("main.css");

const MAX_TOP_SPOTS: usize = 10;
const MAX_SUGGESTIONS: usize = 10;
const MAX_HOME_FAVORITES: usize = 6;

type Result<T> = std::result::Result<T, ApiError>;

fn rate_all_places<R>(repo: &R) -> Result<Vec<RatedPlace>>
where
    R: PlaceRepo + RatingRepo,
{
    let mut rated = Vec::new();
    for place in repo.all_places()? {
        rated.push(usecases::rate_place_entity(repo, place)?);
    }
    Ok(rated)
}

#[get("/")]
pub fn get_index(
    db: sqlite::Connections,
    auth: Auth,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let email = auth.account_email().ok().cloned();
    let db = db.shared()?;
    let user_count = db.count_users()?;
    let place_count = db.count_places()?;
    let rated = rate_all_places(&db)?;
    let mut top_spots: Vec<_> = rated
        .iter()
        .filter(|r| r.avg_rating >= 4.0.into())
        .cloned()
        .collect();
    if top_spots.is_empty() {
        // young catalogs have no top-rated spots yet
        top_spots = rated;
    }
    top_spots.shuffle(&mut rand::thread_rng());
    top_spots.truncate(MAX_TOP_SPOTS);
    Ok(view::index(
        email.as_ref(),
        flash,
        &top_spots,
        user_count,
        place_count,
    ))
}

#[get("/home")]
pub fn get_home(
    db: sqlite::Connections,
    account: Account,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let db = db.shared()?;
    let user = db.get_user_by_email(account.email())?;
    let favorite_ids = db.favorite_place_ids(&user.id)?;

    let mut suggestions = rate_all_places(&db)?;
    suggestions.shuffle(&mut rand::thread_rng());
    suggestions.truncate(MAX_SUGGESTIONS);

    let filter = PlaceFilter {
        favorites_only: true,
        ..Default::default()
    };
    let mut favorites = usecases::filter_places(&db, &favorite_ids, &filter)?;
    favorites.truncate(MAX_HOME_FAVORITES);

    let route_count = db.count_routes_of_user(&user.id)?;
    Ok(view::home(
        &user,
        flash,
        &suggestions,
        &favorites,
        route_count,
    ))
}

#[get("/profile")]
pub fn get_profile(
    db: sqlite::Connections,
    account: Account,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let db = db.shared()?;
    let user = db.get_user_by_email(account.email())?;
    let favorite_ids = db.favorite_place_ids(&user.id)?;
    let filter = PlaceFilter {
        favorites_only: true,
        ..Default::default()
    };
    let favorites = usecases::filter_places(&db, &favorite_ids, &filter)?;

    let mut routes = Vec::new();
    for route in db.routes_of_user(&user.id)? {
        let place = db.get_place(&route.place_id)?;
        routes.push((route, place));
    }

    let favorites_avg = if favorites.is_empty() {
        0.0
    } else {
        let sum: f64 = favorites.iter().map(|f| f64::from(f.avg_rating)).sum();
        (sum / favorites.len() as f64 * 10.0).round() / 10.0
    };
    Ok(view::profile(&user, flash, &favorites, &routes, favorites_avg))
}

#[get("/map")]
pub fn get_map(db: sqlite::Connections, auth: Auth) -> Result<Markup> {
    let email = auth.account_email().ok().cloned();
    let places = db.shared()?.all_places()?;
    Ok(view::map_of_places(email.as_ref(), &places))
}

#[get("/categories?<q>&<category>&<rating>&<region>&<favorites_only>")]
pub fn get_categories(
    db: sqlite::Connections,
    auth: Auth,
    q: Option<&str>,
    category: Option<&str>,
    rating: Option<f64>,
    region: Option<&str>,
    favorites_only: Option<bool>,
) -> Result<Markup> {
    let email = auth.account_email().ok().cloned();
    let db = db.shared()?;
    let favorite_ids = match &email {
        Some(email) => {
            let user = db.get_user_by_email(email)?;
            db.favorite_place_ids(&user.id)?
        }
        None => vec![],
    };
    let filter = PlaceFilter {
        text: q
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(ToOwned::to_owned),
        category: category.and_then(|c| c.parse().ok()),
        region: region.and_then(|r| r.parse().ok()),
        min_avg_rating: rating.map(Into::into),
        favorites_only: favorites_only.unwrap_or(false) && email.is_some(),
    };
    let results = usecases::filter_places(&db, &favorite_ids, &filter)?;
    Ok(view::place_list(email.as_ref(), &results, &filter))
}

#[get("/add-place")]
pub fn get_add_place(account: Account, flash: Option<FlashMessage>) -> Markup {
    view::add_place(Some(account.email()), flash)
}

#[derive(FromForm)]
pub struct AddPlaceForm<'r> {
    name: &'r str,
    description: &'r str,
    category: &'r str,
    region: &'r str,
    lat: f64,
    lng: f64,
    image: Option<TempFile<'r>>,
}

#[post("/add-place", data = "<data>")]
pub async fn post_add_place(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    _account: Account,
    data: Form<AddPlaceForm<'_>>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let back = || Redirect::to(uri!(get_add_place));
    let mut data = data.into_inner();
    let Ok(category) = data.category.parse::<Category>() else {
        return Err(Flash::error(back(), "Please choose a valid category."));
    };
    let Ok(region) = data.region.parse::<Region>() else {
        return Err(Flash::error(back(), "Please choose a valid region."));
    };
    let image = match data.image.as_mut() {
        Some(file) => uploads::store_image(&cfg.uploads_dir, file)
            .await
            .unwrap_or_default(),
        None => None,
    };
    let new_place = usecases::NewPlace {
        name: data.name.to_string(),
        description: data.description.to_string(),
        category,
        region,
        image,
        position: MapPoint::new(data.lat, data.lng),
    };
    match submit_place(&db, new_place) {
        Ok(place) => Ok(Redirect::to(uri!(get_place(place.id.as_str())))),
        Err(AppError::Business(BError::Parameter(err))) => {
            Err(Flash::error(back(), err.to_string()))
        }
        Err(_) => Err(Flash::error(
            back(),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        )),
    }
}

#[get("/place/<id>")]
pub fn get_place(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let db = db.shared()?;
    let place = db.get_place(&id.into())?;
    let ratings = db.ratings_of_place(&place.id)?;
    let rated = usecases::rate_place_entity(&db, place)?;
    let (viewer, is_favorite, planned) = match auth.account_email() {
        Ok(email) => {
            let user = db.get_user_by_email(email)?;
            let is_favorite = db.is_favorite(&user.id, &rated.place.id)?;
            let planned = db.try_get_route_for_place(&user.id, &rated.place.id)?;
            (Some(user), is_favorite, planned)
        }
        Err(_) => (None, false, None),
    };
    Ok(view::place_details(
        viewer.as_ref(),
        flash,
        &rated,
        &ratings,
        is_favorite,
        planned.as_ref(),
    ))
}

#[derive(FromForm)]
pub struct PlaceAction<'r> {
    action: &'r str,
    date: Option<&'r str>,
    stars: Option<f64>,
    comment: Option<&'r str>,
    image: Option<TempFile<'r>>,
}

#[post("/place/<id>", data = "<data>")]
pub async fn post_place_action(
    db: sqlite::Connections,
    cfg: &State<Cfg>,
    account: Account,
    id: &str,
    data: Form<PlaceAction<'_>>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let back = || Redirect::to(uri!(get_place(id)));
    let internal_error = || {
        Flash::error(
            back(),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        )
    };
    let place_id = Id::from(id);
    let user = db
        .shared()
        .map_err(AppError::from)
        .and_then(|db| Ok(db.get_user_by_email(account.email())?))
        .map_err(|_| internal_error())?;

    let mut data = data.into_inner();
    match data.action {
        "favorite" => {
            toggle_favorite(&db, &user.id, &place_id).map_err(|_| internal_error())?;
            Ok(back())
        }
        "route" => {
            let Some(Ok(date)) = data.date.map(parse_date) else {
                return Err(Flash::error(back(), "Please pick a valid visit date."));
            };
            match plan_visit(&db, &user.id, &place_id, date) {
                Ok(usecases::RoutePlan::Planned) => Ok(back()),
                Ok(usecases::RoutePlan::AlreadyPlanned) => Err(Flash::error(
                    back(),
                    "This place is already on your planned routes.",
                )),
                Err(_) => Err(internal_error()),
            }
        }
        "rating" => {
            let Some(stars) = data.stars else {
                return Err(Flash::error(back(), "Please select a star rating."));
            };
            let image = match data.image.as_mut() {
                Some(file) => uploads::store_image(&cfg.uploads_dir, file)
                    .await
                    .unwrap_or_default(),
                None => None,
            };
            let new_rating = usecases::NewPlaceRating {
                place_id,
                stars: stars.into(),
                comment: data.comment.map(ToOwned::to_owned),
                image,
            };
            match rate_place(&db, &user.id, new_rating) {
                Ok(_) => Ok(back()),
                Err(AppError::Business(BError::Parameter(ParameterError::RatingValue))) => Err(
                    Flash::error(back(), "Ratings must be between 0 and 5 stars."),
                ),
                Err(_) => Err(internal_error()),
            }
        }
        _ => Err(Flash::error(back(), "Unknown action.")),
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: &'static str,
}

#[post("/toggle_favorite/<id>")]
pub fn post_toggle_favorite(
    db: sqlite::Connections,
    account: Account,
    id: &str,
) -> Result<Json<StatusResponse>> {
    let user = usecases::authorize_user_by_email(&db.shared()?, account.email(), Role::User)?;
    let status = match toggle_favorite(&db, &user.id, &id.into())? {
        FavoriteToggle::Added => "added",
        FavoriteToggle::Removed => "removed",
    };
    Ok(Json(StatusResponse { status }))
}

#[post("/delete_rating/<id>")]
pub fn post_delete_rating(
    db: sqlite::Connections,
    account: Account,
    id: &str,
) -> Result<Json<StatusResponse>> {
    let user = usecases::authorize_user_by_email(&db.shared()?, account.email(), Role::User)?;
    delete_rating(&db, &user, &id.into())?;
    Ok(Json(StatusResponse { status: "deleted" }))
}

#[post("/delete_route/<id>")]
pub fn post_delete_route(
    db: sqlite::Connections,
    account: Account,
    id: &str,
) -> std::result::Result<Flash<Redirect>, Flash<Redirect>> {
    let back = || Redirect::to(uri!(get_profile));
    let user = db
        .shared()
        .map_err(AppError::from)
        .and_then(|db| Ok(db.get_user_by_email(account.email())?))
        .map_err(|_| Flash::error(back(), "Failed to remove the planned route."))?;
    match delete_planned_visit(&db, &user, &id.into()) {
        Ok(()) => Ok(Flash::success(back(), "Planned route removed.")),
        Err(_) => Err(Flash::error(back(), "Failed to remove the planned route.")),
    }
}

#[post("/delete_place/<id>")]
pub fn post_delete_place(
    db: sqlite::Connections,
    account: Account,
    id: &str,
) -> std::result::Result<Flash<Redirect>, Flash<Redirect>> {
    let home = || Redirect::to(uri!("/categories"));
    let user = db
        .shared()
        .map_err(AppError::from)
        .and_then(|db| Ok(db.get_user_by_email(account.email())?))
        .map_err(|_| Flash::error(home(), "Failed to delete the place."))?;
    match delete_place(&db, &user, &id.into()) {
        Ok(()) => Ok(Flash::success(home(), "The place has been deleted.")),
        Err(AppError::Business(BError::Parameter(ParameterError::Forbidden))) => Err(Flash::error(
            Redirect::to(uri!(get_place(id))),
            "Only administrators may delete places.",
        )),
        Err(_) => Err(Flash::error(home(), "Failed to delete the place.")),
    }
}

#[get("/booking")]
pub fn get_booking(
    db: sqlite::Connections,
    account: Account,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let places = db.shared()?.all_places()?;
    Ok(view::booking(Some(account.email()), flash, &places))
}

#[derive(FromForm)]
pub struct BookingForm<'r> {
    place: &'r str,
    date: &'r str,
    name: &'r str,
    email: &'r str,
    phone: &'r str,
}

#[post("/booking", data = "<data>")]
pub fn post_booking(
    db: sqlite::Connections,
    account: Account,
    data: Form<BookingForm<'_>>,
) -> std::result::Result<Flash<Redirect>, Flash<Redirect>> {
    let back = || Redirect::to(uri!(get_booking));
    let Ok(contact_email) = data.email.parse::<EmailAddress>() else {
        return Err(Flash::error(back(), "Please enter a valid email address."));
    };
    let Ok(date) = parse_date(data.date) else {
        return Err(Flash::error(back(), "Please pick a valid visit date."));
    };
    let user = db
        .shared()
        .map_err(AppError::from)
        .and_then(|db| Ok(db.get_user_by_email(account.email())?))
        .map_err(|_| Flash::error(back(), "Failed to submit the booking."))?;
    let booking = usecases::BookingRequest {
        place_name: data.place.to_string(),
        date,
        contact_name: data.name.to_string(),
        contact_email,
        contact_phone: data.phone.to_string(),
    };
    match submit_booking(&db, &user.id, &booking) {
        Ok(_) => Ok(Flash::success(
            Redirect::to(uri!(get_home)),
            "Booking received! We will confirm your visit shortly.",
        )),
        Err(AppError::Business(BError::Parameter(ParameterError::Repo(RepoError::NotFound)))) => {
            Err(Flash::error(back(), "We do not know this place."))
        }
        Err(_) => Err(Flash::error(back(), "Failed to submit the booking.")),
    }
}

#[get("/contact")]
pub fn get_contact(auth: Auth, flash: Option<FlashMessage>) -> Markup {
    view::contact(auth.account_email().ok(), flash)
}

#[derive(FromForm)]
pub struct ContactForm<'r> {
    name: &'r str,
    email: &'r str,
    message: &'r str,
}

// Messages are not persisted, the form only acknowledges receipt.
#[post("/contact", data = "<data>")]
pub fn post_contact(data: Form<ContactForm<'_>>) -> Flash<Redirect> {
    info!(
        "Contact message from {} <{}>: {} characters",
        data.name,
        data.email,
        data.message.len()
    );
    Flash::success(
        Redirect::to(uri!(get_contact)),
        "Thank you for your message! We will get back to you soon.",
    )
}

#[get("/map.js")]
pub fn get_map_js() -> RawJavaScript<&'static str> {
    RawJavaScript(MAP_JS)
}

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_home,
        get_profile,
        get_map,
        get_categories,
        get_add_place,
        post_add_place,
        get_place,
        post_place_action,
        post_toggle_favorite,
        post_delete_rating,
        post_delete_route,
        post_delete_place,
        get_booking,
        post_booking,
        get_contact,
        post_contact,
        get_main_css,
        get_map_js,
        login::get_login,
        login::post_login,
        login::post_logout,
        register::get_register,
        register::post_register,
        register::post_delete_account,
    ]
}
