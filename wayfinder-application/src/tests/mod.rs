use time::macros::date;

use crate::{error::AppError, prelude::*, sqlite, usecases, EmailAddress};

use wayfinder_core::{
    entities::*,
    repositories::*,
    usecases::{BookingRequest, FavoriteToggle, NewPlace, NewPlaceRating, NewUser, RoutePlan},
};

fn fixture() -> sqlite::Connections {
    let connections = sqlite::Connections::init(":memory:", 1).unwrap();
    wayfinder_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    connections
}

fn register_user(connections: &sqlite::Connections, email: &str) -> User {
    let email = email.parse::<EmailAddress>().unwrap();
    register(
        connections,
        NewUser {
            username: email.as_str().split('@').next().unwrap().to_string(),
            email: email.clone(),
            password: "secret1".to_string(),
        },
    )
    .unwrap();
    connections
        .shared()
        .unwrap()
        .get_user_by_email(&email)
        .unwrap()
}

fn default_new_place() -> NewPlace {
    NewPlace {
        name: "Gergeti Trinity Church".to_string(),
        description: "A 14th century church below Mount Kazbegi.".to_string(),
        category: Category::Historic,
        region: Region::MtskhetaMtianeti,
        image: None,
        position: MapPoint::new(42.6627, 44.6205),
    }
}

#[test]
fn register_and_login() {
    let connections = fixture();
    let user = register_user(&connections, "ana@example.org");
    assert_eq!(user.role, Role::User);

    let email = "ana@example.org".parse().unwrap();
    let credentials = usecases::Credentials {
        email: &email,
        password: "secret1",
    };
    assert!(login(&connections, &credentials).is_ok());

    let wrong = usecases::Credentials {
        email: &email,
        password: "wrong password",
    };
    assert!(login(&connections, &wrong).is_err());
}

#[test]
fn registration_rolls_back_on_duplicate_email() {
    let connections = fixture();
    register_user(&connections, "ana@example.org");
    let err = register(
        &connections,
        NewUser {
            username: "someone-else".to_string(),
            email: "ana@example.org".parse().unwrap(),
            password: "secret1".to_string(),
        },
    )
    .err()
    .unwrap();
    assert!(matches!(
        err,
        AppError::Business(crate::error::BError::Parameter(
            usecases::Error::UserExists
        ))
    ));
    assert_eq!(connections.shared().unwrap().count_users().unwrap(), 1);
}

#[test]
fn rate_and_unrate_place() {
    let connections = fixture();
    let user = register_user(&connections, "ana@example.org");
    let place = submit_place(&connections, default_new_place()).unwrap();

    let rating = rate_place(
        &connections,
        &user.id,
        NewPlaceRating {
            place_id: place.id.clone(),
            stars: 4.0.into(),
            comment: Some("Worth the hike".to_string()),
            image: None,
        },
    )
    .unwrap();

    let ratings = connections
        .shared()
        .unwrap()
        .ratings_of_place(&place.id)
        .unwrap();
    assert_eq!(ratings.len(), 1);

    delete_rating(&connections, &user, &rating.id).unwrap();
    let ratings = connections
        .shared()
        .unwrap()
        .ratings_of_place(&place.id)
        .unwrap();
    assert!(ratings.is_empty());
}

#[test]
fn users_must_not_delete_foreign_ratings() {
    let connections = fixture();
    let ana = register_user(&connections, "ana@example.org");
    let nino = register_user(&connections, "nino@example.org");
    let place = submit_place(&connections, default_new_place()).unwrap();
    let rating = rate_place(
        &connections,
        &ana.id,
        NewPlaceRating {
            place_id: place.id.clone(),
            stars: 5.0.into(),
            comment: None,
            image: None,
        },
    )
    .unwrap();

    assert!(delete_rating(&connections, &nino, &rating.id).is_err());
    assert_eq!(
        connections
            .shared()
            .unwrap()
            .ratings_of_place(&place.id)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn toggle_favorite_twice() {
    let connections = fixture();
    let user = register_user(&connections, "ana@example.org");
    let place = submit_place(&connections, default_new_place()).unwrap();

    assert!(matches!(
        toggle_favorite(&connections, &user.id, &place.id).unwrap(),
        FavoriteToggle::Added
    ));
    assert!(matches!(
        toggle_favorite(&connections, &user.id, &place.id).unwrap(),
        FavoriteToggle::Removed
    ));
    assert!(connections
        .shared()
        .unwrap()
        .favorite_place_ids(&user.id)
        .unwrap()
        .is_empty());
}

#[test]
fn plan_visit_is_idempotent() {
    let connections = fixture();
    let user = register_user(&connections, "ana@example.org");
    let place = submit_place(&connections, default_new_place()).unwrap();

    assert!(matches!(
        plan_visit(&connections, &user.id, &place.id, date!(2026 - 09 - 01)).unwrap(),
        RoutePlan::Planned
    ));
    assert!(matches!(
        plan_visit(&connections, &user.id, &place.id, date!(2026 - 10 - 01)).unwrap(),
        RoutePlan::AlreadyPlanned
    ));
    let routes = connections
        .shared()
        .unwrap()
        .routes_of_user(&user.id)
        .unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].date, date!(2026 - 09 - 01));
}

#[test]
fn booking_resolves_place_by_name() {
    let connections = fixture();
    let user = register_user(&connections, "ana@example.org");
    let place = submit_place(&connections, default_new_place()).unwrap();

    let booking = BookingRequest {
        place_name: place.name.clone(),
        date: date!(2026 - 09 - 01),
        contact_name: "Ana".to_string(),
        contact_email: "ana@example.org".parse().unwrap(),
        contact_phone: "+995 555 123456".to_string(),
    };
    assert!(submit_booking(&connections, &user.id, &booking).is_ok());

    let unknown = BookingRequest {
        place_name: "No Such Place".to_string(),
        ..booking
    };
    assert!(submit_booking(&connections, &user.id, &unknown).is_err());
}

#[test]
fn deleting_an_account_cascades() {
    let connections = fixture();
    let user = register_user(&connections, "ana@example.org");
    let place = submit_place(&connections, default_new_place()).unwrap();
    rate_place(
        &connections,
        &user.id,
        NewPlaceRating {
            place_id: place.id.clone(),
            stars: 3.0.into(),
            comment: None,
            image: None,
        },
    )
    .unwrap();
    toggle_favorite(&connections, &user.id, &place.id).unwrap();
    plan_visit(&connections, &user.id, &place.id, date!(2026 - 09 - 01)).unwrap();

    delete_account(&connections, &user.email, &user.email).unwrap();

    let connection = connections.shared().unwrap();
    assert_eq!(connection.count_users().unwrap(), 0);
    assert!(connection.ratings_of_place(&place.id).unwrap().is_empty());
    assert!(connection.favorite_place_ids(&user.id).unwrap().is_empty());
    assert!(connection.routes_of_user(&user.id).unwrap().is_empty());
}

#[test]
fn only_admins_may_delete_places() {
    let connections = fixture();
    let user = register_user(&connections, "ana@example.org");
    let place = submit_place(&connections, default_new_place()).unwrap();

    assert!(delete_place(&connections, &user, &place.id).is_err());

    let admin = User {
        role: Role::Admin,
        ..user
    };
    delete_place(&connections, &admin, &place.id).unwrap();
    assert_eq!(connections.shared().unwrap().count_places().unwrap(), 0);
}
