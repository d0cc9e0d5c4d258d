use rocket::http::Status as HttpStatus;

use super::*;
use crate::web::{self, sqlite::Connections, tests::prelude::*};
use wayfinder_core::entities::{Category, MapPoint, Place, Region};

fn setup() -> (Client, Connections) {
    web::tests::rocket_test_setup(vec![("/", super::routes())])
}

fn create_place(pool: &Connections, name: &str) -> Place {
    let db = pool.exclusive().unwrap();
    usecases::create_place(
        &db,
        usecases::NewPlace {
            name: name.to_string(),
            description: "A place worth a visit.".to_string(),
            category: Category::Mountains,
            region: Region::Svaneti,
            image: None,
            position: MapPoint::new(43.0, 42.7),
        },
    )
    .unwrap()
}

fn login_user(client: &Client, pool: &Connections, email: &str) {
    register_user(pool, email, "secret1");
    let body = format!("email={}&password=secret1", email.replace('@', "%40"));
    let res = client
        .post("/login")
        .header(ContentType::Form)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
}

#[test]
fn get_index() {
    let (client, pool) = setup();
    create_place(&pool, "Ushba");
    let res = client.get("/").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("Ushba"));
}

#[test]
fn get_categories_filters_by_text() {
    let (client, pool) = setup();
    create_place(&pool, "Ushba");
    create_place(&pool, "Shkhara");

    let res = client.get("/categories?q=ushba").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("Ushba"));
    assert!(!body_str.contains("Shkhara"));
}

#[test]
fn get_categories_rejects_nothing_on_unknown_category() {
    let (client, pool) = setup();
    create_place(&pool, "Ushba");
    // an unparseable category is ignored instead of failing the request
    let res = client.get("/categories?category=volcanoes").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    assert!(res.into_string().unwrap().contains("Ushba"));
}

#[test]
fn get_place_details() {
    let (client, pool) = setup();
    let place = create_place(&pool, "Ushba");
    let res = client.get(format!("/place/{}", place.id)).dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    let body_str = res.into_string().unwrap();
    assert!(body_str.contains("Ushba"));
    assert!(body_str.contains("No ratings yet."));
}

#[test]
fn get_place_details_not_found() {
    let (client, _) = setup();
    let res = client.get("/place/does-not-exist").dispatch();
    assert_eq!(res.status(), HttpStatus::NotFound);
}

#[test]
fn home_requires_authentication() {
    let (client, _) = setup();
    let res = client.get("/home").dispatch();
    assert_eq!(res.status(), HttpStatus::Unauthorized);
}

#[test]
fn toggle_favorite_responds_with_json() {
    let (client, pool) = setup();
    let place = create_place(&pool, "Ushba");
    login_user(&client, &pool, "ana@example.org");

    let res = client
        .post(format!("/toggle_favorite/{}", place.id))
        .dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    assert_eq!(res.into_string().unwrap(), r#"{"status":"added"}"#);

    let res = client
        .post(format!("/toggle_favorite/{}", place.id))
        .dispatch();
    assert_eq!(res.into_string().unwrap(), r#"{"status":"removed"}"#);
}

#[test]
fn users_must_not_delete_foreign_ratings() {
    let (client, pool) = setup();
    let place = create_place(&pool, "Ushba");

    register_user(&pool, "ana@example.org", "secret1");
    let rating = {
        let db = pool.exclusive().unwrap();
        let ana = db
            .get_user_by_email(&"ana@example.org".parse().unwrap())
            .unwrap();
        usecases::rate_place(
            &db,
            &ana.id,
            usecases::NewPlaceRating {
                place_id: place.id.clone(),
                stars: 5.0.into(),
                comment: None,
                image: None,
            },
        )
        .unwrap()
    };

    login_user(&client, &pool, "nino@example.org");
    let res = client.post(format!("/delete_rating/{}", rating.id)).dispatch();
    assert_eq!(res.status(), HttpStatus::Forbidden);
    assert_eq!(
        pool.shared()
            .unwrap()
            .ratings_of_place(&place.id)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn booking_for_unknown_place_redirects_back() {
    let (client, pool) = setup();
    login_user(&client, &pool, "ana@example.org");
    let res = client
        .post("/booking")
        .header(ContentType::Form)
        .body("place=No%20Such%20Place&date=2026-09-01&name=Ana&email=ana%40example.org&phone=555")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    for h in res.headers().iter() {
        if h.name.as_str() == "Location" {
            assert_eq!(h.value, "/booking");
        }
    }
}

#[test]
fn booking_known_place_redirects_home() {
    let (client, pool) = setup();
    create_place(&pool, "Ushba");
    login_user(&client, &pool, "ana@example.org");
    let res = client
        .post("/booking")
        .header(ContentType::Form)
        .body("place=Ushba&date=2026-09-01&name=Ana&email=ana%40example.org&phone=555")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    for h in res.headers().iter() {
        if h.name.as_str() == "Location" {
            assert_eq!(h.value, "/home");
        }
    }
}

#[test]
fn register_and_sign_in() {
    let (client, _) = setup();
    let res = client
        .post("/register")
        .header(ContentType::Form)
        .body("username=ana&email=ana%40example.org&password=secret1")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);

    let res = client
        .post("/login")
        .header(ContentType::Form)
        .body("email=ana%40example.org&password=secret1")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);

    let res = client.get("/home").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    assert!(res.into_string().unwrap().contains("Welcome back, ana!"));
}

#[test]
fn plan_route_and_remove_it() {
    let (client, pool) = setup();
    let place = create_place(&pool, "Ushba");
    login_user(&client, &pool, "ana@example.org");

    let res = client
        .post(format!("/place/{}", place.id))
        .header(ContentType::Form)
        .body("action=route&date=2026-09-01")
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);

    let user = pool
        .shared()
        .unwrap()
        .get_user_by_email(&"ana@example.org".parse().unwrap())
        .unwrap();
    let routes = pool.shared().unwrap().routes_of_user(&user.id).unwrap();
    assert_eq!(routes.len(), 1);

    let res = client
        .post(format!("/delete_route/{}", routes[0].id))
        .dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    assert!(pool
        .shared()
        .unwrap()
        .routes_of_user(&user.id)
        .unwrap()
        .is_empty());
}

#[test]
fn only_admins_may_delete_places() {
    let (client, pool) = setup();
    let place = create_place(&pool, "Ushba");
    login_user(&client, &pool, "ana@example.org");

    let res = client.post(format!("/delete_place/{}", place.id)).dispatch();
    assert_eq!(res.status(), HttpStatus::SeeOther);
    for h in res.headers().iter() {
        if h.name.as_str() == "Location" {
            assert_eq!(h.value, format!("/place/{}", place.id));
        }
    }
    assert_eq!(pool.shared().unwrap().count_places().unwrap(), 1);
}

#[test]
fn serves_stylesheet_and_map_script() {
    let (client, _) = setup();
    let res = client.get("/main.css").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    assert_eq!(res.content_type(), Some(ContentType::CSS));
    let res = client.get("/map.js").dispatch();
    assert_eq!(res.status(), HttpStatus::Ok);
    assert_eq!(res.content_type(), Some(ContentType::JavaScript));
}
