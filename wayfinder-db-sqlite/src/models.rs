#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in seconds.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: i16,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: i16,
}

#[derive(Insertable)]
#[diesel(table_name = places)]
pub struct NewPlace<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub category: String,
    pub region: String,
    pub image: Option<&'a str>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Queryable)]
pub struct PlaceEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub region: String,
    pub image: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Insertable)]
#[diesel(table_name = ratings)]
pub struct NewRating<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub place_id: &'a str,
    pub stars: f64,
    pub comment: Option<&'a str>,
    pub image: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct RatingEntity {
    pub rowid: i64,
    pub id: String,
    pub user_id: String,
    pub place_id: String,
    pub stars: f64,
    pub comment: Option<String>,
    pub image: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = planned_routes)]
pub struct NewPlannedRoute<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub place_id: &'a str,
    pub date: String,
}

#[derive(Queryable)]
pub struct PlannedRouteEntity {
    pub rowid: i64,
    pub id: String,
    pub user_id: String,
    pub place_id: String,
    pub date: String,
}

#[derive(Insertable, Queryable)]
#[diesel(table_name = favorites)]
pub struct FavoriteRow {
    pub user_id: String,
    pub place_id: String,
}
