use crate::repositories::*;

/// Combined access to all repositories.
pub trait Db: UserRepo + PlaceRepo + RatingRepo + FavoriteRepo + RouteRepo {}

impl<T> Db for T where T: UserRepo + PlaceRepo + RatingRepo + FavoriteRepo + RouteRepo {}
