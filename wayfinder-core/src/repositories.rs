// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn delete_user_by_email(&self, email: &EmailAddress) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user_by_email(&self, email: &EmailAddress) -> Result<User> {
        self.try_get_user_by_email(email)?.ok_or(Error::NotFound)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
}

pub trait PlaceRepo {
    fn create_place(&self, place: &Place) -> Result<()>;
    fn delete_place(&self, id: &Id) -> Result<()>;

    fn get_place(&self, id: &Id) -> Result<Place>;
    fn try_get_place_by_name(&self, name: &str) -> Result<Option<Place>>;

    fn all_places(&self) -> Result<Vec<Place>>;
    fn count_places(&self) -> Result<usize>;
}

pub trait RatingRepo {
    fn create_rating(&self, rating: &Rating) -> Result<()>;
    fn delete_rating(&self, id: &Id) -> Result<()>;

    fn get_rating(&self, id: &Id) -> Result<Rating>;
    fn ratings_of_place(&self, place_id: &Id) -> Result<Vec<Rating>>;
}

pub trait FavoriteRepo {
    fn add_favorite(&self, user_id: &Id, place_id: &Id) -> Result<()>;
    fn remove_favorite(&self, user_id: &Id, place_id: &Id) -> Result<()>;

    fn favorite_place_ids(&self, user_id: &Id) -> Result<Vec<Id>>;

    fn is_favorite(&self, user_id: &Id, place_id: &Id) -> Result<bool> {
        Ok(self.favorite_place_ids(user_id)?.contains(place_id))
    }
}

pub trait RouteRepo {
    fn create_route(&self, route: &PlannedRoute) -> Result<()>;
    fn delete_route(&self, id: &Id) -> Result<()>;

    fn get_route(&self, id: &Id) -> Result<PlannedRoute>;
    fn try_get_route_for_place(&self, user_id: &Id, place_id: &Id)
        -> Result<Option<PlannedRoute>>;

    fn routes_of_user(&self, user_id: &Id) -> Result<Vec<PlannedRoute>>;
    fn count_routes_of_user(&self, user_id: &Id) -> Result<usize> {
        Ok(self.routes_of_user(user_id)?.len())
    }
}
