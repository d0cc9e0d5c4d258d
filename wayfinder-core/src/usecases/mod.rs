mod authorize;
mod booking;
mod create_new_user;
mod create_place;
mod delete_place;
mod delete_rating;
mod delete_user;
mod error;
mod filter_places;
mod login;
mod plan_route;
mod rate_place;
mod toggle_favorite;


type Result<T> = std::result::Result<T, Error>;

pub use self::{
    authorize::*, booking::*, create_new_user::*, create_place::*, delete_place::*,
    delete_rating::*, delete_user::*, error::Error, filter_places::*, login::*, plan_route::*,
    rate_place::*, toggle_favorite::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
