#[macro_use]
extern crate log;

mod delete_account;
mod delete_place;
mod delete_rating;
mod plan_visit;
mod rate_place;
mod register;
mod submit_place;
mod toggle_favorite;

pub mod prelude {
    pub use super::{
        delete_account::*, delete_place::*, delete_rating::*, plan_visit::*, rate_place::*,
        register::*, submit_place::*, toggle_favorite::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use wayfinder_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub mod sqlite {
    pub use wayfinder_db_sqlite::Connections;
}
