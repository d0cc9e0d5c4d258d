use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use wayfinder_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{models, schema, util, DbConnection, DbReadOnly, DbReadWrite, SqliteConnection};

mod favorite;
mod place;
mod rating;
mod route;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}
