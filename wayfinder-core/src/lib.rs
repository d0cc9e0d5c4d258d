pub mod db;
pub mod rating;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use wayfinder_entities::{
        email::*, geo::*, id::*, password::*, place::*, rating::*, route::*, time::*, user::*,
    };
}
