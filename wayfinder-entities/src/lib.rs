#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # wayfinder-entities
//!
//! Reusable, agnostic domain entities for Wayfinder.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod email;
pub mod geo;
pub mod id;
pub mod password;
pub mod place;
pub mod rating;
pub mod route;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
