use time::Date;

use crate::id::Id;

/// A user's intent (or booking) to visit a place on a given date.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRoute {
    pub id       : Id,
    pub user_id  : Id,
    pub place_id : Id,
    pub date     : Date,
}
