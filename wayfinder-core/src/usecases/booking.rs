use time::Date;

use super::{plan_route, prelude::*, RoutePlan};
use crate::repositories::Error as RepoError;

#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub place_name: String,
    pub date: Date,
    pub contact_name: String,
    pub contact_email: EmailAddress,
    pub contact_phone: String,
}

/// A booking resolves the place by its exact name and then plans the
/// visit route. Contact details are taken for the confirmation message
/// only and are not persisted.
pub fn submit_booking<R>(repo: &R, user_id: &Id, booking: &BookingRequest) -> Result<RoutePlan>
where
    R: PlaceRepo + RouteRepo,
{
    let Some(place) = repo.try_get_place_by_name(&booking.place_name)? else {
        return Err(Error::Repo(RepoError::NotFound));
    };
    plan_route(repo, user_id, &place.id, booking.date)
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{super::tests::MockDb, *};
    use wayfinder_entities::builders::*;

    fn booking(place_name: &str) -> BookingRequest {
        BookingRequest {
            place_name: place_name.into(),
            date: date!(2026 - 09 - 03),
            contact_name: "Nino".into(),
            contact_email: "nino@gmail.com".parse().unwrap(),
            contact_phone: "+995 555 123456".into(),
        }
    }

    #[test]
    fn booking_a_known_place_plans_a_route() {
        let db = MockDb::default();
        db.places
            .borrow_mut()
            .push(Place::build().id("p").name("Gergeti Trinity").finish());
        assert_eq!(
            submit_booking(&db, &"u".into(), &booking("Gergeti Trinity")).unwrap(),
            RoutePlan::Planned
        );
        assert_eq!(db.routes.borrow().len(), 1);
    }

    #[test]
    fn booking_an_unknown_place_creates_nothing() {
        let db = MockDb::default();
        assert!(matches!(
            submit_booking(&db, &"u".into(), &booking("Atlantis")),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(db.routes.borrow().is_empty());
    }
}
