use time::Date;

use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePlan {
    Planned,
    AlreadyPlanned,
}

/// Plan a visit to a place. First write wins: planning the same place
/// again is a no-op, additionally backed by a UNIQUE constraint in the
/// storage layer.
pub fn plan_route<R>(repo: &R, user_id: &Id, place_id: &Id, date: Date) -> Result<RoutePlan>
where
    R: PlaceRepo + RouteRepo,
{
    let place = repo.get_place(place_id)?;
    if repo.try_get_route_for_place(user_id, &place.id)?.is_some() {
        return Ok(RoutePlan::AlreadyPlanned);
    }
    let route = PlannedRoute {
        id: Id::new(),
        user_id: user_id.clone(),
        place_id: place.id,
        date,
    };
    repo.create_route(&route)?;
    Ok(RoutePlan::Planned)
}

pub fn delete_route<R: RouteRepo>(repo: &R, account: &User, route_id: &Id) -> Result<()> {
    let route = repo.get_route(route_id)?;
    if route.user_id != account.id && !account.is_admin() {
        return Err(Error::Forbidden);
    }
    Ok(repo.delete_route(route_id)?)
}
