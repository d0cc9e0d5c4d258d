use time::Date;

use crate::{sqlite, usecases, Id, Result, User};

pub fn plan_visit(
    connections: &sqlite::Connections,
    user_id: &Id,
    place_id: &Id,
    date: Date,
) -> Result<usecases::RoutePlan> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::plan_route(conn, user_id, place_id, date))?)
}

pub fn submit_booking(
    connections: &sqlite::Connections,
    user_id: &Id,
    booking: &usecases::BookingRequest,
) -> Result<usecases::RoutePlan> {
    let mut connection = connections.exclusive()?;
    let plan = connection.transaction(|conn| usecases::submit_booking(conn, user_id, booking))?;
    info!(
        "Received booking request for {} from {}",
        booking.place_name, booking.contact_email
    );
    Ok(plan)
}

pub fn delete_planned_visit(
    connections: &sqlite::Connections,
    account: &User,
    route_id: &Id,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_route(conn, account, route_id))?;
    Ok(())
}
