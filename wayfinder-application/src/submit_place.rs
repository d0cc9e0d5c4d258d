use crate::{sqlite, usecases, Place, Result};

pub fn submit_place(connections: &sqlite::Connections, new_place: usecases::NewPlace) -> Result<Place> {
    let mut connection = connections.exclusive()?;
    let place = connection.transaction(|conn| usecases::create_place(conn, new_place))?;
    info!("Created place {} ({})", place.name, place.id);
    Ok(place)
}
