use crate::{sqlite, usecases, Id, Result};

pub fn toggle_favorite(
    connections: &sqlite::Connections,
    user_id: &Id,
    place_id: &Id,
) -> Result<usecases::FavoriteToggle> {
    let mut connection = connections.exclusive()?;
    Ok(connection.transaction(|conn| usecases::toggle_favorite(conn, user_id, place_id))?)
}
