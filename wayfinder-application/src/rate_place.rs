use crate::{sqlite, usecases, Id, Rating, Result};

pub fn rate_place(
    connections: &sqlite::Connections,
    user_id: &Id,
    new_rating: usecases::NewPlaceRating,
) -> Result<Rating> {
    let mut connection = connections.exclusive()?;
    let rating = connection.transaction(|conn| usecases::rate_place(conn, user_id, new_rating))?;
    Ok(rating)
}
