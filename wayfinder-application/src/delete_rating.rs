use crate::{sqlite, usecases, Id, Result, User};

pub fn delete_rating(connections: &sqlite::Connections, account: &User, rating_id: &Id) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_rating(conn, account, rating_id))?;
    Ok(())
}
