use crate::{sqlite, usecases, Id, Result, User};

pub fn delete_place(connections: &sqlite::Connections, account: &User, id: &Id) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_place(conn, account, id))?;
    warn!("Deleted place {id} on behalf of {}", account.email);
    Ok(())
}
