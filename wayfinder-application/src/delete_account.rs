use crate::{sqlite, usecases, EmailAddress, Result};

// Ratings, favorites and planned routes of the user are
// removed by cascading deletes.
pub fn delete_account(
    connections: &sqlite::Connections,
    login_email: &EmailAddress,
    email: &EmailAddress,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| usecases::delete_user(conn, login_email, email))?;
    info!("Deleted user account {email}");
    Ok(())
}
