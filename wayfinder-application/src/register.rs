use crate::{sqlite, usecases, Result};

pub fn register(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<()> {
    let mut connection = connections.exclusive()?;
    connection.transaction(|conn| {
        let username = new_user.username.clone();
        usecases::create_new_user(conn, new_user)?;
        info!("Created new user {username}");
        Ok::<_, usecases::Error>(())
    })?;
    Ok(())
}

pub fn login(
    connections: &sqlite::Connections,
    credentials: &usecases::Credentials,
) -> Result<crate::User> {
    let connection = connections.shared()?;
    Ok(usecases::login_with_email(&connection, credentials)?)
}
