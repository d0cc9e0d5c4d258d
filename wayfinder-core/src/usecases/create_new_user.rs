use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: EmailAddress,
    pub password: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<()> {
    let password = u.password.parse::<Password>()?;
    if u.username.trim().is_empty() {
        return Err(Error::Username);
    }
    if !validate::is_valid_email(u.email.as_str()) {
        return Err(Error::EmailAddress);
    }
    if !validate::is_allowed_email_domain(&u.email) {
        return Err(Error::EmailDomain);
    }
    if repo.try_get_user_by_email(&u.email)?.is_some()
        || repo.try_get_user_by_username(&u.username)?.is_some()
    {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::new(),
        username: u.username,
        email: u.email,
        password,
        role: Role::User,
    };
    log::debug!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)?;
    Ok(())
}
