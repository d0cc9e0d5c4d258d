use super::prelude::*;

pub fn authorize_user_by_email<R: UserRepo>(
    repo: &R,
    email: &EmailAddress,
    min_required_role: Role,
) -> Result<User> {
    if let Some(user) = repo.try_get_user_by_email(email)? {
        if user.role >= min_required_role {
            return Ok(user);
        }
    }
    Err(Error::Unauthorized)
}
