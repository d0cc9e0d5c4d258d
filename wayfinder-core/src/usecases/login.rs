use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_email(login.email)
        .map_err(Error::Repo)
        .and_then(|user| {
            if let Some(u) = user {
                if u.password.verify(login.password) {
                    Ok(u)
                } else {
                    Err(Error::Credentials)
                }
            } else {
                Err(Error::Credentials)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use wayfinder_entities::builders::*;

    #[test]
    fn login_with_known_credentials() {
        let db = MockDb::default();
        db.users.borrow_mut().push(
            User::build()
                .email("foo@gmail.com")
                .password("secret")
                .finish(),
        );
        let email = "foo@gmail.com".parse().unwrap();
        let login = Credentials {
            email: &email,
            password: "secret",
        };
        assert!(login_with_email(&db, &login).is_ok());
    }

    #[test]
    fn login_with_wrong_password() {
        let db = MockDb::default();
        db.users.borrow_mut().push(
            User::build()
                .email("foo@gmail.com")
                .password("secret")
                .finish(),
        );
        let email = "foo@gmail.com".parse().unwrap();
        let login = Credentials {
            email: &email,
            password: "wrong",
        };
        assert!(matches!(
            login_with_email(&db, &login),
            Err(Error::Credentials)
        ));
    }

    #[test]
    fn login_with_unknown_email() {
        let db = MockDb::default();
        let email = "nobody@gmail.com".parse().unwrap();
        let login = Credentials {
            email: &email,
            password: "secret",
        };
        assert!(matches!(
            login_with_email(&db, &login),
            Err(Error::Credentials)
        ));
    }
}
