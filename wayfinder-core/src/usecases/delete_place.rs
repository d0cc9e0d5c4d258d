use super::prelude::*;

pub fn delete_place<R: PlaceRepo>(repo: &R, account: &User, id: &Id) -> Result<()> {
    if !account.is_admin() {
        return Err(Error::Forbidden);
    }
    Ok(repo.delete_place(id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use wayfinder_entities::builders::*;

    #[test]
    fn only_admins_may_delete_places() {
        let db = MockDb::default();
        db.places
            .borrow_mut()
            .push(Place::build().id("p").finish());
        let user = User::build().role(Role::User).finish();
        let admin = User::build().role(Role::Admin).finish();
        assert!(matches!(
            delete_place(&db, &user, &"p".into()),
            Err(Error::Forbidden)
        ));
        assert!(delete_place(&db, &admin, &"p".into()).is_ok());
        assert!(db.places.borrow().is_empty());
    }
}
