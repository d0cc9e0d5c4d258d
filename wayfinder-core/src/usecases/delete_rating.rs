use super::prelude::*;

pub fn delete_rating<R: RatingRepo>(repo: &R, account: &User, rating_id: &Id) -> Result<()> {
    let rating = repo.get_rating(rating_id)?;
    if rating.user_id != account.id && !account.is_admin() {
        return Err(Error::Forbidden);
    }
    Ok(repo.delete_rating(rating_id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use wayfinder_entities::builders::*;

    fn db_with_rating(owner: &str) -> MockDb {
        let db = MockDb::default();
        db.ratings
            .borrow_mut()
            .push(Rating::build().id("r").user_id(owner).finish());
        db
    }

    #[test]
    fn owner_may_delete() {
        let db = db_with_rating("u");
        let owner = User::build().id("u").role(Role::User).finish();
        assert!(delete_rating(&db, &owner, &"r".into()).is_ok());
        assert!(db.ratings.borrow().is_empty());
    }

    #[test]
    fn admin_may_delete() {
        let db = db_with_rating("u");
        let admin = User::build().id("a").role(Role::Admin).finish();
        assert!(delete_rating(&db, &admin, &"r".into()).is_ok());
    }

    #[test]
    fn stranger_may_not_delete() {
        let db = db_with_rating("u");
        let stranger = User::build().id("x").role(Role::User).finish();
        assert!(matches!(
            delete_rating(&db, &stranger, &"r".into()),
            Err(Error::Forbidden)
        ));
        assert_eq!(db.ratings.borrow().len(), 1);
    }
}
