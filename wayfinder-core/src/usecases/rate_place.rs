use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPlaceRating {
    pub place_id: Id,
    pub stars: StarRating,
    pub comment: Option<String>,
    pub image: Option<String>,
}

pub fn rate_place<R>(repo: &R, user_id: &Id, r: NewPlaceRating) -> Result<Rating>
where
    R: PlaceRepo + RatingRepo,
{
    if !r.stars.is_valid() {
        return Err(Error::RatingValue);
    }
    // Fails with NotFound if the place has vanished meanwhile.
    let place = repo.get_place(&r.place_id)?;
    let rating = Rating {
        id: Id::new(),
        place_id: place.id,
        user_id: user_id.clone(),
        stars: r.stars,
        comment: r.comment.filter(|c| !c.trim().is_empty()),
        image: r.image,
        created_at: Timestamp::now(),
    };
    repo.create_rating(&rating)?;
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::repositories::Error as RepoError;
    use wayfinder_entities::builders::*;

    fn new_rating(place_id: &str, stars: f64) -> NewPlaceRating {
        NewPlaceRating {
            place_id: place_id.into(),
            stars: stars.into(),
            comment: Some("nice".into()),
            image: None,
        }
    }

    #[test]
    fn rate_existing_place() {
        let db = MockDb::default();
        db.places.borrow_mut().push(Place::build().id("p").finish());
        let rating = rate_place(&db, &"u".into(), new_rating("p", 4.5)).unwrap();
        assert_eq!(db.ratings.borrow().len(), 1);
        assert_eq!(rating.stars, 4.5.into());
        assert_eq!(rating.user_id.as_str(), "u");
    }

    #[test]
    fn reject_out_of_range_stars() {
        let db = MockDb::default();
        db.places.borrow_mut().push(Place::build().id("p").finish());
        assert!(matches!(
            rate_place(&db, &"u".into(), new_rating("p", 5.5)),
            Err(Error::RatingValue)
        ));
        assert!(matches!(
            rate_place(&db, &"u".into(), new_rating("p", -1.0)),
            Err(Error::RatingValue)
        ));
    }

    #[test]
    fn rating_an_unknown_place_fails() {
        let db = MockDb::default();
        assert!(matches!(
            rate_place(&db, &"u".into(), new_rating("ghost", 3.0)),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }

    #[test]
    fn blank_comment_is_dropped() {
        let db = MockDb::default();
        db.places.borrow_mut().push(Place::build().id("p").finish());
        let rating = rate_place(
            &db,
            &"u".into(),
            NewPlaceRating {
                place_id: "p".into(),
                stars: 3.0.into(),
                comment: Some("   ".into()),
                image: None,
            },
        )
        .unwrap();
        assert_eq!(rating.comment, None);
    }
}
