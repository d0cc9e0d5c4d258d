use super::prelude::*;
use crate::rating::Rated;

/// Conjunction of optional filters over the whole catalog.
///
/// Filtering is O(n) over all places per request. That is fine for the
/// expected catalog sizes; there is deliberately no pagination.
#[derive(Debug, Default, Clone)]
pub struct PlaceFilter {
    pub text: Option<String>,
    pub category: Option<Category>,
    pub region: Option<Region>,
    pub min_avg_rating: Option<AvgRating>,
    pub favorites_only: bool,
}

/// A place together with its derived average rating.
///
/// The rating is computed on every read and returned as a plain value;
/// fetched entities are never decorated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedPlace {
    pub place: Place,
    pub avg_rating: AvgRating,
}

pub fn rate_place_entity<R: RatingRepo>(repo: &R, place: Place) -> Result<RatedPlace> {
    let ratings = repo.ratings_of_place(&place.id)?;
    let avg_rating = place.avg_rating(&ratings);
    Ok(RatedPlace { place, avg_rating })
}

pub fn filter_places<R>(repo: &R, favorites: &[Id], filter: &PlaceFilter) -> Result<Vec<RatedPlace>>
where
    R: PlaceRepo + RatingRepo,
{
    let text = filter.text.as_deref().map(str::to_lowercase);
    let mut results = Vec::new();
    for place in repo.all_places()? {
        if let Some(category) = filter.category {
            if place.category != category {
                continue;
            }
        }
        if let Some(region) = filter.region {
            if place.region != region {
                continue;
            }
        }
        if filter.favorites_only && !favorites.contains(&place.id) {
            continue;
        }
        if let Some(ref text) = text {
            if !place.name.to_lowercase().contains(text) {
                continue;
            }
        }
        let rated = rate_place_entity(repo, place)?;
        if let Some(min) = filter.min_avg_rating {
            if rated.avg_rating < min {
                continue;
            }
        }
        results.push(rated);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use wayfinder_entities::builders::*;

    fn db_with_places() -> MockDb {
        let db = MockDb::default();
        db.places.borrow_mut().push(
            Place::build()
                .id("kazbegi")
                .name("Kazbegi")
                .category(Category::Mountains)
                .region(Region::MtskhetaMtianeti)
                .finish(),
        );
        db.places.borrow_mut().push(
            Place::build()
                .id("martvili")
                .name("Martvili Canyon")
                .category(Category::Waterfalls)
                .region(Region::Samegrelo)
                .finish(),
        );
        db
    }

    fn add_rating(db: &MockDb, place_id: &str, stars: f64) {
        db.ratings
            .borrow_mut()
            .push(Rating::build().place_id(place_id).stars(stars).finish());
    }

    #[test]
    fn filter_by_category() {
        let db = db_with_places();
        let filter = PlaceFilter {
            category: Some(Category::Mountains),
            ..Default::default()
        };
        let results = filter_places(&db, &[], &filter).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].place.id.as_str(), "kazbegi");
    }

    #[test]
    fn min_rating_excludes_lower_averages() {
        let db = db_with_places();
        add_rating(&db, "kazbegi", 4.0);
        add_rating(&db, "kazbegi", 4.0);
        let filter = PlaceFilter {
            category: Some(Category::Mountains),
            min_avg_rating: Some(4.5.into()),
            ..Default::default()
        };
        assert!(filter_places(&db, &[], &filter).unwrap().is_empty());

        let filter = PlaceFilter {
            min_avg_rating: Some(4.0.into()),
            ..Default::default()
        };
        let results = filter_places(&db, &[], &filter).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].avg_rating, 4.0.into());
    }

    #[test]
    fn text_match_is_case_insensitive() {
        let db = db_with_places();
        let filter = PlaceFilter {
            text: Some("KAZ".into()),
            ..Default::default()
        };
        let results = filter_places(&db, &[], &filter).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].place.name, "Kazbegi");
    }

    #[test]
    fn favorites_only() {
        let db = db_with_places();
        let favorites = vec![Id::from("martvili")];
        let filter = PlaceFilter {
            favorites_only: true,
            ..Default::default()
        };
        let results = filter_places(&db, &favorites, &filter).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].place.id.as_str(), "martvili");
    }

    #[test]
    fn no_filters_returns_everything() {
        let db = db_with_places();
        assert_eq!(
            filter_places(&db, &[], &PlaceFilter::default()).unwrap().len(),
            2
        );
    }
}
