use crate::entities::*;

pub trait Rated {
    fn avg_rating(&self, _: &[Rating]) -> AvgRating;
}

impl Rated for Place {
    fn avg_rating(&self, ratings: &[Rating]) -> AvgRating {
        debug_assert_eq!(
            ratings.len(),
            ratings.iter().filter(|r| r.place_id == self.id).count()
        );
        ratings
            .iter()
            .fold(AvgRatingBuilder::default(), |mut acc, r| {
                acc += r.stars;
                acc
            })
            .build()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use wayfinder_entities::builders::*;

    fn new_place(id: &str) -> Place {
        Place::build().id(id).finish()
    }

    fn new_rating(id: &str, place_id: &str, stars: f64) -> Rating {
        Rating::build().id(id).place_id(place_id).stars(stars).finish()
    }

    #[test]
    fn average_of_three_ratings() {
        let place = new_place("a");
        let ratings = [
            new_rating("1", "a", 3.0),
            new_rating("2", "a", 4.0),
            new_rating("3", "a", 5.0),
        ];
        assert_eq!(place.avg_rating(&ratings), 4.0.into());
    }

    #[test]
    fn average_without_ratings() {
        let place = new_place("b");
        assert_eq!(place.avg_rating(&[]), 0.0.into());
    }

    #[test]
    fn average_is_rounded_to_one_decimal() {
        let place = new_place("c");
        let ratings = [
            new_rating("1", "c", 5.0),
            new_rating("2", "c", 4.0),
            new_rating("3", "c", 4.0),
        ];
        assert_eq!(place.avg_rating(&ratings), 4.3.into());
    }
}
