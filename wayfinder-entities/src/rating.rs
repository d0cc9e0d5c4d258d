use crate::{id::Id, time::Timestamp};

/// A single star score on the 0–5 scale.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct StarRating(f64);

impl StarRating {
    pub fn new<F: Into<f64>>(val: F) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(0.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<f64> for StarRating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<StarRating> for f64 {
    fn from(from: StarRating) -> Self {
        from.0
    }
}

/// The derived mean of all star scores of a place,
/// rounded to one decimal. Never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRating(f64);

impl AvgRating {
    pub fn is_valid(self) -> bool {
        self >= StarRating::min().into() && self <= StarRating::max().into()
    }
}

impl From<f64> for AvgRating {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRating> for f64 {
    fn from(from: AvgRating) -> Self {
        from.0
    }
}

impl From<StarRating> for AvgRating {
    fn from(from: StarRating) -> Self {
        Self(from.0)
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingBuilder {
    acc: f64,
    cnt: usize,
}

impl AvgRatingBuilder {
    fn add(&mut self, val: StarRating) {
        debug_assert!(val.is_valid());
        self.acc += f64::from(val);
        self.cnt += 1;
    }

    pub fn build(self) -> AvgRating {
        if self.cnt > 0 {
            AvgRating(((self.acc / self.cnt as f64) * 10.0).round() / 10.0)
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<StarRating> for AvgRatingBuilder {
    fn add_assign(&mut self, rhs: StarRating) {
        self.add(rhs);
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id         : Id,
    pub place_id   : Id,
    pub user_id    : Id,
    pub stars      : StarRating,
    pub comment    : Option<String>,
    pub image      : Option<String>,
    pub created_at : Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_rating_bounds() {
        assert!(StarRating::from(0.0).is_valid());
        assert!(StarRating::from(5.0).is_valid());
        assert!(!StarRating::from(5.1).is_valid());
        assert!(!StarRating::from(-0.5).is_valid());
        assert_eq!(StarRating::from(7.0).clamp(), StarRating::max());
    }

    #[test]
    fn avg_rounds_to_one_decimal() {
        let mut builder = AvgRatingBuilder::default();
        builder += StarRating::new(5.0);
        builder += StarRating::new(4.0);
        builder += StarRating::new(4.0);
        assert_eq!(builder.build(), AvgRating::from(4.3));
    }

    #[test]
    fn avg_of_nothing_is_zero() {
        assert_eq!(AvgRatingBuilder::default().build(), AvgRating::from(0.0));
    }
}
