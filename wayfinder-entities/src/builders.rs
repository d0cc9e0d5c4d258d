pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{place_builder::*, rating_builder::*, user_builder::*};

pub mod place_builder {
    use super::Builder;
    use crate::{geo::MapPoint, place::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.place.description = desc.into();
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            self.place.category = category;
            self
        }
        pub fn region(mut self, region: Region) -> Self {
            self.place.region = region;
            self
        }
        pub fn image(mut self, image: Option<&str>) -> Self {
            self.place.image = image.map(Into::into);
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.position = Some(pos);
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> Self::Build {
            PlaceBuild {
                place: Place {
                    id: crate::id::Id::new(),
                    name: "".into(),
                    description: "".into(),
                    category: Category::Mountains,
                    region: Region::Tbilisi,
                    image: None,
                    position: None,
                },
            }
        }
    }
}

pub mod rating_builder {
    use super::Builder;
    use crate::{id::Id, rating::*, time::Timestamp};

    #[derive(Debug)]
    pub struct RatingBuild {
        rating: Rating,
    }

    impl RatingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.rating.id = id.into();
            self
        }
        pub fn place_id(mut self, place_id: &str) -> Self {
            self.rating.place_id = place_id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.rating.user_id = user_id.into();
            self
        }
        pub fn stars<F: Into<f64>>(mut self, stars: F) -> Self {
            self.rating.stars = StarRating::new(stars);
            self
        }
        pub fn comment(mut self, comment: Option<&str>) -> Self {
            self.rating.comment = comment.map(Into::into);
            self
        }
        pub fn finish(self) -> Rating {
            self.rating
        }
    }

    impl Builder for Rating {
        type Build = RatingBuild;
        fn build() -> Self::Build {
            RatingBuild {
                rating: Rating {
                    id: Id::new(),
                    place_id: Id::new(),
                    user_id: Id::new(),
                    stars: StarRating::min(),
                    comment: None,
                    image: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod user_builder {
    use super::Builder;
    use crate::{id::Id, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.user.username = username.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = email.parse().unwrap();
            self
        }
        pub fn password(mut self, password: &str) -> Self {
            self.user.password = password.parse().unwrap();
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            UserBuild {
                user: User {
                    id: Id::new(),
                    username: "anonymous".into(),
                    email: crate::email::EmailAddress::new_unchecked(
                        "anonymous@example.org".into(),
                    ),
                    password: "secret".parse().unwrap(),
                    role: Role::User,
                },
            }
        }
    }
}
