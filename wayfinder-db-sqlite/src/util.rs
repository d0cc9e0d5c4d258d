use num_traits::{FromPrimitive as _, ToPrimitive as _};

use wayfinder_core::{entities::*, repositories as repo};

use super::models;

impl From<models::UserEntity> for User {
    fn from(entity: models::UserEntity) -> Self {
        let models::UserEntity {
            rowid: _,
            id,
            username,
            email,
            password,
            role,
        } = entity;
        let role = Role::from_i16(role).unwrap_or_else(|| {
            // This should never happen
            log::warn!("Unknown role {role} of user {username}");
            Role::Guest
        });
        Self {
            id: id.into(),
            username,
            email: EmailAddress::new_unchecked(email),
            password: password.into(),
            role,
        }
    }
}

impl<'a> From<&'a User> for models::NewUser<'a> {
    fn from(user: &'a User) -> Self {
        let User {
            id,
            username,
            email,
            password,
            role,
        } = user;
        Self {
            id: id.as_str(),
            username: username.as_str(),
            email: email.as_str(),
            password: password.as_ref(),
            role: role.to_i16().unwrap_or_default(),
        }
    }
}

pub fn load_place(entity: models::PlaceEntity) -> Result<Place, repo::Error> {
    let models::PlaceEntity {
        rowid: _,
        id,
        name,
        description,
        category,
        region,
        image,
        lat,
        lng,
    } = entity;
    let category = category
        .parse::<Category>()
        .map_err(|err| repo::Error::Other(anyhow::anyhow!("Invalid category {category:?}: {err}")))?;
    let region = region
        .parse::<Region>()
        .map_err(|err| repo::Error::Other(anyhow::anyhow!("Invalid region {region:?}: {err}")))?;
    let position = match (lat, lng) {
        (Some(lat), Some(lng)) => Some(MapPoint { lat, lng }),
        _ => None,
    };
    Ok(Place {
        id: id.into(),
        name,
        description,
        category,
        region,
        image,
        position,
    })
}

impl<'a> From<&'a Place> for models::NewPlace<'a> {
    fn from(place: &'a Place) -> Self {
        let Place {
            id,
            name,
            description,
            category,
            region,
            image,
            position,
        } = place;
        Self {
            id: id.as_str(),
            name: name.as_str(),
            description: description.as_str(),
            category: category.to_string(),
            region: region.to_string(),
            image: image.as_deref(),
            lat: position.map(|p| p.lat),
            lng: position.map(|p| p.lng),
        }
    }
}

impl From<models::RatingEntity> for Rating {
    fn from(entity: models::RatingEntity) -> Self {
        let models::RatingEntity {
            rowid: _,
            id,
            user_id,
            place_id,
            stars,
            comment,
            image,
            created_at,
        } = entity;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            place_id: place_id.into(),
            stars: StarRating::from(stars).clamp(),
            comment,
            image,
            created_at: Timestamp::from_seconds(created_at),
        }
    }
}

impl<'a> From<&'a Rating> for models::NewRating<'a> {
    fn from(rating: &'a Rating) -> Self {
        let Rating {
            id,
            user_id,
            place_id,
            stars,
            comment,
            image,
            created_at,
        } = rating;
        Self {
            id: id.as_str(),
            user_id: user_id.as_str(),
            place_id: place_id.as_str(),
            stars: (*stars).into(),
            comment: comment.as_deref(),
            image: image.as_deref(),
            created_at: created_at.into_seconds(),
        }
    }
}

pub fn load_route(entity: models::PlannedRouteEntity) -> Result<PlannedRoute, repo::Error> {
    let models::PlannedRouteEntity {
        rowid: _,
        id,
        user_id,
        place_id,
        date,
    } = entity;
    let date = parse_date(&date)
        .map_err(|err| repo::Error::Other(anyhow::anyhow!("Invalid date {date:?}: {err}")))?;
    Ok(PlannedRoute {
        id: id.into(),
        user_id: user_id.into(),
        place_id: place_id.into(),
        date,
    })
}
