use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

/// Idempotent flip of the favorite relation between a user and a place.
pub fn toggle_favorite<R>(repo: &R, user_id: &Id, place_id: &Id) -> Result<FavoriteToggle>
where
    R: PlaceRepo + FavoriteRepo,
{
    let place = repo.get_place(place_id)?;
    if repo.is_favorite(user_id, &place.id)? {
        repo.remove_favorite(user_id, &place.id)?;
        Ok(FavoriteToggle::Removed)
    } else {
        repo.add_favorite(user_id, &place.id)?;
        Ok(FavoriteToggle::Added)
    }
}
