use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPlace {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub region: Region,
    pub image: Option<String>,
    pub position: MapPoint,
}

pub fn create_place<R: PlaceRepo>(repo: &R, p: NewPlace) -> Result<Place> {
    let name = p.name.trim();
    if name.is_empty() || name.len() > Place::max_name_len() {
        return Err(Error::Name);
    }
    if p.description.trim().is_empty() {
        return Err(Error::Description);
    }
    if !p.position.is_valid() {
        return Err(Error::InvalidPosition);
    }
    let place = Place {
        id: Id::new(),
        name: name.to_string(),
        description: p.description,
        category: p.category,
        region: p.region,
        image: p.image,
        position: Some(p.position),
    };
    repo.create_place(&place)?;
    Ok(place)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_place(name: &str, description: &str, lat: f64, lng: f64) -> NewPlace {
        NewPlace {
            name: name.into(),
            description: description.into(),
            category: Category::Mountains,
            region: Region::Svaneti,
            image: None,
            position: MapPoint::new(lat, lng),
        }
    }

    #[test]
    fn create_valid_place() {
        let db = MockDb::default();
        let place = create_place(&db, new_place("Ushba", "Twin peaks", 43.12, 42.66)).unwrap();
        assert_eq!(db.places.borrow().len(), 1);
        assert_eq!(place.name, "Ushba");
        assert!(place.position.unwrap().is_valid());
    }

    #[test]
    fn reject_empty_name() {
        let db = MockDb::default();
        assert!(matches!(
            create_place(&db, new_place("  ", "desc", 43.0, 42.0)),
            Err(Error::Name)
        ));
    }

    #[test]
    fn reject_empty_description() {
        let db = MockDb::default();
        assert!(matches!(
            create_place(&db, new_place("Ushba", "", 43.0, 42.0)),
            Err(Error::Description)
        ));
    }

    #[test]
    fn reject_position_off_the_map() {
        let db = MockDb::default();
        assert!(matches!(
            create_place(&db, new_place("Ushba", "desc", 91.0, 42.0)),
            Err(Error::InvalidPosition)
        ));
    }
}
