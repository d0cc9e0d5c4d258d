use super::*;

impl<'a> PlaceRepo for DbReadOnly<'a> {
    fn create_place(&self, _place: &Place) -> Result<()> {
        unreachable!();
    }
    fn delete_place(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_place(&self, id: &Id) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_place_by_name(&self, name: &str) -> Result<Option<Place>> {
        try_get_place_by_name(&mut self.conn.borrow_mut(), name)
    }

    fn all_places(&self) -> Result<Vec<Place>> {
        all_places(&mut self.conn.borrow_mut())
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
}

impl<'a> PlaceRepo for DbReadWrite<'a> {
    fn create_place(&self, place: &Place) -> Result<()> {
        create_place(&mut self.conn.borrow_mut(), place)
    }
    fn delete_place(&self, id: &Id) -> Result<()> {
        delete_place(&mut self.conn.borrow_mut(), id)
    }

    fn get_place(&self, id: &Id) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_place_by_name(&self, name: &str) -> Result<Option<Place>> {
        try_get_place_by_name(&mut self.conn.borrow_mut(), name)
    }

    fn all_places(&self) -> Result<Vec<Place>> {
        all_places(&mut self.conn.borrow_mut())
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
}

impl<'a> PlaceRepo for DbConnection<'a> {
    fn create_place(&self, place: &Place) -> Result<()> {
        create_place(&mut self.conn.borrow_mut(), place)
    }
    fn delete_place(&self, id: &Id) -> Result<()> {
        delete_place(&mut self.conn.borrow_mut(), id)
    }

    fn get_place(&self, id: &Id) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_place_by_name(&self, name: &str) -> Result<Option<Place>> {
        try_get_place_by_name(&mut self.conn.borrow_mut(), name)
    }

    fn all_places(&self) -> Result<Vec<Place>> {
        all_places(&mut self.conn.borrow_mut())
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
}

fn create_place(conn: &mut SqliteConnection, p: &Place) -> Result<()> {
    let new_place = models::NewPlace::from(p);
    diesel::insert_into(schema::places::table)
        .values(&new_place)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

// Ratings, favorites and planned routes of the place are
// removed by cascading deletes.
fn delete_place(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::places::dsl;
    let cnt = diesel::delete(dsl::places.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if cnt == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_place(conn: &mut SqliteConnection, id: &Id) -> Result<Place> {
    use schema::places::dsl;
    let entity = dsl::places
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?;
    util::load_place(entity)
}

fn try_get_place_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<Place>> {
    use schema::places::dsl;
    dsl::places
        .filter(dsl::name.eq(name))
        .first::<models::PlaceEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(util::load_place)
        .transpose()
}

fn all_places(conn: &mut SqliteConnection) -> Result<Vec<Place>> {
    use schema::places::dsl;
    dsl::places
        .load::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(util::load_place)
        .collect()
}

fn count_places(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::places::dsl;
    Ok(dsl::places
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
