use super::*;

impl<'a> FavoriteRepo for DbReadOnly<'a> {
    fn add_favorite(&self, _user_id: &Id, _place_id: &Id) -> Result<()> {
        unreachable!();
    }
    fn remove_favorite(&self, _user_id: &Id, _place_id: &Id) -> Result<()> {
        unreachable!();
    }

    fn favorite_place_ids(&self, user_id: &Id) -> Result<Vec<Id>> {
        favorite_place_ids(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FavoriteRepo for DbReadWrite<'a> {
    fn add_favorite(&self, user_id: &Id, place_id: &Id) -> Result<()> {
        add_favorite(&mut self.conn.borrow_mut(), user_id, place_id)
    }
    fn remove_favorite(&self, user_id: &Id, place_id: &Id) -> Result<()> {
        remove_favorite(&mut self.conn.borrow_mut(), user_id, place_id)
    }

    fn favorite_place_ids(&self, user_id: &Id) -> Result<Vec<Id>> {
        favorite_place_ids(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FavoriteRepo for DbConnection<'a> {
    fn add_favorite(&self, user_id: &Id, place_id: &Id) -> Result<()> {
        add_favorite(&mut self.conn.borrow_mut(), user_id, place_id)
    }
    fn remove_favorite(&self, user_id: &Id, place_id: &Id) -> Result<()> {
        remove_favorite(&mut self.conn.borrow_mut(), user_id, place_id)
    }

    fn favorite_place_ids(&self, user_id: &Id) -> Result<Vec<Id>> {
        favorite_place_ids(&mut self.conn.borrow_mut(), user_id)
    }
}

fn add_favorite(conn: &mut SqliteConnection, user_id: &Id, place_id: &Id) -> Result<()> {
    let row = models::FavoriteRow {
        user_id: user_id.to_string(),
        place_id: place_id.to_string(),
    };
    diesel::insert_into(schema::favorites::table)
        .values(&row)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn remove_favorite(conn: &mut SqliteConnection, user_id: &Id, place_id: &Id) -> Result<()> {
    use schema::favorites::dsl;
    let cnt = diesel::delete(
        dsl::favorites
            .filter(dsl::user_id.eq(user_id.as_str()))
            .filter(dsl::place_id.eq(place_id.as_str())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if cnt == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn favorite_place_ids(conn: &mut SqliteConnection, user_id: &Id) -> Result<Vec<Id>> {
    use schema::favorites::dsl;
    Ok(dsl::favorites
        .filter(dsl::user_id.eq(user_id.as_str()))
        .select(dsl::place_id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
