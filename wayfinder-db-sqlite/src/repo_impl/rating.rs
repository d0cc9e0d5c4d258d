use super::*;

impl<'a> RatingRepo for DbReadOnly<'a> {
    fn create_rating(&self, _rating: &Rating) -> Result<()> {
        unreachable!();
    }
    fn delete_rating(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_rating(&self, id: &Id) -> Result<Rating> {
        get_rating(&mut self.conn.borrow_mut(), id)
    }
    fn ratings_of_place(&self, place_id: &Id) -> Result<Vec<Rating>> {
        ratings_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

impl<'a> RatingRepo for DbReadWrite<'a> {
    fn create_rating(&self, rating: &Rating) -> Result<()> {
        create_rating(&mut self.conn.borrow_mut(), rating)
    }
    fn delete_rating(&self, id: &Id) -> Result<()> {
        delete_rating(&mut self.conn.borrow_mut(), id)
    }

    fn get_rating(&self, id: &Id) -> Result<Rating> {
        get_rating(&mut self.conn.borrow_mut(), id)
    }
    fn ratings_of_place(&self, place_id: &Id) -> Result<Vec<Rating>> {
        ratings_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

impl<'a> RatingRepo for DbConnection<'a> {
    fn create_rating(&self, rating: &Rating) -> Result<()> {
        create_rating(&mut self.conn.borrow_mut(), rating)
    }
    fn delete_rating(&self, id: &Id) -> Result<()> {
        delete_rating(&mut self.conn.borrow_mut(), id)
    }

    fn get_rating(&self, id: &Id) -> Result<Rating> {
        get_rating(&mut self.conn.borrow_mut(), id)
    }
    fn ratings_of_place(&self, place_id: &Id) -> Result<Vec<Rating>> {
        ratings_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

fn create_rating(conn: &mut SqliteConnection, r: &Rating) -> Result<()> {
    let new_rating = models::NewRating::from(r);
    diesel::insert_into(schema::ratings::table)
        .values(&new_rating)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_rating(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::ratings::dsl;
    let cnt = diesel::delete(dsl::ratings.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if cnt == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_rating(conn: &mut SqliteConnection, id: &Id) -> Result<Rating> {
    use schema::ratings::dsl;
    Ok(dsl::ratings
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::RatingEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn ratings_of_place(conn: &mut SqliteConnection, place_id: &Id) -> Result<Vec<Rating>> {
    use schema::ratings::dsl;
    Ok(dsl::ratings
        .filter(dsl::place_id.eq(place_id.as_str()))
        .order(dsl::created_at.desc())
        .load::<models::RatingEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
