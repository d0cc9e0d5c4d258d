use super::*;

impl<'a> RouteRepo for DbReadOnly<'a> {
    fn create_route(&self, _route: &PlannedRoute) -> Result<()> {
        unreachable!();
    }
    fn delete_route(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_route(&self, id: &Id) -> Result<PlannedRoute> {
        get_route(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_route_for_place(
        &self,
        user_id: &Id,
        place_id: &Id,
    ) -> Result<Option<PlannedRoute>> {
        try_get_route_for_place(&mut self.conn.borrow_mut(), user_id, place_id)
    }

    fn routes_of_user(&self, user_id: &Id) -> Result<Vec<PlannedRoute>> {
        routes_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> RouteRepo for DbReadWrite<'a> {
    fn create_route(&self, route: &PlannedRoute) -> Result<()> {
        create_route(&mut self.conn.borrow_mut(), route)
    }
    fn delete_route(&self, id: &Id) -> Result<()> {
        delete_route(&mut self.conn.borrow_mut(), id)
    }

    fn get_route(&self, id: &Id) -> Result<PlannedRoute> {
        get_route(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_route_for_place(
        &self,
        user_id: &Id,
        place_id: &Id,
    ) -> Result<Option<PlannedRoute>> {
        try_get_route_for_place(&mut self.conn.borrow_mut(), user_id, place_id)
    }

    fn routes_of_user(&self, user_id: &Id) -> Result<Vec<PlannedRoute>> {
        routes_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> RouteRepo for DbConnection<'a> {
    fn create_route(&self, route: &PlannedRoute) -> Result<()> {
        create_route(&mut self.conn.borrow_mut(), route)
    }
    fn delete_route(&self, id: &Id) -> Result<()> {
        delete_route(&mut self.conn.borrow_mut(), id)
    }

    fn get_route(&self, id: &Id) -> Result<PlannedRoute> {
        get_route(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_route_for_place(
        &self,
        user_id: &Id,
        place_id: &Id,
    ) -> Result<Option<PlannedRoute>> {
        try_get_route_for_place(&mut self.conn.borrow_mut(), user_id, place_id)
    }

    fn routes_of_user(&self, user_id: &Id) -> Result<Vec<PlannedRoute>> {
        routes_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn create_route(conn: &mut SqliteConnection, r: &PlannedRoute) -> Result<()> {
    let date = format_date(r.date);
    let new_route = models::NewPlannedRoute {
        id: r.id.as_str(),
        user_id: r.user_id.as_str(),
        place_id: r.place_id.as_str(),
        date,
    };
    diesel::insert_into(schema::planned_routes::table)
        .values(&new_route)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_route(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::planned_routes::dsl;
    let cnt = diesel::delete(dsl::planned_routes.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if cnt == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_route(conn: &mut SqliteConnection, id: &Id) -> Result<PlannedRoute> {
    use schema::planned_routes::dsl;
    let entity = dsl::planned_routes
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::PlannedRouteEntity>(conn)
        .map_err(from_diesel_err)?;
    util::load_route(entity)
}

fn try_get_route_for_place(
    conn: &mut SqliteConnection,
    user_id: &Id,
    place_id: &Id,
) -> Result<Option<PlannedRoute>> {
    use schema::planned_routes::dsl;
    dsl::planned_routes
        .filter(dsl::user_id.eq(user_id.as_str()))
        .filter(dsl::place_id.eq(place_id.as_str()))
        .first::<models::PlannedRouteEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(util::load_route)
        .transpose()
}

fn routes_of_user(conn: &mut SqliteConnection, user_id: &Id) -> Result<Vec<PlannedRoute>> {
    use schema::planned_routes::dsl;
    dsl::planned_routes
        .filter(dsl::user_id.eq(user_id.as_str()))
        .order(dsl::date.asc())
        .load::<models::PlannedRouteEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(util::load_route)
        .collect()
}
