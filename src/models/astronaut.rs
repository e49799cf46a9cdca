use diesel::prelude::*;

/// Astronaut model for reading from database
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::astronauts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Astronaut {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub origin_planet_id: i32,
}

/// NewAstronaut model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::astronauts)]
pub struct NewAstronaut {
    pub firstname: String,
    pub lastname: String,
    pub origin_planet_id: i32,
}

/// UpdateAstronaut model for full-field updates
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::astronauts)]
pub struct UpdateAstronaut {
    pub firstname: String,
    pub lastname: String,
    pub origin_planet_id: i32,
}
