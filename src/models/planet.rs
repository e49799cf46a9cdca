use diesel::prelude::*;

/// Planet model for reading from database. Habitability is stored as an
/// integer column (0 or 1); the service layer converts it to a boolean.
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::planets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub is_habitable: i32,
    pub image_id: i32,
}

/// NewPlanet model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::planets)]
pub struct NewPlanet {
    pub name: String,
    pub description: String,
    pub is_habitable: i32,
    pub image_id: i32,
}

/// UpdatePlanet model for full-field updates
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::planets)]
pub struct UpdatePlanet {
    pub name: String,
    pub description: String,
    pub is_habitable: i32,
    pub image_id: i32,
}

/// Planet columns selected when astronauts are joined to their origin planet.
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::planets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlanetSummary {
    pub name: String,
    pub is_habitable: i32,
    pub description: String,
}

/// Narrow projection used for the origin-planet check on astronaut
/// create/update.
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::planets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlanetRef {
    pub id: i32,
    pub is_habitable: i32,
}
