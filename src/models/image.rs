use diesel::prelude::*;
use serde::Serialize;

/// Image model for reading from database
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Image {
    pub id: i32,
    pub name: String,
    pub path: String,
}

/// NewImage model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::images)]
pub struct NewImage {
    pub name: String,
    pub path: String,
}

/// UpdateImage model for full-field updates; every column is rewritten,
/// there is no partial-merge semantics.
#[derive(Debug, AsChangeset, Clone)]
#[diesel(table_name = crate::schema::images)]
pub struct UpdateImage {
    pub name: String,
    pub path: String,
}

/// Narrow projection of an image used both in joined reads and for the
/// reference check on planet create/update.
///
/// Serializes as the nested `image` object of planet and astronaut reads.
#[derive(Debug, Queryable, Selectable, Serialize, utoipa::ToSchema, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ImageRef {
    pub path: String,
    pub name: String,
}
