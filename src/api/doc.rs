use utoipa::OpenApi;

pub const IMAGE_TAG: &str = "Images";
pub const PLANET_TAG: &str = "Planets";
pub const ASTRONAUT_TAG: &str = "Astronauts";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spaceport",
        description = "An api server for astronauts, planets and their images",
    ),
    paths(
        crate::api::handlers::images::list_images,
        crate::api::handlers::images::get_image,
        crate::api::handlers::images::create_image,
        crate::api::handlers::images::update_image,
        crate::api::handlers::images::delete_image,
        crate::api::handlers::planets::list_planets,
        crate::api::handlers::planets::get_planet,
        crate::api::handlers::planets::create_planet,
        crate::api::handlers::planets::update_planet,
        crate::api::handlers::planets::delete_planet,
        crate::api::handlers::astronauts::list_astronauts,
        crate::api::handlers::astronauts::get_astronaut,
        crate::api::handlers::astronauts::create_astronaut,
        crate::api::handlers::astronauts::update_astronaut,
        crate::api::handlers::astronauts::delete_astronaut,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::MessageResponse,
            crate::models::ImageRef,
            crate::services::PlanetView,
            crate::services::AstronautView,
            crate::services::OriginPlanetView,
        )
    ),
    tags(
        (name = IMAGE_TAG, description = "Image management endpoints"),
        (name = PLANET_TAG, description = "Planet management endpoints"),
        (name = ASTRONAUT_TAG, description = "Astronaut management endpoints"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
