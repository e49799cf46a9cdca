//! HTTP surface tests.
//!
//! Each test drives the real router through tower's `oneshot` with the
//! services wired to in-memory stores, so status codes, bodies and headers
//! are checked exactly as a client would see them. The database pool in the
//! state is never connected; only the readiness probe would touch it and
//! these tests stay away from that route.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::Pool;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use spaceport::AppState;
use spaceport::api::routes::create_router;
use spaceport::db::AsyncDbPool;
use spaceport::error::AppResult;
use spaceport::models::{
    Astronaut, Image, ImageRef, NewAstronaut, NewImage, NewPlanet, Planet, PlanetRef,
    PlanetSummary, UpdateAstronaut, UpdateImage, UpdatePlanet,
};
use spaceport::repositories::{AstronautRow, AstronautStore, ImageStore, PlanetStore};
use spaceport::services::{AstronautService, ImageService, PlanetService, Services};

/// Backing data shared by the three in-memory stores.
#[derive(Default)]
struct World {
    images: Mutex<Vec<Image>>,
    planets: Mutex<Vec<Planet>>,
    astronauts: Mutex<Vec<Astronaut>>,
}

impl World {
    fn image_ref(&self, image_id: i32) -> Option<ImageRef> {
        self.images
            .lock()
            .unwrap()
            .iter()
            .find(|image| image.id == image_id)
            .map(|image| ImageRef {
                path: image.path.clone(),
                name: image.name.clone(),
            })
    }

    fn joined_planet(&self, planet: &Planet) -> Option<(Planet, ImageRef)> {
        self.image_ref(planet.image_id)
            .map(|image| (planet.clone(), image))
    }

    fn joined_astronaut(&self, astronaut: &Astronaut) -> Option<AstronautRow> {
        let planets = self.planets.lock().unwrap();
        let planet = planets
            .iter()
            .find(|planet| planet.id == astronaut.origin_planet_id)?;
        let image = self.image_ref(planet.image_id)?;
        Some((
            astronaut.clone(),
            PlanetSummary {
                name: planet.name.clone(),
                is_habitable: planet.is_habitable,
                description: planet.description.clone(),
            },
            image,
        ))
    }
}

struct InMemoryImages(Arc<World>);

#[async_trait]
impl ImageStore for InMemoryImages {
    async fn create(&self, new_image: NewImage) -> AppResult<Image> {
        let mut images = self.0.images.lock().unwrap();
        let id = images.iter().map(|image| image.id).max().unwrap_or(0) + 1;
        let image = Image {
            id,
            name: new_image.name,
            path: new_image.path,
        };
        images.push(image.clone());
        Ok(image)
    }

    async fn find_by_id(&self, image_id: i32) -> AppResult<Option<Image>> {
        Ok(self
            .0
            .images
            .lock()
            .unwrap()
            .iter()
            .find(|image| image.id == image_id)
            .cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Image>> {
        Ok(self.0.images.lock().unwrap().clone())
    }

    async fn update(&self, image_id: i32, update_data: UpdateImage) -> AppResult<usize> {
        let mut images = self.0.images.lock().unwrap();
        match images.iter_mut().find(|image| image.id == image_id) {
            Some(image) => {
                image.name = update_data.name;
                image.path = update_data.path;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, image_id: i32) -> AppResult<usize> {
        let mut images = self.0.images.lock().unwrap();
        let before = images.len();
        images.retain(|image| image.id != image_id);
        Ok(before - images.len())
    }
}

struct InMemoryPlanets(Arc<World>);

#[async_trait]
impl PlanetStore for InMemoryPlanets {
    async fn create(&self, new_planet: NewPlanet) -> AppResult<Planet> {
        let mut planets = self.0.planets.lock().unwrap();
        let id = planets.iter().map(|planet| planet.id).max().unwrap_or(0) + 1;
        let planet = Planet {
            id,
            name: new_planet.name,
            description: new_planet.description,
            is_habitable: new_planet.is_habitable,
            image_id: new_planet.image_id,
        };
        planets.push(planet.clone());
        Ok(planet)
    }

    async fn find_by_id(&self, planet_id: i32) -> AppResult<Option<(Planet, ImageRef)>> {
        let planets = self.0.planets.lock().unwrap();
        Ok(planets
            .iter()
            .find(|planet| planet.id == planet_id)
            .and_then(|planet| self.0.joined_planet(planet)))
    }

    async fn list(&self, name_filter: Option<&str>) -> AppResult<Vec<(Planet, ImageRef)>> {
        let planets = self.0.planets.lock().unwrap();
        Ok(planets
            .iter()
            .filter(|planet| match name_filter {
                Some(term) => planet
                    .name
                    .to_lowercase()
                    .contains(&term.to_lowercase()),
                None => true,
            })
            .filter_map(|planet| self.0.joined_planet(planet))
            .collect())
    }

    async fn update(&self, planet_id: i32, update_data: UpdatePlanet) -> AppResult<usize> {
        let mut planets = self.0.planets.lock().unwrap();
        match planets.iter_mut().find(|planet| planet.id == planet_id) {
            Some(planet) => {
                planet.name = update_data.name;
                planet.description = update_data.description;
                planet.is_habitable = update_data.is_habitable;
                planet.image_id = update_data.image_id;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, planet_id: i32) -> AppResult<usize> {
        let mut planets = self.0.planets.lock().unwrap();
        let before = planets.len();
        planets.retain(|planet| planet.id != planet_id);
        Ok(before - planets.len())
    }

    async fn find_image_ref(&self, image_id: i32) -> AppResult<Option<ImageRef>> {
        Ok(self.0.image_ref(image_id))
    }
}

struct InMemoryAstronauts(Arc<World>);

#[async_trait]
impl AstronautStore for InMemoryAstronauts {
    async fn create(&self, new_astronaut: NewAstronaut) -> AppResult<Astronaut> {
        let mut astronauts = self.0.astronauts.lock().unwrap();
        let id = astronauts
            .iter()
            .map(|astronaut| astronaut.id)
            .max()
            .unwrap_or(0)
            + 1;
        let astronaut = Astronaut {
            id,
            firstname: new_astronaut.firstname,
            lastname: new_astronaut.lastname,
            origin_planet_id: new_astronaut.origin_planet_id,
        };
        astronauts.push(astronaut.clone());
        Ok(astronaut)
    }

    async fn find_by_id(&self, astronaut_id: i32) -> AppResult<Option<AstronautRow>> {
        let astronauts = self.0.astronauts.lock().unwrap();
        Ok(astronauts
            .iter()
            .find(|astronaut| astronaut.id == astronaut_id)
            .and_then(|astronaut| self.0.joined_astronaut(astronaut)))
    }

    async fn list_all(&self) -> AppResult<Vec<AstronautRow>> {
        let astronauts = self.0.astronauts.lock().unwrap();
        Ok(astronauts
            .iter()
            .filter_map(|astronaut| self.0.joined_astronaut(astronaut))
            .collect())
    }

    async fn update(&self, astronaut_id: i32, update_data: UpdateAstronaut) -> AppResult<usize> {
        let mut astronauts = self.0.astronauts.lock().unwrap();
        match astronauts
            .iter_mut()
            .find(|astronaut| astronaut.id == astronaut_id)
        {
            Some(astronaut) => {
                astronaut.firstname = update_data.firstname;
                astronaut.lastname = update_data.lastname;
                astronaut.origin_planet_id = update_data.origin_planet_id;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, astronaut_id: i32) -> AppResult<usize> {
        let mut astronauts = self.0.astronauts.lock().unwrap();
        let before = astronauts.len();
        astronauts.retain(|astronaut| astronaut.id != astronaut_id);
        Ok(before - astronauts.len())
    }

    async fn find_planet_ref(&self, planet_id: i32) -> AppResult<Option<PlanetRef>> {
        Ok(self
            .0
            .planets
            .lock()
            .unwrap()
            .iter()
            .find(|planet| planet.id == planet_id)
            .map(|planet| PlanetRef {
                id: planet.id,
                is_habitable: planet.is_habitable,
            }))
    }
}

/// Pool that is never connected. Built without touching the network.
fn unconnected_pool() -> AsyncDbPool {
    let manager =
        AsyncDieselConnectionManager::<AsyncPgConnection>::new("postgres://localhost:1/unused");
    Pool::builder().build_unchecked(manager)
}

fn test_app(world: Arc<World>) -> Router {
    let services = Services {
        images: ImageService::new(Arc::new(InMemoryImages(world.clone()))),
        planets: PlanetService::new(Arc::new(InMemoryPlanets(world.clone()))),
        astronauts: AstronautService::new(Arc::new(InMemoryAstronauts(world))),
    };
    create_router(AppState {
        services,
        db_pool: unconnected_pool(),
    })
}

/// Two images, Earth (habitable) and Mars (not), one astronaut on Earth.
fn seeded_world() -> Arc<World> {
    let world = Arc::new(World::default());
    world.images.lock().unwrap().extend([
        Image {
            id: 1,
            name: "Earth Image".into(),
            path: "/assets/earth.png".into(),
        },
        Image {
            id: 2,
            name: "Mars Image".into(),
            path: "/assets/mars.png".into(),
        },
    ]);
    world.planets.lock().unwrap().extend([
        Planet {
            id: 1,
            name: "Earth".into(),
            description: "Blue Planet".into(),
            is_habitable: 1,
            image_id: 1,
        },
        Planet {
            id: 2,
            name: "Mars".into(),
            description: "Red Planet".into(),
            is_habitable: 0,
            image_id: 2,
        },
    ]);
    world.astronauts.lock().unwrap().push(Astronaut {
        id: 1,
        firstname: "Neil".into(),
        lastname: "Armstrong".into(),
        origin_planet_id: 1,
    });
    world
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_list_images_returns_seeded_rows() {
    let app = test_app(seeded_world());

    let (status, body) = get(&app, "/images").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Earth Image", "path": "/assets/earth.png" },
            { "id": 2, "name": "Mars Image", "path": "/assets/mars.png" },
        ])
    );
}

#[tokio::test]
async fn test_image_crud_round_trip() {
    let app = test_app(seeded_world());

    let (status, body) = post_json(
        &app,
        "/images",
        json!({ "name": "Jupiter Image", "path": "/assets/jupiter.png" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "id": 3, "name": "Jupiter Image", "path": "/assets/jupiter.png" })
    );

    let (status, body) = put_json(
        &app,
        "/images/3",
        json!({ "name": "Io Image", "path": "/assets/io.png" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Image updated successfully" }));

    let (status, body) = get(&app, "/images/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": 3, "name": "Io Image", "path": "/assets/io.png" })
    );

    let (status, body) = delete(&app, "/images/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Image deleted successfully" }));

    let (status, body) = get(&app, "/images/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Image not found" }));
}

#[tokio::test]
async fn test_missing_image_returns_404_on_every_verb() {
    let app = test_app(seeded_world());
    let expected = json!({ "error": "Image not found" });

    let (status, body) = get(&app, "/images/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);

    let (status, body) = put_json(
        &app,
        "/images/999",
        json!({ "name": "x", "path": "/x.png" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);

    let (status, body) = delete(&app, "/images/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_create_planet_echoes_flat_shape() {
    let app = test_app(seeded_world());

    let (status, body) = post_json(
        &app,
        "/planets",
        json!({
            "name": "Jupiter",
            "description": "Gas Giant",
            "isHabitable": false,
            "imageId": 2,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 3,
            "name": "Jupiter",
            "description": "Gas Giant",
            "isHabitable": false,
            "imageId": 2,
        })
    );
}

#[tokio::test]
async fn test_create_planet_with_unknown_image_returns_404() {
    let app = test_app(seeded_world());

    let (status, body) = post_json(
        &app,
        "/planets",
        json!({
            "name": "Jupiter",
            "description": "Gas Giant",
            "isHabitable": false,
            "imageId": 999,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Image not found" }));
}

#[tokio::test]
async fn test_get_planet_nests_its_image() {
    let app = test_app(seeded_world());

    let (status, body) = get(&app, "/planets/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Earth",
            "isHabitable": true,
            "description": "Blue Planet",
            "image": { "path": "/assets/earth.png", "name": "Earth Image" },
        })
    );
}

#[tokio::test]
async fn test_list_planets_filters_by_name() {
    let app = test_app(seeded_world());

    // Case-insensitive substring match.
    let (status, body) = get(&app, "/planets?name=ear").await;
    assert_eq!(status, StatusCode::OK);
    let planets = body.as_array().unwrap();
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0]["name"], "Earth");

    let (status, body) = get(&app, "/planets?name=nowhere").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_list_planets_treats_empty_filter_as_absent() {
    let app = test_app(seeded_world());

    let (status, body) = get(&app, "/planets?name=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_planet_checks_image_before_target() {
    let app = test_app(seeded_world());
    let payload = json!({
        "name": "Nowhere",
        "description": "Void",
        "isHabitable": false,
        "imageId": 999,
    });

    // Both the planet and the image are missing; the image wins.
    let (status, body) = put_json(&app, "/planets/999", payload).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Image not found" }));

    let payload = json!({
        "name": "Nowhere",
        "description": "Void",
        "isHabitable": false,
        "imageId": 1,
    });
    let (status, body) = put_json(&app, "/planets/999", payload).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Planet not found" }));
}

#[tokio::test]
async fn test_delete_planet_twice_returns_404_second_time() {
    let app = test_app(seeded_world());

    let (status, body) = delete(&app, "/planets/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Planet deleted successfully" }));

    let (status, body) = delete(&app, "/planets/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Planet not found" }));
}

#[tokio::test]
async fn test_delete_referenced_image_leaves_planet_dangling() {
    // No storage-level constraints: the delete succeeds and the planet
    // keeps its stale imageId, so it drops out of joined reads.
    let app = test_app(seeded_world());

    let (status, body) = delete(&app, "/images/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Image deleted successfully" }));

    let (status, body) = get(&app, "/planets").await;
    assert_eq!(status, StatusCode::OK);
    let planets = body.as_array().unwrap();
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0]["name"], "Earth");

    let (status, body) = get(&app, "/planets/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Planet not found" }));
}

#[tokio::test]
async fn test_get_astronaut_nests_origin_planet_and_image() {
    let app = test_app(seeded_world());

    let (status, body) = get(&app, "/astronauts/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "firstname": "Neil",
            "lastname": "Armstrong",
            "originPlanet": {
                "name": "Earth",
                "isHabitable": true,
                "description": "Blue Planet",
                "image": { "path": "/assets/earth.png", "name": "Earth Image" },
            },
        })
    );
}

#[tokio::test]
async fn test_list_astronauts_returns_nested_rows() {
    let app = test_app(seeded_world());

    let (status, body) = get(&app, "/astronauts").await;

    assert_eq!(status, StatusCode::OK);
    let astronauts = body.as_array().unwrap();
    assert_eq!(astronauts.len(), 1);
    assert_eq!(astronauts[0]["firstname"], "Neil");
    assert_eq!(astronauts[0]["originPlanet"]["name"], "Earth");
}

#[tokio::test]
async fn test_create_astronaut_echoes_flat_shape() {
    let app = test_app(seeded_world());

    let (status, body) = post_json(
        &app,
        "/astronauts",
        json!({ "firstname": "Sally", "lastname": "Ride", "originPlanetId": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "id": 2, "firstname": "Sally", "lastname": "Ride", "originPlanetId": 1 })
    );
}

#[tokio::test]
async fn test_create_astronaut_with_missing_fields_returns_400() {
    let app = test_app(seeded_world());

    let (status, body) = post_json(&app, "/astronauts", json!({ "firstname": "John" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required fields" }));
}

#[tokio::test]
async fn test_create_astronaut_with_empty_name_returns_400() {
    let app = test_app(seeded_world());

    let (status, body) = post_json(
        &app,
        "/astronauts",
        json!({ "firstname": "", "lastname": "Ride", "originPlanetId": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required fields" }));
}

#[tokio::test]
async fn test_create_astronaut_on_unknown_planet_returns_404() {
    let app = test_app(seeded_world());

    let (status, body) = post_json(
        &app,
        "/astronauts",
        json!({ "firstname": "Sally", "lastname": "Ride", "originPlanetId": 999 }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Origin planet not found" }));
}

#[tokio::test]
async fn test_create_astronaut_on_uninhabitable_planet_returns_400() {
    let app = test_app(seeded_world());

    // Planet 2 is Mars, not habitable.
    let (status, body) = post_json(
        &app,
        "/astronauts",
        json!({ "firstname": "Sally", "lastname": "Ride", "originPlanetId": 2 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Astronauts can only be associated with habitable planets" })
    );
}

#[tokio::test]
async fn test_update_astronaut_checks_planet_before_target() {
    let app = test_app(seeded_world());

    // The astronaut is missing but the origin planet is rejected first.
    let (status, body) = put_json(
        &app,
        "/astronauts/999",
        json!({ "firstname": "Sally", "lastname": "Ride", "originPlanetId": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Astronauts can only be associated with habitable planets" })
    );

    let (status, body) = put_json(
        &app,
        "/astronauts/999",
        json!({ "firstname": "Sally", "lastname": "Ride", "originPlanetId": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Astronaut not found" }));
}

#[tokio::test]
async fn test_update_astronaut_acknowledges_with_message() {
    let app = test_app(seeded_world());

    let (status, body) = put_json(
        &app,
        "/astronauts/1",
        json!({ "firstname": "Updated Neil", "lastname": "Armstrong", "originPlanetId": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Astronaut updated successfully" }));

    let (_, body) = get(&app, "/astronauts/1").await;
    assert_eq!(body["firstname"], "Updated Neil");
}

#[tokio::test]
async fn test_delete_astronaut_then_404() {
    let app = test_app(seeded_world());

    let (status, body) = delete(&app, "/astronauts/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Astronaut deleted successfully" }));

    let (status, body) = delete(&app, "/astronauts/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Astronaut not found" }));
}

#[tokio::test]
async fn test_responses_carry_request_id_header() {
    let app = test_app(seeded_world());

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/images").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app(seeded_world());

    let (status, body) = get(&app, "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Spaceport");
    assert!(body["paths"]["/astronauts"].is_object());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = test_app(seeded_world());

    let (status, _) = get(&app, "/comets").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
