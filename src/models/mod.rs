mod astronaut;
mod image;
mod planet;

pub use astronaut::{Astronaut, NewAstronaut, UpdateAstronaut};
pub use image::{Image, ImageRef, NewImage, UpdateImage};
pub use planet::{NewPlanet, Planet, PlanetRef, PlanetSummary, UpdatePlanet};
