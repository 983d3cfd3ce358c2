//! Shapelab core data model
//!
//! Shape records, light records, the parameter-panel snapshot and the scene
//! store shared by the renderer and the frontend. This crate has no GPU or UI
//! dependency so the editing logic can be tested in isolation.

mod params;
mod shape;
mod store;

pub use params::ShapeParams;
pub use shape::{GeometryKind, LightKind, LightRecord, ShapeRecord};
pub use store::SceneStore;
