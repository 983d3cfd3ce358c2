//! Shapelab Frontend
//!
//! egui-based application for placing and editing primitive shapes.

mod app;
mod app_state;
mod config;
mod gizmo_interaction;
mod panels;
mod picking;
mod viewport_state;

pub use app::ShapeLabApp;
