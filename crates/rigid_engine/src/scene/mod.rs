//! Simulation scene
//!
//! A [`Scene`] owns every body and advances them together. Each
//! [`Scene::step`] runs, in order:
//!
//! ```text
//! gravity  → apply_force on every body with non-zero mass
//! integrate → linear (and optionally angular) motion for every body
//! collide  → every unordered pair with colliders: detect, then resolve
//! ```
//!
//! Pairs are visited in insertion order (`i < j`), so the order bodies are
//! added decides the order contacts are resolved in. There is no broad
//! phase: cost grows with the square of the body count.

mod physics_scene;
mod step_report;

pub use physics_scene::{BodyHandle, Scene};
pub use step_report::{PairFailure, StepReport};
