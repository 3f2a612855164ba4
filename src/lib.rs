//! SOLID Showcase
//!
//! Paired "bad" and "good" implementations of each SOLID design principle,
//! run on demand through a scenario registry and served as plain-text
//! narratives over HTTP.

pub mod config;
pub mod error;
pub mod narrative;
pub mod principles;
pub mod registry;
pub mod server;

pub use config::ShowcaseConfig;
pub use error::{ScenarioError, ScenarioResult, UnsupportedOperation};
pub use narrative::Narrative;
pub use registry::{Principle, Scenario, ScenarioKey, ScenarioRegistry, Variant};
