//! Shared domain types for funnelscope.
//!
//! Holds the static funnel stage registry, persona and content models, and
//! application configuration. Nothing here performs analysis; see
//! `funnelscope-analysis` for the scoring engine.

pub mod app_config;
pub mod config;
pub mod content;
pub mod error;
pub mod keys;
pub mod personas;
pub mod stages;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use content::{AssetType, Heading};
pub use error::{ConfigError, CoreError};
pub use keys::ApiKeys;
pub use personas::{load_personas_file, NewPersona, Persona};
pub use stages::{FunnelStage, FunnelStageDefinition, STAGE_DEFINITIONS};
