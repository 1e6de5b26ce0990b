// Domain layer (business logic)
pub mod domain;

pub use domain::platform;
pub use domain::template;

// Infrastructure
pub mod config;
pub mod error;
pub mod metrics;

// Application layer
pub mod api;
pub mod server;

// Supporting modules
pub mod telemetry;
