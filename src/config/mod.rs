mod settings;

pub use settings::{
    ApiConfig, CatalogConfig, LogFormat, LoggingConfig, ServerConfig, Settings,
};
