//! Domain layer modules
//!
//! - `template`: Campaign templates, variable substitution and the template store
//! - `platform`: Per-platform limits and content validation

pub mod platform;
pub mod template;
