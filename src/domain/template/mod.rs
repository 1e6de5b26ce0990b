//! Marketing campaign templates.
//!
//! This module provides:
//! - Template definitions with per-platform copy and `{{variable}}` placeholders
//! - Variable substitution, placeholder previews and required-variable checks
//! - Typed checks for supplied variable values
//! - A built-in template catalog and in-memory template storage
//!
//! # Example
//!
//! ```ignore
//! let store = TemplateStore::with_builtin();
//!
//! let mut values = VariableValues::new();
//! values.insert("productName".to_string(), "Midnight Drums Vol. 2".to_string());
//! values.insert("productUrl".to_string(), "https://store.example/drums".to_string());
//!
//! let rendered = store.render("sample-pack-launch", &values)?;
//! for variable in &rendered.missing {
//!     println!("still needed: {}", variable.label);
//! }
//! ```

pub mod catalog;
mod store;
mod substitution;
mod types;
mod variables;

pub use store::{create_template_store, TemplateStore};
pub use substitution::{
    extract_variable_keys, find_unresolved_template_tokens, find_unresolved_tokens,
    get_preview_with_placeholders, get_unfilled_required_variables, preview_template,
    replace_template_variables, replace_variables, validate_variables, VariableValidation,
};
pub use types::{
    CampaignContent, CampaignType, EmailContent, EstimatedReach, FacebookContent,
    InstagramContent, LinkedInContent, MarketingCampaignTemplate, RecommendedTiming,
    RenderedCampaign, TemplateError, TemplateListResponse, TemplateResult, TemplateVariable,
    TikTokContent, TwitterContent, UpdateTemplateRequest, VariableType, VariableValues,
};
pub use variables::{check_variable_types, VariableIssue, VariableValueError};
