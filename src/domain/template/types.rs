//! Template types and error definitions

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid template ID: {0}")]
    InvalidId(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Failed to load template catalog: {0}")]
    CatalogLoad(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// User-supplied variable values, keyed by bare name (`productName`) or full key (`{{productName}}`)
pub type VariableValues = HashMap<String, String>;

/// Kind of value a variable expects. Advisory only during substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    #[default]
    Text,
    Url,
    Price,
    Date,
    Discount,
    Number,
}

/// A substitutable `{{token}}` declared by a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    /// Token including braces, e.g. `{{productName}}`
    pub key: String,

    /// Human-readable name, shown as `[Label]` in previews
    pub label: String,

    #[serde(rename = "type", default)]
    pub var_type: VariableType,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl TemplateVariable {
    pub fn new(key: impl Into<String>, label: impl Into<String>, var_type: VariableType) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            var_type,
            required: false,
            default_value: None,
            placeholder: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_placeholder(mut self, value: impl Into<String>) -> Self {
        self.placeholder = Some(value.into());
        self
    }

    /// Key without the surrounding braces
    pub fn name(&self) -> &str {
        self.key
            .strip_prefix("{{")
            .and_then(|k| k.strip_suffix("}}"))
            .unwrap_or(&self.key)
    }

    /// The value supplied for this variable, if any (may be blank)
    pub fn supplied<'a>(&self, values: &'a VariableValues) -> Option<&'a str> {
        values
            .get(self.name())
            .or_else(|| values.get(&self.key))
            .map(String::as_str)
    }

    /// The supplied value when it is non-empty
    pub fn filled<'a>(&self, values: &'a VariableValues) -> Option<&'a str> {
        self.supplied(values).filter(|v| !v.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignType {
    ProductLaunch,
    WelcomeOnboarding,
    FlashSale,
    Reengagement,
    CourseMilestone,
    SeasonalHoliday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimatedReach {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailContent {
    pub subject: String,
    #[serde(default)]
    pub preview_text: String,
    pub body: String,
    #[serde(default)]
    pub cta_text: String,
    #[serde(default)]
    pub cta_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramContent {
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub call_to_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_image_style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterContent {
    pub tweet: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookContent {
    pub post: String,
    #[serde(default)]
    pub call_to_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_image_style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInContent {
    pub post: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_angle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TikTokContent {
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub hook_line: String,
}

/// Per-platform copy. Absent platforms are simply not part of the campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<InstagramContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<FacebookContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<LinkedInContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<TikTokContent>,
}

impl CampaignContent {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.instagram.is_none()
            && self.twitter.is_none()
            && self.facebook.is_none()
            && self.linkedin.is_none()
            && self.tiktok.is_none()
    }

    /// Apply `f` to every templated text field, keeping hashtags and
    /// advisory fields as they are.
    pub fn map_text<F>(&self, f: F) -> CampaignContent
    where
        F: Fn(&str) -> String,
    {
        CampaignContent {
            email: self.email.as_ref().map(|e| EmailContent {
                subject: f(&e.subject),
                preview_text: f(&e.preview_text),
                body: f(&e.body),
                cta_text: f(&e.cta_text),
                cta_url: f(&e.cta_url),
            }),
            instagram: self.instagram.as_ref().map(|i| InstagramContent {
                caption: f(&i.caption),
                hashtags: i.hashtags.clone(),
                call_to_action: f(&i.call_to_action),
                suggested_image_style: i.suggested_image_style.clone(),
            }),
            twitter: self.twitter.as_ref().map(|t| TwitterContent {
                tweet: f(&t.tweet),
                hashtags: t.hashtags.clone(),
            }),
            facebook: self.facebook.as_ref().map(|p| FacebookContent {
                post: f(&p.post),
                call_to_action: f(&p.call_to_action),
                suggested_image_style: p.suggested_image_style.clone(),
            }),
            linkedin: self.linkedin.as_ref().map(|l| LinkedInContent {
                post: f(&l.post),
                hashtags: l.hashtags.clone(),
                professional_angle: l.professional_angle.clone(),
            }),
            tiktok: self.tiktok.as_ref().map(|t| TikTokContent {
                caption: f(&t.caption),
                hashtags: t.hashtags.clone(),
                hook_line: f(&t.hook_line),
            }),
        }
    }

    /// Every templated text field, in platform order
    pub fn text_fields(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        if let Some(e) = &self.email {
            fields.extend([
                e.subject.as_str(),
                e.preview_text.as_str(),
                e.body.as_str(),
                e.cta_text.as_str(),
                e.cta_url.as_str(),
            ]);
        }
        if let Some(i) = &self.instagram {
            fields.extend([i.caption.as_str(), i.call_to_action.as_str()]);
        }
        if let Some(t) = &self.twitter {
            fields.push(t.tweet.as_str());
        }
        if let Some(p) = &self.facebook {
            fields.extend([p.post.as_str(), p.call_to_action.as_str()]);
        }
        if let Some(l) = &self.linkedin {
            fields.push(l.post.as_str());
        }
        if let Some(t) = &self.tiktok {
            fields.extend([t.caption.as_str(), t.hook_line.as_str()]);
        }
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendedTiming {
    pub email: String,
    pub social: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
}

/// A multi-platform marketing campaign template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingCampaignTemplate {
    /// Unique template identifier (alphanumeric, dash, underscore)
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub campaign_type: CampaignType,

    #[serde(default)]
    pub product_types: Vec<String>,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub estimated_reach: EstimatedReach,

    #[serde(flatten)]
    pub content: CampaignContent,

    #[serde(default)]
    pub variables: Vec<TemplateVariable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_timing: Option<RecommendedTiming>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl MarketingCampaignTemplate {
    /// Validate the template structure
    pub fn validate(&self) -> TemplateResult<()> {
        if self.id.is_empty() || self.id.len() > 64 {
            return Err(TemplateError::InvalidId(
                "ID must be 1-64 characters".to_string(),
            ));
        }

        if !self
            .id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TemplateError::InvalidId(
                "ID must contain only alphanumeric, dash, or underscore".to_string(),
            ));
        }

        if self.name.is_empty() || self.name.len() > 256 {
            return Err(TemplateError::InvalidTemplate(
                "Name must be 1-256 characters".to_string(),
            ));
        }

        if self.content.is_empty() {
            return Err(TemplateError::InvalidTemplate(
                "Template must define content for at least one platform".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for variable in &self.variables {
            let well_formed = variable.key.len() > 4
                && variable.key.starts_with("{{")
                && variable.key.ends_with("}}")
                && !variable.name().contains(['{', '}']);
            if !well_formed {
                return Err(TemplateError::InvalidTemplate(format!(
                    "Variable key must look like {{{{name}}}}: {}",
                    variable.key
                )));
            }
            if !seen.insert(variable.key.as_str()) {
                return Err(TemplateError::InvalidTemplate(format!(
                    "Duplicate variable key: {}",
                    variable.key
                )));
            }
        }

        Ok(())
    }

    pub fn matches(&self, campaign_type: Option<CampaignType>, product_type: Option<&str>) -> bool {
        campaign_type.map_or(true, |t| self.campaign_type == t)
            && product_type.map_or(true, |p| self.product_types.iter().any(|t| t == p))
    }
}

/// Absent field stays `None`; an explicit `null` becomes `Some(None)`
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Request to update an existing template.
///
/// Platform sections sit at the top level, as on create. For those and
/// `recommendedTiming`, `null` clears the field and omission keeps it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTemplateRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub campaign_type: Option<CampaignType>,
    pub product_types: Option<Vec<String>>,
    pub estimated_reach: Option<EstimatedReach>,
    pub variables: Option<Vec<TemplateVariable>>,

    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<EmailContent>>,
    #[serde(default, deserialize_with = "double_option")]
    pub instagram: Option<Option<InstagramContent>>,
    #[serde(default, deserialize_with = "double_option")]
    pub twitter: Option<Option<TwitterContent>>,
    #[serde(default, deserialize_with = "double_option")]
    pub facebook: Option<Option<FacebookContent>>,
    #[serde(default, deserialize_with = "double_option")]
    pub linkedin: Option<Option<LinkedInContent>>,
    #[serde(default, deserialize_with = "double_option")]
    pub tiktok: Option<Option<TikTokContent>>,

    #[serde(default, deserialize_with = "double_option")]
    pub recommended_timing: Option<Option<RecommendedTiming>>,
}

impl UpdateTemplateRequest {
    /// Apply the platform sections present in the request
    pub fn apply_content(&mut self, content: &mut CampaignContent) {
        if let Some(email) = self.email.take() {
            content.email = email;
        }
        if let Some(instagram) = self.instagram.take() {
            content.instagram = instagram;
        }
        if let Some(twitter) = self.twitter.take() {
            content.twitter = twitter;
        }
        if let Some(facebook) = self.facebook.take() {
            content.facebook = facebook;
        }
        if let Some(linkedin) = self.linkedin.take() {
            content.linkedin = linkedin;
        }
        if let Some(tiktok) = self.tiktok.take() {
            content.tiktok = tiktok;
        }
    }
}

/// Response for listing templates
#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<MarketingCampaignTemplate>,
    pub total: usize,
}

/// A template with variables filled in
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCampaign {
    pub template_id: String,

    pub content: CampaignContent,

    /// Required variables the caller has not supplied yet
    pub missing: Vec<TemplateVariable>,

    /// Tokens in the copy that no declared variable covers
    pub unresolved: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_template(id: &str) -> MarketingCampaignTemplate {
        MarketingCampaignTemplate {
            id: id.to_string(),
            name: "Test".to_string(),
            description: String::new(),
            campaign_type: CampaignType::FlashSale,
            product_types: vec!["course".to_string()],
            icon: String::new(),
            estimated_reach: EstimatedReach::Low,
            content: CampaignContent {
                twitter: Some(TwitterContent {
                    tweet: "Sale on {{productName}}".to_string(),
                    hashtags: vec![],
                }),
                ..Default::default()
            },
            variables: vec![TemplateVariable::new(
                "{{productName}}",
                "Product Name",
                VariableType::Text,
            )],
            recommended_timing: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_variable_name_strips_braces() {
        let var = TemplateVariable::new("{{productName}}", "Product", VariableType::Text);
        assert_eq!(var.name(), "productName");
    }

    #[test]
    fn test_supplied_prefers_bare_name() {
        let var = TemplateVariable::new("{{name}}", "Name", VariableType::Text);
        let mut values = VariableValues::new();
        values.insert("{{name}}".to_string(), "full".to_string());
        assert_eq!(var.supplied(&values), Some("full"));

        values.insert("name".to_string(), "bare".to_string());
        assert_eq!(var.supplied(&values), Some("bare"));
    }

    #[test]
    fn test_filled_ignores_empty() {
        let var = TemplateVariable::new("{{name}}", "Name", VariableType::Text);
        let mut values = VariableValues::new();
        values.insert("name".to_string(), String::new());
        assert_eq!(var.filled(&values), None);
    }

    #[test]
    fn test_validate_accepts_minimal() {
        assert!(minimal_template("flash-sale").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_id() {
        let template = minimal_template("bad id!");
        assert!(matches!(
            template.validate(),
            Err(TemplateError::InvalidId(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_content() {
        let mut template = minimal_template("empty");
        template.content = CampaignContent::default();
        assert!(matches!(
            template.validate(),
            Err(TemplateError::InvalidTemplate(_))
        ));
    }

    #[test]
    fn test_validate_rejects_malformed_and_duplicate_keys() {
        let mut template = minimal_template("keys");
        template.variables = vec![TemplateVariable::new("productName", "P", VariableType::Text)];
        assert!(template.validate().is_err());

        let var = TemplateVariable::new("{{a}}", "A", VariableType::Text);
        template.variables = vec![var.clone(), var];
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_deserialize_camel_case_template() {
        let template: MarketingCampaignTemplate = serde_json::from_value(json!({
            "id": "flash",
            "name": "Flash Sale",
            "campaignType": "flash_sale",
            "productTypes": ["sample_pack"],
            "estimatedReach": "high",
            "tiktok": {"caption": "{{discount}}% off", "hashtags": ["sale"], "hookLine": "Wait"},
            "variables": [
                {"key": "{{discount}}", "label": "Discount", "type": "discount", "required": true, "defaultValue": "20"}
            ]
        }))
        .unwrap();

        assert_eq!(template.campaign_type, CampaignType::FlashSale);
        assert_eq!(template.estimated_reach, EstimatedReach::High);
        let tiktok = template.content.tiktok.as_ref().unwrap();
        assert_eq!(tiktok.hook_line, "Wait");
        assert_eq!(template.variables[0].var_type, VariableType::Discount);
        assert_eq!(template.variables[0].default_value.as_deref(), Some("20"));
        assert!(template.content.email.is_none());
    }

    #[test]
    fn test_matches_filters() {
        let template = minimal_template("match");
        assert!(template.matches(None, None));
        assert!(template.matches(Some(CampaignType::FlashSale), Some("course")));
        assert!(!template.matches(Some(CampaignType::ProductLaunch), None));
        assert!(!template.matches(None, Some("bundle")));
    }

    #[test]
    fn test_map_text_keeps_hashtags() {
        let content = CampaignContent {
            instagram: Some(InstagramContent {
                caption: "a".to_string(),
                hashtags: vec!["a".to_string()],
                call_to_action: "a".to_string(),
                suggested_image_style: None,
            }),
            ..Default::default()
        };
        let mapped = content.map_text(|s| s.to_uppercase());
        let ig = mapped.instagram.unwrap();
        assert_eq!(ig.caption, "A");
        assert_eq!(ig.call_to_action, "A");
        assert_eq!(ig.hashtags, vec!["a".to_string()]);
    }

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let request: UpdateTemplateRequest = serde_json::from_value(json!({
            "recommendedTiming": null,
            "twitter": null,
            "tiktok": {"caption": "New", "hashtags": [], "hookLine": "Hook"}
        }))
        .unwrap();

        assert!(matches!(request.recommended_timing, Some(None)));
        assert!(matches!(request.twitter, Some(None)));
        assert!(matches!(request.tiktok, Some(Some(_))));
        assert!(request.email.is_none());

        let request: UpdateTemplateRequest = serde_json::from_value(json!({"name": "X"})).unwrap();
        assert!(request.recommended_timing.is_none());
        assert!(request.twitter.is_none());
    }
}
