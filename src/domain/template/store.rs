//! Template storage with CRUD operations

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;

use super::catalog::{builtin_templates, load_catalog_file};
use super::substitution::{
    find_unresolved_template_tokens, get_unfilled_required_variables, preview_template,
    replace_template_variables,
};
use super::types::{
    CampaignContent, CampaignType, MarketingCampaignTemplate, RenderedCampaign, TemplateError,
    TemplateResult, UpdateTemplateRequest, VariableValues,
};
use crate::config::CatalogConfig;

/// In-memory template storage
pub struct TemplateStore {
    templates: DashMap<String, MarketingCampaignTemplate>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create an empty template store
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Create a store seeded with the built-in catalog
    pub fn with_builtin() -> Self {
        let store = Self::new();
        for template in builtin_templates() {
            store.templates.insert(template.id.clone(), template);
        }
        store
    }

    /// Build the store described by the catalog settings.
    ///
    /// File templates replace built-in ones with the same id.
    pub fn from_config(config: &CatalogConfig) -> TemplateResult<Self> {
        let store = if config.builtin {
            Self::with_builtin()
        } else {
            Self::new()
        };

        if let Some(path) = &config.path {
            let loaded = load_catalog_file(path)?;
            for template in loaded {
                template.validate()?;
                if store.templates.contains_key(&template.id) {
                    tracing::warn!(template_id = %template.id, "Catalog file overrides built-in template");
                }
                store.templates.insert(template.id.clone(), template);
            }
            tracing::info!(path = %path, "Loaded template catalog file");
        }

        Ok(store)
    }

    /// Create a new template
    pub fn create(&self, template: MarketingCampaignTemplate) -> TemplateResult<MarketingCampaignTemplate> {
        template.validate()?;

        if self.templates.contains_key(&template.id) {
            return Err(TemplateError::AlreadyExists(template.id));
        }

        self.templates.insert(template.id.clone(), template.clone());

        Ok(template)
    }

    /// Get a template by ID
    pub fn get(&self, id: &str) -> TemplateResult<MarketingCampaignTemplate> {
        self.templates
            .get(id)
            .map(|t| t.clone())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// List all templates, ordered by id
    pub fn list(&self) -> Vec<MarketingCampaignTemplate> {
        self.list_filtered(None, None)
    }

    pub fn list_filtered(
        &self,
        campaign_type: Option<CampaignType>,
        product_type: Option<&str>,
    ) -> Vec<MarketingCampaignTemplate> {
        let mut templates: Vec<_> = self
            .templates
            .iter()
            .filter(|entry| entry.value().matches(campaign_type, product_type))
            .map(|entry| entry.value().clone())
            .collect();
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        templates
    }

    /// Update an existing template
    pub fn update(
        &self,
        id: &str,
        mut updates: UpdateTemplateRequest,
    ) -> TemplateResult<MarketingCampaignTemplate> {
        let mut template = self.get(id)?;

        if let Some(name) = updates.name.take() {
            template.name = name;
        }

        if let Some(description) = updates.description.take() {
            template.description = description;
        }

        if let Some(campaign_type) = updates.campaign_type.take() {
            template.campaign_type = campaign_type;
        }

        if let Some(product_types) = updates.product_types.take() {
            template.product_types = product_types;
        }

        if let Some(reach) = updates.estimated_reach.take() {
            template.estimated_reach = reach;
        }

        updates.apply_content(&mut template.content);

        if let Some(variables) = updates.variables {
            template.variables = variables;
        }

        if let Some(timing) = updates.recommended_timing {
            template.recommended_timing = timing;
        }

        template.updated_at = Utc::now();
        template.validate()?;

        self.templates.insert(id.to_string(), template.clone());

        Ok(template)
    }

    /// Delete a template by ID
    pub fn delete(&self, id: &str) -> TemplateResult<()> {
        self.templates
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// Check if a template exists
    pub fn exists(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Get the number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// Render a template with the supplied values
    pub fn render(&self, id: &str, values: &VariableValues) -> TemplateResult<RenderedCampaign> {
        let template = self.get(id)?;

        Ok(RenderedCampaign {
            content: replace_template_variables(&template.content, values, &template.variables),
            missing: get_unfilled_required_variables(&template.variables, values),
            unresolved: find_unresolved_template_tokens(&template.content, &template.variables),
            template_id: template.id,
        })
    }

    /// Render a preview where unfilled variables show as `[Label]`
    pub fn preview(&self, id: &str, values: &VariableValues) -> TemplateResult<CampaignContent> {
        let template = self.get(id)?;
        Ok(preview_template(&template.content, values, &template.variables))
    }
}

/// Create an Arc-wrapped template store
pub fn create_template_store(config: &CatalogConfig) -> TemplateResult<Arc<TemplateStore>> {
    TemplateStore::from_config(config).map(Arc::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{
        EstimatedReach, TemplateVariable, TwitterContent, VariableType,
    };

    fn test_template(id: &str) -> MarketingCampaignTemplate {
        MarketingCampaignTemplate {
            id: id.to_string(),
            name: "Test Template".to_string(),
            description: "A test template".to_string(),
            campaign_type: CampaignType::FlashSale,
            product_types: vec!["bundle".to_string()],
            icon: String::new(),
            estimated_reach: EstimatedReach::Medium,
            content: CampaignContent {
                twitter: Some(TwitterContent {
                    tweet: "{{discount}}% off {{productName}} {{extra}}".to_string(),
                    hashtags: vec!["sale".to_string()],
                }),
                ..Default::default()
            },
            variables: vec![
                TemplateVariable::new("{{productName}}", "Product Name", VariableType::Text)
                    .required(),
                TemplateVariable::new("{{discount}}", "Discount", VariableType::Discount)
                    .with_default("20"),
            ],
            recommended_timing: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_store_create_and_get() {
        let store = TemplateStore::new();

        let created = store.create(test_template("test-template")).unwrap();
        assert_eq!(created.id, "test-template");

        let retrieved = store.get("test-template").unwrap();
        assert_eq!(retrieved.name, "Test Template");
    }

    #[test]
    fn test_store_create_duplicate() {
        let store = TemplateStore::new();

        store.create(test_template("duplicate")).unwrap();
        assert!(matches!(
            store.create(test_template("duplicate")),
            Err(TemplateError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_store_update() {
        let store = TemplateStore::new();
        store.create(test_template("update-test")).unwrap();

        let updates = UpdateTemplateRequest {
            name: Some("Updated".to_string()),
            estimated_reach: Some(EstimatedReach::High),
            ..Default::default()
        };

        let updated = store.update("update-test", updates).unwrap();
        assert_eq!(updated.name, "Updated");
        assert_eq!(updated.estimated_reach, EstimatedReach::High);
        assert_eq!(updated.description, "A test template");
    }

    #[test]
    fn test_store_update_rejects_invalid() {
        let store = TemplateStore::new();
        store.create(test_template("update-invalid")).unwrap();

        let updates = UpdateTemplateRequest {
            twitter: Some(None),
            ..Default::default()
        };

        assert!(matches!(
            store.update("update-invalid", updates),
            Err(TemplateError::InvalidTemplate(_))
        ));
        assert!(store.get("update-invalid").unwrap().content.twitter.is_some());
    }

    #[test]
    fn test_store_update_null_clears_timing() {
        let store = TemplateStore::with_builtin();
        assert!(store.get("black-friday").unwrap().recommended_timing.is_some());

        let updates: UpdateTemplateRequest =
            serde_json::from_str(r#"{"recommendedTiming": null}"#).unwrap();
        let updated = store.update("black-friday", updates).unwrap();

        assert!(updated.recommended_timing.is_none());
        assert!(store.get("black-friday").unwrap().recommended_timing.is_none());
    }

    #[test]
    fn test_store_update_platform_sections() {
        let store = TemplateStore::with_builtin();
        let before = store.get("black-friday").unwrap();

        let updates: UpdateTemplateRequest = serde_json::from_str(
            r#"{"facebook": null, "twitter": {"tweet": "{{discountPercent}}% off", "hashtags": []}}"#,
        )
        .unwrap();
        let updated = store.update("black-friday", updates).unwrap();

        assert!(updated.content.facebook.is_none());
        assert_eq!(updated.content.twitter.unwrap().tweet, "{{discountPercent}}% off");
        assert_eq!(updated.content.email, before.content.email);
        assert_eq!(updated.recommended_timing, before.recommended_timing);
    }

    #[test]
    fn test_store_delete() {
        let store = TemplateStore::new();

        store.create(test_template("delete-test")).unwrap();
        assert!(store.exists("delete-test"));

        store.delete("delete-test").unwrap();
        assert!(!store.exists("delete-test"));
        assert!(matches!(
            store.delete("delete-test"),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_store_list_sorted_and_filtered() {
        let store = TemplateStore::with_builtin();
        for i in 0..3 {
            store.create(test_template(&format!("template-{}", i))).unwrap();
        }

        let all = store.list();
        assert_eq!(all.len(), store.count());
        assert!(all.windows(2).all(|w| w[0].id <= w[1].id));

        let flash = store.list_filtered(Some(CampaignType::FlashSale), None);
        assert_eq!(flash.len(), 3);

        let courses = store.list_filtered(None, Some("course"));
        assert!(courses.iter().any(|t| t.id == "course-launch"));
        assert!(courses.iter().all(|t| t.product_types.iter().any(|p| p == "course")));
    }

    #[test]
    fn test_render_template() {
        let store = TemplateStore::new();
        store.create(test_template("render")).unwrap();

        let mut values = VariableValues::new();
        values.insert("productName".to_string(), "Drum Kit".to_string());

        let rendered = store.render("render", &values).unwrap();
        assert_eq!(rendered.template_id, "render");
        assert_eq!(
            rendered.content.twitter.unwrap().tweet,
            "20% off Drum Kit {{extra}}"
        );
        assert!(rendered.missing.is_empty());
        assert_eq!(rendered.unresolved, vec!["{{extra}}"]);
    }

    #[test]
    fn test_render_reports_missing() {
        let store = TemplateStore::new();
        store.create(test_template("render-missing")).unwrap();

        let rendered = store.render("render-missing", &VariableValues::new()).unwrap();
        assert_eq!(rendered.missing.len(), 1);
        assert_eq!(rendered.missing[0].key, "{{productName}}");
    }

    #[test]
    fn test_preview_template() {
        let store = TemplateStore::new();
        store.create(test_template("preview")).unwrap();

        let preview = store.preview("preview", &VariableValues::new()).unwrap();
        assert_eq!(
            preview.twitter.unwrap().tweet,
            "20% off [Product Name] {{extra}}"
        );
    }

    #[test]
    fn test_render_unknown_template() {
        let store = TemplateStore::new();
        assert!(matches!(
            store.render("nope", &VariableValues::new()),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_from_config_without_builtin() {
        let config = CatalogConfig {
            path: None,
            builtin: false,
        };
        let store = TemplateStore::from_config(&config).unwrap();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_from_config_missing_file() {
        let config = CatalogConfig {
            path: Some("/definitely/not/here.json".to_string()),
            builtin: true,
        };
        assert!(matches!(
            TemplateStore::from_config(&config),
            Err(TemplateError::CatalogLoad(_))
        ));
    }
}
