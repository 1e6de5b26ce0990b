use std::sync::Arc;
use std::time::Instant;

use crate::config::Settings;
use crate::metrics::RenderMetrics;
use crate::template::{create_template_store, TemplateResult, TemplateStore};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub template_store: Arc<TemplateStore>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(settings: Settings) -> TemplateResult<Self> {
        let template_store = create_template_store(&settings.catalog)?;
        Ok(Self::with_store(settings, template_store))
    }

    pub fn with_store(settings: Settings, template_store: Arc<TemplateStore>) -> Self {
        RenderMetrics::set_template_count(template_store.count());

        Self {
            settings: Arc::new(settings),
            template_store,
            start_time: Instant::now(),
        }
    }
}
