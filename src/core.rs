//! Core QueryHaus functionality
//!
//! This module contains the main QueryHaus struct: configured builder factory,
//! checked rendering and a registry of named query templates.

use std::collections::HashMap;

use clause_builder::{debug_log, QueryBuilder};
use config::{AppConfig, BuilderConfig};

use crate::errors::QueryHausError;

/// Main QueryHaus coordinator that hands out configured builders and keeps
/// reusable query templates
#[derive(Debug, Clone, Default)]
pub struct QueryHaus {
    config: BuilderConfig,
    templates: HashMap<String, QueryBuilder>,
}

impl QueryHaus {
    /// Create new QueryHaus with builder configuration
    pub fn new(config: BuilderConfig) -> Result<Self, QueryHausError> {
        config.validate()?;
        debug_log!(
            "[QUERYHAUS] initialised (quote_identifiers={}, default_limit={}, max_limit={})",
            config.quote_identifiers,
            config.default_limit,
            config.max_limit
        );

        Ok(Self {
            config,
            templates: HashMap::new(),
        })
    }

    /// Create QueryHaus from the configuration file located by [`AppConfig::load`]
    pub fn load() -> Result<Self, QueryHausError> {
        let app_config = AppConfig::load()?;
        Self::new(app_config.builder)
    }

    /// Get builder configuration reference
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Fresh builder seeded with the configured defaults
    pub fn query(&self) -> QueryBuilder {
        QueryBuilder::from_config(&self.config)
    }

    /// Render a builder with structural checks and the configured limit policy
    pub fn render(&self, builder: &QueryBuilder) -> Result<String, QueryHausError> {
        Ok(builder.try_build_with(&self.config)?)
    }

    /// Register a query template with a given name
    pub fn register_template(
        &mut self,
        name: impl Into<String>,
        template: QueryBuilder,
    ) -> Result<(), QueryHausError> {
        let name = name.into();
        if self.templates.contains_key(&name) {
            return Err(QueryHausError::TemplateAlreadyRegistered(name));
        }

        debug_log!("[QUERYHAUS] registered template '{}'", name);
        self.templates.insert(name, template);
        Ok(())
    }

    /// Get an independent copy of a registered template, ready for further clauses
    pub fn template(&self, name: &str) -> Result<QueryBuilder, QueryHausError> {
        self.templates
            .get(name)
            .map(QueryBuilder::copy)
            .ok_or_else(|| QueryHausError::TemplateNotFound(name.to_string()))
    }

    /// Render a registered template as-is
    pub fn render_template(&self, name: &str) -> Result<String, QueryHausError> {
        let template = self.template(name)?;
        self.render(&template)
    }

    /// List all registered template names
    pub fn list_templates(&self) -> Vec<&String> {
        self.templates.keys().collect()
    }

    /// Remove a template by name
    pub fn unregister_template(&mut self, name: &str) -> Result<(), QueryHausError> {
        self.templates
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| QueryHausError::TemplateNotFound(name.to_string()))
    }
}
