//! Documentation context and its expansion stage.
//!
//! The context is the shared accumulator of one documentation build: it is
//! threaded mutably through an ordered pipeline of expansion stages, each
//! stage mutating it in place and handing back the same instance so stages
//! chain. Single writer per build; callers serialize concurrent builds
//! externally.

use crate::config::EntityConfigurationReader;
use crate::error::AppError;
use crate::schema::route_filter::{filter_custom_routes, CustomRoute};
use crate::schema::tree::{expand_configurations, ExpandedConfiguration};

/// Shared, per-build accumulator consumed by the downstream documentation
/// assembler.
#[derive(Debug, Default)]
pub struct SchemaDocumentContext {
    pub entity_configurations: Vec<ExpandedConfiguration>,
    pub custom_routes: Vec<CustomRoute>,
}

impl SchemaDocumentContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Expansion stage: pulls configurations through the reader, resolves the
/// relation tree, and cleans generic dynamic entity routes out of the
/// context's custom route collection.
pub struct SchemaContextExpander<R: EntityConfigurationReader> {
    reader: R,
}

impl<R: EntityConfigurationReader> SchemaContextExpander<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Expand the context in place and return the same instance.
    ///
    /// A context that already carries configurations is not re-read, so
    /// repeated expansion within one build never duplicates entries. The
    /// route filter runs unconditionally because the host may add routes
    /// between calls.
    pub async fn expand<'a>(
        &self,
        context: &'a mut SchemaDocumentContext,
    ) -> Result<&'a mut SchemaDocumentContext, AppError> {
        if context.entity_configurations.is_empty() {
            let configurations = self.reader.get_dynamic_entity_configurations().await?;
            tracing::debug!(count = configurations.len(), "expanding dynamic entity configurations");
            context.entity_configurations = expand_configurations(&configurations)?;
        }

        let routes = std::mem::take(&mut context.custom_routes);
        context.custom_routes = filter_custom_routes(routes);

        Ok(context)
    }
}
