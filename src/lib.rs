//! Dynamic entity API core: configuration-driven schema documentation
//! expansion and response mapping.
//!
//! Clients register tables as dynamic entity configurations; this crate
//! expands the flat configuration collection into nested schema fragments
//! for API documentation and translates validation/persistence failures
//! into a stable, localized, HTTP-correct error vocabulary. Routing,
//! persistence, and localization storage are consumed through narrow
//! collaborator interfaces.

pub mod config;
pub mod error;
pub mod response;
pub mod schema;

pub use config::{
    DynamicEntityConfiguration, EntityConfigurationReader, FieldDefinition, FieldType,
    PgEntityConfigurationReader, RelationEdge,
};
pub use error::{AppError, ConfigError};
pub use response::{
    DynamicEntity, DynamicEntityCollection, EntityError, GlossaryStorage, LocaleProvider,
    Pagination, RequestContext, ResponseEnvelope, ResponseMapper,
};
pub use schema::{
    expand_configurations, filter_custom_routes, render_fragment, CustomRoute,
    DynamicEntityController, ExpandedConfiguration, RouteDefaults, SchemaContextExpander,
    SchemaDocumentContext,
};
