//! Documentation schema expansion: relation tree, fragments, context, routes.

pub mod context;
pub mod fragment;
pub mod route_filter;
pub mod tree;

pub use context::{SchemaContextExpander, SchemaDocumentContext};
pub use fragment::render_fragment;
pub use route_filter::{filter_custom_routes, CustomRoute, DynamicEntityController, RouteDefaults};
pub use tree::{expand_configurations, ExpandedConfiguration, ExpandedRelation, RelationTarget};
