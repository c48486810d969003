//! Schema-fragment rendering: turns an expanded configuration into the
//! object-shaped JSON fragment embedded into the generated API document.
//!
//! Property order must exactly match declaration order (fields first, then
//! relations); documentation consumers diff generated documents, so the
//! crate relies on serde_json's `preserve_order` feature for insertion-order
//! maps.

use crate::schema::tree::{ExpandedConfiguration, RelationTarget};
use serde_json::{json, Map, Value};

/// Render one resolved configuration as an object fragment. Each declared
/// field becomes a typed property; each child relation becomes an array
/// property whose items are the child's own fragment. Relation arrays allow
/// additional undeclared properties because child payloads may carry
/// computed fields absent from the static configuration.
pub fn render_fragment(config: &ExpandedConfiguration) -> Value {
    let mut properties = Map::new();

    for field in &config.fields {
        properties.insert(
            field.name.clone(),
            json!({ "type": field.field_type.openapi_type() }),
        );
    }

    for relation in &config.child_relations {
        let items = match &relation.target {
            RelationTarget::Node(child) => render_fragment(child),
            // Cyclic edge: stay visible, but render no nested properties.
            RelationTarget::CycleLeaf { .. } => json!({ "type": "object" }),
        };
        properties.insert(
            relation.name.clone(),
            json!({
                "type": "array",
                "additionalProperties": true,
                "items": items,
            }),
        );
    }

    json!({
        "type": "object",
        "properties": properties,
    })
}
