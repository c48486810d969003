//! Raw dynamic entity configuration types matching the stored JSON payloads.

use serde::{Deserialize, Serialize};

/// Declared column type of a dynamic entity field. Maps to an OpenAPI
/// primitive type name when the field is rendered into a schema fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
}

impl FieldType {
    /// OpenAPI type name for schema fragments. Dates render as strings.
    pub fn openapi_type(&self) -> &'static str {
        match self {
            FieldType::String | FieldType::Date | FieldType::DateTime => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "number",
            FieldType::Boolean => "boolean",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default = "default_true")]
    pub nullable: bool,
    /// Immutable fields may be set on create but never modified afterwards.
    #[serde(default)]
    pub immutable: bool,
}

fn default_true() -> bool {
    true
}

/// Named, directed reference from a parent configuration to a child
/// configuration. The child is referenced by id into the flat collection,
/// never embedded, so the same child can be shared by multiple parents.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RelationEdge {
    pub name: String,
    pub child_configuration_id: i64,
}

/// One registrable table/resource, as stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DynamicEntityConfiguration {
    pub id: i64,
    pub table_alias: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(default)]
    pub child_relations: Vec<RelationEdge>,
}
