//! Relation tree expansion: reconstructs the nested parent->children tree
//! from the flat configuration collection.
//!
//! Relations are stored as id references into the flat collection, so the
//! same child can hang under multiple parents without duplicating its
//! payload. Resolution is a depth-first walk with a per-chain visited set:
//! a global visited set would wrongly collapse a child shared by two
//! independent parents, while the per-chain set only fires on a genuine
//! cycle along the current resolution chain.

use crate::config::{DynamicEntityConfiguration, FieldDefinition};
use crate::error::ConfigError;
use std::collections::{HashMap, HashSet};

/// A configuration with every relation edge resolved to its target.
#[derive(Clone, Debug)]
pub struct ExpandedConfiguration {
    pub id: i64,
    pub table_alias: String,
    pub fields: Vec<FieldDefinition>,
    pub child_relations: Vec<ExpandedRelation>,
}

#[derive(Clone, Debug)]
pub struct ExpandedRelation {
    pub name: String,
    pub target: RelationTarget,
}

/// Resolved edge target. An edge whose child id already occurs on the
/// current resolution chain terminates as `CycleLeaf`: the relation stays
/// visible in the documentation fragment but is not expanded further.
#[derive(Clone, Debug)]
pub enum RelationTarget {
    Node(Box<ExpandedConfiguration>),
    CycleLeaf { id: i64, table_alias: String },
}

/// Expand every configuration in the collection, preserving top-level
/// order, each parent's relation order, and field order.
///
/// An edge pointing at an id absent from the collection is a broken load
/// and aborts the whole expansion.
pub fn expand_configurations(
    configurations: &[DynamicEntityConfiguration],
) -> Result<Vec<ExpandedConfiguration>, ConfigError> {
    let index = index_by_id(configurations);
    let mut chain = HashSet::new();

    configurations
        .iter()
        .map(|config| expand_node(config, &index, &mut chain))
        .collect()
}

/// Index the flat collection by configuration id. The collection may carry
/// lightweight stubs repeating an id already present; the first occurrence
/// wins so a stub never shadows the full entry.
fn index_by_id(
    configurations: &[DynamicEntityConfiguration],
) -> HashMap<i64, &DynamicEntityConfiguration> {
    let mut index = HashMap::with_capacity(configurations.len());
    for config in configurations {
        index.entry(config.id).or_insert(config);
    }
    index
}

fn expand_node(
    config: &DynamicEntityConfiguration,
    index: &HashMap<i64, &DynamicEntityConfiguration>,
    chain: &mut HashSet<i64>,
) -> Result<ExpandedConfiguration, ConfigError> {
    chain.insert(config.id);

    let mut child_relations = Vec::with_capacity(config.child_relations.len());
    for edge in &config.child_relations {
        let child = index
            .get(&edge.child_configuration_id)
            .copied()
            .ok_or_else(|| ConfigError::MissingReference {
                kind: "dynamic entity configuration",
                id: edge.child_configuration_id.to_string(),
            })?;

        let target = if chain.contains(&child.id) {
            tracing::debug!(
                parent_id = config.id,
                child_id = child.id,
                relation = %edge.name,
                "cyclic relation edge, terminating as leaf"
            );
            RelationTarget::CycleLeaf {
                id: child.id,
                table_alias: child.table_alias.clone(),
            }
        } else {
            RelationTarget::Node(Box::new(expand_node(child, index, chain)?))
        };

        child_relations.push(ExpandedRelation {
            name: edge.name.clone(),
            target,
        });
    }

    chain.remove(&config.id);

    Ok(ExpandedConfiguration {
        id: config.id,
        table_alias: config.table_alias.clone(),
        fields: config.fields.clone(),
        child_relations,
    })
}
