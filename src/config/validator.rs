//! Config validation: load-time invariants over the flat configuration collection.

use crate::config::DynamicEntityConfiguration;
use crate::error::ConfigError;
use std::collections::HashSet;

/// Check the invariants the reader guarantees to downstream consumers:
/// non-empty aliases, unique ids, unique aliases, and relation names unique
/// among siblings of the same parent. Dangling child references are left to
/// the tree expander, which resolves them lazily by lookup.
pub fn validate(configurations: &[DynamicEntityConfiguration]) -> Result<(), ConfigError> {
    let mut ids = HashSet::new();
    let mut aliases = HashSet::new();

    for config in configurations {
        if config.table_alias.is_empty() {
            return Err(ConfigError::EmptyTableAlias(config.id));
        }
        if !ids.insert(config.id) {
            return Err(ConfigError::DuplicateConfigurationId(config.id));
        }
        if !aliases.insert(config.table_alias.as_str()) {
            return Err(ConfigError::DuplicateTableAlias(config.table_alias.clone()));
        }

        let mut relation_names = HashSet::new();
        for relation in &config.child_relations {
            if !relation_names.insert(relation.name.as_str()) {
                return Err(ConfigError::DuplicateRelationName {
                    parent_id: config.id,
                    name: relation.name.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RelationEdge;

    fn config(id: i64, alias: &str) -> DynamicEntityConfiguration {
        DynamicEntityConfiguration {
            id,
            table_alias: alias.to_string(),
            fields: vec![],
            child_relations: vec![],
        }
    }

    #[test]
    fn accepts_well_formed_collection() {
        let configs = vec![config(1, "resource-1"), config(2, "resource-2")];
        assert!(validate(&configs).is_ok());
    }

    #[test]
    fn rejects_empty_alias() {
        let configs = vec![config(1, "")];
        assert!(matches!(
            validate(&configs),
            Err(ConfigError::EmptyTableAlias(1))
        ));
    }

    #[test]
    fn rejects_duplicate_id() {
        let configs = vec![config(1, "a"), config(1, "b")];
        assert!(matches!(
            validate(&configs),
            Err(ConfigError::DuplicateConfigurationId(1))
        ));
    }

    #[test]
    fn rejects_duplicate_alias() {
        let configs = vec![config(1, "a"), config(2, "a")];
        assert!(matches!(
            validate(&configs),
            Err(ConfigError::DuplicateTableAlias(_))
        ));
    }

    #[test]
    fn rejects_duplicate_sibling_relation_names() {
        let mut parent = config(1, "parent");
        parent.child_relations = vec![
            RelationEdge {
                name: "children".into(),
                child_configuration_id: 2,
            },
            RelationEdge {
                name: "children".into(),
                child_configuration_id: 3,
            },
        ];
        let configs = vec![parent, config(2, "a"), config(3, "b")];
        assert!(matches!(
            validate(&configs),
            Err(ConfigError::DuplicateRelationName { parent_id: 1, .. })
        ));
    }
}
