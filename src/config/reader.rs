//! Configuration reader: collaborator interface plus the Postgres-backed
//! implementation loading JSON payload rows.

use crate::config::{validate, DynamicEntityConfiguration};
use crate::error::ConfigError;
use async_trait::async_trait;
use sqlx::PgPool;

/// Source of dynamic entity configurations. The read happens once per
/// documentation build, before any tree expansion; expansion itself never
/// performs I/O. A failed read is fatal for the build.
#[async_trait]
pub trait EntityConfigurationReader: Send + Sync {
    async fn get_dynamic_entity_configurations(
        &self,
    ) -> Result<Vec<DynamicEntityConfiguration>, ConfigError>;
}

/// Reads configurations from the `dynamic_entity_configuration` table, one
/// JSON payload per row, ordered by id so load order is stable.
pub struct PgEntityConfigurationReader {
    pool: PgPool,
}

impl PgEntityConfigurationReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityConfigurationReader for PgEntityConfigurationReader {
    async fn get_dynamic_entity_configurations(
        &self,
    ) -> Result<Vec<DynamicEntityConfiguration>, ConfigError> {
        let sql = "SELECT payload FROM dynamic_entity_configuration ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_scalar::<_, serde_json::Value>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let config: DynamicEntityConfiguration =
                serde_json::from_value(row).map_err(|e| ConfigError::Load(e.to_string()))?;
            out.push(config);
        }
        validate(&out)?;
        Ok(out)
    }
}
