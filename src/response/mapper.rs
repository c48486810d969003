//! Response mapping: domain results (entities or validation failures) to
//! wire-level envelopes.

use crate::error::{AppError, ConfigError};
use crate::response::envelope::{ApiError, Pagination, ResponseEnvelope};
use crate::response::taxonomy::descriptor_for;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Localization collaborator: resolves a message template for a locale with
/// parameter substitutions.
pub trait GlossaryStorage: Send + Sync {
    fn translate(&self, template: &str, locale: &str, parameters: &HashMap<String, String>)
        -> String;
}

pub trait LocaleProvider: Send + Sync {
    fn current_locale(&self) -> String;
}

/// One row of a dynamic entity, keyed by field name. Insertion order is
/// preserved through serialization.
#[derive(Clone, Debug, Default)]
pub struct DynamicEntity {
    pub fields: Map<String, Value>,
}

/// A reported validation/persistence failure: glossary key plus message
/// parameters.
#[derive(Clone, Debug)]
pub struct EntityError {
    pub message: String,
    pub parameters: HashMap<String, String>,
}

impl EntityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            parameters: HashMap::new(),
        }
    }
}

/// Domain result of a dynamic entity operation: either entities or an
/// ordered list of failures, plus pagination for list reads.
#[derive(Clone, Debug, Default)]
pub struct DynamicEntityCollection {
    pub entities: Vec<DynamicEntity>,
    pub errors: Vec<EntityError>,
    pub pagination: Option<Pagination>,
}

/// The slice of the incoming request the mapper cares about: whether a
/// single resource id was requested.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    pub requested_id: Option<String>,
}

pub struct ResponseMapper<G: GlossaryStorage, L: LocaleProvider> {
    glossary: G,
    locale: L,
}

impl<G: GlossaryStorage, L: LocaleProvider> ResponseMapper<G, L> {
    pub fn new(glossary: G, locale: L) -> Self {
        Self { glossary, locale }
    }

    /// Map a domain collection to a response envelope.
    ///
    /// Failures fold into a single envelope in report order; the envelope's
    /// overall status comes from the last mapped failure. That
    /// order-dependence is client-visible contract and is kept as is.
    ///
    /// On success the body is the first entity's field map when the request
    /// targeted a single resource (an empty object when absent), otherwise
    /// an array of field maps in input order. Pagination is forwarded only
    /// on successful list reads.
    pub fn map_collection_to_response(
        &self,
        collection: &DynamicEntityCollection,
        request: Option<&RequestContext>,
    ) -> Result<ResponseEnvelope, AppError> {
        let mut envelope = ResponseEnvelope::new();

        if !collection.errors.is_empty() {
            for error in &collection.errors {
                self.map_error_to_envelope(&error.message, &error.parameters, &mut envelope)?;
            }
            return Ok(envelope);
        }

        let single_fetch = request.and_then(|r| r.requested_id.as_ref()).is_some();
        let body = if single_fetch {
            collection
                .entities
                .first()
                .map(|entity| Value::Object(entity.fields.clone()))
                .unwrap_or_else(|| Value::Object(Map::new()))
        } else {
            Value::Array(
                collection
                    .entities
                    .iter()
                    .map(|entity| Value::Object(entity.fields.clone()))
                    .collect(),
            )
        };

        envelope.content = Some(serde_json::to_string(&body)?);
        if !single_fetch {
            envelope.pagination = collection.pagination.clone();
        }
        Ok(envelope)
    }

    /// Resolve one failure against the taxonomy and append its localized
    /// entry. An identifier outside the taxonomy is a programmer error and
    /// aborts instead of degrading into a user-facing message.
    pub fn map_error_to_envelope(
        &self,
        glossary_key: &str,
        parameters: &HashMap<String, String>,
        envelope: &mut ResponseEnvelope,
    ) -> Result<(), ConfigError> {
        let descriptor = descriptor_for(glossary_key)
            .ok_or_else(|| ConfigError::UnknownErrorKey(glossary_key.to_string()))?;

        let message =
            self.glossary
                .translate(glossary_key, &self.locale.current_locale(), parameters);

        envelope.status = descriptor.http_status;
        envelope.errors.push(ApiError {
            code: descriptor.code.to_string(),
            status: descriptor.http_status.as_u16(),
            message,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::taxonomy::{
        GLOSSARY_KEY_ENTITY_DOES_NOT_EXIST, GLOSSARY_KEY_PERSISTENCE_FAILED,
        GLOSSARY_KEY_REQUIRED_FIELD_IS_MISSING,
    };
    use axum::http::StatusCode;

    /// Echoes "<template>|<locale>" plus sorted parameters, so tests can
    /// assert what was passed without a real glossary.
    struct EchoGlossary;

    impl GlossaryStorage for EchoGlossary {
        fn translate(
            &self,
            template: &str,
            locale: &str,
            parameters: &HashMap<String, String>,
        ) -> String {
            let mut params: Vec<_> =
                parameters.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            params.sort();
            format!("{}|{}|{}", template, locale, params.join(","))
        }
    }

    struct FixedLocale;

    impl LocaleProvider for FixedLocale {
        fn current_locale(&self) -> String {
            "en_US".to_string()
        }
    }

    fn mapper() -> ResponseMapper<EchoGlossary, FixedLocale> {
        ResponseMapper::new(EchoGlossary, FixedLocale)
    }

    fn entity(pairs: &[(&str, &str)]) -> DynamicEntity {
        let mut fields = Map::new();
        for (k, v) in pairs {
            fields.insert(k.to_string(), Value::String(v.to_string()));
        }
        DynamicEntity { fields }
    }

    #[test]
    fn maps_list_to_array_body_in_input_order() {
        let collection = DynamicEntityCollection {
            entities: vec![entity(&[("name", "first")]), entity(&[("name", "second")])],
            ..Default::default()
        };

        let envelope = mapper().map_collection_to_response(&collection, None).unwrap();

        assert_eq!(envelope.status, StatusCode::OK);
        let body: Value = serde_json::from_str(envelope.content.as_deref().unwrap()).unwrap();
        assert_eq!(body[0]["name"], "first");
        assert_eq!(body[1]["name"], "second");
    }

    #[test]
    fn maps_single_fetch_to_first_entity_fields() {
        let collection = DynamicEntityCollection {
            entities: vec![entity(&[("name", "only")])],
            ..Default::default()
        };
        let request = RequestContext {
            requested_id: Some("7".into()),
        };

        let envelope = mapper()
            .map_collection_to_response(&collection, Some(&request))
            .unwrap();

        let body: Value = serde_json::from_str(envelope.content.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "only");
        assert!(body.is_object());
    }

    #[test]
    fn single_fetch_of_absent_entity_yields_empty_object() {
        let collection = DynamicEntityCollection::default();
        let request = RequestContext {
            requested_id: Some("7".into()),
        };

        let envelope = mapper()
            .map_collection_to_response(&collection, Some(&request))
            .unwrap();

        assert_eq!(envelope.content.as_deref(), Some("{}"));
    }

    #[test]
    fn forwards_pagination_on_list_success_only() {
        let pagination = Pagination {
            limit: Some(10),
            offset: Some(0),
            total: Some(42),
        };
        let list = DynamicEntityCollection {
            entities: vec![entity(&[("name", "row")])],
            pagination: Some(pagination.clone()),
            ..Default::default()
        };

        let envelope = mapper().map_collection_to_response(&list, None).unwrap();
        assert_eq!(envelope.pagination, Some(pagination.clone()));

        let request = RequestContext {
            requested_id: Some("1".into()),
        };
        let single = mapper()
            .map_collection_to_response(
                &DynamicEntityCollection {
                    entities: vec![entity(&[("name", "row")])],
                    pagination: Some(pagination),
                    ..Default::default()
                },
                Some(&request),
            )
            .unwrap();
        assert!(single.pagination.is_none());
    }

    #[test]
    fn maps_required_field_failure_to_400_with_code_1307() {
        let collection = DynamicEntityCollection {
            errors: vec![EntityError::new(GLOSSARY_KEY_REQUIRED_FIELD_IS_MISSING)],
            ..Default::default()
        };

        let envelope = mapper().map_collection_to_response(&collection, None).unwrap();

        assert_eq!(envelope.status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope.errors.len(), 1);
        assert_eq!(envelope.errors[0].code, "1307");
        assert_eq!(envelope.errors[0].status, 400);
        assert!(envelope.content.is_none());
        assert!(envelope.pagination.is_none());
    }

    #[test]
    fn accumulates_failures_in_order_with_last_status_winning() {
        let collection = DynamicEntityCollection {
            errors: vec![
                EntityError::new(GLOSSARY_KEY_ENTITY_DOES_NOT_EXIST),
                EntityError::new(GLOSSARY_KEY_PERSISTENCE_FAILED),
            ],
            ..Default::default()
        };

        let envelope = mapper().map_collection_to_response(&collection, None).unwrap();

        assert_eq!(envelope.errors.len(), 2);
        assert_eq!(envelope.errors[0].code, "1303");
        assert_eq!(envelope.errors[1].code, "1302");
        // Overall status follows the last mapped failure.
        assert_eq!(envelope.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn localizes_with_current_locale_and_parameters() {
        let mut error = EntityError::new(GLOSSARY_KEY_REQUIRED_FIELD_IS_MISSING);
        error.parameters.insert("%field%".into(), "name".into());
        let collection = DynamicEntityCollection {
            errors: vec![error],
            ..Default::default()
        };

        let envelope = mapper().map_collection_to_response(&collection, None).unwrap();

        assert_eq!(
            envelope.errors[0].message,
            format!("{}|en_US|%field%=name", GLOSSARY_KEY_REQUIRED_FIELD_IS_MISSING)
        );
    }

    #[test]
    fn unknown_failure_identifier_is_fatal() {
        let collection = DynamicEntityCollection {
            errors: vec![EntityError::new("dynamic_entity.validation.bogus")],
            ..Default::default()
        };

        let err = mapper()
            .map_collection_to_response(&collection, None)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::UnknownErrorKey(_))
        ));
    }

    #[test]
    fn empty_list_yields_empty_array_body() {
        let envelope = mapper()
            .map_collection_to_response(&DynamicEntityCollection::default(), None)
            .unwrap();
        assert_eq!(envelope.content.as_deref(), Some("[]"));
    }
}
