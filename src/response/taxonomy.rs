//! Error taxonomy: static mapping from validation/persistence glossary keys
//! to HTTP status and stable numeric response code.
//!
//! Codes are client-visible contract; never renumber an existing entry.

use axum::http::StatusCode;

pub const GLOSSARY_KEY_INVALID_DATA_FORMAT: &str = "dynamic_entity.validation.invalid_data_format";
pub const GLOSSARY_KEY_PERSISTENCE_FAILED: &str = "dynamic_entity.validation.persistence_failed";
pub const GLOSSARY_KEY_ENTITY_DOES_NOT_EXIST: &str =
    "dynamic_entity.validation.entity_does_not_exist";
pub const GLOSSARY_KEY_MODIFICATION_OF_IMMUTABLE_FIELD_PROHIBITED: &str =
    "dynamic_entity.validation.modification_of_immutable_field_prohibited";
pub const GLOSSARY_KEY_MISSING_IDENTIFIER: &str = "dynamic_entity.validation.missing_identifier";
pub const GLOSSARY_KEY_INVALID_FIELD_TYPE: &str = "dynamic_entity.validation.invalid_field_type";
pub const GLOSSARY_KEY_INVALID_FIELD_VALUE: &str = "dynamic_entity.validation.invalid_field_value";
pub const GLOSSARY_KEY_REQUIRED_FIELD_IS_MISSING: &str =
    "dynamic_entity.validation.required_field_is_missing";
pub const GLOSSARY_KEY_ENTITY_NOT_FOUND_OR_IDENTIFIER_IS_NOT_CREATABLE: &str =
    "dynamic_entity.validation.entity_not_found_or_identifier_is_not_creatable";
pub const GLOSSARY_KEY_PERSISTENCE_FAILED_DUPLICATE_ENTRY: &str =
    "dynamic_entity.validation.persistence_failed_duplicate_entry";

#[derive(Clone, Copy, Debug)]
pub struct ErrorDescriptor {
    pub glossary_key: &'static str,
    pub http_status: StatusCode,
    pub code: u16,
}

/// The full taxonomy. Each descriptor carries a distinct numeric code.
pub const ERROR_TAXONOMY: &[ErrorDescriptor] = &[
    ErrorDescriptor {
        glossary_key: GLOSSARY_KEY_INVALID_DATA_FORMAT,
        http_status: StatusCode::BAD_REQUEST,
        code: 1301,
    },
    ErrorDescriptor {
        glossary_key: GLOSSARY_KEY_PERSISTENCE_FAILED,
        http_status: StatusCode::INTERNAL_SERVER_ERROR,
        code: 1302,
    },
    ErrorDescriptor {
        glossary_key: GLOSSARY_KEY_ENTITY_DOES_NOT_EXIST,
        http_status: StatusCode::NOT_FOUND,
        code: 1303,
    },
    ErrorDescriptor {
        glossary_key: GLOSSARY_KEY_MODIFICATION_OF_IMMUTABLE_FIELD_PROHIBITED,
        http_status: StatusCode::BAD_REQUEST,
        code: 1304,
    },
    ErrorDescriptor {
        glossary_key: GLOSSARY_KEY_INVALID_FIELD_TYPE,
        http_status: StatusCode::BAD_REQUEST,
        code: 1305,
    },
    ErrorDescriptor {
        glossary_key: GLOSSARY_KEY_INVALID_FIELD_VALUE,
        http_status: StatusCode::BAD_REQUEST,
        code: 1306,
    },
    ErrorDescriptor {
        glossary_key: GLOSSARY_KEY_REQUIRED_FIELD_IS_MISSING,
        http_status: StatusCode::BAD_REQUEST,
        code: 1307,
    },
    ErrorDescriptor {
        glossary_key: GLOSSARY_KEY_ENTITY_NOT_FOUND_OR_IDENTIFIER_IS_NOT_CREATABLE,
        http_status: StatusCode::BAD_REQUEST,
        code: 1308,
    },
    ErrorDescriptor {
        glossary_key: GLOSSARY_KEY_PERSISTENCE_FAILED_DUPLICATE_ENTRY,
        http_status: StatusCode::BAD_REQUEST,
        code: 1309,
    },
    ErrorDescriptor {
        glossary_key: GLOSSARY_KEY_MISSING_IDENTIFIER,
        http_status: StatusCode::BAD_REQUEST,
        code: 1310,
    },
];

/// Look up the descriptor for a glossary key. `None` means the caller passed
/// an identifier outside the taxonomy, which is a programmer error.
pub fn descriptor_for(glossary_key: &str) -> Option<&'static ErrorDescriptor> {
    ERROR_TAXONOMY
        .iter()
        .find(|d| d.glossary_key == glossary_key)
}
