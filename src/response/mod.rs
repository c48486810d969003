//! Response mapping: taxonomy, envelope, and the domain-to-wire mapper.

pub mod envelope;
pub mod mapper;
pub mod taxonomy;

pub use envelope::{ApiError, Pagination, ResponseEnvelope, CONTENT_TYPE_APP_JSON};
pub use mapper::{
    DynamicEntity, DynamicEntityCollection, EntityError, GlossaryStorage, LocaleProvider,
    RequestContext, ResponseMapper,
};
pub use taxonomy::{descriptor_for, ErrorDescriptor, ERROR_TAXONOMY};
