pub mod operation;
pub mod parameter;
pub mod schema;
pub mod security;
pub mod spec;

pub use operation::{Operation, PathItem, Response};
pub use parameter::{Parameter, ParameterLocation};
pub use schema::{DEFINITIONS_PREFIX, Schema, SchemaOrRef, SchemaType};
pub use security::{ApiKeyLocation, SecurityRequirement, SecurityScheme};
pub use spec::{Info, SwaggerSpec, Tag};

/// Version string written to every converted document.
pub const SWAGGER_VERSION: &str = "2.0";
