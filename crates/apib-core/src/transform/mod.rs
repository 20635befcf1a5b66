pub mod blueprint_to_swagger;
pub mod body_schema;
pub mod classify;
pub mod definitions;
pub mod naming;
pub mod operation;
pub mod parameters;
pub mod paths;
pub mod security;

pub use blueprint_to_swagger::convert;
