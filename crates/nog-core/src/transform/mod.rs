pub mod base_url;
pub mod collisions;
pub mod name_normalizer;
pub mod operations;
pub mod return_type;
pub mod schema_resolver;
pub mod spec_to_ir;

pub use spec_to_ir::transform;
