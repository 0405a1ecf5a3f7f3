pub mod certification_mappings;
pub mod courses;
