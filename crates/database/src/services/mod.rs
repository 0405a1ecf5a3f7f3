pub mod certification;
pub mod course;
pub mod import;
pub mod seed;
pub mod stats;
