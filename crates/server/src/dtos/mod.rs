pub mod admin;
pub mod certification;
pub mod common;
pub mod course;
