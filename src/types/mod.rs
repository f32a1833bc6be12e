pub mod profile;
pub mod scoring;
