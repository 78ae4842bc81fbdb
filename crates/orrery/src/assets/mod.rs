pub mod catalog;
pub mod manifest;
pub mod measure;
