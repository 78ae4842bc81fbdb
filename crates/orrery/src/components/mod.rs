pub mod body;
pub mod label;
