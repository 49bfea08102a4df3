//! Property-based tests

#[path = "properties/bucket_name.rs"]
mod bucket_name;
