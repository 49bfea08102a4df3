//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on parsed data.

mod reserved_keys;

pub use reserved_keys::{
    check_template, find_reserved_keys, is_reserved_key, ReservedKeyViolation,
    RESERVED_ENV_KEYS, RESERVED_ENV_PREFIX,
};
