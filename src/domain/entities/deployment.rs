//! Deployment parameters entity
//!
//! Built once at the start of `deploy` from the resolved settings and passed
//! immutably to the deploy use case.

use chrono::{DateTime, Utc};

/// Maximum length of an S3 bucket name
pub const MAX_BUCKET_NAME_LEN: usize = 63;

/// Everything the deploy tool needs for one invocation
#[derive(Clone, PartialEq, Eq)]
pub struct DeploymentParameters {
    pub stack_name: String,
    pub region: String,
    pub owner: String,
    pub bucket_name: String,
    pub credential: String,
    pub model: String,
    pub profile: Option<String>,
}

impl DeploymentParameters {
    /// Whether the credential is usable (non-empty after trimming)
    pub fn has_credential(&self) -> bool {
        !self.credential.trim().is_empty()
    }
}

// Hand-written so the credential never ends up in logs.
impl std::fmt::Debug for DeploymentParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeploymentParameters")
            .field("stack_name", &self.stack_name)
            .field("region", &self.region)
            .field("owner", &self.owner)
            .field("bucket_name", &self.bucket_name)
            .field("credential", &"<redacted>")
            .field("model", &self.model)
            .field("profile", &self.profile)
            .finish()
    }
}

/// Derive the bucket name `{prefix}-{owner}-{region}-{timestamp}`.
///
/// The result is always a valid S3 bucket name: lowercase `[a-z0-9-]`,
/// no leading, trailing or repeated `-`, at most 63 characters.
pub fn bucket_name(prefix: &str, owner: &str, region: &str, at: DateTime<Utc>) -> String {
    let timestamp = at.format("%Y%m%d%H%M%S").to_string();
    let raw = format!("{}-{}-{}-{}", prefix, owner, region, timestamp);

    let mut name = String::with_capacity(raw.len());
    for c in raw.chars() {
        let c = c.to_ascii_lowercase();
        let c = if c.is_ascii_lowercase() || c.is_ascii_digit() {
            c
        } else {
            '-'
        };
        if c == '-' && (name.is_empty() || name.ends_with('-')) {
            continue;
        }
        name.push(c);
    }

    if name.len() > MAX_BUCKET_NAME_LEN {
        // Keep the timestamp: it is what makes the name unique.
        let keep = MAX_BUCKET_NAME_LEN - timestamp.len() - 1;
        let head = name[..name.len() - timestamp.len() - 1].to_string();
        let head: String = head.chars().take(keep).collect();
        name = format!("{}-{}", head.trim_end_matches('-'), timestamp);
    }

    let trimmed = name.trim_end_matches('-');
    if trimmed.len() < 3 {
        return format!("stackpilot-{}", timestamp);
    }
    trimmed.to_string()
}
