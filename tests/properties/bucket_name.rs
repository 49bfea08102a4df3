use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use stackpilot::domain::entities::{bucket_name, MAX_BUCKET_NAME_LEN};

fn is_valid_bucket_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    (3..=MAX_BUCKET_NAME_LEN).contains(&name.len())
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        && bytes[0].is_ascii_alphanumeric()
        && bytes[bytes.len() - 1].is_ascii_alphanumeric()
        && !name.contains("--")
}

proptest! {
    #[test]
    fn derived_names_are_valid_s3_names(
        prefix in "\\PC{0,40}",
        owner in "\\PC{0,80}",
        region in "[a-z]{2}-[a-z]{4,9}-[1-3]",
        secs in 0i64..4_102_444_800,
    ) {
        let at = Utc.timestamp_opt(secs, 0).unwrap();
        let name = bucket_name(&prefix, &owner, &region, at);
        prop_assert!(is_valid_bucket_name(&name), "invalid bucket name {:?}", name);
    }

    #[test]
    fn derived_names_keep_the_timestamp(
        owner in "[A-Za-z0-9._@-]{0,80}",
        secs in 0i64..4_102_444_800,
    ) {
        let at = Utc.timestamp_opt(secs, 0).unwrap();
        let name = bucket_name("travel-planner", &owner, "ap-southeast-1", at);
        let timestamp = at.format("%Y%m%d%H%M%S").to_string();
        prop_assert!(name.ends_with(&timestamp), "{:?} lost {}", name, timestamp);
    }
}
