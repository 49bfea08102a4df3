//! Typed `aws ... --output json` responses
//!
//! Only the fields the cleanup and deploy flows read are modeled; everything
//! else in the payload is ignored. Absent arrays decode as empty.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStacks {
    #[serde(default)]
    pub stacks: Vec<Stack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stack {
    pub stack_name: String,
    pub stack_status: String,
    #[serde(default)]
    pub outputs: Vec<Output>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    pub output_key: String,
    #[serde(default)]
    pub output_value: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListBuckets {
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bucket {
    pub name: String,
    #[serde(default)]
    pub creation_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListFunctions {
    #[serde(default)]
    pub functions: Vec<Function>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Function {
    pub function_name: String,
    #[serde(default)]
    pub runtime: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GetRestApis {
    #[serde(default)]
    pub items: Vec<RestApi>,
}

#[derive(Debug, Deserialize)]
pub struct RestApi {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DescribeRepositories {
    #[serde(default)]
    pub repositories: Vec<Repository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub repository_name: String,
    #[serde(default)]
    pub repository_uri: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeLogGroups {
    #[serde(default)]
    pub log_groups: Vec<LogGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogGroup {
    pub log_group_name: String,
    #[serde(default)]
    pub stored_bytes: Option<u64>,
}

/// `s3api list-object-versions`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListObjectVersions {
    #[serde(default)]
    pub versions: Vec<ObjectVersion>,
    #[serde(default)]
    pub delete_markers: Vec<ObjectVersion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectVersion {
    pub key: String,
    pub version_id: String,
}

/// `--delete` payload for `s3api delete-objects`
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteObjects<'a> {
    pub objects: &'a [ObjectVersion],
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_decode_with_optional_outputs() {
        let json = r#"{"Stacks":[{"StackName":"travel-planner","StackStatus":"CREATE_COMPLETE",
            "CreationTime":"2024-01-01T00:00:00Z",
            "Outputs":[{"OutputKey":"ApiUrl","OutputValue":"https://x","Description":"API"}]},
            {"StackName":"other","StackStatus":"UPDATE_COMPLETE"}]}"#;

        let parsed: DescribeStacks = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.stacks.len(), 2);
        assert_eq!(parsed.stacks[0].outputs[0].output_key, "ApiUrl");
        assert!(parsed.stacks[1].outputs.is_empty());
    }

    #[test]
    fn missing_version_arrays_are_empty() {
        let parsed: ListObjectVersions = serde_json::from_str("{}").unwrap();
        assert!(parsed.versions.is_empty());
        assert!(parsed.delete_markers.is_empty());
    }

    #[test]
    fn delete_payload_shape() {
        let objects = vec![ObjectVersion {
            key: "a.txt".to_string(),
            version_id: "v1".to_string(),
        }];
        let payload = DeleteObjects {
            objects: &objects,
            quiet: true,
        };

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"Objects":[{"Key":"a.txt","VersionId":"v1"}],"Quiet":true}"#
        );
    }

    #[test]
    fn log_groups_use_camel_case() {
        let json = r#"{"logGroups":[{"logGroupName":"/aws/lambda/x","storedBytes":42}]}"#;
        let parsed: DescribeLogGroups = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.log_groups[0].log_group_name, "/aws/lambda/x");
        assert_eq!(parsed.log_groups[0].stored_bytes, Some(42));
    }
}
