//! Reserved Key Policy
//!
//! The function runtime sets a handful of environment variables itself and
//! rejects templates that try to define them. Checking the built template
//! locally avoids a remote deploy that is guaranteed to fail.

use std::path::Path;

use serde_yaml_ng::Value;

use crate::error::{StackpilotError, StackpilotResult};

/// Keys the function runtime reserves
pub const RESERVED_ENV_KEYS: &[&str] = &[
    "_HANDLER",
    "_X_AMZN_TRACE_ID",
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "AWS_EXECUTION_ENV",
    "AWS_ACCESS_KEY",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
    "LAMBDA_TASK_ROOT",
    "LAMBDA_RUNTIME_DIR",
];

/// Every key with this prefix is reserved
pub const RESERVED_ENV_PREFIX: &str = "AWS_LAMBDA_";

/// A reserved key found in the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedKeyViolation {
    pub key: String,
    /// Where the key was set, e.g. `Globals.Function` or `Resources.ApiFn`
    pub location: String,
}

pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_ENV_KEYS.contains(&key) || key.starts_with(RESERVED_ENV_PREFIX)
}

/// Find reserved keys in a parsed template
pub fn find_reserved_keys(template: &Value) -> Vec<ReservedKeyViolation> {
    let mut violations = Vec::new();

    if let Some(globals) = field(template, "Globals").and_then(|g| field(g, "Function")) {
        collect_env_keys(globals, "Globals.Function", &mut violations);
    }

    if let Some(Value::Mapping(resources)) = field(template, "Resources") {
        for (name, resource) in resources {
            let Some(name) = untag(name).as_str() else {
                continue;
            };
            if let Some(props) = field(resource, "Properties") {
                collect_env_keys(props, &format!("Resources.{}", name), &mut violations);
            }
        }
    }

    violations
}

/// Parse `content` and fail on the first reserved key
pub fn check_template(path: &Path, content: &str) -> StackpilotResult<()> {
    let template: Value =
        serde_yaml_ng::from_str(content).map_err(|e| StackpilotError::TemplateParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    match find_reserved_keys(&template).into_iter().next() {
        Some(violation) => Err(StackpilotError::ReservedKeyConflict {
            key: violation.key,
            location: violation.location,
        }),
        None => Ok(()),
    }
}

fn collect_env_keys(owner: &Value, location: &str, out: &mut Vec<ReservedKeyViolation>) {
    let Some(Value::Mapping(vars)) = field(owner, "Environment").and_then(|e| field(e, "Variables"))
    else {
        return;
    };

    for key in vars.keys() {
        if let Some(key) = untag(key).as_str() {
            if is_reserved_key(key) {
                out.push(ReservedKeyViolation {
                    key: key.to_string(),
                    location: location.to_string(),
                });
            }
        }
    }
}

fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    untag(value).get(key).map(untag)
}

// CloudFormation short-form functions (!Ref, !Sub, ...) arrive as tagged values.
fn untag(mut value: &Value) -> &Value {
    while let Value::Tagged(tagged) = value {
        value = &tagged.value;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN: &str = r#"
AWSTemplateFormatVersion: '2010-09-09'
Transform: AWS::Serverless-2016-10-31
Globals:
  Function:
    Timeout: 30
    Environment:
      Variables:
        OPENAI_MODEL_NAME: !Ref ModelName
Resources:
  ApiGatewayFn:
    Type: AWS::Serverless::Function
    Properties:
      Handler: main.handler
      Environment:
        Variables:
          DOWNSTREAM_MODE: LAMBDA
          INTENT_SERVICE_LAMBDA: !Sub "${AWS::StackName}-intent"
"#;

    #[test]
    fn clean_template_passes() {
        assert!(check_template(Path::new("template.yaml"), CLEAN).is_ok());
    }

    #[test]
    fn detects_reserved_key_in_globals() {
        let template = r#"
Globals:
  Function:
    Environment:
      Variables:
        AWS_REGION: !Ref AWS::Region
Resources: {}
"#;
        let err = check_template(Path::new("template.yaml"), template).unwrap_err();
        match err {
            StackpilotError::ReservedKeyConflict { key, location } => {
                assert_eq!(key, "AWS_REGION");
                assert_eq!(location, "Globals.Function");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn detects_lambda_prefixed_key_in_resource() {
        let template = r#"
Resources:
  SharedServicesFn:
    Type: AWS::Serverless::Function
    Properties:
      Environment:
        Variables:
          AWS_LAMBDA_FUNCTION_NAME: shared
"#;
        let value: Value = serde_yaml_ng::from_str(template).unwrap();
        let violations = find_reserved_keys(&value);
        assert_eq!(
            violations,
            vec![ReservedKeyViolation {
                key: "AWS_LAMBDA_FUNCTION_NAME".to_string(),
                location: "Resources.SharedServicesFn".to_string(),
            }]
        );
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let err = check_template(Path::new("t.yaml"), "Resources: [unclosed").unwrap_err();
        assert!(matches!(err, StackpilotError::TemplateParse { .. }));
    }

    #[test]
    fn similar_names_are_not_reserved() {
        assert!(!is_reserved_key("AWS_REGION_NAME"));
        assert!(!is_reserved_key("MY_AWS_REGION"));
        assert!(is_reserved_key("AWS_LAMBDA_LOG_GROUP_NAME"));
    }
}
