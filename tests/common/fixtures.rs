//! Reusable templates and stub bodies.

/// Template with one function and a short-form intrinsic tag
pub const TEMPLATE: &str = r#"AWSTemplateFormatVersion: '2010-09-09'
Transform: AWS::Serverless-2016-10-31
Parameters:
  Model:
    Type: String
Resources:
  ApiGatewayFn:
    Type: AWS::Serverless::Function
    Properties:
      Handler: app.handler
      Environment:
        Variables:
          MODEL: !Ref Model
"#;

/// Template setting a key the runtime reserves
pub const TEMPLATE_WITH_RESERVED_KEY: &str = r#"Resources:
  ApiGatewayFn:
    Type: AWS::Serverless::Function
    Properties:
      Environment:
        Variables:
          AWS_REGION: !Ref AWS::Region
"#;

pub const MANIFEST: &str = "requests==2.32.3\n";

/// `describe-stacks` response for a healthy stack exposing `ApiUrl`
pub const STACK_WITH_API_URL: &str = r#"{
  "Stacks": [
    {
      "StackName": "travel-planner",
      "StackStatus": "UPDATE_COMPLETE",
      "Outputs": [
        {"OutputKey": "ApiUrl", "OutputValue": "https://x.example/prod"},
        {"OutputKey": "BucketName", "OutputValue": "travel-planner-dev-bucket"}
      ]
    }
  ]
}"#;

/// `aws` stub answering `describe-stacks` with `response` and every other
/// query with an empty document
pub fn aws_describing(response: &str) -> String {
    format!(
        "case \"$*\" in\n  *\"cloudformation describe-stacks\"*)\n    cat <<'JSON'\n{}\nJSON\n    ;;\n  *)\n    echo '{{}}'\n    ;;\nesac",
        response
    )
}

/// `aws` stub for a stack stuck in `status`: it disappears once
/// `delete-stack` has been called
pub fn aws_broken_stack(status: &str) -> String {
    format!(
        r#"case "$*" in
  *"cloudformation delete-stack"*)
    : > "$STUB_STATE/deleted"
    ;;
  *"cloudformation describe-stacks"*)
    if [ -f "$STUB_STATE/deleted" ]; then
      echo "An error occurred (ValidationError) when calling the DescribeStacks operation: Stack with id travel-planner does not exist" >&2
      exit 254
    fi
    echo '{{"Stacks": [{{"StackName": "travel-planner", "StackStatus": "{}"}}]}}'
    ;;
  *)
    echo '{{}}'
    ;;
esac"#,
        status
    )
}

/// `sam` stub whose layer build leaves `layer_files` in the layer output
/// (none: an empty output directory) and whose function build exits with
/// `functions_exit`
pub fn sam_build(layer_files: &[&str], functions_exit: i32) -> String {
    let mut body = String::from(
        "if [ \"$1\" = build ] && [ \"$2\" = SharedDepsLayer ]; then\n  mkdir -p .aws-sam/build/SharedDepsLayer/python\n",
    );
    for file in layer_files {
        body.push_str(&format!(
            "  echo x > .aws-sam/build/SharedDepsLayer/python/{}\n",
            file
        ));
    }
    body.push_str("  exit 0\nfi\n");
    body.push_str("if [ \"$1\" = build ]; then\n");
    body.push_str("  echo \"manifest: $(cat api-gateway/requirements.txt)\" >> \"$STUB_LOG\"\n");
    body.push_str("  mkdir -p .aws-sam/build\n  cp template.yaml .aws-sam/build/template.yaml\n");
    body.push_str(&format!("  exit {}\nfi\n", functions_exit));
    body.push_str("echo \"Successfully created/updated stack\"\n");
    body
}
