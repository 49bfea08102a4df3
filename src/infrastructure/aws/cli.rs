//! AWS CLI adapter
//!
//! Every call is `aws <service> <operation> ... --region R --output json`
//! (plus `--profile` when set), decoded into the types in `responses`.

use serde::de::DeserializeOwned;

use crate::domain::entities::{ResourceDescriptor, StackOutput, StackOutputs};
use crate::domain::ports::{
    CloudProvider, CommandOutput, CommandRunner, CommandSpec, ProviderError, ProviderResult,
};
use crate::domain::value_objects::{ResourceCategory, StackStatus};

use super::responses::{
    DeleteObjects, DescribeLogGroups, DescribeRepositories, DescribeStacks, GetRestApis,
    ListBuckets, ListFunctions, ListObjectVersions, ObjectVersion,
};

pub const AWS_PROGRAM: &str = "aws";

/// `delete-objects` accepts at most this many keys per call
pub const DELETE_BATCH: usize = 1000;

/// Upper bound on list/delete rounds for one bucket
const MAX_BATCHES: usize = 10_000;

/// Which version listing to drain
#[derive(Debug, Clone, Copy)]
enum VersionKind {
    Versions,
    DeleteMarkers,
}

/// The `aws` CLI bound to one region
pub struct AwsCli<R: CommandRunner> {
    runner: R,
    region: String,
    profile: Option<String>,
}

impl<R: CommandRunner> AwsCli<R> {
    pub fn new(runner: R, region: impl Into<String>) -> Self {
        Self {
            runner,
            region: region.into(),
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }

    fn spec<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> CommandSpec {
        let mut spec = CommandSpec::new(AWS_PROGRAM)
            .args(args)
            .args(["--region", self.region.as_str(), "--output", "json"]);
        if let Some(profile) = &self.profile {
            spec = spec.args(["--profile", profile.as_str()]);
        }
        spec
    }

    fn call<'a>(&self, args: impl IntoIterator<Item = &'a str>) -> ProviderResult<CommandOutput> {
        let spec = self.spec(args);
        let output = self
            .runner
            .run(&spec)
            .map_err(|e| ProviderError::Failed(e.to_string()))?;

        if output.is_success() {
            Ok(output)
        } else if is_not_found(&output) {
            Err(ProviderError::NotFound(output.summary()))
        } else {
            Err(ProviderError::Failed(output.summary()))
        }
    }

    fn query<'a, T>(&self, args: impl IntoIterator<Item = &'a str>) -> ProviderResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let output = self.call(args)?;
        if output.stdout.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&output.stdout)
            .map_err(|e| ProviderError::Failed(format!("unexpected aws output: {}", e)))
    }

    fn describe_stack(&self, stack: &str) -> ProviderResult<Option<super::responses::Stack>> {
        match self.query::<DescribeStacks>(["cloudformation", "describe-stacks", "--stack-name", stack]) {
            Ok(parsed) => Ok(parsed.stacks.into_iter().next()),
            Err(ProviderError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// List and delete one kind of version in batches until none are left.
    fn drain_versions(&self, bucket: &str, kind: VersionKind) -> ProviderResult<usize> {
        let max_items = DELETE_BATCH.to_string();
        let mut removed = 0;

        for _ in 0..MAX_BATCHES {
            let listing: ListObjectVersions = self.query([
                "s3api",
                "list-object-versions",
                "--bucket",
                bucket,
                "--max-items",
                max_items.as_str(),
            ])?;
            let batch: Vec<ObjectVersion> = match kind {
                VersionKind::Versions => listing.versions,
                VersionKind::DeleteMarkers => listing.delete_markers,
            };
            if batch.is_empty() {
                return Ok(removed);
            }

            for chunk in batch.chunks(DELETE_BATCH) {
                let payload = serde_json::to_string(&DeleteObjects {
                    objects: chunk,
                    quiet: true,
                })
                .map_err(|e| ProviderError::Failed(e.to_string()))?;
                self.call([
                    "s3api",
                    "delete-objects",
                    "--bucket",
                    bucket,
                    "--delete",
                    payload.as_str(),
                ])?;
                removed += chunk.len();
            }
            tracing::debug!(bucket, ?kind, removed, "deleted version batch");
        }

        Err(ProviderError::Failed(format!(
            "bucket {} still has object versions after {} batches",
            bucket, MAX_BATCHES
        )))
    }
}

/// The CLI reports missing resources only through its error text.
fn is_not_found(output: &CommandOutput) -> bool {
    const MARKERS: [&str; 5] = [
        "does not exist",
        "NoSuchBucket",
        "ResourceNotFoundException",
        "RepositoryNotFoundException",
        "NotFoundException",
    ];
    MARKERS.iter().any(|m| output.mentions(m))
}

impl<R: CommandRunner> CloudProvider for AwsCli<R> {
    fn region(&self) -> &str {
        &self.region
    }

    fn list(&self, category: ResourceCategory) -> ProviderResult<Vec<ResourceDescriptor>> {
        let resources = match category {
            ResourceCategory::Stack => self
                .query::<DescribeStacks>(["cloudformation", "describe-stacks"])?
                .stacks
                .into_iter()
                .filter(|s| !StackStatus::new(s.stack_status.as_str()).is_delete_complete())
                .map(|s| ResourceDescriptor::new(s.stack_name).with_detail(s.stack_status))
                .collect(),
            ResourceCategory::Bucket => self
                .query::<ListBuckets>(["s3api", "list-buckets"])?
                .buckets
                .into_iter()
                .map(|b| {
                    let descriptor = ResourceDescriptor::new(b.name);
                    match b.creation_date {
                        Some(created) => descriptor.with_detail(created),
                        None => descriptor,
                    }
                })
                .collect(),
            ResourceCategory::Function => self
                .query::<ListFunctions>(["lambda", "list-functions"])?
                .functions
                .into_iter()
                .map(|f| {
                    let descriptor = ResourceDescriptor::new(f.function_name);
                    match f.runtime {
                        Some(runtime) => descriptor.with_detail(runtime),
                        None => descriptor,
                    }
                })
                .collect(),
            ResourceCategory::Api => self
                .query::<GetRestApis>(["apigateway", "get-rest-apis"])?
                .items
                .into_iter()
                .map(|a| ResourceDescriptor::new(a.name).with_detail(a.id))
                .collect(),
            ResourceCategory::Registry => self
                .query::<DescribeRepositories>(["ecr", "describe-repositories"])?
                .repositories
                .into_iter()
                .map(|r| {
                    let descriptor = ResourceDescriptor::new(r.repository_name);
                    match r.repository_uri {
                        Some(uri) => descriptor.with_detail(uri),
                        None => descriptor,
                    }
                })
                .collect(),
            ResourceCategory::LogGroup => self
                .query::<DescribeLogGroups>(["logs", "describe-log-groups"])?
                .log_groups
                .into_iter()
                .map(|g| {
                    let descriptor = ResourceDescriptor::new(g.log_group_name);
                    match g.stored_bytes {
                        Some(bytes) => descriptor.with_detail(format!("{} bytes", bytes)),
                        None => descriptor,
                    }
                })
                .collect(),
        };
        Ok(resources)
    }

    fn stack_status(&self, stack: &str) -> ProviderResult<Option<StackStatus>> {
        Ok(self
            .describe_stack(stack)?
            .map(|s| StackStatus::new(s.stack_status)))
    }

    fn stack_outputs(&self, stack: &str) -> ProviderResult<StackOutputs> {
        let found = self
            .describe_stack(stack)?
            .ok_or_else(|| ProviderError::NotFound(format!("stack {}", stack)))?;
        Ok(StackOutputs::new(
            found
                .outputs
                .into_iter()
                .map(|o| StackOutput {
                    key: o.output_key,
                    value: o.output_value,
                    description: o.description,
                })
                .collect(),
        ))
    }

    fn delete_stack(&self, stack: &str) -> ProviderResult<()> {
        self.call(["cloudformation", "delete-stack", "--stack-name", stack])
            .map(|_| ())
    }

    fn empty_bucket(&self, bucket: &str) -> ProviderResult<()> {
        let url = format!("s3://{}", bucket);
        self.call(["s3", "rm", url.as_str(), "--recursive"]).map(|_| ())
    }

    fn delete_object_versions(&self, bucket: &str) -> ProviderResult<usize> {
        self.drain_versions(bucket, VersionKind::Versions)
    }

    fn delete_delete_markers(&self, bucket: &str) -> ProviderResult<usize> {
        self.drain_versions(bucket, VersionKind::DeleteMarkers)
    }

    fn delete_bucket(&self, bucket: &str) -> ProviderResult<()> {
        self.call(["s3api", "delete-bucket", "--bucket", bucket])
            .map(|_| ())
    }

    fn delete_registry(&self, registry: &str) -> ProviderResult<()> {
        self.call([
            "ecr",
            "delete-repository",
            "--repository-name",
            registry,
            "--force",
        ])
        .map(|_| ())
    }

    fn delete_log_group(&self, group: &str) -> ProviderResult<()> {
        self.call(["logs", "delete-log-group", "--log-group-name", group])
            .map(|_| ())
    }

    fn delete_function(&self, function: &str) -> ProviderResult<()> {
        self.call(["lambda", "delete-function", "--function-name", function])
            .map(|_| ())
    }
}
