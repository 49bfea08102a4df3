//! In-memory port implementations for use case tests

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::domain::entities::{ResourceDescriptor, StackOutput, StackOutputs};
use crate::domain::ports::{
    BuildEvent, BuildRequest, CleanupEvent, CloudProvider, CommandError, CommandOutput,
    Confirmer, DeployEvent, DeployRequest, EventSink, ProviderError, ProviderResult,
    ServerlessTool, ToolLocator,
};
use crate::domain::value_objects::{ResourceCategory, StackStatus};
use crate::error::StackpilotResult;

pub struct FakeLocator {
    present: BTreeSet<String>,
}

impl FakeLocator {
    pub fn with(tools: &[&str]) -> Self {
        Self {
            present: tools.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ToolLocator for FakeLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        self.present
            .contains(tool)
            .then(|| PathBuf::from("/usr/local/bin").join(tool))
    }
}

/// Answers prompts from a script; an exhausted script answers "no"
#[derive(Default)]
pub struct ScriptedConfirmer {
    answers: RefCell<VecDeque<bool>>,
    pub prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirmer {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.borrow().len()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> StackpilotResult<bool> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.answers.borrow_mut().pop_front().unwrap_or(false))
    }
}

/// Records every event of every flow
#[derive(Default)]
pub struct RecordingSink {
    pub build: RefCell<Vec<BuildEvent>>,
    pub deploy: RefCell<Vec<DeployEvent>>,
    pub cleanup: RefCell<Vec<CleanupEvent>>,
}

impl EventSink<BuildEvent> for RecordingSink {
    fn on_event(&self, event: BuildEvent) {
        self.build.borrow_mut().push(event);
    }
}

impl EventSink<DeployEvent> for RecordingSink {
    fn on_event(&self, event: DeployEvent) {
        self.deploy.borrow_mut().push(event);
    }
}

impl EventSink<CleanupEvent> for RecordingSink {
    fn on_event(&self, event: CleanupEvent) {
        self.cleanup.borrow_mut().push(event);
    }
}

/// Serverless tool double
///
/// Layer builds succeed and, when `layer_output` is set, leave a file in
/// `<build_dir>/<layer>/<subdir>`. The function build records the contents
/// of the watched manifests as they were at that moment.
#[derive(Default)]
pub struct FakeTool {
    pub builds: RefCell<Vec<BuildRequest>>,
    pub deploys: RefCell<Vec<DeployRequest>>,
    pub manifests_seen: RefCell<Vec<String>>,
    layer_output: Option<String>,
    empty_layers: bool,
    watched: Vec<PathBuf>,
    failing: BTreeSet<String>,
    deploy_output: Option<CommandOutput>,
}

impl FakeTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer_output(mut self, subdir: &str) -> Self {
        self.layer_output = Some(subdir.to_string());
        self
    }

    /// Layer builds create the output directory but leave it empty
    pub fn with_empty_layer_output(mut self, subdir: &str) -> Self {
        self.layer_output = Some(subdir.to_string());
        self.empty_layers = true;
        self
    }

    pub fn watching(mut self, manifests: &[PathBuf]) -> Self {
        self.watched = manifests.to_vec();
        self
    }

    /// Fail the build of `resource` (`"functions"` for the function build)
    pub fn failing(mut self, resource: &str) -> Self {
        self.failing.insert(resource.to_string());
        self
    }

    pub fn with_deploy_output(mut self, output: CommandOutput) -> Self {
        self.deploy_output = Some(output);
        self
    }

    pub fn deploy_count(&self) -> usize {
        self.deploys.borrow().len()
    }
}

impl ServerlessTool for FakeTool {
    fn build(&self, request: &BuildRequest) -> Result<CommandOutput, CommandError> {
        self.builds.borrow_mut().push(request.clone());
        let resource = request
            .resource
            .clone()
            .unwrap_or_else(|| "functions".to_string());

        if request.resource.is_none() {
            for manifest in &self.watched {
                let content = std::fs::read_to_string(manifest).unwrap_or_default();
                self.manifests_seen.borrow_mut().push(content);
            }
        }

        if self.failing.contains(&resource) {
            return Ok(CommandOutput::failure(1, format!("Build Failed: {}", resource)));
        }

        if let (Some(layer), Some(subdir)) = (&request.resource, &self.layer_output) {
            let dir = request.build_dir.join(layer).join(subdir);
            std::fs::create_dir_all(&dir).map_err(|source| CommandError::Spawn {
                program: "sam".to_string(),
                source,
            })?;
            if !self.empty_layers {
                std::fs::write(dir.join("marker.txt"), "ok").map_err(|source| {
                    CommandError::Spawn {
                        program: "sam".to_string(),
                        source,
                    }
                })?;
            }
        }

        Ok(CommandOutput::success("Build Succeeded"))
    }

    fn deploy(&self, request: &DeployRequest) -> Result<CommandOutput, CommandError> {
        self.deploys.borrow_mut().push(request.clone());
        Ok(self
            .deploy_output
            .clone()
            .unwrap_or_else(|| CommandOutput::success("Successfully created/updated stack")))
    }
}

/// Cloud provider double backed by in-memory lists
pub struct FakeProvider {
    region: String,
    resources: RefCell<BTreeMap<ResourceCategory, Vec<ResourceDescriptor>>>,
    failing_lists: BTreeSet<ResourceCategory>,
    failing_deletes: BTreeSet<String>,
    status_sequences: RefCell<BTreeMap<String, VecDeque<String>>>,
    stack_functions: BTreeMap<String, Vec<String>>,
    outputs: Option<StackOutputs>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            region: "ap-southeast-1".to_string(),
            resources: RefCell::new(BTreeMap::new()),
            failing_lists: BTreeSet::new(),
            failing_deletes: BTreeSet::new(),
            status_sequences: RefCell::new(BTreeMap::new()),
            stack_functions: BTreeMap::new(),
            outputs: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with(self, category: ResourceCategory, names: &[&str]) -> Self {
        self.resources.borrow_mut().insert(
            category,
            names.iter().map(|n| ResourceDescriptor::new(*n)).collect(),
        );
        self
    }

    /// A stack with a fixed status
    pub fn with_stack(self, name: &str, status: &str) -> Self {
        self.resources
            .borrow_mut()
            .entry(ResourceCategory::Stack)
            .or_default()
            .push(ResourceDescriptor::new(name).with_detail(status));
        self
    }

    /// Functions that disappear when `stack` is deleted
    pub fn with_stack_functions(mut self, stack: &str, functions: &[&str]) -> Self {
        self.stack_functions.insert(
            stack.to_string(),
            functions.iter().map(|f| f.to_string()).collect(),
        );
        self
    }

    /// Statuses returned by successive `stack_status` calls before the
    /// stack reports as gone
    pub fn with_status_sequence(self, stack: &str, statuses: &[&str]) -> Self {
        self.status_sequences.borrow_mut().insert(
            stack.to_string(),
            statuses.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn failing_list(mut self, category: ResourceCategory) -> Self {
        self.failing_lists.insert(category);
        self
    }

    /// Every delete call naming `name` fails
    pub fn failing_delete(mut self, name: &str) -> Self {
        self.failing_deletes.insert(name.to_string());
        self
    }

    pub fn with_outputs(mut self, outputs: &[(&str, &str)]) -> Self {
        self.outputs = Some(StackOutputs::new(
            outputs
                .iter()
                .map(|(k, v)| StackOutput {
                    key: k.to_string(),
                    value: v.to_string(),
                    description: None,
                })
                .collect(),
        ));
        self
    }

    pub fn calls_matching(&self, prefix: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .cloned()
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn remove(&self, category: ResourceCategory, name: &str) -> ProviderResult<()> {
        if self.failing_deletes.contains(name) {
            return Err(ProviderError::Failed(format!("AccessDenied: {}", name)));
        }
        if let Some(list) = self.resources.borrow_mut().get_mut(&category) {
            list.retain(|r| r.name != name);
        }
        Ok(())
    }
}

impl CloudProvider for FakeProvider {
    fn region(&self) -> &str {
        &self.region
    }

    fn list(&self, category: ResourceCategory) -> ProviderResult<Vec<ResourceDescriptor>> {
        self.record(format!("list {}", category));
        if self.failing_lists.contains(&category) {
            return Err(ProviderError::Failed("ThrottlingException".to_string()));
        }
        Ok(self
            .resources
            .borrow()
            .get(&category)
            .cloned()
            .unwrap_or_default())
    }

    fn stack_status(&self, stack: &str) -> ProviderResult<Option<StackStatus>> {
        self.record(format!("status {}", stack));
        if let Some(sequence) = self.status_sequences.borrow_mut().get_mut(stack) {
            return Ok(sequence.pop_front().map(StackStatus::new));
        }
        Ok(self
            .resources
            .borrow()
            .get(&ResourceCategory::Stack)
            .and_then(|stacks| stacks.iter().find(|s| s.name == stack))
            .map(|s| StackStatus::new(s.detail.clone().unwrap_or_else(|| "CREATE_COMPLETE".to_string()))))
    }

    fn stack_outputs(&self, stack: &str) -> ProviderResult<StackOutputs> {
        self.record(format!("outputs {}", stack));
        self.outputs
            .clone()
            .ok_or_else(|| ProviderError::NotFound(stack.to_string()))
    }

    fn delete_stack(&self, stack: &str) -> ProviderResult<()> {
        self.record(format!("delete-stack {}", stack));
        self.remove(ResourceCategory::Stack, stack)?;
        if let Some(functions) = self.stack_functions.get(stack) {
            if let Some(list) = self
                .resources
                .borrow_mut()
                .get_mut(&ResourceCategory::Function)
            {
                list.retain(|f| !functions.contains(&f.name));
            }
        }
        Ok(())
    }

    fn empty_bucket(&self, bucket: &str) -> ProviderResult<()> {
        self.record(format!("empty-bucket {}", bucket));
        Ok(())
    }

    fn delete_object_versions(&self, bucket: &str) -> ProviderResult<usize> {
        self.record(format!("delete-versions {}", bucket));
        Ok(2)
    }

    fn delete_delete_markers(&self, bucket: &str) -> ProviderResult<usize> {
        self.record(format!("delete-markers {}", bucket));
        Ok(1)
    }

    fn delete_bucket(&self, bucket: &str) -> ProviderResult<()> {
        self.record(format!("delete-bucket {}", bucket));
        self.remove(ResourceCategory::Bucket, bucket)
    }

    fn delete_registry(&self, registry: &str) -> ProviderResult<()> {
        self.record(format!("delete-registry {}", registry));
        self.remove(ResourceCategory::Registry, registry)
    }

    fn delete_log_group(&self, group: &str) -> ProviderResult<()> {
        self.record(format!("delete-log-group {}", group));
        self.remove(ResourceCategory::LogGroup, group)
    }

    fn delete_function(&self, function: &str) -> ProviderResult<()> {
        self.record(format!("delete-function {}", function));
        self.remove(ResourceCategory::Function, function)
    }
}

/// Write `content` to `root/relative`, creating parents
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}
