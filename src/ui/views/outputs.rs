use stackpilot::domain::entities::StackOutputs;

/// One `Key = Value` line per output, in stack order
pub fn render_outputs(outputs: &StackOutputs) -> String {
    outputs
        .iter()
        .map(|output| format!("{} = {}\n", output.key, output.value))
        .collect()
}
