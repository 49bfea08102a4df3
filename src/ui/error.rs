use stackpilot::StackpilotError;

use crate::ui::blocks::error::ErrorBlock;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut block = ErrorBlock::new(err.to_string());

    // Context added with `anyhow::Context` sits above the root cause.
    for cause in err.chain().skip(1) {
        block = block.with_detail(format!("caused by: {}", cause));
    }

    if let Some(fix) = err
        .downcast_ref::<StackpilotError>()
        .and_then(StackpilotError::fix_hint)
    {
        block = block.with_fix(fix);
    }

    block.render(supports_color, supports_unicode)
}

fn error_document(err: &anyhow::Error) -> serde_json::Value {
    let fix = err
        .downcast_ref::<StackpilotError>()
        .and_then(StackpilotError::fix_hint);
    serde_json::json!({
        "event": "error",
        "message": format!("{:#}", err),
        "fix": fix,
    })
}

pub fn print_error(err: &anyhow::Error, json: bool, supports_color: bool, supports_unicode: bool) {
    if json {
        let _ = crate::ui::json::emit(&error_document(err));
        return;
    }

    eprint!("{}", format_error(err, supports_color, supports_unicode));
}
