use synthmind_core::{PipelineResult, Role};

use crate::config::OutputFormat;

pub fn render(result: &PipelineResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(result)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Render all three outputs as Markdown sections.
///
/// Failed stages render exactly like successful ones.
pub fn render_text(result: &PipelineResult) -> String {
    let mut out = String::new();
    out.push_str("# SynthMind Ω\n\n");
    out.push_str(&format!("Idea: {}\n", result.idea));

    for role in Role::ALL {
        out.push_str(&format!("\n## {}\n\n", role.label()));
        out.push_str(&format!("Role: {}. {}\n\n", role.label(), role.description()));
        let text = result.get(role).text();
        match role {
            Role::Coder => out.push_str(&fence_code(text)),
            _ => out.push_str(text),
        }
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}

/// Wrap code output in a python fence unless it already carries its own.
fn fence_code(text: &str) -> String {
    if text.contains("```") {
        return text.to_string();
    }
    let mut out = String::from("```python\n");
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n");
    out
}
