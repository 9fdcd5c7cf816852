/// Append designer-role instructions to the prompt.
pub fn append_instructions(prompt: &mut String, idea: &str) {
    prompt.push_str("Act as the **DESIGNER**.\n");
    prompt.push_str(&format!("User Goal: \"{idea}\"\n"));
    prompt.push_str(
        "Tasks:\n\
         1. Interpret the idea.\n\
         2. Create a high-level system architecture.\n\
         3. Define modules and data flow.\n\
         Output Format: Markdown with clear headers.\n",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designer_instructions_content() {
        let mut out = String::new();
        append_instructions(&mut out, "track water intake");
        assert!(out.contains("**DESIGNER**"));
        assert!(out.contains("User Goal: \"track water intake\""));
        assert!(out.contains("high-level system architecture"));
        assert!(out.contains("modules and data flow"));
        assert!(out.contains("Markdown"));
    }
}
