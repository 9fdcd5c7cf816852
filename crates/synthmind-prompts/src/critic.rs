/// Append critic-role instructions, embedding both upstream outputs verbatim.
pub fn append_instructions(prompt: &mut String, design: &str, code: &str) {
    prompt.push_str("Act as the **CRITIC**.\n");
    prompt.push_str("Review the Design: ");
    prompt.push_str(design);
    prompt.push('\n');
    prompt.push_str("Review the Code: ");
    prompt.push_str(code);
    prompt.push('\n');
    prompt.push_str(
        "Tasks:\n\
         1. Identify potential flaws or edge cases.\n\
         2. Suggest improvements for transparency or efficiency.\n\
         3. Give a final \"Reasoning Summary\".\n",
    );
}
