/// Append coder-role instructions, embedding the design verbatim.
pub fn append_instructions(prompt: &mut String, design: &str) {
    prompt.push_str("Act as the **CODER**.\n");
    prompt.push_str("Based on this design: ");
    prompt.push_str(design);
    prompt.push('\n');
    prompt.push_str(
        "Tasks:\n\
         1. Generate minimal pseudocode or skeleton Python code.\n\
         2. Add comments explaining *why* specific logic was chosen.\n",
    );
}
