use synthmind_core::Role;

/// Wrap role instructions in the shared persona frame sent with every call.
pub fn wrap(role: Role, instructions: &str) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "You are SynthMind Omega, specifically acting in the role of the {}.\n\n",
        role.title()
    ));
    prompt.push_str("ROLE DEFINITION:\n");
    prompt.push_str(instructions);
    if !instructions.ends_with('\n') {
        prompt.push('\n');
    }
    prompt.push('\n');
    prompt.push_str(
        "Ensure your output is structured, clear, and educational. \
         Explaining your reasoning is mandatory.\n",
    );
    prompt
}
