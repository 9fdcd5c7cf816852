pub mod coder;
pub mod context;
pub mod critic;
pub mod designer;
pub mod persona;

pub use context::PromptContext;
use synthmind_core::Role;

/// Assemble the full prompt for a given role and context.
pub fn assemble_prompt(role: Role, ctx: &PromptContext) -> String {
    let mut instructions = String::new();

    match role {
        Role::Designer => designer::append_instructions(&mut instructions, &ctx.idea),
        Role::Coder => coder::append_instructions(&mut instructions, ctx.design_or_placeholder()),
        Role::Critic => critic::append_instructions(
            &mut instructions,
            ctx.design_or_placeholder(),
            ctx.code_or_placeholder(),
        ),
    }

    persona::wrap(role, &instructions)
}
