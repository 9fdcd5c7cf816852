/// Everything a role prompt may interpolate.
///
/// `design` and `code` hold the latest upstream outputs verbatim, including
/// error text from a failed stage.
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    pub idea: String,
    pub design: Option<String>,
    pub code: Option<String>,
}

const MISSING: &str = "(none)";

impl PromptContext {
    pub fn new(idea: &str) -> Self {
        Self {
            idea: idea.to_string(),
            design: None,
            code: None,
        }
    }

    pub fn with_design(mut self, design: &str) -> Self {
        self.design = Some(design.to_string());
        self
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    pub(crate) fn design_or_placeholder(&self) -> &str {
        self.design.as_deref().unwrap_or(MISSING)
    }

    pub(crate) fn code_or_placeholder(&self) -> &str {
        self.code.as_deref().unwrap_or(MISSING)
    }
}
