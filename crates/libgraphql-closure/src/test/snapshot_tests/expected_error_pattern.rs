/// Pattern for matching expected errors in snapshot tests.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpectedErrorPattern {
    /// Exact error variant match (e.g., `# EXPECTED_ERROR_TYPE: MissingInterface`)
    ExactType(String),
    /// Substring match against the error's message (e.g.,
    /// `# EXPECTED_ERROR_CONTAINS: references the `Foo` type`)
    Contains(String),
}

impl ExpectedErrorPattern {
    /// `variant` is the error's variant name; `message` its rendered
    /// `Display` text.
    pub fn matches(&self, variant: &str, message: &str) -> bool {
        match self {
            ExpectedErrorPattern::ExactType(type_name) => type_name == variant,
            ExpectedErrorPattern::Contains(substring) => message.contains(substring.as_str()),
        }
    }
}

impl std::fmt::Display for ExpectedErrorPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpectedErrorPattern::ExactType(type_name) => {
                write!(f, "ERROR_TYPE: {type_name}")
            }
            ExpectedErrorPattern::Contains(substring) => {
                write!(f, "ERROR_CONTAINS: {substring}")
            }
        }
    }
}
