use std::fmt;

/// A compiled class attribute value
///
/// Usually a single generated token; composing with a class the sheet does
/// not know (such as a caller-supplied class) yields several space-separated
/// tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self(value.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Individual class tokens
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    /// Append tokens, skipping ones already present
    pub fn join(&self, other: &ClassName) -> ClassName {
        let mut tokens: Vec<&str> = self.tokens().collect();
        for token in other.tokens() {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        ClassName(tokens.join(" "))
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClassName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
