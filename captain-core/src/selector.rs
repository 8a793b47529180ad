//! Command selectors for inspections.

use regex::Regex;
use std::fmt;

/// The rule deciding which command names an inspection applies to.
///
/// | Selector | Matches |
/// |----------|---------|
/// | `Any` | every command name |
/// | `Exact("echo")` | only `echo` |
/// | `Pattern(re)` | names for which `re.is_match(name)` holds |
#[derive(Debug, Clone, Default)]
pub enum Selector {
    /// No selector; matches unconditionally.
    #[default]
    Any,
    /// Exact string equality with the command name.
    Exact(String),
    /// Pattern tested against the command name.
    Pattern(Regex),
}

impl Selector {
    /// Create an exact-match selector.
    pub fn exact(command_name: impl Into<String>) -> Self {
        Selector::Exact(command_name.into())
    }

    /// Compile `pattern` into a pattern selector.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Selector::Pattern)
    }

    /// Test the selector against a command name.
    pub fn matches(&self, command_name: &str) -> bool {
        match self {
            Selector::Any => true,
            Selector::Exact(name) => name == command_name,
            Selector::Pattern(re) => re.is_match(command_name),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Any => f.write_str("*"),
            Selector::Exact(name) => write!(f, "{name}"),
            Selector::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::Exact(name.to_string())
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::Exact(name)
    }
}

impl From<Regex> for Selector {
    fn from(re: Regex) -> Self {
        Selector::Pattern(re)
    }
}

impl<S: Into<Selector>> From<Option<S>> for Selector {
    fn from(selector: Option<S>) -> Self {
        selector.map_or(Selector::Any, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::Selector;

    #[test]
    fn test_any_matches_everything() {
        assert!(Selector::Any.matches("echo"));
        assert!(Selector::Any.matches("pwd"));
    }

    #[test]
    fn test_exact_matches_only_its_name() {
        let selector = Selector::from("echo");
        assert!(selector.matches("echo"));
        assert!(!selector.matches("echoes"));
        assert!(!selector.matches("ech"));
    }

    #[test]
    fn test_pattern_uses_regex_semantics() {
        let starts = Selector::pattern("^ec").unwrap();
        let ends = Selector::pattern("ho$").unwrap();
        assert!(starts.matches("echo"));
        assert!(!starts.matches("pwd"));
        assert!(ends.matches("echo"));
        assert!(!ends.matches("hop"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Selector::pattern("(unclosed").is_err());
    }

    #[test]
    fn test_option_conversion() {
        assert!(matches!(Selector::from(None::<&str>), Selector::Any));
        assert!(matches!(Selector::from(Some("ls")), Selector::Exact(ref n) if n == "ls"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Selector::Any.to_string(), "*");
        assert_eq!(Selector::exact("ls").to_string(), "ls");
        assert_eq!(Selector::pattern("^ls").unwrap().to_string(), "/^ls/");
    }
}
