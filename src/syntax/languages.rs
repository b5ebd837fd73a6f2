//! Language identification from fence hints
//!
//! Maps free-form language hints (the word after a code fence) to a scanner family.

/// Scanner families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    Python,
    /// JavaScript, TypeScript and their JSX variants
    JavaScript,
    /// Reduced cross-language rule set
    #[default]
    Generic,
}

impl LanguageId {
    /// Resolve a language hint. Case-insensitive; unknown or empty hints
    /// resolve to [`LanguageId::Generic`].
    pub fn from_hint(hint: &str) -> Self {
        match hint.trim().to_lowercase().as_str() {
            "python" | "py" | "python3" | "py3" | "pyw" | "pyi" => LanguageId::Python,
            "javascript" | "js" | "typescript" | "ts" | "jsx" | "tsx" | "mjs" | "cjs"
            | "node" => LanguageId::JavaScript,
            _ => LanguageId::Generic,
        }
    }

    /// Get display name for the scanner family
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::Python => "Python",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::Generic => "Generic",
        }
    }
}

/// Human-readable label for a fence hint, as shown in a code block header
pub fn display_name(hint: &str) -> String {
    let hint = hint.trim();
    let known = match hint.to_lowercase().as_str() {
        "" => Some("Text"),
        "js" => Some("JavaScript"),
        "ts" => Some("TypeScript"),
        "py" => Some("Python"),
        "cpp" => Some("C++"),
        "cs" => Some("C#"),
        "rb" => Some("Ruby"),
        "rs" => Some("Rust"),
        "sh" => Some("Shell"),
        "yml" => Some("YAML"),
        "md" => Some("Markdown"),
        "jsx" => Some("React JSX"),
        "tsx" => Some("React TSX"),
        _ => None,
    };
    if let Some(name) = known {
        return name.to_string();
    }

    let mut chars = hint.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hint() {
        assert_eq!(LanguageId::from_hint("python"), LanguageId::Python);
        assert_eq!(LanguageId::from_hint("py"), LanguageId::Python);
        assert_eq!(LanguageId::from_hint("PY"), LanguageId::Python);
        assert_eq!(LanguageId::from_hint("js"), LanguageId::JavaScript);
        assert_eq!(LanguageId::from_hint("TypeScript"), LanguageId::JavaScript);
        assert_eq!(LanguageId::from_hint("tsx"), LanguageId::JavaScript);
        assert_eq!(LanguageId::from_hint("rust"), LanguageId::Generic);
        assert_eq!(LanguageId::from_hint(""), LanguageId::Generic);
        assert_eq!(LanguageId::from_hint("no such language"), LanguageId::Generic);
    }

    #[test]
    fn test_from_hint_ignores_surrounding_whitespace() {
        assert_eq!(LanguageId::from_hint("  python \n"), LanguageId::Python);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("js"), "JavaScript");
        assert_eq!(display_name("CPP"), "C++");
        assert_eq!(display_name("tsx"), "React TSX");
        assert_eq!(display_name("python"), "Python");
        assert_eq!(display_name("go"), "Go");
        assert_eq!(display_name(""), "Text");
    }
}
