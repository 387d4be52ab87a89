//! Language identification
//!
//! The six languages `spec.md` §6 names, with their file extensions.
//! Adding a language means adding a variant here plus a `Tokenizer`
//! impl in `crate::tokenize` — nothing else in the pipeline changes.

/// Supported source languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    C,
    Cpp,
    CSharp,
    Python,
    Kotlin,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Python => "python",
            Language::Kotlin => "kotlin",
        }
    }

    /// File extensions selected for this language, per `spec.md` §6.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Java => &["java"],
            Language::C => &["c", "h"],
            Language::Cpp => &["cpp", "hpp"],
            Language::CSharp => &["cs"],
            Language::Python => &["py"],
            Language::Kotlin => &["kt"],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "java" => Some(Language::Java),
            "c" => Some(Language::C),
            "cpp" | "c++" => Some(Language::Cpp),
            "csharp" | "c#" => Some(Language::CSharp),
            "python" => Some(Language::Python),
            "kotlin" => Some(Language::Kotlin),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Language::from_name("Java"), Some(Language::Java));
        assert_eq!(Language::from_name("c++"), Some(Language::Cpp));
        assert_eq!(Language::from_name("nope"), None);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Language::C.extensions(), &["c", "h"]);
        assert_eq!(Language::Kotlin.extensions(), &["kt"]);
    }
}
