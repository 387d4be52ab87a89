//! Tokenizer capability
//!
//! The "pluggable Tokenizer capability" from `spec.md` §4.2/§9,
//! modeled directly on the teacher's `LanguagePlugin` port
//! (`features/parsing/ports/language_plugin.rs`), narrowed to the two
//! operations the clone-detection core actually needs: which
//! sub-trees are functions, and which raw tokens are negligible.

use super::language::Language;
use crate::shared::models::Span;

/// One function-level extraction from a source file, before
/// normalization. `raw_tokens` preserves lexer aggregation (e.g. a
/// single `foo(bar)` identifier/punctuation run from a coarse lexer);
/// `normalize::split_and_hash` (C1) is responsible for splitting it
/// further.
#[derive(Debug, Clone)]
pub struct FunctionSpan {
    pub span: Span,
    pub raw_tokens: Vec<String>,
    pub method_name: Option<String>,
    pub return_type: Option<String>,
    pub param_list: Option<Vec<String>>,
}

/// A language-specific tokenizer. Each supported language provides one
/// variant; adding a language means supplying a new variant here, not
/// touching the pipeline.
pub trait Tokenizer: Send + Sync {
    /// Which language this tokenizer handles.
    fn language(&self) -> Language;

    /// Walk the parse tree of `source` and yield one `FunctionSpan`
    /// per function-level node (`spec.md` §4.2(a): "which sub-trees
    /// constitute a function", e.g. `method_declaration`,
    /// `function_def`).
    fn walk_functions(&self, source: &str) -> Vec<FunctionSpan>;

    /// Whether a raw token should be dropped before normalization
    /// (`spec.md` §4.2(b)): empty, leading whitespace, or a comment in
    /// this language's lexical grammar.
    fn is_negligible(&self, raw_token: &str) -> bool;
}

/// Language-to-tokenizer dispatch, built once at startup from the
/// configured `language` option (`spec.md` §6) — no runtime plug-in
/// loading is required.
pub struct TokenizerRegistry {
    tokenizer: Box<dyn Tokenizer>,
}

impl TokenizerRegistry {
    pub fn new(tokenizer: Box<dyn Tokenizer>) -> Self {
        Self { tokenizer }
    }

    pub fn for_language(language: Language) -> Self {
        Self::new(crate::tokenize::tokenizer_for(language))
    }

    pub fn language(&self) -> Language {
        self.tokenizer.language()
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        self.tokenizer.language().extensions()
    }

    pub fn accepts(&self, file_path: &std::path::Path) -> bool {
        file_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions().iter().any(|e| *e == ext))
            .unwrap_or(false)
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }
}
