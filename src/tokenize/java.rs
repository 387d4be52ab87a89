//! Java tokenizer
//!
//! Function nodes are `method_declaration` and `constructor_declaration`.
//! Grounded on the teacher's `features/parsing/plugins/java.rs`.

use tree_sitter::Parser;

use super::ts_util::{field_text, leaf_tokens, node_to_span, param_texts};
use crate::shared::ports::{FunctionSpan, Language, Tokenizer};

pub struct JavaTokenizer;

impl JavaTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for JavaTokenizer {
    fn language(&self) -> Language {
        Language::Java
    }

    fn walk_functions(&self, source: &str) -> Vec<FunctionSpan> {
        let mut parser = Parser::new();
        if parser.set_language(&tree_sitter_java::language()).is_err() {
            return Vec::new();
        }
        let Some(tree) = parser.parse(source, None) else {
            return Vec::new();
        };

        super::ts_util::find_descendants_by_kinds(
            tree.root_node(),
            &["method_declaration", "constructor_declaration"],
        )
        .into_iter()
        .map(|node| {
            let method_name = field_text(&node, "name", source).map(str::to_string);
            let return_type = field_text(&node, "type", source).map(str::to_string);
            let param_list = node
                .child_by_field_name("parameters")
                .map(|p| param_texts(p, source));

            FunctionSpan {
                span: node_to_span(&node),
                raw_tokens: leaf_tokens(node, source),
                method_name,
                return_type,
                param_list,
            }
        })
        .collect()
    }

    fn is_negligible(&self, raw_token: &str) -> bool {
        let t = raw_token.trim();
        t.is_empty() || t.starts_with("//") || t.starts_with("/*")
    }
}

impl Default for JavaTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_negligible() {
        let t = JavaTokenizer::new();
        assert!(t.is_negligible("// line comment"));
        assert!(t.is_negligible("/* block */"));
        assert!(!t.is_negligible("public"));
        assert!(!t.is_negligible("*"));
    }
}
