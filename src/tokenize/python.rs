//! Python tokenizer
//!
//! Function nodes are `function_definition` (this also covers
//! `async def`, which tree-sitter-python represents with the same node
//! kind plus an `async` child). Grounded on the teacher's
//! `features/parsing/plugins/python.rs::extract_function`.

use tree_sitter::Parser;

use super::ts_util::{field_text, leaf_tokens, node_to_span, param_texts};
use crate::shared::ports::{FunctionSpan, Language, Tokenizer};

pub struct PythonTokenizer;

impl PythonTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for PythonTokenizer {
    fn language(&self) -> Language {
        Language::Python
    }

    fn walk_functions(&self, source: &str) -> Vec<FunctionSpan> {
        let mut parser = Parser::new();
        if parser.set_language(&tree_sitter_python::language()).is_err() {
            return Vec::new();
        }
        let Some(tree) = parser.parse(source, None) else {
            return Vec::new();
        };

        super::ts_util::find_descendants_by_kinds(tree.root_node(), &["function_definition"])
            .into_iter()
            .map(|node| {
                let method_name = field_text(&node, "name", source).map(str::to_string);
                // Python functions rarely carry a `-> T` annotation;
                // absent when the grammar has no `return_type` field.
                let return_type = field_text(&node, "return_type", source).map(str::to_string);
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
        t.is_empty() || t.starts_with('#')
    }
}

impl Default for PythonTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_negligible() {
        let t = PythonTokenizer::new();
        assert!(t.is_negligible("# a comment"));
        assert!(t.is_negligible(""));
        assert!(!t.is_negligible("def"));
    }
}
