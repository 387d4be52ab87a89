//! Kotlin tokenizer
//!
//! Function nodes are `function_declaration`. Grounded on the
//! teacher's `features/parsing/plugins/kotlin.rs`.

use tree_sitter::Parser;

use super::ts_util::{field_text, leaf_tokens, node_to_span};
use crate::shared::ports::{FunctionSpan, Language, Tokenizer};

pub struct KotlinTokenizer;

impl KotlinTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for KotlinTokenizer {
    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn walk_functions(&self, source: &str) -> Vec<FunctionSpan> {
        let mut parser = Parser::new();
        if parser
            .set_language(&tree_sitter_kotlin::language())
            .is_err()
        {
            return Vec::new();
        }
        let Some(tree) = parser.parse(source, None) else {
            return Vec::new();
        };

        super::ts_util::find_descendants_by_kinds(tree.root_node(), &["function_declaration"])
            .into_iter()
            .map(|node| {
                let method_name =
                    field_text(&node, "name", source).map(str::to_string);
                let return_type = node
                    .child_by_field_name("type")
                    .and_then(|n| n.utf8_text(source.as_bytes()).ok())
                    .map(str::to_string);
                let param_list = node
                    .child_by_field_name("parameters")
                    .map(|p| super::ts_util::param_texts(p, source));

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

impl Default for KotlinTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
