//! C++ tokenizer
//!
//! Function nodes are `function_definition`, same shape as C but also
//! catching member functions defined inline inside a class body. Name
//! resolution reuses the C declarator-unwrapping approach since the
//! C++ grammar nests `function_declarator` the same way, with the
//! addition of `qualified_identifier` for out-of-line definitions
//! (`Foo::bar(...)`).

use tree_sitter::{Node, Parser};

use super::ts_util::{leaf_tokens, node_to_span, param_texts};
use crate::shared::ports::{FunctionSpan, Language, Tokenizer};

pub struct CppTokenizer;

impl CppTokenizer {
    pub fn new() -> Self {
        Self
    }
}

fn declarator_of(node: &Node) -> Option<Node> {
    let mut d = node.child_by_field_name("declarator")?;
    loop {
        match d.kind() {
            "pointer_declarator" | "reference_declarator" => {
                d = d.child_by_field_name("declarator")?;
            }
            _ => break,
        }
    }
    Some(d)
}

impl Tokenizer for CppTokenizer {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn walk_functions(&self, source: &str) -> Vec<FunctionSpan> {
        let mut parser = Parser::new();
        if parser
            .set_language(&tree_sitter_cpp::language())
            .is_err()
        {
            return Vec::new();
        }
        let Some(tree) = parser.parse(source, None) else {
            return Vec::new();
        };

        super::ts_util::find_descendants_by_kinds(tree.root_node(), &["function_definition"])
            .into_iter()
            .map(|node| {
                let declarator = declarator_of(&node);
                let method_name = declarator
                    .as_ref()
                    .and_then(|d| d.child_by_field_name("declarator"))
                    .and_then(|n| n.utf8_text(source.as_bytes()).ok())
                    .map(str::to_string);
                let return_type = node
                    .child_by_field_name("type")
                    .and_then(|n| n.utf8_text(source.as_bytes()).ok())
                    .map(str::to_string);
                let param_list = declarator
                    .and_then(|d| d.child_by_field_name("parameters"))
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

impl Default for CppTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_negligible() {
        let t = CppTokenizer::new();
        assert!(t.is_negligible("/* c */"));
        assert!(!t.is_negligible("class"));
        assert!(!t.is_negligible("*"));
    }
}
