//! tree-sitter helpers shared by the per-language tokenizers
//!
//! Grounded on the teacher's `shared/utils/tree_sitter.rs` node-walking
//! utilities (`find_descendants_by_kind`, `node_to_span`), narrowed to
//! what function extraction needs.

use tree_sitter::Node;

use crate::shared::models::Span;

/// All descendants (depth-first, including `node` itself if it
/// matches) whose kind is in `kinds`.
pub fn find_descendants_by_kinds<'a>(node: Node<'a>, kinds: &[&str]) -> Vec<Node<'a>> {
    let mut result = Vec::new();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if kinds.contains(&current.kind()) {
            result.push(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    result
}

/// Convert a tree-sitter node's position to a 1-indexed `Span`.
pub fn node_to_span(node: &Node) -> Span {
    let start = node.start_position();
    let end = node.end_position();
    Span::new(
        start.row as u32 + 1,
        start.column as u32,
        end.row as u32 + 1,
        end.column as u32,
    )
}

/// Collect the text of every leaf node under `node`, in source order.
/// This is the function's raw token stream before C1 normalization:
/// it still contains comments and any other trivia the grammar
/// represents as explicit nodes.
pub fn leaf_tokens(node: Node, source: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut cursor = node.walk();
    collect_leaves(&mut cursor, source, &mut tokens);
    tokens
}

fn collect_leaves(cursor: &mut tree_sitter::TreeCursor, source: &str, out: &mut Vec<String>) {
    let node = cursor.node();
    if node.child_count() == 0 {
        if let Ok(text) = node.utf8_text(source.as_bytes()) {
            if !text.is_empty() {
                out.push(text.to_string());
            }
        }
        return;
    }
    if cursor.goto_first_child() {
        loop {
            collect_leaves(cursor, source, out);
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }
}

/// Extract the text of a single named child field, if present.
pub fn field_text<'a>(node: &Node, field: &str, source: &'a str) -> Option<&'a str> {
    node.child_by_field_name(field)
        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
}

/// Extract the text of every direct child with the given field name
/// (tree-sitter allows repeated field names for things like
/// parameter lists).
pub fn field_texts<'a>(node: &Node, kind: &str, source: &'a str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == kind {
            if let Ok(text) = child.utf8_text(source.as_bytes()) {
                out.push(text.to_string());
            }
        }
    }
    out
}

/// Extract parameter names/texts from a parameter-list node, skipping
/// punctuation children (`(`, `)`, `,`).
pub fn param_texts(params_node: Node, source: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cursor = params_node.walk();
    for child in params_node.children(&mut cursor) {
        if matches!(child.kind(), "(" | ")" | ",") {
            continue;
        }
        if let Ok(text) = child.utf8_text(source.as_bytes()) {
            out.push(text.to_string());
        }
    }
    out
}
