//! Code-block side-output record
//!
//! One record per `TokenSequence`, index-aligned to its `id`. This is
//! a write-only side output: the detector never reads it back, a
//! downstream (out-of-scope) post-processor expands pair ids into
//! human-readable CSV rows using it.

use serde::{Deserialize, Serialize};

use super::span::Span;

/// Optional per-function metadata a tokenizer may be able to supply.
/// All fields are `Option` because several languages have no surface
/// syntax for some of them (e.g. Python functions usually lack a
/// `-> T` annotation — see `spec.md` §9's open question on this).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionMetadata {
    pub method_name: Option<String>,
    pub return_type: Option<String>,
    pub param_list: Option<Vec<String>>,
    pub commit_hash: Option<String>,
    pub token_hash: Option<u64>,
}

/// A single persisted code-block row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlockRecord {
    pub file_path: String,
    pub span: Span,
    pub metadata: FunctionMetadata,
}

impl CodeBlockRecord {
    pub fn new(file_path: String, span: Span, metadata: FunctionMetadata) -> Self {
        Self {
            file_path,
            span,
            metadata,
        }
    }

    /// Render one CSV line per `spec.md` §6:
    /// `filePath,startLine,endLine[,methodName,returnType,[paramList],commitHash,tokenHash]`
    ///
    /// Each optional field is independent: a hole in one (e.g. Python's
    /// absent `returnType`) does not suppress fields after it, since a
    /// tokenizer may populate `paramList`/`tokenHash` even when it has
    /// no surface syntax for `returnType`.
    pub fn to_csv_line(&self) -> String {
        let mut line = format!(
            "{},{},{}",
            self.file_path, self.span.start_line, self.span.end_line
        );

        let m = &self.metadata;
        if let Some(method_name) = &m.method_name {
            line.push(',');
            line.push_str(method_name);
        }
        if let Some(return_type) = &m.return_type {
            line.push(',');
            line.push_str(return_type);
        }
        if let Some(param_list) = &m.param_list {
            line.push_str(",[");
            line.push_str(&param_list.join(";"));
            line.push(']');
        }
        if let Some(commit_hash) = &m.commit_hash {
            line.push(',');
            line.push_str(commit_hash);
        }
        if let Some(token_hash) = &m.token_hash {
            line.push(',');
            line.push_str(&token_hash.to_string());
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_line_bare() {
        let rec = CodeBlockRecord::new(
            "a.py".into(),
            Span::new(1, 0, 10, 0),
            FunctionMetadata::default(),
        );
        assert_eq!(rec.to_csv_line(), "a.py,1,10");
    }

    #[test]
    fn test_csv_line_full() {
        let rec = CodeBlockRecord::new(
            "a.py".into(),
            Span::new(1, 0, 10, 0),
            FunctionMetadata {
                method_name: Some("foo".into()),
                return_type: Some("int".into()),
                param_list: Some(vec!["a".into(), "b".into()]),
                commit_hash: Some("deadbeef".into()),
                token_hash: Some(42),
            },
        );
        assert_eq!(rec.to_csv_line(), "a.py,1,10,foo,int,[a;b],deadbeef,42");
    }

    #[test]
    fn test_csv_line_holes_do_not_suppress_later_fields() {
        let rec = CodeBlockRecord::new(
            "a.py".into(),
            Span::new(1, 0, 10, 0),
            FunctionMetadata {
                method_name: Some("foo".into()),
                return_type: None,
                param_list: Some(vec!["a".into()]),
                commit_hash: None,
                token_hash: Some(7),
            },
        );
        assert_eq!(rec.to_csv_line(), "a.py,1,10,foo,[a],7");
    }
}
