//! Output document types.
//!
//! A run produces exactly one of two JSON shapes on stdout:
//!
//! * an ordered array of [`PageResult`] — one element per page, `page`
//!   numbers exactly `1..=N` with no gaps or duplicates;
//! * a single [`ErrorResult`] — only when the whole run failed before any
//!   page could be recognised.
//!
//! The two shapes are mutually exclusive; a run never emits both.

use crate::error::RunError;
use serde::{Deserialize, Serialize};

/// One page's recognised text.
///
/// `text` is the engine's output verbatim — no trimming, no whitespace
/// normalisation — or the empty string when recognition failed for this
/// page. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// 1-based page number.
    pub page: usize,
    /// Recognised text, possibly empty.
    pub text: String,
}

/// A whole-run failure, emitted instead of any page sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    /// Free-text failure message, including the collaborator's own detail.
    pub error: String,
}

impl From<&RunError> for ErrorResult {
    fn from(err: &RunError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterizeError;
    use std::path::PathBuf;

    #[test]
    fn page_result_json_shape() {
        let page = PageResult {
            page: 1,
            text: "Hello".into(),
        };
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, r#"{"page":1,"text":"Hello"}"#);
    }

    #[test]
    fn page_sequence_serialises_in_order() {
        let pages = vec![
            PageResult {
                page: 1,
                text: "Hello".into(),
            },
            PageResult {
                page: 2,
                text: String::new(),
            },
        ];
        let json = serde_json::to_string(&pages).unwrap();
        assert_eq!(json, r#"[{"page":1,"text":"Hello"},{"page":2,"text":""}]"#);
    }

    #[test]
    fn error_result_json_shape() {
        let doc = ErrorResult {
            error: "boom".into(),
        };
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"error":"boom"}"#);
    }

    #[test]
    fn error_result_captures_run_error_chain() {
        let err = RunError::Rasterize {
            path: PathBuf::from("corrupt.pdf"),
            source: RasterizeError::Open {
                path: PathBuf::from("corrupt.pdf"),
                detail: "bad xref table".into(),
            },
        };
        let doc = ErrorResult::from(&err);
        assert!(!doc.error.is_empty());
        assert!(doc.error.contains("bad xref table"));
    }

    #[test]
    fn page_result_round_trips() {
        let page = PageResult {
            page: 7,
            text: "  spaced \n".into(),
        };
        let json = serde_json::to_string(&page).unwrap();
        let back: PageResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }
}
