//! Response-side extraction of Mermaid source from fenced code blocks.
//!
//! Extraction runs in two phases:
//!
//! 1. [`extract_tagged`] looks for a block explicitly tagged with
//!    [`DIAGRAM_LANGUAGE`], the format every Limner prompt asks for.
//! 2. [`extract_untagged`] takes the first fenced block of any kind and keeps
//!    it only if it mentions one of the [`GRAMMAR_KEYWORDS`].
//!
//! Neither phase checks that the source is valid Mermaid. A block with a
//! single keyword and broken syntax is still returned; the renderer reports
//! the failure.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use limner_core::vocabulary::{DIAGRAM_LANGUAGE, GRAMMAR_KEYWORDS};

/// A block opened by a fence tagged with the diagram language, up to the first closing fence.
static TAGGED_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?is)```{}\n(.*?)\n```",
        regex::escape(DIAGRAM_LANGUAGE)
    ))
    .expect("tagged fence pattern is valid")
});

/// The first fenced block of any kind. An info string, if any, is part of the body.
static ANY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\n?(.*?)\n?```").expect("fence pattern is valid"));

/// Extracts Mermaid source from a model reply.
///
/// Tries [`extract_tagged`] first and falls back to [`extract_untagged`].
/// Returns `None` when the reply carries no recognizable diagram.
///
/// # Examples
///
/// ```
/// use limner_parser::extract_code;
///
/// assert_eq!(
///     extract_code("```mermaid\nflowchart TD\nA-->B\n```").as_deref(),
///     Some("flowchart TD\nA-->B")
/// );
/// assert_eq!(
///     extract_code("```\nclassDiagram\nClassA --> ClassB\n```").as_deref(),
///     Some("classDiagram\nClassA --> ClassB")
/// );
/// assert_eq!(extract_code("```\nprint('hello')\n```"), None);
/// assert_eq!(extract_code("here is some text with no code"), None);
/// ```
pub fn extract_code(response: &str) -> Option<String> {
    extract_tagged(response).or_else(|| extract_untagged(response))
}

/// Returns the trimmed body of the first block tagged with [`DIAGRAM_LANGUAGE`].
///
/// The tag is matched ignoring case and must be followed by a newline. A block
/// whose body is empty or only whitespace yields `None`.
pub fn extract_tagged(response: &str) -> Option<String> {
    let captures = TAGGED_FENCE.captures(response)?;
    let body = captures.get(1)?.as_str().trim();

    if body.is_empty() {
        trace!("Tagged fence has an empty body");
        return None;
    }

    debug!(len = body.len(); "Extracted tagged diagram block");
    Some(body.to_string())
}

/// Returns the trimmed body of the first fenced block if it looks like Mermaid.
///
/// Only the first fence in the reply is considered. The body counts as Mermaid
/// when it contains any of the [`GRAMMAR_KEYWORDS`], matched case-sensitively
/// anywhere in the text.
pub fn extract_untagged(response: &str) -> Option<String> {
    let captures = ANY_FENCE.captures(response)?;
    let body = captures.get(1)?.as_str().trim();

    let Some(keyword) = GRAMMAR_KEYWORDS
        .iter()
        .find(|keyword| body.contains(*keyword))
    else {
        trace!("First fenced block has no grammar keyword");
        return None;
    };

    debug!(keyword, len = body.len(); "Extracted untagged diagram block");
    Some(body.to_string())
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Plausible Mermaid body: a grammar keyword followed by lines without backticks.
    fn body_strategy() -> impl Strategy<Value = String> {
        (
            prop::sample::select(GRAMMAR_KEYWORDS),
            "[a-zA-Z0-9 >|\\-\\[\\]{}():\n]{0,80}",
        )
            .prop_map(|(keyword, rest)| format!("{keyword} {rest}"))
    }

    /// Prose around a block, free of backticks.
    fn prose_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?\n]{0,60}"
    }

    // ===================
    // Property Test Functions
    // ===================

    fn check_tagged_body_is_recovered(
        before: &str,
        body: &str,
        after: &str,
    ) -> Result<(), TestCaseError> {
        let reply = format!("{before}\n```mermaid\n{body}\n```\n{after}");
        let extracted = extract_code(&reply);
        prop_assert_eq!(extracted.as_deref(), Some(body.trim()));
        Ok(())
    }

    fn check_untagged_body_is_recovered(
        before: &str,
        body: &str,
        after: &str,
    ) -> Result<(), TestCaseError> {
        let reply = format!("{before}\n```\n{body}\n```\n{after}");
        let extracted = extract_code(&reply);
        prop_assert_eq!(extracted.as_deref(), Some(body.trim()));
        Ok(())
    }

    fn check_extraction_is_idempotent(reply: &str) -> Result<(), TestCaseError> {
        prop_assert_eq!(extract_code(reply), extract_code(reply));
        Ok(())
    }

    fn check_unfenced_reply_has_no_diagram(reply: &str) -> Result<(), TestCaseError> {
        prop_assert_eq!(extract_code(reply), None);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn tagged_body_is_recovered(
            before in prose_strategy(),
            body in body_strategy(),
            after in prose_strategy(),
        ) {
            check_tagged_body_is_recovered(&before, &body, &after)?;
        }

        #[test]
        fn untagged_body_is_recovered(
            before in prose_strategy(),
            body in body_strategy(),
            after in prose_strategy(),
        ) {
            check_untagged_body_is_recovered(&before, &body, &after)?;
        }

        #[test]
        fn extraction_is_idempotent(reply in "[a-z`\n ]{0,80}") {
            check_extraction_is_idempotent(&reply)?;
        }

        #[test]
        fn unfenced_reply_has_no_diagram(reply in prose_strategy()) {
            check_unfenced_reply_has_no_diagram(&reply)?;
        }
    }
}
