//! Request-side intent detection.
//!
//! A message is a diagram request as soon as any trigger phrase appears in it
//! as a case-insensitive substring. Family resolution uses the same test
//! against [`PATTERN_TABLE`], walking it in declared order.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::{Regex, RegexBuilder};

use limner_core::{
    diagram::{DiagramRequest, DiagramType},
    vocabulary::{PATTERN_TABLE, TRIGGER_VOCABULARY},
};

/// Whole-word, case-insensitive matchers for each trigger phrase, in vocabulary order.
static TRIGGER_WORDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TRIGGER_VOCABULARY
        .phrases()
        .iter()
        .map(|phrase| {
            RegexBuilder::new(&format!(r"\b{}\b", regex::escape(phrase)))
                .case_insensitive(true)
                .build()
                .expect("escaped trigger phrases are valid patterns")
        })
        .collect()
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Returns `true` if `text` contains any trigger phrase, ignoring case.
///
/// # Examples
///
/// ```
/// use limner_parser::classify;
///
/// assert!(classify("DRAW a MindMap of my week"));
/// assert!(!classify("What time is it?"));
/// ```
pub fn classify(text: &str) -> bool {
    let lower = text.to_lowercase();
    let matched = TRIGGER_VOCABULARY
        .phrases()
        .iter()
        .find(|phrase| lower.contains(*phrase));

    match matched {
        Some(phrase) => {
            trace!(phrase; "Matched trigger phrase");
            true
        }
        None => {
            trace!("No trigger phrase found");
            false
        }
    }
}

/// Resolves the diagram family requested by `text`.
///
/// Groups of [`PATTERN_TABLE`] are tried in declared order and the first group
/// with a phrase contained in `text` (ignoring case) wins, wherever that phrase
/// sits in the text. Falls back to [`DiagramType::Generic`] when no group
/// matches.
///
/// Meant to be called after [`classify`] returned `true`.
pub fn resolve_type(text: &str) -> DiagramType {
    let lower = text.to_lowercase();

    let diagram_type = PATTERN_TABLE
        .groups()
        .iter()
        .find(|group| group.phrases().iter().any(|phrase| lower.contains(phrase)))
        .map(|group| group.diagram_type())
        .unwrap_or(DiagramType::Generic);

    debug!(diagram_type:%; "Resolved diagram type");
    diagram_type
}

/// Strips trigger vocabulary from `text` to leave the subject of the diagram.
///
/// Each trigger phrase is removed wherever it occurs as a whole word, in
/// vocabulary order and ignoring case. Whitespace runs are then collapsed to a
/// single space and the ends trimmed. If nothing is left, `text` is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use limner_parser::extract_description;
///
/// assert_eq!(
///     extract_description("Create a flowchart for my morning routine"),
///     "a for my morning routine"
/// );
/// assert_eq!(extract_description("Draw a diagram"), "a");
/// assert_eq!(extract_description("  Draw  "), "  Draw  ");
/// ```
pub fn extract_description(text: &str) -> String {
    let mut working = text.to_string();
    for pattern in TRIGGER_WORDS.iter() {
        working = pattern.replace_all(&working, "").into_owned();
    }

    let collapsed = WHITESPACE_RUN.replace_all(&working, " ");
    let description = collapsed.trim();

    if description.is_empty() {
        debug!("Description empty after stripping, keeping original text");
        return text.to_string();
    }

    description.to_string()
}

/// Detects a diagram request in `text`.
///
/// Returns `None` when [`classify`] rejects the text. Otherwise builds a
/// [`DiagramRequest`] from [`resolve_type`] and [`extract_description`].
pub fn detect(text: &str) -> Option<DiagramRequest> {
    if !classify(text) {
        debug!("Text is not a diagram request");
        return None;
    }

    let diagram_type = resolve_type(text);
    let description = extract_description(text);
    debug!(diagram_type:%, description = description.as_str(); "Detected diagram request");

    Some(DiagramRequest::new(diagram_type, description, text))
}

#[cfg(test)]
mod tests {
    use limner_core::samples::SAMPLE_REQUESTS;

    use super::*;

    #[test]
    fn test_classify_ignores_case() {
        assert!(classify("DRAW a MindMap of the solar system"));
        assert!(classify("could you VISUALIZE this?"));
    }

    #[test]
    fn test_classify_rejects_plain_chat() {
        assert!(!classify("here is some text with no trigger words"));
        assert!(!classify(""));
    }

    #[test]
    fn test_classify_matches_substrings() {
        // "graph" inside "paragraph" still counts
        assert!(classify("Rewrite this paragraph please"));
    }

    #[test]
    fn test_classify_accepts_family_only_phrases() {
        assert!(classify("list the steps to bake bread"));
        assert!(classify("what is the relationship between them"));
    }

    #[test]
    fn test_resolve_type_per_family() {
        assert_eq!(resolve_type("a flow chart of checkout"), DiagramType::Flowchart);
        assert_eq!(resolve_type("brainstorm names"), DiagramType::Mindmap);
        assert_eq!(resolve_type("a sequence diagram of login"), DiagramType::Sequence);
        assert_eq!(resolve_type("UML for the blog"), DiagramType::Class);
        assert_eq!(resolve_type("a Gantt chart"), DiagramType::Gantt);
    }

    #[test]
    fn test_resolve_type_falls_back_to_generic() {
        assert_eq!(resolve_type("draw a diagram of my house"), DiagramType::Generic);
    }

    #[test]
    fn test_resolve_type_earliest_group_wins() {
        // gantt appears first in the text but flowchart is declared first
        assert_eq!(
            resolve_type("a gantt view and a flow chart of the release"),
            DiagramType::Flowchart
        );
        // "project timeline" also contains the sequence phrase "timeline"
        assert_eq!(
            resolve_type("show me the project timeline"),
            DiagramType::Sequence
        );
    }

    #[test]
    fn test_extract_description_strips_whole_words_only() {
        // "chart" inside "charter" is not a whole word
        assert_eq!(
            extract_description("draw the charter of the club"),
            "the charter of the club"
        );
    }

    #[test]
    fn test_extract_description_collapses_whitespace() {
        assert_eq!(
            extract_description("  Show me \t a   diagram\nof   the\n\nnetwork  "),
            "a of the network"
        );
    }

    #[test]
    fn test_extract_description_follows_vocabulary_order() {
        // "chart" is stripped before "flow chart" gets a chance to match
        assert_eq!(extract_description("a flow chart of payments"), "a flow of payments");
    }

    #[test]
    fn test_extract_description_keeps_original_when_emptied() {
        assert_eq!(extract_description("draw diagram"), "draw diagram");
        assert_eq!(extract_description("  Create  "), "  Create  ");
    }

    #[test]
    fn test_detect_morning_routine() {
        let text = "Create a flowchart for my morning routine";
        let request = detect(text).expect("should detect a diagram request");

        assert_eq!(request.diagram_type(), DiagramType::Flowchart);
        assert_eq!(request.description(), "a for my morning routine");
        assert_eq!(request.original_text(), text);
    }

    #[test]
    fn test_detect_none_for_plain_chat() {
        assert_eq!(detect("How are you today?"), None);
    }

    #[test]
    fn test_sample_requests_follow_table_order() {
        let resolved: Vec<DiagramType> = SAMPLE_REQUESTS
            .iter()
            .map(|text| detect(text).expect("sample should be detected").diagram_type())
            .collect();

        let expected: Vec<DiagramType> = PATTERN_TABLE
            .groups()
            .iter()
            .map(|group| group.diagram_type())
            .collect();

        assert_eq!(resolved, expected);
    }
}
