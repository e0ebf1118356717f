//! Trigger vocabulary, family pattern table and Mermaid grammar keywords.
//!
//! These tables drive every decision Limner makes about text:
//!
//! - [`TRIGGER_VOCABULARY`] gates intent detection and is stripped from the
//!   message to obtain a diagram description.
//! - [`PATTERN_TABLE`] maps a detected request to a [`DiagramType`]. Its order is
//!   the tie-break: the earliest group with a matching phrase wins.
//! - [`DIAGRAM_LANGUAGE`] tags the fenced blocks models are asked to reply with.
//! - [`GRAMMAR_KEYWORDS`] recognizes Mermaid source inside untagged code fences.
//!
//! All phrases are lowercase; callers match them against lowercased text.

use crate::diagram::DiagramType;

/// A flat, ordered list of phrases whose presence signals diagram intent.
#[derive(Debug, Clone, Copy)]
pub struct TriggerVocabulary {
    phrases: &'static [&'static str],
}

impl TriggerVocabulary {
    /// Creates a vocabulary from lowercase phrases.
    pub const fn new(phrases: &'static [&'static str]) -> Self {
        Self { phrases }
    }

    /// Returns the phrases in declared order.
    pub fn phrases(&self) -> &'static [&'static str] {
        self.phrases
    }

    /// Returns `true` if `phrase` is part of the vocabulary.
    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(&phrase)
    }
}

/// The trigger phrases of one diagram family.
#[derive(Debug, Clone, Copy)]
pub struct PatternGroup {
    diagram_type: DiagramType,
    phrases: &'static [&'static str],
}

impl PatternGroup {
    /// Creates a pattern group for `diagram_type`.
    pub const fn new(diagram_type: DiagramType, phrases: &'static [&'static str]) -> Self {
        Self {
            diagram_type,
            phrases,
        }
    }

    /// Returns the family this group resolves to.
    pub fn diagram_type(&self) -> DiagramType {
        self.diagram_type
    }

    /// Returns the family-specific phrases.
    pub fn phrases(&self) -> &'static [&'static str] {
        self.phrases
    }
}

/// An ordered sequence of [`PatternGroup`]s.
///
/// Resolution walks the groups front to back, so a group declared earlier
/// takes precedence over any later group that also matches.
#[derive(Debug, Clone, Copy)]
pub struct PatternTable {
    groups: &'static [PatternGroup],
}

impl PatternTable {
    /// Creates a table from groups in precedence order.
    pub const fn new(groups: &'static [PatternGroup]) -> Self {
        Self { groups }
    }

    /// Returns the groups in precedence order.
    pub fn groups(&self) -> &'static [PatternGroup] {
        self.groups
    }

    /// Iterates over every phrase of every group, in table order.
    pub fn phrases(&self) -> impl Iterator<Item = &'static str> {
        self.groups
            .iter()
            .flat_map(|group| group.phrases.iter().copied())
    }

    /// Returns the position of `diagram_type` in the table, if it has a group.
    pub fn precedence(&self, diagram_type: DiagramType) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.diagram_type == diagram_type)
    }
}

/// Phrases that gate diagram intent detection.
///
/// General diagram words and action words come first, followed by the family
/// phrases of [`PATTERN_TABLE`] that are not already listed. The order is also
/// the order in which phrases are stripped from descriptions.
pub const TRIGGER_VOCABULARY: TriggerVocabulary = TriggerVocabulary::new(&[
    // General diagram terms
    "diagram",
    "chart",
    "graph",
    "visualization",
    "visual",
    "draw",
    "create",
    // Specific diagram types
    "flowchart",
    "flow chart",
    "flow diagram",
    "mindmap",
    "mind map",
    "concept map",
    "sequence diagram",
    "sequence chart",
    "class diagram",
    "uml",
    "gantt",
    "timeline",
    "schedule",
    "org chart",
    "organizational chart",
    "network diagram",
    "architecture",
    // Action words
    "show me",
    "illustrate",
    "map out",
    "visualize",
    "outline",
    // Remaining family phrases
    "process flow",
    "workflow",
    "brain storm",
    "brainstorm",
    "interaction",
    "steps",
    "object model",
    "relationship",
    "project timeline",
    "milestone",
]);

/// Family pattern groups in precedence order.
pub const PATTERN_TABLE: PatternTable = PatternTable::new(PATTERN_GROUPS);

const PATTERN_GROUPS: &[PatternGroup] = &[
    PatternGroup::new(
        DiagramType::Flowchart,
        &[
            "flowchart",
            "flow chart",
            "flow diagram",
            "process flow",
            "workflow",
        ],
    ),
    PatternGroup::new(
        DiagramType::Mindmap,
        &[
            "mindmap",
            "mind map",
            "concept map",
            "brain storm",
            "brainstorm",
        ],
    ),
    PatternGroup::new(
        DiagramType::Sequence,
        &[
            "sequence diagram",
            "sequence chart",
            "interaction",
            "timeline",
            "steps",
        ],
    ),
    PatternGroup::new(
        DiagramType::Class,
        &["class diagram", "uml", "object model", "relationship"],
    ),
    PatternGroup::new(
        DiagramType::Gantt,
        &["gantt", "project timeline", "schedule", "milestone"],
    ),
];

/// Language identifier that tags diagram source in fenced code blocks.
pub const DIAGRAM_LANGUAGE: &str = "mermaid";

/// Mermaid keywords that identify diagram source in an untagged code fence.
///
/// Matched case-sensitively, as Mermaid itself spells them.
pub const GRAMMAR_KEYWORDS: &[&str] = &[
    "graph",
    "flowchart",
    "sequenceDiagram",
    "classDiagram",
    "mindmap",
    "gantt",
];
