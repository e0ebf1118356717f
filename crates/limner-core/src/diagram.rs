//! Diagram families and diagram requests.
//!
//! [`DiagramType`] is the closed set of Mermaid diagram families Limner can ask a
//! model for. [`DiagramRequest`] is the value produced when a user message is
//! recognized as a diagram request; it lives only long enough to build a prompt.

use std::{fmt, str::FromStr};

use crate::samples;

/// A Mermaid diagram family.
///
/// [`DiagramType::Generic`] is used when a message asks for a diagram but names
/// no specific family; the model is then left to pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramType {
    /// Process flows with nodes, arrows and decision diamonds.
    Flowchart,
    /// Hierarchical concept maps.
    Mindmap,
    /// Participants exchanging messages over time.
    Sequence,
    /// Classes and their relationships.
    Class,
    /// Scheduled tasks on a timeline.
    Gantt,
    /// Any family; chosen by the model.
    Generic,
}

impl DiagramType {
    /// Every diagram type, specific families first and [`DiagramType::Generic`] last.
    pub const ALL: [DiagramType; 6] = [
        Self::Flowchart,
        Self::Mindmap,
        Self::Sequence,
        Self::Class,
        Self::Gantt,
        Self::Generic,
    ];

    /// Returns the lowercase name of this diagram type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Mindmap => "mindmap",
            Self::Sequence => "sequence",
            Self::Class => "class",
            Self::Gantt => "gantt",
            Self::Generic => "generic",
        }
    }

    /// Returns the Mermaid keyword that opens a diagram of this family.
    ///
    /// [`DiagramType::Generic`] has no fixed keyword and returns `None`.
    pub fn grammar_keyword(self) -> Option<&'static str> {
        match self {
            Self::Flowchart => Some("flowchart"),
            Self::Mindmap => Some("mindmap"),
            Self::Sequence => Some("sequenceDiagram"),
            Self::Class => Some("classDiagram"),
            Self::Gantt => Some("gantt"),
            Self::Generic => None,
        }
    }

    /// Returns a reference Mermaid source for this family.
    ///
    /// [`DiagramType::Generic`] has no sample and returns `None`.
    pub fn sample_source(self) -> Option<&'static str> {
        match self {
            Self::Flowchart => Some(samples::FLOWCHART),
            Self::Mindmap => Some(samples::MINDMAP),
            Self::Sequence => Some(samples::SEQUENCE),
            Self::Class => Some(samples::CLASS),
            Self::Gantt => Some(samples::GANTT),
            Self::Generic => None,
        }
    }

    /// Returns `true` if this is the catch-all [`DiagramType::Generic`] type.
    pub fn is_generic(self) -> bool {
        matches!(self, Self::Generic)
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagramType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flowchart" => Ok(Self::Flowchart),
            "mindmap" => Ok(Self::Mindmap),
            "sequence" => Ok(Self::Sequence),
            "class" => Ok(Self::Class),
            "gantt" => Ok(Self::Gantt),
            "generic" => Ok(Self::Generic),
            _ => Err(format!(
                "invalid diagram type `{s}`, valid values: flowchart, mindmap, sequence, class, gantt, generic"
            )),
        }
    }
}

/// A user message recognized as a request for a diagram.
///
/// Holds the resolved [`DiagramType`], the description left after trigger words
/// were stripped, and the untouched message text. The value is immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramRequest {
    diagram_type: DiagramType,
    description: String,
    original_text: String,
}

impl DiagramRequest {
    /// Creates a new diagram request.
    ///
    /// # Arguments
    ///
    /// * `diagram_type` - The resolved diagram family.
    /// * `description` - The subject of the diagram, with trigger words removed.
    /// * `original_text` - The user message as it was received.
    pub fn new(
        diagram_type: DiagramType,
        description: impl Into<String>,
        original_text: impl Into<String>,
    ) -> Self {
        Self {
            diagram_type,
            description: description.into(),
            original_text: original_text.into(),
        }
    }

    /// Returns the resolved diagram family.
    pub fn diagram_type(&self) -> DiagramType {
        self.diagram_type
    }

    /// Returns the diagram subject.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the user message this request was detected in.
    pub fn original_text(&self) -> &str {
        &self.original_text
    }
}
