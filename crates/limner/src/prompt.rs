//! Prompt text sent to the generation model.
//!
//! [`synthesize_prompt`] turns a [`DiagramRequest`] into the user-turn
//! instruction. Every template ends with a `Format:` line asking the model to
//! open its reply with a fenced block tagged [`DIAGRAM_LANGUAGE`], which is what
//! lets [`extract_tagged`](limner_parser::extract_tagged) find the diagram.
//! [`SYSTEM_PROMPT`] is the default system turn for the assistant as a whole.

use log::debug;

use limner_core::{
    diagram::{DiagramRequest, DiagramType},
    vocabulary::DIAGRAM_LANGUAGE,
};

/// Default system prompt for the chat assistant.
pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant for a personal knowledge management app.

Your role is to help users:
- Capture and organize their thoughts and ideas
- Develop concepts through conversation
- Analyze and summarize content they share
- Generate diagrams when requested (use Mermaid syntax)
- Connect related ideas and concepts

Be conversational, insightful, and help users think through their ideas clearly.";

/// Builds the instruction prompt for a diagram request.
///
/// The prompt names the subject, describes what the requested family should
/// show, and fixes the output format: a ```` ```mermaid ```` block using the
/// family's Mermaid syntax. For [`DiagramType::Generic`] the model picks the
/// family itself.
///
/// # Examples
///
/// ```
/// use limner::prompt::synthesize_prompt;
/// use limner_core::diagram::{DiagramRequest, DiagramType};
///
/// let request = DiagramRequest::new(
///     DiagramType::Flowchart,
///     "for my morning routine",
///     "Create a flowchart for my morning routine",
/// );
/// let prompt = synthesize_prompt(&request);
///
/// assert!(prompt.starts_with("Create a Mermaid diagram for: for my morning routine"));
/// assert!(prompt.contains("Start with ```mermaid"));
/// assert!(prompt.contains("flowchart TD"));
/// ```
pub fn synthesize_prompt(request: &DiagramRequest) -> String {
    let (instructions, syntax) = match request.diagram_type() {
        DiagramType::Flowchart => (
            "Generate a Mermaid flowchart that shows the process, decision points, and flow. \
             Use proper flowchart syntax with nodes, arrows, and decision diamonds. \
             Make it clear and easy to follow.",
            "flowchart TD (top-down) or flowchart LR (left-right) syntax",
        ),
        DiagramType::Mindmap => (
            "Generate a Mermaid mindmap that organizes the concepts hierarchically. \
             Use the mindmap syntax to show relationships between ideas and subtopics.",
            "mindmap syntax",
        ),
        DiagramType::Sequence => (
            "Generate a Mermaid sequence diagram showing the interactions, participants, \
             and message flow over time.",
            "sequenceDiagram syntax with participant declarations and messages",
        ),
        DiagramType::Class => (
            "Generate a Mermaid class diagram showing the classes, relationships, and structure.",
            "classDiagram syntax",
        ),
        DiagramType::Gantt => (
            "Generate a Mermaid Gantt chart showing tasks, timelines, and dependencies.",
            "gantt syntax",
        ),
        DiagramType::Generic => (
            "Choose the most appropriate Mermaid diagram type (flowchart, mindmap, sequence, \
             class, or gantt) and generate a clear, well-structured diagram.",
            "the appropriate syntax",
        ),
    };

    debug!(diagram_type:% = request.diagram_type(); "Synthesized diagram prompt");

    format!(
        "Create a Mermaid diagram for: {description}\n\n\
         {instructions}\n\n\
         Format: Start with ```{DIAGRAM_LANGUAGE} and use {syntax}.",
        description = request.description(),
    )
}
