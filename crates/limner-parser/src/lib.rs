//! Text analysis for the Limner diagram intent pipeline.
//!
//! Two independent halves live here:
//!
//! - [`intent`] works on the request side. It decides whether a user message
//!   asks for a diagram ([`classify`]), which family it wants
//!   ([`resolve_type`]), and what the diagram is about
//!   ([`extract_description`]). [`detect`] chains the three.
//! - [`fence`] works on the response side. It finds Mermaid source inside a
//!   model reply ([`extract_code`]).
//!
//! Every function is pure and total. Negative outcomes are `false` or `None`,
//! never errors.
//!
//! # Example
//!
//! ```
//! use limner_core::diagram::DiagramType;
//! use limner_parser::{detect, extract_code};
//!
//! let request = detect("Create a flowchart for my morning routine").unwrap();
//! assert_eq!(request.diagram_type(), DiagramType::Flowchart);
//!
//! let reply = "Here you go:\n```mermaid\nflowchart TD\nA-->B\n```";
//! assert_eq!(extract_code(reply).as_deref(), Some("flowchart TD\nA-->B"));
//! ```

pub mod fence;
pub mod intent;

pub use fence::{extract_code, extract_tagged, extract_untagged};
pub use intent::{classify, detect, extract_description, resolve_type};
