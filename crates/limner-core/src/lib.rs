//! Limner Core Types and Definitions
//!
//! This crate provides the foundational types and tables for Limner's diagram
//! intent pipeline. It includes:
//!
//! - **Diagram**: The closed family enumeration ([`diagram::DiagramType`]) and the
//!   ephemeral request value ([`diagram::DiagramRequest`])
//! - **Vocabulary**: The trigger vocabulary, the ordered family pattern table and
//!   the Mermaid grammar keywords ([`vocabulary`] module)
//! - **Samples**: Reference Mermaid sources and sample user requests ([`samples`] module)

pub mod diagram;
pub mod samples;
pub mod vocabulary;
