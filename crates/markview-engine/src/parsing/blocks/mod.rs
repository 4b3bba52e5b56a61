//! # Block Parsing
//!
//! Two-phase block parsing over the document's lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (fence marker, heading level, list marker, table pipe, blank)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` threads a single open-block
//!    state through the lines and emits `BlockNode`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockNode`, `BlockKind`, `ContainerFrame`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, TableRow, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Lists are flat and tables have exactly one header row
//! - Block content is borrowed from the source; nothing is copied or escaped here

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{BlockKind, BlockNode, ContainerFrame};
