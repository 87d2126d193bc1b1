//! # archgraph
//!
//! Architecture graph extraction for module recovery.
//!
//! archgraph walks a Java source tree, parses every compilation unit and
//! emits one JSON document describing each class and interface: its
//! methods with a name-based responsibility guess, simple size metrics and
//! the dependency edges that a community-detection step can cluster on.
//!
//! ## Pipeline
//!
//! - **scanner**: recursive discovery of source files
//! - **parsers**: tree-sitter parsing, lowered into a closed declaration tree
//! - **extractor**: one Type Record per class or interface, nested ones included
//! - **metrics / responsibility / dependencies**: per-type analysis
//! - **graph**: assembly of the document; **formatters** serialize it
//!
//! A file that fails to parse is logged and skipped; it never aborts the run.

pub mod config;
pub mod core;
pub mod error;
pub mod formatters;
pub mod parsers;

pub use config::{ExtractorConfig, SupertypePolicy};
pub use error::{ExtractError, Result};
