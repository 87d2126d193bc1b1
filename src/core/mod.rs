pub mod analyzer;
pub mod class_graph;
pub mod dependencies;
pub mod extractor;
pub mod graph;
pub mod metrics;
pub mod resolver;
pub mod responsibility;
pub mod scanner;

pub use analyzer::{ArchitectureExtractor, Extraction, FileFailure};
pub use class_graph::{ClassGraph, ClassGraphBuilder, ClassNode};
pub use graph::{
    ArchitectureGraph, DependencyEdge, EdgeKind, GraphAssembler, MethodRecord, MetricsSummary,
    Responsibility, TypeRecord,
};
pub use responsibility::infer_responsibility;
pub use scanner::FileScanner;
