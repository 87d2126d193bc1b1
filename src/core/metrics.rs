use super::graph::{MethodRecord, MetricsSummary};
use super::responsibility::infer_responsibility;
use crate::parsers::ast::TypeDecl;

/// One record per method declared directly on the type, in declaration order.
pub fn method_records(decl: &TypeDecl) -> Vec<MethodRecord> {
    decl.methods()
        .map(|method| MethodRecord {
            name: method.name.clone(),
            lines: method.span.line_span(),
            inferred_resp: infer_responsibility(&method.name),
        })
        .collect()
}

pub fn summarize(decl: &TypeDecl, methods: &[MethodRecord]) -> MetricsSummary {
    MetricsSummary {
        method_count: methods.len(),
        field_count: decl.fields().count(),
    }
}
