use super::graph::Responsibility;

/// Keyword rules checked in order; the first rule with a matching keyword wins.
const RULES: &[(&[&str], Responsibility)] = &[
    (&["save", "db", "query"], Responsibility::Persistence),
    (&["render", "view", "ui"], Responsibility::Presentation),
    (&["validate", "auth"], Responsibility::Security),
];

/// Lexical guess at what a method is for, from its name alone.
pub fn infer_responsibility(method_name: &str) -> Responsibility {
    let lower = method_name.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, responsibility)| *responsibility)
        .unwrap_or(Responsibility::BusinessLogic)
}
