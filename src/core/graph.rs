use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Coarse, name-derived label attached to every method.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Responsibility {
    Persistence,
    Presentation,
    Security,
    BusinessLogic,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Inherit,
    Call,
    Reference,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Inherit => "inherit",
            EdgeKind::Call => "call",
            EdgeKind::Reference => "reference",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodRecord {
    pub name: String,
    pub lines: usize,
    pub inferred_resp: Responsibility,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub method_count: usize,
    pub field_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencyEdge {
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    pub target: String,
}

impl DependencyEdge {
    pub fn new(kind: EdgeKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }
}

/// One extracted class or interface.
///
/// The simple name and the optional resolved name are kept apart; the
/// serialized `className` is the resolved name when one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    pub simple_name: String,
    pub qualified_name: Option<String>,
    pub is_interface: bool,
    pub methods: Vec<MethodRecord>,
    pub metrics: MetricsSummary,
    pub dependencies: Vec<DependencyEdge>,
}

impl TypeRecord {
    pub fn class_name(&self) -> &str {
        self.qualified_name.as_deref().unwrap_or(&self.simple_name)
    }
}

impl Serialize for TypeRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TypeRecord", 5)?;
        state.serialize_field("className", self.class_name())?;
        state.serialize_field("isInterface", &self.is_interface)?;
        state.serialize_field("methods", &self.methods)?;
        state.serialize_field("metrics", &self.metrics)?;
        state.serialize_field("dependencies", &self.dependencies)?;
        state.end()
    }
}

/// Root document handed to the serialization boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ArchitectureGraph {
    pub project: String,
    pub classes: Vec<TypeRecord>,
}

impl ArchitectureGraph {
    pub fn edge_count(&self) -> usize {
        self.classes.iter().map(|c| c.dependencies.len()).sum()
    }
}

/// Accumulates per-file records in discovery order.
pub struct GraphAssembler {
    project: String,
    classes: Vec<TypeRecord>,
}

impl GraphAssembler {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            classes: Vec::new(),
        }
    }

    pub fn append(&mut self, records: Vec<TypeRecord>) {
        self.classes.extend(records);
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn finish(self) -> ArchitectureGraph {
        ArchitectureGraph {
            project: self.project,
            classes: self.classes,
        }
    }
}
