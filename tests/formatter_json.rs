use archgraph::core::{
    ArchitectureGraph, DependencyEdge, EdgeKind, GraphAssembler, MethodRecord, MetricsSummary,
    Responsibility, TypeRecord,
};
use archgraph::formatters::JsonFormatter;
use serde_json::{json, Value};

fn sample_graph() -> ArchitectureGraph {
    let mut assembler = GraphAssembler::new("proj/src");
    assembler.append(vec![TypeRecord {
        simple_name: "UserService".to_string(),
        qualified_name: Some("app.UserService".to_string()),
        is_interface: false,
        methods: vec![MethodRecord {
            name: "saveUser".to_string(),
            lines: 5,
            inferred_resp: Responsibility::Persistence,
        }],
        metrics: MetricsSummary {
            method_count: 1,
            field_count: 2,
        },
        dependencies: vec![DependencyEdge::new(EdgeKind::Inherit, "BaseService")],
    }]);
    assembler.append(vec![TypeRecord {
        simple_name: "Local".to_string(),
        qualified_name: None,
        is_interface: true,
        methods: vec![MethodRecord {
            name: "run".to_string(),
            lines: 0,
            inferred_resp: Responsibility::BusinessLogic,
        }],
        metrics: MetricsSummary {
            method_count: 1,
            field_count: 0,
        },
        dependencies: vec![],
    }]);
    assembler.finish()
}

#[test]
fn json_snapshot_matches_consumer_contract() {
    let s = JsonFormatter::new().format_graph(&sample_graph()).unwrap();
    let v: Value = serde_json::from_str(&s).unwrap();

    let expected = json!({
        "project": "proj/src",
        "classes": [
            {
                "className": "app.UserService",
                "isInterface": false,
                "methods": [{"name": "saveUser", "lines": 5, "inferred_resp": "Persistence"}],
                "metrics": {"methodCount": 1, "fieldCount": 2},
                "dependencies": [{"type": "inherit", "target": "BaseService"}]
            },
            {
                "className": "Local",
                "isInterface": true,
                "methods": [{"name": "run", "lines": 0, "inferred_resp": "BusinessLogic"}],
                "metrics": {"methodCount": 1, "fieldCount": 0},
                "dependencies": []
            }
        ]
    });
    assert_eq!(v, expected);
}

#[test]
fn pretty_output_keeps_field_order() {
    let s = JsonFormatter::new().format_graph(&sample_graph()).unwrap();
    assert!(s.starts_with("{\n  \"project\": \"proj/src\",\n  \"classes\": ["));

    let class_start = s.find("\"className\"").unwrap();
    let order = ["\"isInterface\"", "\"methods\"", "\"metrics\"", "\"dependencies\""];
    let mut last = class_start;
    for key in order {
        let at = s[last..].find(key).unwrap() + last;
        assert!(at > last);
        last = at;
    }

    let compact = JsonFormatter::new()
        .with_pretty(false)
        .format_graph(&sample_graph())
        .unwrap();
    assert!(!compact.contains('\n'));
}

#[test]
fn format_to_file_replaces_output_without_leftovers() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("abstraction.json");
    std::fs::write(&out, "stale").unwrap();

    JsonFormatter::new()
        .format_to_file(&sample_graph(), &out)
        .unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("app.UserService"));
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn failed_write_leaves_no_partial_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("missing-dir").join("abstraction.json");

    let result = JsonFormatter::new().format_to_file(&sample_graph(), &out);
    assert!(result.is_err());
    assert!(!out.exists());
}

#[test]
fn format_to_file_leaves_neighbouring_files_alone() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("abstraction.json");
    let neighbour = dir.path().join("abstraction.json.tmp");
    std::fs::write(&neighbour, "user data").unwrap();

    let formatter = JsonFormatter::new();
    formatter.format_to_file(&sample_graph(), &out).unwrap();
    formatter.format_to_file(&sample_graph(), &out).unwrap();

    assert_eq!(std::fs::read_to_string(&neighbour).unwrap(), "user data");
    let v: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["project"], "proj/src");
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 2);
}
