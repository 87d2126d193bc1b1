use archgraph::config::ExtractorConfig;
use archgraph::core::{ArchitectureExtractor, EdgeKind};
use archgraph::formatters::JsonFormatter;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::Path;
use tempfile::TempDir;

fn write_service(dir: &Path, i: usize) {
    let content = format!(
        r#"
package bench.service{pkg};

import bench.repo.Repository{i};

public class Service{i} extends BaseService {{
    private Repository{i} repository;
    private int processed;

    public Service{i}(Repository{i} repository) {{
        this.repository = repository;
    }}

    public void saveItem(String item) {{
        repository.store(item);
        processed++;
    }}

    public String renderSummary() {{
        return "processed=" + processed;
    }}

    public boolean checkPermission(String user) {{
        return user != null && !user.isEmpty();
    }}

    public int computeTotal(int[] values) {{
        int total = 0;
        for (int v : values) {{
            total += v;
        }}
        return new Accumulator().add(total);
    }}

    static class Accumulator {{
        int add(int value) {{ return value; }}
    }}
}}
"#,
        pkg = i % 10,
        i = i
    );
    std::fs::write(dir.join(format!("Service{i}.java")), content).unwrap();
}

fn write_project(files: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..files {
        let package_dir = dir.path().join(format!("service{}", i % 10));
        std::fs::create_dir_all(&package_dir).unwrap();
        write_service(&package_dir, i);
    }
    dir
}

fn benchmark_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    let small = write_project(10);
    group.bench_function("small_project", |b| {
        b.iter(|| {
            let extractor = ArchitectureExtractor::new(ExtractorConfig::default()).unwrap();
            black_box(extractor.extract(black_box(small.path())).unwrap())
        });
    });

    let large = write_project(200);
    group.bench_function("large_project_parallel", |b| {
        b.iter(|| {
            let extractor = ArchitectureExtractor::new(ExtractorConfig::default()).unwrap();
            black_box(extractor.extract(black_box(large.path())).unwrap())
        });
    });

    group.bench_function("large_project_sequential", |b| {
        b.iter(|| {
            let config = ExtractorConfig {
                parallel: false,
                ..ExtractorConfig::default()
            };
            let extractor = ArchitectureExtractor::new(config).unwrap();
            black_box(extractor.extract(black_box(large.path())).unwrap())
        });
    });

    group.bench_function("large_project_all_edges", |b| {
        b.iter(|| {
            let config = ExtractorConfig {
                edge_kinds: vec![EdgeKind::Inherit, EdgeKind::Reference, EdgeKind::Call],
                resolve_targets: true,
                ..ExtractorConfig::default()
            };
            let extractor = ArchitectureExtractor::new(config).unwrap();
            black_box(extractor.extract(black_box(large.path())).unwrap())
        });
    });

    group.finish();
}

fn benchmark_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    let project = write_project(200);
    let extraction = ArchitectureExtractor::new(ExtractorConfig::default())
        .unwrap()
        .extract(project.path())
        .unwrap();
    let formatter = JsonFormatter::new();

    group.bench_function("pretty_json", |b| {
        b.iter(|| black_box(formatter.format_graph(black_box(&extraction.graph)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_extraction, benchmark_serialization);
criterion_main!(benches);
