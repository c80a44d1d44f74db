//! Performance benchmarks for the generation pipeline.
//!
//! Measures driver throughput across endpoint counts and the cost of
//! PowerShell rendering.
//!
//! Run with: cargo bench --package sdkwrap-codegen

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sdkwrap_codegen::{
    DescriptorBuilder, FileNaming, GenerationDriver, PowerShellEmitter, render_units,
};
use sdkwrap_core::{EndpointDescriptor, PropertyInfo, TypeRef, TypeShape};
use sdkwrap_introspector::MetadataCatalog;
use std::hint::black_box;

// ============================================================================
// Test Data Generators
// ============================================================================

const MODEL_NS: &str = "NetBox.Model";

fn string() -> TypeRef {
    TypeRef::class("System", "String")
}

/// Builds a catalog with `count` request models sharing one nested tenant.
fn create_catalog(count: usize) -> MetadataCatalog {
    let mut catalog = MetadataCatalog::default();
    catalog.insert(
        format!("{MODEL_NS}.NestedTenant"),
        TypeShape::new(vec![PropertyInfo::new("Name", string())]),
    );
    for index in 0..count {
        catalog.insert(
            format!("{MODEL_NS}.Resource{index}Request"),
            TypeShape::new(vec![
                PropertyInfo::new("Name", string()),
                PropertyInfo::new("Slug", string()),
                PropertyInfo::new("Weight", TypeRef::value("System", "Int32")),
                PropertyInfo::new("Tenant", TypeRef::class(MODEL_NS, "NestedTenant")),
            ]),
        );
    }
    catalog
}

/// Creates alternating read and create endpoints across four clients.
fn create_endpoints(count: usize) -> Vec<EndpointDescriptor> {
    (0..count)
        .map(|index| {
            let client = format!("Client{}Api", index % 4);
            if index % 2 == 0 {
                EndpointDescriptor::new(
                    client,
                    format!("GetResource{index}s"),
                    TypeRef::class(MODEL_NS, format!("Resource{index}ListResponse")),
                    [("limit", TypeRef::nullable(TypeRef::value("System", "Int32")))],
                )
            } else {
                EndpointDescriptor::new(
                    client,
                    format!("CreateResource{index}"),
                    TypeRef::class(MODEL_NS, format!("Resource{index}")),
                    [(
                        "request",
                        TypeRef::class(MODEL_NS, format!("Resource{index}Request")),
                    )],
                )
            }
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_driver(c: &mut Criterion) {
    let mut group = c.benchmark_group("driver_run");

    for count in [10, 100, 1000] {
        let catalog = create_catalog(count);
        let endpoints = create_endpoints(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &endpoints, |b, eps| {
            b.iter(|| {
                let driver = GenerationDriver::new(&catalog, DescriptorBuilder::default());
                black_box(driver.run(black_box(eps)))
            });
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_powershell");
    let emitter = PowerShellEmitter::new().unwrap();
    let naming = FileNaming::default();

    for count in [10, 100] {
        let catalog = create_catalog(count);
        let report = GenerationDriver::new(&catalog, DescriptorBuilder::default())
            .run(&create_endpoints(count));

        group.throughput(Throughput::Elements(report.function_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &report, |b, report| {
            b.iter(|| black_box(render_units(&emitter, black_box(report), &naming).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_driver, bench_render);
criterion_main!(benches);
