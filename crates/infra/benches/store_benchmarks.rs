use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use catalog_core::ProductId;
use catalog_infra::service::ProductService;
use catalog_infra::store::{InMemoryProductStore, ProductStore};
use catalog_products::NewProduct;

fn seeded_service(n: usize) -> (ProductService<InMemoryProductStore>, Vec<ProductId>) {
    let svc = ProductService::with_defaults(InMemoryProductStore::new());
    let ids = (0..n)
        .map(|i| {
            svc.add_product(NewProduct::new(
                format!("product-{i}"),
                "benchmark product",
                "https://example.com",
            ))
            .unwrap()
            .id_typed()
            .clone()
        })
        .collect();
    (svc, ids)
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_get");
    for size in [100usize, 10_000] {
        let (svc, ids) = seeded_service(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            let mut i = 0;
            b.iter(|| {
                let id = &ids[i % ids.len()];
                i += 1;
                black_box(svc.store().get(id).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_values");
    for size in [100usize, 10_000] {
        let (svc, _ids) = seeded_service(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(svc.list_products().unwrap()));
        });
    }
    group.finish();
}

fn bench_rate(c: &mut Criterion) {
    let (svc, ids) = seeded_service(1_000);
    c.bench_function("rate_product", |b| {
        let mut i = 0;
        b.iter(|| {
            let id = &ids[i % ids.len()];
            i += 1;
            black_box(svc.rate_product(id, (i % 5) as i64 + 1).unwrap())
        });
    });
}

criterion_group!(benches, bench_get, bench_values, bench_rate);
criterion_main!(benches);
