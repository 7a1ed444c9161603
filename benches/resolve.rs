#![allow(dead_code)]

use criterion::{criterion_group, criterion_main, Criterion};
use stash_di::{Config, Container, Inject, Scope, Selector};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("resolve_global", |b| {
        struct A;

        let container = Container::new();
        container.register(|| Ok(A));
        b.iter(|| container.resolve::<A>().unwrap());
    })
    .bench_function("resolve_global_qualified", |b| {
        struct A;

        let container = Container::new();
        container.register_with(|| Ok(A), Config::default().with_qualifier("stub").with_registry("private"));
        let selector = Selector::new().with_qualifier("stub").with_registry("private");
        b.iter(|| container.resolve_with::<A>(&selector).unwrap());
    })
    .bench_function("resolve_retain_held", |b| {
        struct A;

        let container = Container::new();
        container.register_with(|| Ok(A), Config::from(Scope::Retain));
        let _held = container.resolve::<A>().unwrap();
        b.iter(|| container.resolve::<A>().unwrap());
    })
    .bench_function("resolve_retain_dropped", |b| {
        struct A;

        let container = Container::new();
        container.register_with(|| Ok(A), Config::from(Scope::Retain));
        b.iter(|| container.resolve::<A>().unwrap());
    })
    .bench_function("resolve_property", |b| {
        struct A(u64);

        let container = Container::new();
        container.register_with(|| Ok(A(0)), Config::from(Scope::Property));
        b.iter(|| container.resolve::<A>().unwrap());
    })
    .bench_function("inject_get", |b| {
        struct A;

        let container = Container::new();
        container.register(|| Ok(A));
        let inject = Inject::<A>::new(&container);
        b.iter(|| inject.get().unwrap());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
