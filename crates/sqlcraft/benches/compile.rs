use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlcraft::{Conjunction, GenericBuilder, JoinType, MySqlBuilder, Select, Union};

/// SELECT with `n` columns and `n` equality predicates:
/// SELECT t.col0, ... FROM t WHERE (t.col0 = :v1) AND ...
fn build_select(n: usize) -> Select {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let mut select = Select::new("t");
    select
        .set_columns(columns.iter().map(String::as_str))
        .unwrap();
    let tree = select.where_();
    for (i, column) in columns.iter().enumerate() {
        tree.equals(column, i as i64);
    }
    select
}

/// Chain of `depth` joins, each carrying its own WHERE and an OR sub-tree.
fn build_joined(depth: usize) -> Select {
    let mut select = Select::new("t0");
    select.where_().equals("id", 1);
    let mut current = &mut select;
    for i in 1..=depth {
        let child = current
            .join(format!("t{i}"), "id", "parent_id", &["name"], JoinType::Left)
            .unwrap();
        child
            .where_()
            .sub_where(Conjunction::Or)
            .less_than("score", 10)
            .greater_than("score", 90);
        current = child;
    }
    select
}

fn bench_compile_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/select");
    let builder = GenericBuilder::new();

    for n in [1, 5, 10, 50, 100] {
        let select = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &select, |b, select| {
            b.iter(|| black_box(builder.compile(select).unwrap()));
        });
    }

    group.finish();
}

fn bench_compile_joins(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/joins");
    let builder = MySqlBuilder::new();

    for depth in [1, 4, 16] {
        let select = build_joined(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &select, |b, select| {
            b.iter(|| black_box(builder.compile(select).unwrap()));
        });
    }

    group.finish();
}

fn bench_compile_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile/union");
    let builder = GenericBuilder::new();

    for members in [2, 10, 50] {
        let union: Union = (0..members).map(|_| build_select(5)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(members), &union, |b, union| {
            b.iter(|| black_box(builder.compile(union).unwrap()));
        });
    }

    group.finish();
}

fn bench_write_formatted(c: &mut Criterion) {
    let builder = GenericBuilder::new();
    let select = build_joined(4);
    c.bench_function("compile/write_formatted", |b| {
        b.iter(|| black_box(builder.write_formatted(&select).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_compile_select,
    bench_compile_joins,
    bench_compile_union,
    bench_write_formatted
);
criterion_main!(benches);
