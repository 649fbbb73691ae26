use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use squill::{Connective, MySql, Select, select};

/// Build a SELECT with `n` columns and `n` ANDed conditions:
/// SELECT `col0`, ... FROM `t` WHERE `col0` = 0 AND `col1` = 1 ...
fn build_select(n: usize) -> Select {
    let mut qb = select("t");
    for i in 0..n {
        qb = qb.select(format!("col{i}"));
    }
    for i in 0..n {
        qb = qb.and_where(format!("col{i}"), "=", i as i64);
    }
    qb
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.to_sql(&MySql).unwrap()));
        });
    }

    group.finish();
}

fn bench_build_and_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build_and_compile");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let qb = build_select(n);
                black_box(qb.to_sql(&MySql).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let qb = select("t").and_where("id", "IN", values.clone());
                black_box(qb.to_sql(&MySql).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_nested_groups(c: &mut Criterion) {
    use squill::ConditionTree;

    let mut group = c.benchmark_group("sql_builder/nested_groups");

    for depth in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut tree = ConditionTree::new();
                for i in 0..depth {
                    tree.open(Connective::Or);
                    tree.push(Connective::And, "x", ">", i as i64);
                }
                for _ in 0..depth {
                    tree.close();
                }
                black_box(tree.to_sql(&MySql).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_sql,
    bench_build_and_compile,
    bench_in_list,
    bench_nested_groups
);
criterion_main!(benches);
