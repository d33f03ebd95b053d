use criterion::{black_box, criterion_group, criterion_main, Criterion};

use molprobe::{analyze, analyze_batch, parse_smiles, RingInfo};

const METHANE: &str = "C";
const ASPIRIN: &str = "CC(=O)OC1=CC=CC=C1C(=O)O";
const CAFFEINE: &str = "Cn1cnc2c1c(=O)n(C)c(=O)n2C";
const ATORVASTATIN: &str =
    "CC(C)c1c(C(=O)Nc2ccccc2)c(-c2ccccc2)c(-c2ccc(F)cc2)n1CCC(O)CC(O)CC(=O)O";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("methane", |b| {
        b.iter(|| black_box(parse_smiles(black_box(METHANE)).unwrap()))
    });
    group.bench_function("aspirin", |b| {
        b.iter(|| black_box(parse_smiles(black_box(ASPIRIN)).unwrap()))
    });
    group.bench_function("caffeine", |b| {
        b.iter(|| black_box(parse_smiles(black_box(CAFFEINE)).unwrap()))
    });
    group.bench_function("atorvastatin", |b| {
        b.iter(|| black_box(parse_smiles(black_box(ATORVASTATIN)).unwrap()))
    });

    group.finish();
}

fn bench_rings(c: &mut Criterion) {
    let aspirin = parse_smiles(ASPIRIN).unwrap();
    let caffeine = parse_smiles(CAFFEINE).unwrap();
    let atorvastatin = parse_smiles(ATORVASTATIN).unwrap();

    let mut group = c.benchmark_group("rings");

    group.bench_function("aspirin", |b| {
        b.iter(|| black_box(RingInfo::find(black_box(&aspirin))))
    });
    group.bench_function("caffeine", |b| {
        b.iter(|| black_box(RingInfo::find(black_box(&caffeine))))
    });
    group.bench_function("atorvastatin", |b| {
        b.iter(|| black_box(RingInfo::find(black_box(&atorvastatin))))
    });

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    group.bench_function("aspirin", |b| {
        b.iter(|| black_box(analyze(black_box(ASPIRIN))))
    });
    group.bench_function("caffeine", |b| {
        b.iter(|| black_box(analyze(black_box(CAFFEINE))))
    });
    group.bench_function("atorvastatin", |b| {
        b.iter(|| black_box(analyze(black_box(ATORVASTATIN))))
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let inputs: Vec<&str> = [ASPIRIN, CAFFEINE, ATORVASTATIN, METHANE]
        .iter()
        .cycle()
        .take(400)
        .copied()
        .collect();

    let mut group = c.benchmark_group("batch");
    group.bench_function("400_molecules", |b| {
        b.iter(|| black_box(analyze_batch(black_box(&inputs))))
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_rings, bench_analyze, bench_batch);
criterion_main!(benches);
