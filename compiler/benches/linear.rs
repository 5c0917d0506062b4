use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use thompson_compiler::compile;

fn concat_chain_of_length(pad_str: &str, len: usize) -> String {
    pad_str
        .chars()
        .cycle()
        .take(len)
        .map(String::from)
        .collect::<Vec<_>>()
        .join(".")
}

pub fn exponential_pattern_size_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern length compilation comparison");
    let pad = "ab";

    (1..10)
        .map(|exponent| 2usize.pow(exponent))
        .map(|pattern_len| (concat_chain_of_length(pad, pattern_len), pattern_len))
        .for_each(|(pattern, sample_size)| {
            group.throughput(Throughput::Elements(sample_size as u64));
            group.bench_with_input(
                BenchmarkId::new("pattern input length of size", sample_size),
                &pattern,
                |b, pattern| {
                    b.iter(|| {
                        let res = compile(pattern);
                        assert!(res.is_ok())
                    })
                },
            );
        })
}

criterion_group!(benches, exponential_pattern_size_comparison);
criterion_main!(benches);
