use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use thompson_runtime::*;

/// Builds the automaton equivalent of the pattern `(x|y)*`.
fn zero_or_more_alternation() -> Nfa {
    let mut arena = StateArena::default();

    let x_accept = arena.insert_state_mut(State::new());
    let x_start = arena.insert_state_mut(State::new().with_label('x').with_edge(x_accept));
    let y_accept = arena.insert_state_mut(State::new());
    let y_start = arena.insert_state_mut(State::new().with_label('y').with_edge(y_accept));

    let alt_accept = arena.insert_state_mut(State::new());
    let alt_start = arena.insert_state_mut(State::new().with_edge(x_start).with_edge(y_start));
    arena[x_accept].add_edge_mut(alt_accept);
    arena[y_accept].add_edge_mut(alt_accept);

    let star_accept = arena.insert_state_mut(State::new());
    let star_start =
        arena.insert_state_mut(State::new().with_edge(alt_start).with_edge(star_accept));
    arena[alt_accept].add_edge_mut(alt_start);
    arena[alt_accept].add_edge_mut(star_accept);

    Nfa::new(arena, Fragment::new(star_start, star_accept))
}

pub fn linear_input_size_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("input length comparison");
    let pad = "xy";
    let nfa = zero_or_more_alternation();

    (1..10)
        .map(|exponent| 2usize.pow(exponent))
        .map(|input_len| {
            (
                pad.chars().cycle().take(input_len).collect::<String>(),
                input_len,
            )
        })
        .for_each(|(input, sample_size)| {
            group.throughput(Throughput::Elements(sample_size as u64));
            group.bench_with_input(
                BenchmarkId::new("input length of size", sample_size),
                &input,
                |b, input| b.iter(|| assert!(run(&nfa, input))),
            );
        })
}

criterion_group!(benches, linear_input_size_comparison);
criterion_main!(benches);
