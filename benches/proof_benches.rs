use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nd_prover::{parse, start_proof, ProofError, Prop, Rule, Vocabulary};

/// (p → q) → (¬q → ¬p), step by step
fn contraposition(implication: &Prop) -> Result<bool, ProofError> {
    let mut resolver = start_proof(&[], "(p implies q) implies (not q implies not p)", Vocabulary::Intuitionistic)?;
    let root = resolver.root();
    let step = resolver.apply(root, Rule::ImplicationIntroduction, None)?[0];
    let step = resolver.apply(step, Rule::ImplicationIntroduction, None)?[0];
    let step = resolver.apply(step, Rule::ModusTollens, Some(implication))?[0];
    resolver.apply(step, Rule::Axiom, None)?;
    Ok(resolver.is_complete())
}

pub fn bench_proofs(c: &mut Criterion) {
    let implication = Prop::implies(Prop::var("p"), Prop::var("q"));
    c.bench_function("contraposition", |b| b.iter(|| contraposition(black_box(&implication))));
}

pub fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let sources = [
        "p implies p",
        "((ace implies king) or (king implies ace)) and not ((ace implies king) and (king implies ace))",
    ];
    for source in sources.iter() {
        group.bench_with_input(*source, source, |b, source| b.iter(|| parse(black_box(source))));
    }
    group.finish();
}

criterion_group!(benches, bench_proofs, bench_parse);
criterion_main!(benches);
