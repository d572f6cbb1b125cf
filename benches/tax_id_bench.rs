use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cadastro::core::*;

const INPUTS: [&str; 6] = [
    "111.444.777-35",
    "11144477735",
    "11.222.333/0001-81",
    "12.ABC.345/01DE-45",
    "111.444",
    "not a tax id at all",
];

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_cpf", |b| {
        b.iter(|| validate_cpf(black_box("111.444.777-35")))
    });
    c.bench_function("validate_cnpj_alphanumeric", |b| {
        b.iter(|| validate_cnpj(black_box("12.ABC.345/01DE-45")))
    });
}

fn bench_detect(c: &mut Criterion) {
    c.bench_function("detect_mixed_inputs", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(detect_person_type_from_tax_id(black_box(input)));
            }
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("tax_id_parse", |b| {
        b.iter(|| TaxId::parse(black_box("11.222.333/0001-81")))
    });
}

criterion_group!(benches, bench_validate, bench_detect, bench_parse);
criterion_main!(benches);
