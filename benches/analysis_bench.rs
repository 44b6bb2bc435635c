use cipherforge::kasiski::kasiski_distances;
use cipherforge::profiles::ReferenceProfile;
use cipherforge::shift::best_shift;
use cipherforge::weave::{keyword_shifts, vigenere_encrypt};
use cipherforge::{normalize, Case, NormalizedText};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn setup_ciphertext() -> NormalizedText {
    // Deterministic pseudo-prose: a few repeated phrases so Kasiski has work to do.
    let phrases = [
        "it was the best of times ",
        "it was the worst of times ",
        "the season of light ",
        "the winter of despair ",
    ];
    let mut rng = fastrand::Rng::with_seed(2024);
    let mut text = String::new();
    while text.len() < 4_000 {
        text.push_str(phrases[rng.usize(0..phrases.len())]);
    }

    let plain = normalize(&text, Case::Upper).expect("sample has letters");
    let key = keyword_shifts("CIPHER").expect("keyword has letters");
    vigenere_encrypt(&plain, &key).expect("non-empty key")
}

fn criterion_benchmark(c: &mut Criterion) {
    let cipher = setup_ciphertext();
    let reference = ReferenceProfile::default().table();

    c.bench_function("best_shift (4k chars)", |b| {
        b.iter(|| best_shift(black_box(&cipher), black_box(&reference)))
    });

    c.bench_function("kasiski_distances (4k chars)", |b| {
        b.iter(|| kasiski_distances(black_box(&cipher), black_box(3)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
