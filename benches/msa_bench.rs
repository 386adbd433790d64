use criterion::{black_box, criterion_group, criterion_main, Criterion};

use padded_msa::multi_alignment::MultiAlignment;
use padded_msa::example_gen::generate_test;

pub fn bench_alignment(c: &mut Criterion) {
    let alphabet_size = 4;
    let root_lens = [1000, 10000];
    let num_rows = [8, 30];
    let error_rates = [0.0, 0.01, 0.02];

    let mut benchmark_group = c.benchmark_group("msa-group");
    benchmark_group.sample_size(10);

    for &rl in root_lens.iter() {
        for &nr in num_rows.iter() {
            for &er in error_rates.iter() {
                let (root, rows) = generate_test(alphabet_size, rl, nr, er);
                let test_label = format!("msa_{alphabet_size}x{rl}x{nr}_{er}");
                benchmark_group.bench_function(&test_label, |b| b.iter(|| {
                    black_box({
                        let msa = MultiAlignment::new(&root, rows.clone()).unwrap();
                        msa.consensus().unwrap()
                    });
                }));
            }
        }
    }

    benchmark_group.finish();
}

criterion_group!(benches, bench_alignment);
criterion_main!(benches);
