use criterion::{criterion_group, criterion_main, Criterion};
use core::tokenizer::tokenize;

const SAMPLE: &str = "Requests is an elegant and simple HTTP library for Python. \
To install the library, run `pip install requests`. Requests allows you to send \
HTTP/1.1 requests extremely easily, with no need to manually add query strings \
to your URLs or to form-encode your POST data.";

fn bench_tokenize(c: &mut Criterion) {
    let text = SAMPLE.repeat(50);
    c.bench_function("tokenize_docs", |b| b.iter(|| tokenize(&text)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
