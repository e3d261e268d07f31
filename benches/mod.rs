use criterion::{criterion_group, criterion_main};

mod http;
mod server;

criterion_group!(
    benches,
    http::parser::bench_parse_request_line,
    http::parser::bench_parse_random_shapes,
    server::dispatch::bench_dispatch,
    server::dispatch::bench_serve_connection,
    server::dispatch::bench_relay_report
);
criterion_main!(benches);
