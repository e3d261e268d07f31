use std::hint::black_box;

use criterion::{Criterion, Throughput};
use microweb::http::{RequestBuffer, RequestParser};
use rand::Rng;

const TYPICAL_LINE: &[u8] = b"PUT /relays/3?state=on HTTP/1.1\r\n";
const FULL_LINE: &[u8] = b"GET /aaaa/bbbb/cccc/dddd?k1=v1&k2=v2&k3=v3&k4=v4 HTTP/1.1\r\n";

pub fn bench_parse_request_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_request_line");

    let mut buffer = RequestBuffer::new();
    buffer.fill_from_slice(TYPICAL_LINE);
    group.throughput(Throughput::Bytes(TYPICAL_LINE.len() as u64));
    group.bench_function("typical", |b| {
        b.iter(|| RequestParser::parse(black_box(&buffer)).unwrap())
    });

    // Every segment and argument slot occupied
    let mut full_buffer = RequestBuffer::new();
    full_buffer.fill_from_slice(FULL_LINE);
    group.throughput(Throughput::Bytes(FULL_LINE.len() as u64));
    group.bench_function("full_shape", |b| {
        b.iter(|| RequestParser::parse(black_box(&full_buffer)).unwrap())
    });

    group.finish();
}

pub fn bench_parse_random_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_random_shapes");

    let methods = ["GET", "PUT", "POST", "DELETE"];
    let mut rng = rand::thread_rng();

    group.bench_function("random", |b| {
        b.iter_batched_ref(
            || {
                let mut line = String::from(methods[rng.gen_range(0..methods.len())]);
                line.push_str(" /");
                let segments = rng.gen_range(0..=4);
                for i in 0..segments {
                    if i > 0 {
                        line.push('/');
                    }
                    line.push_str("segment");
                }
                for i in 0..rng.gen_range(0..=4) {
                    line.push(if i == 0 { '?' } else { '&' });
                    line.push_str(&format!("k{}=v{}", i, i));
                }
                line.push_str(" HTTP/1.1\r\n");

                let mut buffer = RequestBuffer::new();
                buffer.fill_from_slice(line.as_bytes());
                buffer
            },
            |buffer| {
                black_box(RequestParser::parse(buffer).unwrap());
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}
