use std::hint::black_box;

use criterion::{Criterion, Throughput};
use microweb::http::{Method, Request, RequestBuffer, RequestParser, STATUS_OK};
use microweb::net::{Close, Connection, Read, Write};
use microweb::server::handlers::RelayHandler;
use microweb::server::{HandlerFn, HandlerResult, ResponseWriter, Server};

/// In-memory connection: reads canned request bytes, discards writes.
struct BenchConnection {
    data: &'static [u8],
    read_pos: usize,
}

impl BenchConnection {
    fn new(data: &'static [u8]) -> Self {
        Self { data, read_pos: 0 }
    }
}

impl Read for BenchConnection {
    type Error = microweb::net::error::Error;
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = &self.data[self.read_pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.read_pos += n;
        Ok(n)
    }
}

impl Write for BenchConnection {
    type Error = microweb::net::error::Error;
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for BenchConnection {
    type Error = microweb::net::error::Error;
    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for BenchConnection {}

fn ack(_request: &Request<'_>, response: &mut ResponseWriter<'_, BenchConnection>) -> HandlerResult {
    response.respond(STATUS_OK)
}

fn pass(
    _request: &Request<'_>,
    _response: &mut ResponseWriter<'_, BenchConnection>,
) -> HandlerResult {
    Ok(())
}

pub fn bench_dispatch(c: &mut Criterion) {
    const LINE: &[u8] = b"GET /status HTTP/1.1\r\n";

    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Bytes(LINE.len() as u64));

    let mut server: Server<HandlerFn<BenchConnection>> = Server::new();
    server.register(Method::Get, Some("gpio"), pass).unwrap();
    server.register(Method::Put, Some("relays"), pass).unwrap();
    server.register(Method::Get, Some("status"), ack).unwrap();
    server.register(Method::Any, None, pass).unwrap();

    let mut buffer = RequestBuffer::new();
    buffer.fill_from_slice(LINE);
    let request = RequestParser::parse(&buffer).unwrap();

    group.bench_function("four_routes", |b| {
        b.iter(|| {
            let mut conn = BenchConnection::new(b"");
            let mut response = ResponseWriter::new(&mut conn);
            server.dispatch(black_box(&request), &mut response).unwrap();
        })
    });
    group.finish();
}

pub fn bench_serve_connection(c: &mut Criterion) {
    const LINE: &[u8] = b"PUT /relays/3?state=on HTTP/1.1\r\n";

    let mut group = c.benchmark_group("serve_connection");
    group.throughput(Throughput::Bytes(LINE.len() as u64));

    let mut server: Server<RelayHandler> = Server::new();
    server
        .register(Method::Any, Some("relays"), RelayHandler::new([4, 5, 6, 7]))
        .unwrap();

    group.bench_function("relay_put", |b| {
        b.iter_batched(
            || BenchConnection::new(LINE),
            |conn| server.serve_connection(conn).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bench_relay_report(c: &mut Criterion) {
    const LINE: &[u8] = b"GET /relays HTTP/1.1\r\n";

    let mut group = c.benchmark_group("relay_report");
    group.throughput(Throughput::Bytes(LINE.len() as u64));

    let mut server: Server<RelayHandler> = Server::new();
    server
        .register(Method::Any, Some("relays"), RelayHandler::new([4, 5, 6, 7]))
        .unwrap();

    group.bench_function("text_report", |b| {
        b.iter_batched(
            || BenchConnection::new(LINE),
            |conn| server.serve_connection(conn).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}
