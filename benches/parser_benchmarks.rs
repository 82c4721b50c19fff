#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zxml::{formatter::XmlFormatter, parser::XmlParser};

fn bench_xml_parser(c: &mut Criterion) {
    let input = include_str!("../tests/input/large.xml");

    c.bench_function("parse_xml", |b| {
        b.iter(|| {
            let mut parser = XmlParser::new(black_box(input));
            parser.parse().unwrap()
        })
    });
}

fn bench_xml_formatter(c: &mut Criterion) {
    let input = include_str!("../tests/input/large.xml");
    let mut parser = XmlParser::new(input);
    let document = parser.parse().unwrap();

    c.bench_function("format_xml", |b| {
        b.iter(|| XmlFormatter.format(black_box(&document)).unwrap())
    });
}

criterion_group!(benches, bench_xml_parser, bench_xml_formatter);
criterion_main!(benches);
