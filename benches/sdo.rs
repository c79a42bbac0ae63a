use geo::polygon;

use criterion::{criterion_group, criterion_main, Criterion};
use sdo_geometry::geometry::Geometry;
use sdo_geometry::io::sdo::{decode, encode, SdoGeometry};

fn create_data() -> Vec<Geometry> {
    // An L shape
    let poly = polygon![
        (x: 0.0, y: 0.0),
        (x: 4.0, y: 0.0),
        (x: 4.0, y: 1.0),
        (x: 1.0, y: 1.0),
        (x: 1.0, y: 4.0),
        (x: 0.0, y: 4.0),
        (x: 0.0, y: 0.0),
    ];
    let geometry = Geometry::from(geo::Geometry::Polygon(poly));
    vec![geometry; 1000]
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let encoded: Vec<SdoGeometry> = data.iter().map(|g| encode(g).unwrap()).collect();

    c.bench_function("encode 1000 polygons as SDO_GEOMETRY", |b| {
        b.iter(|| {
            for geometry in &data {
                let _sdo = encode(geometry).unwrap();
            }
        })
    });

    c.bench_function("decode 1000 polygons from SDO_GEOMETRY", |b| {
        b.iter(|| {
            for sdo in &encoded {
                let _geometry = decode(sdo).unwrap();
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
