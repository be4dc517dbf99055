use geo_types::polygon;

use criterion::{criterion_group, criterion_main, Criterion};
use geoarrow_wkt::{to_wkt, ToWKT, WktWriterOptions};

fn create_data() -> Vec<geo_types::Geometry> {
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
    vec![geo_types::Geometry::Polygon(poly); 1000]
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let nullable: Vec<_> = data.iter().cloned().map(Some).collect();

    c.bench_function("write Vec<geo_types::Geometry> as WKT strings", |b| {
        b.iter(|| {
            let _out: Vec<String> = data.iter().map(|geom| to_wkt(geom).unwrap()).collect();
        })
    });
    c.bench_function("write Vec<geo_types::Geometry> to a WKT StringArray", |b| {
        b.iter(|| {
            let _arr = nullable
                .to_wkt::<i32>(&WktWriterOptions::default())
                .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
