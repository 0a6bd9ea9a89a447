//! Performance benchmarks for bus-route-lib
//!
//! Run with: cargo bench --package bus-route-lib

use bus_route_lib::{
    Config, GeoPoint, RouteDrawer, RouteImpl, RoutePatternImpl, StopImpl, Viewport,
    is_segment_visible,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate a wiggly pattern path with the specified number of points.
fn generate_pattern(num_points: usize, base_lat: f64, base_lon: f64) -> RoutePatternImpl {
    let path = (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64;
            let lat = base_lat + t * 0.1 + (t * 50.0).sin() * 0.001;
            let lon = base_lon + t * 0.1 + (t * 30.0).cos() * 0.001;
            GeoPoint::new(lat, lon)
        })
        .collect();
    RoutePatternImpl::new("", path)
}

/// A stop served by `num_routes` routes with two patterns each
fn generate_stop(num_routes: usize, points_per_pattern: usize) -> StopImpl {
    (0..num_routes).fold(
        StopImpl::new(1, "Bench stop", GeoPoint::new(49.25, -123.1)),
        |stop, i| {
            let lat_offset = (i % 10) as f64 * 0.01;
            let lon_offset = (i / 10) as f64 * 0.01;
            stop.with_route(RouteImpl::new(
                i.to_string(),
                vec![
                    generate_pattern(points_per_pattern, 49.2 + lat_offset, -123.2 + lon_offset),
                    generate_pattern(points_per_pattern, 49.25 + lat_offset, -123.15 + lon_offset),
                ],
            ))
        },
    )
}

fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility");
    let viewport = Viewport::from_bounds(49.30, -123.20, 49.20, -123.00);

    let inside = (GeoPoint::new(49.25, -123.1), GeoPoint::new(49.26, -123.09));
    group.bench_function("endpoint_inside", |b| {
        b.iter(|| is_segment_visible(&viewport, inside.0, inside.1));
    });

    let crossing = (GeoPoint::new(49.10, -123.1), GeoPoint::new(49.40, -123.1));
    group.bench_function("crossing", |b| {
        b.iter(|| is_segment_visible(&viewport, crossing.0, crossing.1));
    });

    let outside = (GeoPoint::new(50.0, -122.0), GeoPoint::new(50.1, -121.9));
    group.bench_function("outside", |b| {
        b.iter(|| is_segment_visible(&viewport, outside.0, outside.1));
    });

    group.finish();
}

fn bench_plot_routes(c: &mut Criterion) {
    let mut group = c.benchmark_group("plot_routes");
    group.sample_size(20);

    for &(num_routes, points) in &[(5usize, 500usize), (20, 2_000)] {
        let stop = generate_stop(num_routes, points);
        let mut drawer = RouteDrawer::new(Config::default()).unwrap();

        let small_viewport = Viewport::from_bounds(49.26, -123.16, 49.24, -123.12);
        let large_viewport = Viewport::from_bounds(50.0, -124.0, 49.0, -122.0);

        group.throughput(Throughput::Elements((num_routes * 2 * points) as u64));
        group.bench_with_input(
            BenchmarkId::new("small_viewport", format!("{num_routes}x{points}")),
            &stop,
            |b, stop| b.iter(|| drawer.plot_routes(Some(stop), &small_viewport, 16)),
        );
        group.bench_with_input(
            BenchmarkId::new("large_viewport", format!("{num_routes}x{points}")),
            &stop,
            |b, stop| b.iter(|| drawer.plot_routes(Some(stop), &large_viewport, 11)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_visibility, bench_plot_routes);
criterion_main!(benches);
