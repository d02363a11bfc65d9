//! Benchmarks for request construction
//!
//! This benchmark measures:
//! - Generic builder vs direct construction
//! - Typed operation encoding with growing steam id lists
//! - URL rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use steam_web_api::requests::{GetPlayerSummaries, WebApiCall};
use steam_web_api::{
    EndpointRenderer, InterfaceMethod, SteamWebApiRequest, SteamWebApiRequestBuilder,
    WebApiInterface, WebApiVersion,
};

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_construction");

    let builder = SteamWebApiRequestBuilder::with_fields(
        WebApiInterface::ISteamUser,
        InterfaceMethod::GetFriendList,
        WebApiVersion::V1,
        [("steamid", "76561197960435530"), ("relationship", "friend")],
    );

    group.bench_function("builder_build", |b| {
        b.iter(|| black_box(builder.build().unwrap()))
    });

    group.bench_function("direct_new", |b| {
        b.iter(|| {
            black_box(SteamWebApiRequest::new(
                WebApiInterface::ISteamUser,
                InterfaceMethod::GetFriendList,
                WebApiVersion::V1,
                [("steamid", "76561197960435530"), ("relationship", "friend")],
            ))
        })
    });

    group.finish();
}

fn bench_typed_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("typed_operations");

    for size in [1usize, 25, 100] {
        let ids: Vec<u64> = (0..size as u64).map(|i| 76561197960265728 + i).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("player_summaries", size),
            &ids,
            |b, ids| b.iter(|| black_box(GetPlayerSummaries::new(ids.clone()).build().unwrap())),
        );
    }

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let renderer = EndpointRenderer::default();
    let request = GetPlayerSummaries::new((0..100u64).map(|i| 76561197960265728 + i))
        .build()
        .unwrap();

    c.bench_function("render_player_summaries_url", |b| {
        b.iter(|| black_box(renderer.render(&request).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_typed_operations,
    bench_rendering,
);
criterion_main!(benches);
