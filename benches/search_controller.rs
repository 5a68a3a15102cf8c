// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_gallery::application::search::{Controller, Event};
use iced_gallery::domain::search::{ImageResult, SearchPage, TotalCount};
use std::hint::black_box;

const PER_PAGE: u64 = 200;

fn page(index: u64, total: u64) -> SearchPage {
    let start = index * PER_PAGE;
    SearchPage {
        results: (start..start + PER_PAGE)
            .map(|id| ImageResult {
                id,
                thumbnail_url: format!("https://cdn.example/{id}_640.jpg"),
                full_size_url: format!("https://cdn.example/{id}_1280.jpg"),
                tags: "bench, photo".to_string(),
            })
            .collect(),
        total: TotalCount::new(total),
    }
}

/// Submits a query and accumulates `pages` full pages.
fn accumulate(pages: u64) -> Controller {
    let total = pages * PER_PAGE;
    let mut controller = Controller::new();
    controller.handle(Event::Submit("mountains".into()));

    for index in 0..pages {
        if index > 0 {
            controller.handle(Event::LoadMore);
        }
        if let Some(ticket) = controller.in_flight() {
            controller.handle(Event::FetchCompleted {
                ticket,
                outcome: Ok(page(index, total)),
            });
        }
    }
    controller
}

fn search_controller_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_controller");

    for pages in [1_u64, 5, 25] {
        group.bench_with_input(BenchmarkId::new("accumulate_pages", pages), &pages, |b, &pages| {
            b.iter(|| black_box(accumulate(black_box(pages))));
        });
    }

    group.finish();
}

criterion_group!(benches, search_controller_benchmark);
criterion_main!(benches);
