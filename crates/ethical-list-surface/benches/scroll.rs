use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ethical_list_core::{Orientation, Size};
use ethical_list_surface::{CollectionSpec, RecyclingCollectionSurface, VirtualizedSurface};
use ethical_list_testing::{numbered_items, text_list};

const ITEM_COUNT_SAMPLES: &[usize] = &[1_000, 10_000];
const CELL: Size = Size {
    width: 120.0,
    height: 48.0,
};
const VIEWPORT: Size = Size {
    width: 360.0,
    height: 640.0,
};
const SCROLL_STEP: f32 = 37.0;

fn bench_scroll_through(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_through");
    for &count in ITEM_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("items", count), &count, |b, &count| {
            let list = text_list(numbered_items(0..=count - 1), Orientation::Vertical, CELL);
            b.iter(|| {
                let mut surface =
                    VirtualizedSurface::new(&list, VIEWPORT, CollectionSpec::default());
                while surface.scroll_by(SCROLL_STEP) != 0.0 {}
                black_box(surface.stats());
            });
        });
    }
    group.finish();
}

fn bench_reload(c: &mut Criterion) {
    let mut group = c.benchmark_group("reload");
    for &count in ITEM_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("items", count), &count, |b, &count| {
            let list = text_list(numbered_items(0..=count - 1), Orientation::Vertical, CELL);
            let mut surface = VirtualizedSurface::new(&list, VIEWPORT, CollectionSpec::default());
            surface.scroll_to(VIEWPORT.height * 3.0);
            b.iter(|| {
                surface.items_changed(numbered_items(0..=count - 1));
                black_box(surface.bound_indices());
            });
        });
    }
    group.finish();
}

criterion_group!(scroll, bench_scroll_through, bench_reload);
criterion_main!(scroll);
