use std::cell::Cell;
use std::rc::Rc;

use anyhow::ensure;
use ethical_list_core::{IntrinsicSize, RecyclingList, Size};
use ethical_list_surface::{
    make_surface, CollectionSpec, Presentation, RecyclingCollectionSurface, SurfaceBackend,
};

const PAGE_SIZE: usize = 50;
const MAX_ITEMS: usize = 501;
const SCROLL_STEP: f32 = 400.0;

/// A fixed-size labelled tile.
#[derive(Clone, Debug)]
struct Tile {
    label: String,
    size: Size,
}

impl IntrinsicSize for Tile {
    fn intrinsic_size(&self) -> Size {
        self.size
    }
}

fn tile(size: Size) -> impl Fn(&String) -> Tile {
    move |item| Tile {
        label: item.clone(),
        size,
    }
}

fn backend() -> SurfaceBackend {
    if cfg!(feature = "unsupported") {
        SurfaceBackend::Unsupported
    } else {
        SurfaceBackend::detect()
    }
}

fn describe(presentation: &Presentation<'_, Tile>) -> String {
    match presentation {
        Presentation::Unsupported { label } => format!("[{label}]"),
        Presentation::Items(items) => {
            let labels: Vec<&str> = items.iter().map(|placed| placed.content.label.as_str()).collect();
            format!("{} on screen: {}", labels.len(), labels.join(" "))
        }
    }
}

/// Scrolls a vertical grid to the bottom, loading a page of items each time
/// the last item is bound.
fn run_vertical() -> anyhow::Result<()> {
    let mut items: Vec<String> = (0..=300).map(|i| i.to_string()).collect();
    let wants_more = Rc::new(Cell::new(false));

    let flag = Rc::clone(&wants_more);
    let list = RecyclingList::vertical(items.clone(), tile(Size::new(127.0, 127.0)))
        .on_last_item_appear(move || flag.set(true));
    let mut surface = make_surface(
        backend(),
        &list,
        Size::new(400.0, 800.0),
        CollectionSpec::default().spacing(4.0),
    );
    println!("vertical: {}", describe(&surface.presentation()));

    loop {
        let moved = surface.scroll_by(SCROLL_STEP);
        // The handler only records the request; the surface is reloaded here,
        // once the scroll pass that bound the last item has returned.
        if wants_more.replace(false) && items.len() < MAX_ITEMS {
            let start = items.len();
            let end = (start + PAGE_SIZE).min(MAX_ITEMS);
            items.extend((start..end).map(|i| i.to_string()));
            log::info!("loaded items {start}..{end}");
            surface.items_changed(items.clone());
            continue;
        }
        if moved == 0.0 {
            break;
        }
    }

    let stats = surface.stats();
    println!("vertical: {}", describe(&surface.presentation()));
    println!(
        "vertical: {} items, {} slots created, {} binds, {} reused, {} end-of-list signals",
        surface.item_count(),
        stats.slots_created,
        stats.total_binds,
        stats.reuse_count,
        stats.end_of_list_signals
    );
    ensure!(
        stats.slots_created < 64,
        "recycling allocated {} slots",
        stats.slots_created
    );
    Ok(())
}

/// Scrolls a two-row horizontal strip to its end.
fn run_horizontal() -> anyhow::Result<()> {
    let items: Vec<String> = (0..=300).map(|i| i.to_string()).collect();
    let list = RecyclingList::horizontal(items, tile(Size::new(100.0, 100.0)))
        .on_last_item_appear(|| log::info!("horizontal strip reached its last item"));
    let mut surface = make_surface(
        backend(),
        &list,
        Size::new(400.0, 220.0),
        CollectionSpec::default(),
    );
    surface.scroll_to(f32::MAX);
    println!("horizontal: {}", describe(&surface.presentation()));
    ensure!(
        surface.stats().slots_created <= 16,
        "horizontal strip allocated {} slots",
        surface.stats().slots_created
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Ethical List Demo ===");
    println!("backend: {:?}", backend());
    run_vertical()?;
    run_horizontal()?;
    Ok(())
}
