//! End-to-end tests for the software recycling surface, driven through the
//! scroll robot the way a host would drive it.
use ethical_list_core::{Orientation, Point, Rect, Size};
use ethical_list_surface::{
    CollectionSpec, PrefetchStrategy, RecyclingCollectionSurface, VirtualizedSurface,
};
use ethical_list_testing::robot_assertions::{
    assert_hides, assert_on_screen_count, assert_rect_approx_eq, assert_shows, assert_slot_bound,
    assert_slots_accounted,
};
use ethical_list_testing::{numbered_items, text_list, EndOfListProbe, ScrollRobot};

const CELL: Size = Size {
    width: 100.0,
    height: 100.0,
};
const COLUMN_VIEWPORT: Size = Size {
    width: 100.0,
    height: 500.0,
};

fn column_robot(probe: &EndOfListProbe, last: usize) -> ScrollRobot<String> {
    let list = text_list(numbered_items(0..=last), Orientation::Vertical, CELL)
        .on_last_item_appear(probe.callback());
    ScrollRobot::virtualized(&list, COLUMN_VIEWPORT)
}

#[test]
fn initial_layout_binds_visible_and_prefetch_window() {
    let probe = EndOfListProbe::new();
    let robot = column_robot(&probe, 300);

    assert_eq!(robot.visible_indices(), vec![0, 1, 2, 3, 4]);
    assert_eq!(robot.bound_indices(), vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(robot.surface().item_count(), 301);
    assert_eq!(probe.count(), 0);

    let stats = robot.stats();
    assert_eq!(stats.slots_created, 7);
    assert_eq!(stats.total_binds, 7);
}

#[test]
fn binding_last_item_fires_once() {
    let probe = EndOfListProbe::new();
    let mut robot = column_robot(&probe, 300);

    robot.scroll_to_end();
    let texts = robot.visible_texts();
    assert_shows(&texts, "300", "end of list");
    assert_hides(&texts, "150", "end of list");
    assert_eq!(probe.count(), 1);

    // The last item stays bound while nudging around the end.
    assert_eq!(robot.scroll_by(-50.0), -50.0);
    assert_eq!(robot.scroll_by(50.0), 50.0);
    assert_eq!(robot.scroll_by(50.0), 0.0);
    assert_eq!(probe.count(), 1);
    assert_eq!(robot.stats().end_of_list_signals, 1);
}

#[test]
fn middle_of_list_does_not_signal() {
    let probe = EndOfListProbe::new();
    let mut robot = column_robot(&probe, 300);

    robot.surface_mut().scroll_to(15_000.0);
    assert_shows(&robot.visible_texts(), "150", "middle of list");
    assert_eq!(probe.count(), 0);
}

#[test]
fn fling_recycles_a_bounded_number_of_slots() {
    let probe = EndOfListProbe::new();
    let mut robot = column_robot(&probe, 300);

    let steps = robot.fling_to_end(250.0);
    assert!(steps > 0);

    let stats = robot.stats();
    assert!(
        stats.slots_created <= 10,
        "created {} slots for 301 items",
        stats.slots_created
    );
    assert!(stats.reuse_count > 250);
    assert!(stats.total_binds >= 301);
    assert_slots_accounted(&stats, "after fling");
    assert_eq!(probe.count(), 1);
}

#[test]
fn non_finite_scrolls_are_ignored() {
    let probe = EndOfListProbe::new();
    let mut robot = column_robot(&probe, 300);
    assert_eq!(robot.scroll_by(250.0), 250.0);
    let before = robot.visible_indices();

    assert_eq!(robot.scroll_by(f32::NAN), 0.0);
    assert_eq!(robot.scroll_by(f32::NEG_INFINITY), 0.0);
    robot.surface_mut().scroll_to(f32::NAN);
    assert_eq!(robot.surface().scroll_offset(), 250.0);
    assert_eq!(robot.visible_indices(), before);

    assert_eq!(robot.scroll_by(100.0), 100.0);
    robot.scroll_to_start();
    assert_eq!(robot.visible_indices(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn recycled_slots_never_show_previous_item() {
    let list = text_list(numbered_items(0..=300), Orientation::Vertical, CELL);
    let mut surface = VirtualizedSurface::new(&list, COLUMN_VIEWPORT, CollectionSpec::default());

    for offset in [0.0, 730.0, 12_345.0, 420.0, 29_600.0] {
        surface.scroll_to(offset);
        for index in surface.bound_indices() {
            let slot = surface.slot_for_index(index).expect("bound slot");
            assert_slot_bound(slot, index, "after scroll");
            let text = slot.content().map(|cell| cell.text.clone());
            assert_eq!(text, Some(index.to_string()));
        }
    }
}

#[test]
fn shrinking_items_rebinds_within_new_bounds() {
    let probe = EndOfListProbe::new();
    let mut robot = column_robot(&probe, 299);

    robot.scroll_to_end();
    assert_eq!(probe.take(), 1);

    robot.items_changed(numbered_items(0..=4));
    assert_eq!(robot.surface().item_count(), 5);
    assert_eq!(robot.surface().scroll_offset(), 0.0);
    assert_eq!(robot.bound_indices(), vec![0, 1, 2, 3, 4]);
    assert_eq!(robot.visible_texts(), numbered_items(0..=4));
    assert_eq!(probe.count(), 1);
}

#[test]
fn appending_items_signals_again_at_new_end() {
    let probe = EndOfListProbe::new();
    let mut robot = column_robot(&probe, 19);

    robot.scroll_to_end();
    assert_eq!(probe.count(), 1);

    // The old last index is now in the middle and must not signal.
    robot.items_changed(numbered_items(0..=39));
    assert_eq!(probe.count(), 1);
    assert_shows(&robot.visible_texts(), "19", "after page load");

    robot.scroll_to_end();
    assert_shows(&robot.visible_texts(), "39", "second page end");
    assert_eq!(probe.count(), 2);
}

#[test]
fn same_items_twice_render_identically() {
    let probe = EndOfListProbe::new();
    let mut robot = column_robot(&probe, 50);
    robot.surface_mut().scroll_to(1_000.0);
    let before = robot.visible_texts();

    robot.items_changed(numbered_items(0..=50));
    robot.items_changed(numbered_items(0..=50));

    assert_eq!(robot.surface().item_count(), 51);
    assert_eq!(robot.visible_texts(), before);
    assert_eq!(robot.stats().reloads, 2);
}

#[test]
fn reload_rebinds_window() {
    let probe = EndOfListProbe::new();
    let mut robot = column_robot(&probe, 300);
    let binds_before = robot.stats().total_binds;

    robot.surface_mut().reload_data();
    let stats = robot.stats();
    assert_eq!(stats.total_binds, binds_before + 7);
    assert_eq!(stats.slots_created, 7);
    assert_eq!(stats.slots_in_use, 7);
}

#[test]
fn empty_list_binds_nothing_until_items_arrive() {
    let probe = EndOfListProbe::new();
    let list = text_list(Vec::new(), Orientation::Vertical, CELL)
        .on_last_item_appear(probe.callback());
    let mut robot = ScrollRobot::virtualized(&list, COLUMN_VIEWPORT);

    assert_on_screen_count(&robot.visible_indices(), 0, "empty list");
    assert_eq!(robot.scroll_by(100.0), 0.0);
    assert_eq!(robot.stats().total_binds, 0);
    assert_eq!(probe.count(), 0);

    robot.items_changed(numbered_items(0..=2));
    assert_eq!(robot.visible_indices(), vec![0, 1, 2]);
    assert_eq!(probe.count(), 1);
}

#[test]
fn horizontal_strip_wraps_into_rows() {
    let list = text_list(numbered_items(0..=300), Orientation::Horizontal, CELL);
    let robot = ScrollRobot::virtualized(&list, Size::new(400.0, 220.0));

    assert_eq!(robot.surface().orientation(), Orientation::Horizontal);
    assert_eq!(robot.visible_indices(), (0..8).collect::<Vec<_>>());

    let presentation = robot.surface().presentation();
    let second = presentation
        .items()
        .iter()
        .find(|placed| placed.index == 1)
        .expect("index 1 on screen");
    assert_rect_approx_eq(
        second.frame,
        Rect::from_origin_size(Point::new(0.0, 100.0), CELL),
        0.01,
        "second item in second row",
    );
}

#[test]
fn viewport_resize_relayouts_grid() {
    let list = text_list(numbered_items(0..=300), Orientation::Vertical, CELL);
    let mut robot = ScrollRobot::with_spec(
        &list,
        COLUMN_VIEWPORT,
        CollectionSpec::default().prefetch(PrefetchStrategy::disabled()),
    );
    assert_eq!(robot.bound_indices(), vec![0, 1, 2, 3, 4]);

    robot.surface_mut().set_viewport_size(Size::new(300.0, 500.0));
    assert_eq!(robot.visible_indices(), (0..15).collect::<Vec<_>>());
    assert_eq!(robot.bound_indices(), (0..15).collect::<Vec<_>>());
}

#[test]
fn infinite_viewport_falls_back_to_bounded_window() {
    let list = text_list(numbered_items(0..=300), Orientation::Vertical, CELL);
    let robot = ScrollRobot::virtualized(&list, Size::new(100.0, f32::INFINITY));

    // (100 + 0) * 20 visible, plus two prefetched.
    assert_eq!(robot.visible_indices().len(), 20);
    assert_eq!(robot.bound_indices().len(), 22);
}

#[test]
fn estimated_size_override_wins_over_measurement() {
    let list = text_list(numbered_items(0..=300), Orientation::Vertical, CELL);
    let surface = VirtualizedSurface::new(
        &list,
        COLUMN_VIEWPORT,
        CollectionSpec::default()
            .estimated_item_size(Size::new(100.0, 50.0))
            .prefetch(PrefetchStrategy::disabled()),
    );
    assert_eq!(surface.visible_range(), 0..10);
    assert_eq!(surface.layout().item_main(), 50.0);
}

#[test]
fn spacing_and_padding_shift_frames() {
    let list = text_list(numbered_items(0..=9), Orientation::Vertical, CELL);
    let surface = VirtualizedSurface::new(
        &list,
        COLUMN_VIEWPORT,
        CollectionSpec::default().spacing(10.0).content_padding_all(20.0),
    );
    let slot = surface.slot_for_index(2).expect("index 2 bound");
    assert_eq!(slot.bounds(), Rect::from_origin_size(Point::new(0.0, 240.0), CELL));
    assert_eq!(slot.content_frame(), Some(Rect::from_size(CELL)));
    // 20 + 10 * 100 + 9 * 10 + 20 - 500
    assert_eq!(surface.max_scroll_offset(), 630.0);
}
