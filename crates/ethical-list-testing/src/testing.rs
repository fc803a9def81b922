//! Content type and fixtures shared by tests.

use std::cell::Cell;
use std::ops::RangeInclusive;
use std::rc::Rc;

use ethical_list_core::{IntrinsicSize, Orientation, RecyclingList, Size};

/// Fixed-size text cell.
#[derive(Clone, Debug, PartialEq)]
pub struct TextCell {
    pub text: String,
    pub size: Size,
}

impl TextCell {
    pub fn new(text: impl Into<String>, size: Size) -> Self {
        Self {
            text: text.into(),
            size,
        }
    }
}

impl IntrinsicSize for TextCell {
    fn intrinsic_size(&self) -> Size {
        self.size
    }
}

/// `"0"`, `"1"`, ... for every value in `range`.
pub fn numbered_items(range: RangeInclusive<usize>) -> Vec<String> {
    range.map(|i| i.to_string()).collect()
}

/// A list of strings rendered as `TextCell`s of `cell_size`.
pub fn text_list(
    items: Vec<String>,
    orientation: Orientation,
    cell_size: Size,
) -> RecyclingList<String, TextCell> {
    RecyclingList::new(items, orientation, move |item: &String| {
        TextCell::new(item.clone(), cell_size)
    })
}

/// Counts end-of-list signals.
#[derive(Clone, Debug, Default)]
pub struct EndOfListProbe {
    fired: Rc<Cell<usize>>,
}

impl EndOfListProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that bumps this probe.
    pub fn callback(&self) -> impl Fn() + 'static {
        let fired = Rc::clone(&self.fired);
        move || fired.set(fired.get() + 1)
    }

    pub fn count(&self) -> usize {
        self.fired.get()
    }

    /// Returns the count and resets it to zero.
    pub fn take(&self) -> usize {
        self.fired.replace(0)
    }
}
