//! The step-resumable sorting algorithms

use serde::{Deserialize, Serialize};

use crate::event::Event;

pub mod bubblesort;
pub mod insertionsort;
pub mod mergesort;
pub mod quicksort;
pub mod selectionsort;

/// Whether a cursor has more work to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Running,
    Done,
}

/// A sorting algorithm decomposed into bounded steps
///
/// A cursor holds all the state needed to resume the algorithm, the slice itself is
/// owned by the caller and handed in on every step. The slice passed to [`Cursor::step`]
/// must always have the length given to [`Cursor::new`].
pub trait Cursor<T: Ord + Clone> {
    /// Whether the sort is stable
    const IS_STABLE: bool;

    /// Create a fresh cursor for a slice of `len` elements
    fn new(len: usize) -> Self;

    /// Perform one unit of work on `slice`, describing it in `events`
    ///
    /// Once [`Progress::Done`] was returned the slice is sorted and the cursor must not
    /// be stepped again.
    fn step(&mut self, slice: &mut [T], events: &mut Vec<Event<T>>) -> Progress;
}

/// The different sorting algorithms
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize,
)]
pub enum Algorithm {
    /// Bubble sort with early exit
    Bubble,
    /// Selection sort, one outer index per step
    Selection,
    /// Insertion sort, one shift per step
    Insertion,
    /// Lomuto quicksort with an explicit range stack
    Quick,
    /// Top-down mergesort with an explicit work stack
    Merge,
}

impl Algorithm {
    /// Every available algorithm, in menu order
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Insertion,
        Algorithm::Selection,
    ];

    /// Return whether the sort is stable
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Bubble => <bubblesort::BubbleCursor as Cursor<i64>>::IS_STABLE,
            Algorithm::Selection => <selectionsort::SelectionCursor as Cursor<i64>>::IS_STABLE,
            Algorithm::Insertion => <insertionsort::InsertionCursor<i64> as Cursor<i64>>::IS_STABLE,
            Algorithm::Quick => <quicksort::QuickCursor as Cursor<i64>>::IS_STABLE,
            Algorithm::Merge => <mergesort::MergeCursor<i64> as Cursor<i64>>::IS_STABLE,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
        })
    }
}

impl std::str::FromStr for Algorithm {
    type Err = crate::Error;

    /// Accepts `bubble`, `Bubble Sort`, `quick-sort`, `merge_sort` and the like
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name.trim().to_ascii_lowercase();
        let stem = normalized
            .strip_suffix("sort")
            .map(|stem| stem.trim_end_matches([' ', '-', '_']))
            .unwrap_or(&normalized);

        match stem {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "quick" => Ok(Algorithm::Quick),
            "merge" => Ok(Algorithm::Merge),
            _ => Err(crate::Error::UnknownAlgorithm(name.to_string())),
        }
    }
}
