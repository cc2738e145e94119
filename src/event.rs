//! The annotations produced by each step, consumed by whatever draws the array

use serde::{Deserialize, Serialize};

/// The semantic role of the indices referenced by an [`Event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Two elements were compared and left in place
    Compared,
    /// Two elements traded places
    Swapped,
    /// The element is the pivot of the active partition
    Pivot,
    /// The pivot was moved to its final position
    PivotPlaced,
    /// The element is the key about to be inserted
    Key,
    /// A larger element was moved one slot to the right, past the key
    Shifted,
    /// The key settled at this index
    Inserted,
    /// The element is the minimum of the unsorted suffix
    Minimum,
    /// The element was already the minimum, nothing moved
    NoSwap,
    /// The range is being divided into halves
    SubRange,
    /// The range is about to be merged
    Merging,
    /// The element was overwritten by a merge
    Updated,
    /// The whole array is sorted
    Sorted,
}

/// A single annotation: which indices, in what role, holding which values now
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event<T> {
    pub role: Role,
    pub indices: Vec<usize>,
    /// The values stored at `indices` after the step, empty if nothing was written
    pub new_values: Vec<T>,
}

impl<T: Clone> Event<T> {
    /// An event that only highlights `indices`
    pub fn mark(role: Role, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            role,
            indices: indices.into_iter().collect(),
            new_values: Vec::new(),
        }
    }

    /// An event for `indices` that were written, capturing their values from `slice`
    pub fn write(role: Role, indices: impl IntoIterator<Item = usize>, slice: &[T]) -> Self {
        let indices: Vec<usize> = indices.into_iter().collect();
        let new_values = indices.iter().map(|&index| slice[index].clone()).collect();

        Self {
            role,
            indices,
            new_values,
        }
    }
}

/// The outcome of one call to [`crate::engine::SortEngine::step`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult<T> {
    /// Whether the run has completed
    pub done: bool,
    pub events: Vec<Event<T>>,
}

impl<T> StepResult<T> {
    /// The result reported by every step after completion
    pub fn finished() -> Self {
        Self {
            done: true,
            events: Vec::new(),
        }
    }

    /// Iterate over the events with the given role
    pub fn events_with(&self, role: Role) -> impl Iterator<Item = &Event<T>> {
        self.events.iter().filter(move |event| event.role == role)
    }
}
