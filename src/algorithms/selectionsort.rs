//! Selection sort, one outer index per step

use serde::{Deserialize, Serialize};

use super::{Cursor, Progress};
use crate::event::{Event, Role};

/// The selection sort [`Cursor`]
///
/// The scan for the minimum of the unsorted suffix happens in full within a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCursor {
    len: usize,
    /// `slice[..i]` holds the `i` smallest elements in order
    i: usize,
    /// Index of the smallest element seen by the running scan
    current_min_index: Option<usize>,
}

impl<T: Ord + Clone> Cursor<T> for SelectionCursor {
    const IS_STABLE: bool = false;

    fn new(len: usize) -> Self {
        Self {
            len,
            i: 0,
            current_min_index: None,
        }
    }

    fn step(&mut self, slice: &mut [T], events: &mut Vec<Event<T>>) -> Progress {
        debug_assert_eq!(slice.len(), self.len);

        if self.i + 1 >= self.len {
            return Progress::Done;
        }

        let i = self.i;
        for index in i + 1..self.len {
            let min = self.current_min_index.unwrap_or(i);
            if slice[index] < slice[min] {
                self.current_min_index = Some(index);
            }
        }

        let min = self.current_min_index.take().unwrap_or(i);
        events.push(Event::mark(Role::Minimum, [min]));

        if min != i {
            slice.swap(i, min);
            events.push(Event::write(Role::Swapped, [i, min], slice));
        } else {
            events.push(Event::mark(Role::NoSwap, [i]));
        }

        self.i += 1;
        if self.i + 1 >= self.len {
            Progress::Done
        } else {
            Progress::Running
        }
    }
}
