//! Insertion sort, one shift per step

use serde::{Deserialize, Serialize};

use super::{Cursor, Progress};
use crate::event::{Event, Role};

/// The insertion sort [`Cursor`]
///
/// The key travels left by swapping with each larger neighbour, so the slice holds the
/// same values after every step. `j` is the slot the key currently occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionCursor<T> {
    len: usize,
    /// `slice[..i]` is in order
    i: usize,
    j: usize,
    /// The value being inserted, `None` between outer indices
    key: Option<T>,
}

impl<T: Ord + Clone> Cursor<T> for InsertionCursor<T> {
    const IS_STABLE: bool = true;

    fn new(len: usize) -> Self {
        Self {
            len,
            i: 1,
            j: 0,
            key: None,
        }
    }

    fn step(&mut self, slice: &mut [T], events: &mut Vec<Event<T>>) -> Progress {
        debug_assert_eq!(slice.len(), self.len);

        if self.i >= self.len {
            return Progress::Done;
        }

        let i = self.i;
        if self.key.is_none() {
            self.j = i;
            events.push(Event::mark(Role::Key, [i]));
        }

        let key = self.key.get_or_insert_with(|| slice[i].clone());
        debug_assert!(slice[self.j] == *key);

        if self.j > 0 && slice[self.j - 1] > *key {
            slice.swap(self.j - 1, self.j);
            self.j -= 1;
            events.push(Event::write(Role::Shifted, [self.j, self.j + 1], slice));

            return Progress::Running;
        }

        events.push(Event::write(Role::Inserted, [self.j], slice));
        self.key = None;
        self.i += 1;

        if self.i >= self.len {
            Progress::Done
        } else {
            Progress::Running
        }
    }
}
