//! Bubble sort, one adjacent comparison per step

use serde::{Deserialize, Serialize};

use super::{Cursor, Progress};
use crate::event::{Event, Role};

/// The bubble sort [`Cursor`]
///
/// A swap does not advance `j`: the following step compares the now ordered pair once
/// more before moving on, so each swap is seen as a swap and then a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BubbleCursor {
    len: usize,
    /// The current pass, `slice[len - i..]` is in its final position
    i: usize,
    /// The left index of the next comparison
    j: usize,
    swapped_this_pass: bool,
}

impl BubbleCursor {
    /// The zero based index of the current pass
    pub fn pass(&self) -> usize {
        self.i
    }
}

impl<T: Ord + Clone> Cursor<T> for BubbleCursor {
    const IS_STABLE: bool = true;

    fn new(len: usize) -> Self {
        Self {
            len,
            i: 0,
            j: 0,
            swapped_this_pass: false,
        }
    }

    fn step(&mut self, slice: &mut [T], events: &mut Vec<Event<T>>) -> Progress {
        debug_assert_eq!(slice.len(), self.len);

        if self.len < 2 {
            return Progress::Done;
        }

        loop {
            let bound = self.len - 1 - self.i;

            if self.j < bound {
                let j = self.j;
                if slice[j] > slice[j + 1] {
                    slice.swap(j, j + 1);
                    self.swapped_this_pass = true;
                    events.push(Event::write(Role::Swapped, [j, j + 1], slice));
                } else {
                    events.push(Event::mark(Role::Compared, [j, j + 1]));
                    self.j += 1;
                }

                return Progress::Running;
            }

            // End of a pass, a pass without swaps or a one element pass means we're done
            if !self.swapped_this_pass || self.i + 2 >= self.len {
                return Progress::Done;
            }

            self.i += 1;
            self.j = 0;
            self.swapped_this_pass = false;
        }
    }
}
