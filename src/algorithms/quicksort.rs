//! Quicksort using the Lomuto partition scheme, one scan comparison per step

use serde::{Deserialize, Serialize};

use super::{Cursor, Progress};
use crate::event::{Event, Role};

/// The partition currently being scanned, the pivot is `slice[high]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub low: usize,
    pub high: usize,
    /// Everything in `low..left` is less than or equal to the pivot
    pub left: usize,
    /// The next element to compare against the pivot
    pub right: usize,
}

/// The quicksort [`Cursor`]
///
/// Ranges waiting to be partitioned are kept on an explicit stack, the most recently
/// pushed range is partitioned first. Only ranges of at least two elements are pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickCursor {
    len: usize,
    stack: Vec<(usize, usize)>,
    partition: Option<Partition>,
}

impl QuickCursor {
    /// The ranges waiting to be partitioned
    pub fn pending(&self) -> &[(usize, usize)] {
        &self.stack
    }

    /// The partition being scanned, if any
    pub fn partition(&self) -> Option<&Partition> {
        self.partition.as_ref()
    }

    /// Pop the next range with at least two elements and make it the active partition
    fn next_partition(&mut self) -> Option<Partition> {
        while let Some((low, high)) = self.stack.pop() {
            if low < high {
                return Some(Partition {
                    low,
                    high,
                    left: low,
                    right: low,
                });
            }
        }

        None
    }
}

impl<T: Ord + Clone> Cursor<T> for QuickCursor {
    const IS_STABLE: bool = false;

    fn new(len: usize) -> Self {
        Self {
            len,
            stack: if len > 1 { vec![(0, len - 1)] } else { Vec::new() },
            partition: None,
        }
    }

    fn step(&mut self, slice: &mut [T], events: &mut Vec<Event<T>>) -> Progress {
        debug_assert_eq!(slice.len(), self.len);

        let mut partition = match self.partition.take() {
            Some(partition) => partition,
            None => match self.next_partition() {
                Some(partition) => {
                    events.push(Event::mark(Role::Pivot, [partition.high]));
                    partition
                }
                None => return Progress::Done,
            },
        };

        let Partition {
            low,
            high,
            left,
            right,
        } = partition;
        debug_assert!(low <= left && left <= right && right <= high && high < self.len);

        if right < high {
            // Ties go to the left partition
            if slice[right] <= slice[high] {
                if left != right {
                    slice.swap(left, right);
                    events.push(Event::write(Role::Swapped, [left, right], slice));
                } else {
                    events.push(Event::mark(Role::Compared, [right, high]));
                }
                partition.left += 1;
            } else {
                events.push(Event::mark(Role::Compared, [right, high]));
            }
            partition.right += 1;
            self.partition = Some(partition);

            return Progress::Running;
        }

        // The scan reached the pivot, move it between both halves
        if left == high {
            events.push(Event::write(Role::PivotPlaced, [high], slice));
        } else {
            slice.swap(left, high);
            events.push(Event::write(Role::PivotPlaced, [left, high], slice));
        }

        if left > low + 1 {
            self.stack.push((low, left - 1));
        }
        if left + 1 < high {
            self.stack.push((left + 1, high));
        }

        if self.stack.is_empty() {
            debug_assert!(slice.is_sorted());
            Progress::Done
        } else {
            Progress::Running
        }
    }
}
