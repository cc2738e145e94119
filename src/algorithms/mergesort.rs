//! Top-down mergesort driven by an explicit work stack
//!
//! Every range is first split, which pushes its merge below the splits of both halves, so
//! a range is only merged once both halves are sorted. Merging takes two steps: one that
//! announces the range and one that performs the merge.

use serde::{Deserialize, Serialize};

use super::{Cursor, Progress};
use crate::event::{Event, Role};

/// Two adjacent sorted runs `start..=mid` and `mid + 1..=end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRange {
    pub start: usize,
    pub mid: usize,
    pub end: usize,
}

/// Pending work on the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    /// Divide `start..=end` into halves
    Split { start: usize, end: usize },
    /// Merge the halves of a range that was split before
    Merge(MergeRange),
}

/// The mergesort [`Cursor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeCursor<T> {
    len: usize,
    stack: Vec<Frame>,
    /// The range to merge on the next step
    active: Option<MergeRange>,
    /// Holds a copy of the active range while merging
    scratch: Vec<T>,
}

impl<T> MergeCursor<T> {
    /// The work still waiting on the stack
    pub fn pending(&self) -> &[Frame] {
        &self.stack
    }

    /// The range that will be merged on the next step, if any
    pub fn active(&self) -> Option<&MergeRange> {
        self.active.as_ref()
    }
}

impl<T: Ord + Clone> MergeCursor<T> {
    /// Split `start..=end`, scheduling its merge after both halves
    fn split(&mut self, start: usize, end: usize, events: &mut Vec<Event<T>>) {
        debug_assert!(start < end && end < self.len);

        let mid = start + (end - start) / 2;
        self.stack.push(Frame::Merge(MergeRange { start, mid, end }));

        // The left half ends up on top and is processed first
        if mid + 1 < end {
            self.stack.push(Frame::Split { start: mid + 1, end });
        }
        if start < mid {
            self.stack.push(Frame::Split { start, end: mid });
        }

        events.push(Event::mark(Role::SubRange, start..=end));
    }

    /// Merge both runs of `range` through the scratch buffer
    fn merge(&mut self, range: MergeRange, slice: &mut [T], events: &mut Vec<Event<T>>) {
        let MergeRange { start, mid, end } = range;
        debug_assert!(start <= mid && mid < end && end < self.len);

        self.scratch.clear();
        self.scratch.extend_from_slice(&slice[start..=end]);

        let (left, right) = self.scratch.split_at(mid + 1 - start);
        let (mut i, mut j) = (0, 0);

        for k in start..=end {
            // Take from the left run on ties to keep the sort stable
            let next = if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
                i += 1;
                &left[i - 1]
            } else {
                j += 1;
                &right[j - 1]
            };

            // Only report slots whose value actually changed
            let changed = slice[k] != *next;
            slice[k] = next.clone();
            if changed {
                events.push(Event::write(Role::Updated, [k], slice));
            }
        }

        self.scratch.clear();
    }
}

impl<T: Ord + Clone> Cursor<T> for MergeCursor<T> {
    const IS_STABLE: bool = true;

    fn new(len: usize) -> Self {
        Self {
            len,
            stack: if len > 1 {
                vec![Frame::Split {
                    start: 0,
                    end: len - 1,
                }]
            } else {
                Vec::new()
            },
            active: None,
            scratch: Vec::with_capacity(len),
        }
    }

    fn step(&mut self, slice: &mut [T], events: &mut Vec<Event<T>>) -> Progress {
        debug_assert_eq!(slice.len(), self.len);

        if let Some(range) = self.active.take() {
            self.merge(range, slice, events);
        } else {
            match self.stack.pop() {
                Some(Frame::Split { start, end }) => self.split(start, end, events),
                Some(Frame::Merge(range)) => {
                    events.push(Event::mark(Role::Merging, range.start..=range.end));
                    self.active = Some(range);
                }
                None => return Progress::Done,
            }
        }

        if self.stack.is_empty() && self.active.is_none() {
            debug_assert!(slice.is_sorted());
            Progress::Done
        } else {
            Progress::Running
        }
    }
}
