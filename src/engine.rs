//! The sort engine, owning the array and the single active run

use serde::{Deserialize, Serialize};

use crate::algorithms::{
    Algorithm, Cursor, Progress, bubblesort::BubbleCursor, insertionsort::InsertionCursor,
    mergesort::MergeCursor, quicksort::QuickCursor, selectionsort::SelectionCursor,
};
use crate::event::{Event, Role, StepResult};

/// The values sorted by the visualizer
pub type Value = i64;

/// The cursor of the active run, one variant per algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorState<T> {
    Bubble(BubbleCursor),
    Selection(SelectionCursor),
    Insertion(InsertionCursor<T>),
    Quick(QuickCursor),
    Merge(MergeCursor<T>),
}

impl<T: Ord + Clone> CursorState<T> {
    /// A fresh cursor for `algorithm` over `len` elements
    pub fn new(algorithm: Algorithm, len: usize) -> Self {
        match algorithm {
            Algorithm::Bubble => Self::Bubble(Cursor::<T>::new(len)),
            Algorithm::Selection => Self::Selection(Cursor::<T>::new(len)),
            Algorithm::Insertion => Self::Insertion(Cursor::new(len)),
            Algorithm::Quick => Self::Quick(Cursor::<T>::new(len)),
            Algorithm::Merge => Self::Merge(Cursor::new(len)),
        }
    }

    /// The algorithm this cursor belongs to
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bubble(_) => Algorithm::Bubble,
            Self::Selection(_) => Algorithm::Selection,
            Self::Insertion(_) => Algorithm::Insertion,
            Self::Quick(_) => Algorithm::Quick,
            Self::Merge(_) => Algorithm::Merge,
        }
    }

    fn step(&mut self, slice: &mut [T], events: &mut Vec<Event<T>>) -> Progress {
        match self {
            Self::Bubble(cursor) => Cursor::<T>::step(cursor, slice, events),
            Self::Selection(cursor) => Cursor::<T>::step(cursor, slice, events),
            Self::Insertion(cursor) => cursor.step(slice, events),
            Self::Quick(cursor) => Cursor::<T>::step(cursor, slice, events),
            Self::Merge(cursor) => cursor.step(slice, events),
        }
    }
}

/// One in-progress or completed sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortRun<T> {
    pub cursor: CursorState<T>,
    /// Number of steps performed, not counting calls after completion
    pub steps: usize,
    pub done: bool,
}

/// Owns the array and routes each step to the active cursor
#[derive(Debug, Clone)]
pub struct SortEngine<T = Value> {
    data: Vec<T>,
    run: Option<SortRun<T>>,
}

impl<T: Ord + Clone + std::fmt::Debug> SortEngine<T> {
    /// Create an engine over `data` with no active run
    pub fn new(data: Vec<T>) -> Self {
        Self { data, run: None }
    }

    /// The current contents of the array
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The algorithm of the active run
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.run.as_ref().map(|run| run.cursor.algorithm())
    }

    /// The active run, if any
    pub fn run(&self) -> Option<&SortRun<T>> {
        self.run.as_ref()
    }

    /// The number of steps the active run has performed
    pub fn steps_taken(&self) -> usize {
        self.run.as_ref().map_or(0, |run| run.steps)
    }

    /// Whether the active run has completed
    pub fn is_done(&self) -> bool {
        self.run.as_ref().is_some_and(|run| run.done)
    }

    /// Whether the array is in ascending order
    pub fn is_sorted(&self) -> bool {
        self.data.is_sorted()
    }

    /// Begin a new run of `algorithm`, discarding any previous cursor
    ///
    /// The array is left as is, so restarting mid-sort continues from the current contents.
    pub fn start(&mut self, algorithm: Algorithm) {
        tracing::debug!(%algorithm, len = self.data.len(), "starting sort run");

        self.run = Some(SortRun {
            cursor: CursorState::new(algorithm, self.data.len()),
            steps: 0,
            done: false,
        });
    }

    /// Like [`Self::start`], parsing the algorithm from its name
    pub fn start_by_name(&mut self, name: &str) -> Result<Algorithm, crate::Error> {
        let algorithm = name.parse()?;
        self.start(algorithm);
        Ok(algorithm)
    }

    /// Restore the array to `seed` and drop all cursor state
    pub fn reset(&mut self, seed: impl Into<Vec<T>>) {
        self.data = seed.into();
        self.run = None;

        tracing::debug!(data = ?self.data, "engine reset");
    }

    /// Advance the active run by one step
    ///
    /// Once the run is done every further call reports completion without touching the
    /// array.
    pub fn step(&mut self) -> Result<StepResult<T>, crate::Error> {
        let run = self.run.as_mut().ok_or(crate::Error::NoActiveRun)?;

        if run.done {
            return Ok(StepResult::finished());
        }

        let mut events = Vec::new();
        let progress = run.cursor.step(&mut self.data, &mut events);
        run.steps += 1;

        tracing::trace!(step = run.steps, ?events, "sort step");

        if progress == Progress::Done {
            debug_assert!(self.data.is_sorted(), "{:?} is not sorted after run", self.data);

            run.done = true;
            events.push(Event::mark(Role::Sorted, 0..self.data.len()));

            tracing::info!(
                algorithm = %run.cursor.algorithm(),
                steps = run.steps,
                "sorting complete"
            );
        }

        Ok(StepResult {
            done: run.done,
            events,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const BUBBLE_SEED: [Value; 8] = [23, 41, 25, 54, 18, 14, 9, 10];
    const SELECTION_SEED: [Value; 7] = [10, 20, 5, 15, 30, 25, 35];

    /// Step until done, returning the number of steps
    fn run_to_completion(engine: &mut SortEngine) -> usize {
        let bound = crate::test::step_bound(engine.data().len());

        for steps in 1..=bound {
            if engine.step().expect("run is active").done {
                return steps;
            }
        }

        panic!("run did not finish within {bound} steps");
    }

    #[test]
    fn step_without_run() {
        let mut engine = SortEngine::new(BUBBLE_SEED.to_vec());
        assert_eq!(engine.step(), Err(crate::Error::NoActiveRun));

        engine.start(Algorithm::Quick);
        engine.step().unwrap();
        engine.reset(BUBBLE_SEED);
        assert_eq!(engine.step(), Err(crate::Error::NoActiveRun));
    }

    #[test]
    fn start_by_name() {
        let mut engine = SortEngine::new(SELECTION_SEED.to_vec());

        assert_eq!(engine.start_by_name("Selection Sort"), Ok(Algorithm::Selection));
        assert_eq!(engine.algorithm(), Some(Algorithm::Selection));

        // An unknown name leaves the active run alone
        assert_eq!(
            engine.start_by_name("Bogo Sort"),
            Err(crate::Error::UnknownAlgorithm("Bogo Sort".to_string()))
        );
        assert_eq!(engine.algorithm(), Some(Algorithm::Selection));
    }

    #[test]
    fn bubble_scenario() {
        let mut engine = SortEngine::new(BUBBLE_SEED.to_vec());
        engine.start(Algorithm::Bubble);

        let first_swap = loop {
            let result = engine.step().unwrap();
            if let Some(event) = result.events_with(Role::Swapped).next() {
                break event.clone();
            }
        };

        assert_eq!(first_swap.indices, vec![1, 2]);
        assert_eq!(first_swap.new_values, vec![25, 41]);
        assert_eq!(engine.data(), &[23, 25, 41, 54, 18, 14, 9, 10]);

        run_to_completion(&mut engine);
        assert_eq!(engine.data(), &[9, 10, 14, 18, 23, 25, 41, 54]);
    }

    #[test]
    fn selection_scenario() {
        let mut engine = SortEngine::new(SELECTION_SEED.to_vec());
        engine.start(Algorithm::Selection);

        engine.step().unwrap();
        assert_eq!(engine.data(), &[5, 20, 10, 15, 30, 25, 35]);

        run_to_completion(&mut engine);
        assert_eq!(engine.data(), &[5, 10, 15, 20, 25, 30, 35]);
    }

    #[test]
    fn completion_is_idempotent() {
        for algorithm in Algorithm::ALL {
            let mut engine = SortEngine::new(BUBBLE_SEED.to_vec());
            engine.start(algorithm);
            let steps = run_to_completion(&mut engine);

            for _ in 0..3 {
                assert_eq!(engine.step(), Ok(StepResult::finished()));
            }
            assert_eq!(engine.data(), &[9, 10, 14, 18, 23, 25, 41, 54]);
            assert_eq!(engine.steps_taken(), steps);
            assert!(engine.is_done());
        }
    }

    #[test]
    fn final_step_marks_everything_sorted() {
        let mut engine = SortEngine::new(vec![3, 1, 2]);
        engine.start(Algorithm::Insertion);

        let last = loop {
            let result = engine.step().unwrap();
            if result.done {
                break result;
            }
        };

        assert_eq!(last.events.last(), Some(&Event::mark(Role::Sorted, [0, 1, 2])));
    }

    #[test]
    fn trivial_arrays_finish_on_first_step() {
        for algorithm in Algorithm::ALL {
            for seed in [vec![], vec![42]] {
                let mut engine = SortEngine::new(seed.clone());
                engine.start(algorithm);

                assert!(engine.step().unwrap().done, "{algorithm} on {seed:?}");
                assert_eq!(engine.data(), &seed[..]);
            }
        }
    }

    #[test]
    fn restart_keeps_array() {
        let mut engine = SortEngine::new(BUBBLE_SEED.to_vec());
        engine.start(Algorithm::Bubble);
        for _ in 0..5 {
            engine.step().unwrap();
        }
        let partially_sorted = engine.data().to_vec();

        engine.start(Algorithm::Merge);
        assert_eq!(engine.data(), &partially_sorted[..]);
        assert_eq!(engine.steps_taken(), 0);
        assert!(matches!(
            engine.run().map(|run| &run.cursor),
            Some(CursorState::Merge(_))
        ));

        run_to_completion(&mut engine);
        assert!(engine.is_sorted());
    }

    #[test]
    fn reset_behaves_like_fresh_engine() {
        let seed = vec![7, 3, 9, 1, 5, 1];

        for algorithm in Algorithm::ALL {
            let mut fresh = SortEngine::new(seed.clone());
            fresh.start(algorithm);

            let mut reused = SortEngine::new(BUBBLE_SEED.to_vec());
            reused.start(Algorithm::Quick);
            for _ in 0..4 {
                reused.step().unwrap();
            }
            reused.reset(seed.clone());
            assert_eq!(reused.data(), &seed[..]);
            reused.start(algorithm);

            loop {
                let expected = fresh.step().unwrap();
                assert_eq!(reused.step().unwrap(), expected);
                assert_eq!(reused.data(), fresh.data());
                if expected.done {
                    break;
                }
            }
        }
    }

    #[test]
    fn cursor_survives_serialization() {
        let mut engine = SortEngine::new(BUBBLE_SEED.to_vec());
        engine.start(Algorithm::Merge);
        for _ in 0..6 {
            engine.step().unwrap();
        }

        let run = engine.run().unwrap();
        let json = serde_json::to_string(run).unwrap();
        let restored: SortRun<Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(&restored, run);
    }

    fn algorithm() -> impl Strategy<Value = Algorithm> {
        proptest::sample::select(Algorithm::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn sorts_and_preserves_values(
            algorithm in algorithm(),
            seed in proptest::collection::vec(-50i64..50, 0..24),
        ) {
            let mut expected = seed.clone();
            expected.sort();

            let mut engine = SortEngine::new(seed);
            engine.start(algorithm);

            let bound = crate::test::step_bound(expected.len());
            let mut steps = 0;
            loop {
                let result = engine.step().unwrap();
                steps += 1;

                let mut current = engine.data().to_vec();
                current.sort();
                prop_assert_eq!(&current, &expected);

                if result.done {
                    break;
                }
                prop_assert!(steps <= bound);
            }

            prop_assert_eq!(engine.data(), &expected[..]);
        }

        #[test]
        fn stacks_are_empty_when_done(seed in proptest::collection::vec(0i64..10, 0..24)) {
            for algorithm in [Algorithm::Quick, Algorithm::Merge] {
                let mut engine = SortEngine::new(seed.clone());
                engine.start(algorithm);
                while !engine.step().unwrap().done {}

                match &engine.run().unwrap().cursor {
                    CursorState::Quick(cursor) => {
                        prop_assert!(cursor.pending().is_empty());
                        prop_assert!(cursor.partition().is_none());
                    }
                    CursorState::Merge(cursor) => {
                        prop_assert!(cursor.pending().is_empty());
                        prop_assert!(cursor.active().is_none());
                    }
                    _ => unreachable!(),
                }
            }
        }
    }
}
