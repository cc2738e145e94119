//! Classic comparison sorts broken into externally clocked steps
//!
//! A [`engine::SortEngine`] owns the array and the cursor of the active run. Every call
//! to [`engine::SortEngine::step`] performs one small unit of work and reports which
//! indices were touched and in what role, so a front end can animate the algorithm at
//! its own pace, usually through a [`clock::StepClock`].

pub mod algorithms;
pub mod clock;
pub mod data;
pub mod engine;
mod error;
pub mod event;

pub use error::Error;
