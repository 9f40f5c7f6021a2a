#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ElapsedTimer`**: Always-running timer measuring time since construction or last restart
//! - **`StopwatchTimer`**: Timer with start/stop/reset/restart that accumulates time across run segments
//! - **`StopwatchSnapshot`**: Plain copy of a stopwatch's run state
//! - **`TimerState`**: Whether a stopwatch is `Running` or `Stopped`
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`SteadyClock`**: Marker promising the time source never goes backwards
//! - **`TimeInstant`** / **`TimeDuration`**: Traits for your platform's instant and duration types
//! - **`FromTimeDuration`**: Converts a reading into a chosen unit (`Millis`, `f64` seconds, ...)
//!
//! Timers take `&self` for every operation and guard their state internally, so a
//! single timer can be shared between threads. Comparing two timers reads the
//! clock once and evaluates both at that instant.

pub mod time;
pub mod units;
pub mod elapsed;
pub mod stopwatch;

mod sync;

#[cfg(test)]
mod mock;

pub use time::{ClockDuration, ClockInstant, SteadyClock, TimeDuration, TimeInstant, TimeSource};
pub use units::{FromTimeDuration, Micros, Millis, Nanos, Seconds};
pub use elapsed::ElapsedTimer;
pub use stopwatch::{StopwatchSnapshot, StopwatchTimer, TimerState};

#[cfg(feature = "std")]
pub use time::StdClock;

#[cfg(feature = "embassy-time")]
pub use time::EmbassyClock;

/// Elapsed timer driven by [`StdClock`].
#[cfg(feature = "std")]
pub type StdElapsedTimer = ElapsedTimer<StdClock>;

/// Stopwatch timer driven by [`StdClock`].
#[cfg(feature = "std")]
pub type StdStopwatchTimer = StopwatchTimer<StdClock>;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
