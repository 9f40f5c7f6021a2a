//! Stopwatch timer with start/stop control and accumulated run time.
//!
//! Provides [`StopwatchTimer`], which sums the length of every run segment
//! between a start and the following stop, and [`StopwatchSnapshot`], the plain
//! state the timer guards.

use core::cmp::Ordering;

use crate::sync::GuardedCell;
use crate::time::{ClockDuration, ClockInstant, SteadyClock, TimeDuration, TimeInstant};
use crate::units::FromTimeDuration;

/// Whether a stopwatch is currently accumulating time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// The current run segment is open. The value grows with the clock.
    Running,
    /// No run segment is open. The value is frozen.
    Stopped,
}

/// Copy of a stopwatch's state at one point in time.
///
/// The run start is only kept while running; a stopped stopwatch carries its
/// accumulated duration alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopwatchSnapshot<I: TimeInstant> {
    run_start: Option<I>,
    accumulated: I::Duration,
}

impl<I: TimeInstant> StopwatchSnapshot<I> {
    /// Stopped with nothing accumulated.
    pub fn stopped() -> Self {
        Self {
            run_start: None,
            accumulated: I::Duration::ZERO,
        }
    }

    /// Running since `now` with nothing accumulated.
    pub fn running_since(now: I) -> Self {
        Self {
            run_start: Some(now),
            accumulated: I::Duration::ZERO,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> TimerState {
        if self.run_start.is_some() {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    /// Returns true if a run segment is open.
    pub fn is_running(&self) -> bool {
        self.run_start.is_some()
    }

    /// Returns the instant the open run segment began, if running.
    pub fn run_start(&self) -> Option<I> {
        self.run_start
    }

    /// Returns the time banked by completed run segments.
    pub fn accumulated(&self) -> I::Duration {
        self.accumulated
    }

    /// Returns the total run time as of `now`.
    pub fn value_at(&self, now: I) -> I::Duration {
        match self.run_start {
            Some(start) => self.accumulated.saturating_add(now.duration_since(start)),
            None => self.accumulated,
        }
    }

    /// Opens a run segment at `now`. No effect if already running.
    pub fn start(&mut self, now: I) {
        if self.run_start.is_none() {
            self.run_start = Some(now);
        }
    }

    /// Closes the open run segment at `now`, banking its length.
    /// No effect if already stopped.
    pub fn stop(&mut self, now: I) {
        if let Some(start) = self.run_start.take() {
            self.accumulated = self.accumulated.saturating_add(now.duration_since(start));
        }
    }

    /// Discards accumulated time and opens a fresh segment at `now`.
    pub fn restart(&mut self, now: I) {
        *self = Self::running_since(now);
    }

    /// Discards accumulated time and stops.
    pub fn reset(&mut self) {
        *self = Self::stopped();
    }
}

/// Measures total running time across start/stop cycles.
///
/// State transitions:
///
/// | Operation   | From `Stopped`               | From `Running`                  |
/// |-------------|------------------------------|---------------------------------|
/// | `start()`   | `Running`, segment opens     | no effect                       |
/// | `stop()`    | no effect                    | `Stopped`, segment banked       |
/// | `restart()` | `Running`, accumulation zero | `Running`, accumulation zero    |
/// | `reset()`   | `Stopped`, accumulation zero | `Stopped`, accumulation zero    |
///
/// All methods take `&self`. Each operation reads and writes the run state as
/// one unit under this timer's own guard and releases it before returning, so
/// a timer can be shared between threads and no operation ever holds two
/// timers' guards at once.
///
/// ```
/// use steady_timers::{StdClock, StopwatchTimer};
///
/// let stopwatch = StopwatchTimer::with_state(StdClock, false);
/// assert!(!stopwatch.is_running());
/// assert!(stopwatch.value().is_zero());
///
/// stopwatch.start();
/// stopwatch.stop();
/// let frozen = stopwatch.value();
/// assert_eq!(stopwatch.value(), frozen);
/// ```
///
/// # Type Parameters
/// * `C` - Steady clock the timer reads
pub struct StopwatchTimer<C: SteadyClock> {
    clock: C,
    snapshot: GuardedCell<StopwatchSnapshot<ClockInstant<C>>>,
}

impl<C: SteadyClock> StopwatchTimer<C> {
    /// Creates a running stopwatch, matching [`ElapsedTimer`](crate::ElapsedTimer).
    pub fn new(clock: C) -> Self {
        Self::with_state(clock, true)
    }

    /// Creates a stopwatch in the chosen initial state.
    pub fn with_state(clock: C, running: bool) -> Self {
        let snapshot = if running {
            StopwatchSnapshot::running_since(clock.now())
        } else {
            StopwatchSnapshot::stopped()
        };
        Self::from_snapshot(clock, snapshot)
    }

    /// Creates a stopwatch holding `snapshot`.
    pub fn from_snapshot(clock: C, snapshot: StopwatchSnapshot<ClockInstant<C>>) -> Self {
        Self {
            clock,
            snapshot: GuardedCell::new(snapshot),
        }
    }

    /// Starts timing. No effect if already running.
    pub fn start(&self) {
        self.snapshot.update(|snapshot| snapshot.start(self.clock.now()));
    }

    /// Stops timing, banking the current run segment. No effect if stopped.
    pub fn stop(&self) {
        self.snapshot.update(|snapshot| snapshot.stop(self.clock.now()));
    }

    /// Zeroes the accumulated time and starts timing from now.
    pub fn restart(&self) {
        self.snapshot.update(|snapshot| snapshot.restart(self.clock.now()));
    }

    /// Zeroes the accumulated time and stops.
    pub fn reset(&self) {
        self.snapshot.update(StopwatchSnapshot::reset);
    }

    /// Returns true if the stopwatch is running.
    pub fn is_running(&self) -> bool {
        self.snapshot.get().is_running()
    }

    /// Returns the current state.
    pub fn state(&self) -> TimerState {
        self.snapshot.get().state()
    }

    /// Returns the total run time, in the clock's native unit.
    pub fn value(&self) -> ClockDuration<C> {
        self.snapshot
            .update(|snapshot| snapshot.value_at(self.clock.now()))
    }

    /// Returns the total run time converted into `T`.
    pub fn value_as<T: FromTimeDuration>(&self) -> T {
        T::from_duration(self.value())
    }

    /// Returns the total run time as of `now`.
    pub fn value_at(&self, now: ClockInstant<C>) -> ClockDuration<C> {
        self.snapshot.get().value_at(now)
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> StopwatchSnapshot<ClockInstant<C>> {
        self.snapshot.get()
    }

    /// Copies `source`'s state into this stopwatch.
    ///
    /// The source is read under its guard, which is released before this
    /// stopwatch's guard is taken.
    pub fn assign_from(&self, source: &Self) {
        let snapshot = source.snapshot.get();
        self.snapshot.set(snapshot);
    }

    /// Moves the state out into a new stopwatch, leaving this one stopped at zero.
    pub fn take(&self) -> Self
    where
        C: Clone,
    {
        let snapshot = self.snapshot.update(|snapshot| {
            let taken = *snapshot;
            snapshot.reset();
            taken
        });
        Self::from_snapshot(self.clock.clone(), snapshot)
    }

    /// Returns the clock driving this stopwatch.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: SteadyClock + Default> Default for StopwatchTimer<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: SteadyClock + Clone> Clone for StopwatchTimer<C> {
    fn clone(&self) -> Self {
        Self::from_snapshot(self.clock.clone(), self.snapshot.get())
    }

    fn clone_from(&mut self, source: &Self) {
        self.clock.clone_from(&source.clock);
        self.assign_from(source);
    }
}

impl<C: SteadyClock> PartialEq for StopwatchTimer<C> {
    fn eq(&self, other: &Self) -> bool {
        let now = self.clock.now();
        self.value_at(now) == other.value_at(now)
    }
}

impl<C: SteadyClock> PartialOrd for StopwatchTimer<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let now = self.clock.now();
        self.value_at(now).partial_cmp(&other.value_at(now))
    }
}

impl<C> core::fmt::Debug for StopwatchTimer<C>
where
    C: SteadyClock,
    ClockDuration<C>: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let now = self.clock.now();
        let snapshot = self.snapshot.get();
        f.debug_struct("StopwatchTimer")
            .field("state", &snapshot.state())
            .field("value", &snapshot.value_at(now))
            .finish_non_exhaustive()
    }
}
