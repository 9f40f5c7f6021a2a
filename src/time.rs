//! Time abstraction traits for platform-agnostic timing.
//!
//! Timers in this crate never read a global clock. They are generic over a
//! [`TimeSource`] whose instants and durations implement [`TimeInstant`] and
//! [`TimeDuration`]. Only sources marked [`SteadyClock`] can drive a timer.

/// Trait for abstracting time sources.
pub trait TimeSource {
    /// Instant type produced by this source.
    type Instant: TimeInstant;

    /// Returns the current time instant.
    fn now(&self) -> Self::Instant;
}

/// Marker for time sources whose readings never decrease.
///
/// Implementing this trait asserts that successive calls to [`TimeSource::now`]
/// within one process return non-decreasing instants, unaffected by wall-clock
/// adjustments. Timers refuse to compile with a source that lacks it.
pub trait SteadyClock: TimeSource {}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    type Instant = T::Instant;

    #[inline]
    fn now(&self) -> Self::Instant {
        (**self).now()
    }
}

impl<T: SteadyClock + ?Sized> SteadyClock for &T {}

/// Instant type of a clock.
pub type ClockInstant<C> = <C as TimeSource>::Instant;

/// Duration type of a clock.
pub type ClockDuration<C> = <<C as TimeSource>::Instant as TimeInstant>::Duration;

/// Trait abstraction for duration types.
///
/// A duration is a count of ticks with a fixed period of
/// `1 / TICKS_PER_SECOND` seconds. Durations measured from a steady clock are
/// never negative, so arithmetic saturates at zero instead of going below it.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Number of ticks in one second.
    const TICKS_PER_SECOND: u64;

    /// Returns the tick count, saturating at `u64::MAX`.
    fn ticks(&self) -> u64;

    /// Creates a duration from a tick count.
    fn from_ticks(ticks: u64) -> Self;

    /// Saturating addition (returns the maximum duration on overflow).
    fn saturating_add(self, other: Self) -> Self {
        Self::from_ticks(self.ticks().saturating_add(other.ticks()))
    }

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self {
        Self::from_ticks(self.ticks().saturating_sub(other.ticks()))
    }
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Returns ZERO if `earlier` is actually later than `self`.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Rescales a tick count between two tick rates, truncating toward zero.
///
/// The intermediate product is computed in 128 bits so the conversion is exact
/// up to the final division; results above `u64::MAX` saturate.
#[inline]
pub fn convert_ticks(ticks: u64, from_per_second: u64, to_per_second: u64) -> u64 {
    if from_per_second == to_per_second {
        return ticks;
    }
    let scaled = u128::from(ticks) * u128::from(to_per_second) / u128::from(from_per_second);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

impl TimeDuration for core::time::Duration {
    const ZERO: Self = core::time::Duration::ZERO;
    const TICKS_PER_SECOND: u64 = 1_000_000_000;

    #[inline]
    fn ticks(&self) -> u64 {
        u64::try_from(self.as_nanos()).unwrap_or(u64::MAX)
    }

    #[inline]
    fn from_ticks(ticks: u64) -> Self {
        core::time::Duration::from_nanos(ticks)
    }

    fn saturating_add(self, other: Self) -> Self {
        core::time::Duration::saturating_add(self, other)
    }

    fn saturating_sub(self, other: Self) -> Self {
        core::time::Duration::saturating_sub(self, other)
    }
}

#[cfg(feature = "std")]
pub use self::std_clock::StdClock;

#[cfg(feature = "std")]
mod std_clock {
    use super::{SteadyClock, TimeInstant, TimeSource};

    /// Steady clock backed by [`std::time::Instant`].
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct StdClock;

    impl StdClock {
        /// Creates the clock. It carries no state.
        pub const fn new() -> Self {
            Self
        }
    }

    impl TimeSource for StdClock {
        type Instant = std::time::Instant;

        #[inline]
        fn now(&self) -> Self::Instant {
            std::time::Instant::now()
        }
    }

    impl SteadyClock for StdClock {}

    impl TimeInstant for std::time::Instant {
        type Duration = core::time::Duration;

        #[inline]
        fn duration_since(&self, earlier: Self) -> Self::Duration {
            self.saturating_duration_since(earlier)
        }
    }
}

#[cfg(feature = "embassy-time")]
pub use self::embassy::EmbassyClock;

#[cfg(feature = "embassy-time")]
mod embassy {
    use super::{SteadyClock, TimeDuration, TimeInstant, TimeSource};

    /// Steady clock backed by the embassy time driver.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct EmbassyClock;

    impl TimeSource for EmbassyClock {
        type Instant = embassy_time::Instant;

        #[inline]
        fn now(&self) -> Self::Instant {
            embassy_time::Instant::now()
        }
    }

    impl SteadyClock for EmbassyClock {}

    impl TimeDuration for embassy_time::Duration {
        const ZERO: Self = embassy_time::Duration::from_ticks(0);
        const TICKS_PER_SECOND: u64 = embassy_time::TICK_HZ;

        #[inline]
        fn ticks(&self) -> u64 {
            self.as_ticks()
        }

        #[inline]
        fn from_ticks(ticks: u64) -> Self {
            embassy_time::Duration::from_ticks(ticks)
        }
    }

    impl TimeInstant for embassy_time::Instant {
        type Duration = embassy_time::Duration;

        #[inline]
        fn duration_since(&self, earlier: Self) -> Self::Duration {
            self.saturating_duration_since(earlier)
        }
    }
}
