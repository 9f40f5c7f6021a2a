//! Granularity conversions for timer readings.
//!
//! [`FromTimeDuration`] lets a caller pick the unit a timer reports in:
//!
//! ```
//! use steady_timers::Millis;
//! use steady_timers::units::FromTimeDuration;
//! use core::time::Duration;
//!
//! let d = Duration::from_micros(2_750);
//! assert_eq!(Millis::from_duration(d), Millis(2));
//! assert_eq!(f64::from_duration(d), 0.00275);
//! ```
//!
//! Integer units truncate toward zero and saturate at their maximum. Floating
//! point units are seconds, computed from the exact tick ratio.

use crate::time::{TimeDuration, convert_ticks};

/// Conversion from any clock duration into a target unit.
pub trait FromTimeDuration: Sized {
    /// Converts `duration` into `Self`.
    fn from_duration<D: TimeDuration>(duration: D) -> Self;
}

macro_rules! integer_unit {
    ($(#[$meta:meta])* $name:ident, $per_second:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $name(pub u64);

        impl $name {
            /// Number of units in one second.
            pub const PER_SECOND: u64 = $per_second;

            /// Returns the raw count.
            #[inline]
            pub const fn count(self) -> u64 {
                self.0
            }
        }

        impl FromTimeDuration for $name {
            #[inline]
            fn from_duration<D: TimeDuration>(duration: D) -> Self {
                $name(convert_ticks(duration.ticks(), D::TICKS_PER_SECOND, $per_second))
            }
        }

        impl From<$name> for core::time::Duration {
            fn from(value: $name) -> Self {
                <core::time::Duration as TimeDuration>::from_ticks(convert_ticks(
                    value.0,
                    $per_second,
                    1_000_000_000,
                ))
            }
        }
    };
}

integer_unit!(
    /// Whole nanoseconds.
    Nanos,
    1_000_000_000
);
integer_unit!(
    /// Whole microseconds.
    Micros,
    1_000_000
);
integer_unit!(
    /// Whole milliseconds.
    Millis,
    1_000
);
integer_unit!(
    /// Whole seconds.
    Seconds,
    1
);

impl FromTimeDuration for core::time::Duration {
    #[inline]
    fn from_duration<D: TimeDuration>(duration: D) -> Self {
        <core::time::Duration as TimeDuration>::from_ticks(convert_ticks(
            duration.ticks(),
            D::TICKS_PER_SECOND,
            1_000_000_000,
        ))
    }
}

/// Seconds as a double.
impl FromTimeDuration for f64 {
    #[inline]
    fn from_duration<D: TimeDuration>(duration: D) -> Self {
        duration.ticks() as f64 / D::TICKS_PER_SECOND as f64
    }
}

/// Seconds as a float.
impl FromTimeDuration for f32 {
    #[inline]
    fn from_duration<D: TimeDuration>(duration: D) -> Self {
        f64::from_duration(duration) as f32
    }
}
