use crate::Unit;

pub const SECOND: Unit<Duration> = Unit::linear("second", "s", 1.0);
pub const MILLISECOND: Unit<Duration> = Unit::linear("millisecond", "ms", 1e-3);
pub const MICROSECOND: Unit<Duration> = Unit::linear("microsecond", "µs", 1e-6);
pub const NANOSECOND: Unit<Duration> = Unit::linear("nanosecond", "ns", 1e-9);
pub const MINUTE: Unit<Duration> = Unit::linear("minute", "min", 60.0);
pub const HOUR: Unit<Duration> = Unit::linear("hour", "h", 3600.0);
pub const DAY: Unit<Duration> = Unit::linear("day", "d", 86400.0);
pub const WEEK: Unit<Duration> = Unit::linear("week", "wk", 604_800.0);

quantity!(
    /// Elapsed time.
    Duration,
    name: "Duration",
    units: [SECOND, MILLISECOND, MICROSECOND, NANOSECOND, MINUTE, HOUR, DAY, WEEK],
    absolute:
        /// Point in time, counted from an arbitrary epoch.
        Time
);
