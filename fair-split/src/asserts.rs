//! Leveled assertions. The level is a compile-time constant, so checks above it are removed by
//! the optimiser; tests and the `debug-checks` feature enable every level.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const FAIR_SPLIT_ASSERT_LEVEL_DEFINITION: u8 = FAIR_SPLIT_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const FAIR_SPLIT_ASSERT_LEVEL_DEFINITION: u8 = FAIR_SPLIT_ASSERT_ADVANCED;

/// Constant-time checks, always active.
pub const FAIR_SPLIT_ASSERT_SIMPLE: u8 = 1;
/// Checks which recompute a property of a single state.
pub const FAIR_SPLIT_ASSERT_MODERATE: u8 = 2;
/// Checks on the bookkeeping of the search itself.
pub const FAIR_SPLIT_ASSERT_ADVANCED: u8 = 3;

/// Runs the standard assertion `$check` when the configured level reaches `$level`.
#[macro_export]
#[doc(hidden)]
macro_rules! fair_split_assert_at_level {
    ($level:ident, $check:ident, $($arg:tt)*) => {
        if $crate::asserts::FAIR_SPLIT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::$level {
            $check!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! fair_split_assert_simple {
    ($($arg:tt)*) => {
        $crate::fair_split_assert_at_level!(FAIR_SPLIT_ASSERT_SIMPLE, assert, $($arg)*)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! fair_split_assert_eq_simple {
    ($($arg:tt)*) => {
        $crate::fair_split_assert_at_level!(FAIR_SPLIT_ASSERT_SIMPLE, assert_eq, $($arg)*)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! fair_split_assert_moderate {
    ($($arg:tt)*) => {
        $crate::fair_split_assert_at_level!(FAIR_SPLIT_ASSERT_MODERATE, assert, $($arg)*)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! fair_split_assert_advanced {
    ($($arg:tt)*) => {
        $crate::fair_split_assert_at_level!(FAIR_SPLIT_ASSERT_ADVANCED, assert, $($arg)*)
    };
}
