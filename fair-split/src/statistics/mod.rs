//! Machine-readable statistics of a search run.
//!
//! Each statistic is written as one line, `{prefix} {name}={value}`, once statistic logging has
//! been enabled with [`configure_statistic_logging`]. Statistic structs are usually generated with
//! [`create_statistics_struct!`], which names every field after its path below a
//! [`StatisticLogger`].
mod statistic_logger;
mod statistic_logging;

pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;

/// A value, or a group of values, which can be written as statistics.
pub trait Statistic {
    fn log(&self, statistic_logger: StatisticLogger);
}

/// Every displayable value is a single statistic.
impl<Value: std::fmt::Display> Statistic for Value {
    fn log(&self, statistic_logger: StatisticLogger) {
        statistic_logger.log_statistic(self);
    }
}

/// Declares a struct of statistic counters which logs each field under its own name.
///
/// ```rust
/// # use fair_split::create_statistics_struct;
/// create_statistics_struct!(
///     /// Counters of a selection run.
///     SelectionStatistics {
///         /// Allocations which were scored
///         num_scored: u64,
///         num_ties: u64,
///     }
/// );
///
/// let mut statistics = SelectionStatistics::default();
/// statistics.num_scored += 3;
///
/// assert_eq!(statistics.num_scored, 3);
/// assert_eq!(statistics.num_ties, 0);
/// ```
#[macro_export]
macro_rules! create_statistics_struct {
    (
        $(#[$struct_attribute:meta])*
        $name:ident {
            $(
                $(#[$field_attribute:meta])*
                $field:ident : $type:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$struct_attribute])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name {
            $(
                $(#[$field_attribute])*
                pub $field: $type,
            )+
        }

        impl $crate::statistics::Statistic for $name {
            fn log(&self, statistic_logger: $crate::statistics::StatisticLogger) {
                $(
                    $crate::statistics::Statistic::log(
                        &self.$field,
                        statistic_logger.attach_to_prefix(stringify!($field)),
                    );
                )+
            }
        }
    };
}
