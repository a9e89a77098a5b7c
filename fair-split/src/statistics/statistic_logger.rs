use std::fmt::Display;

use itertools::Itertools;

use super::statistic_logging::log_statistic;

/// Names statistics by a path of components joined with underscores, e.g. `search_num_states`.
#[derive(Debug, Default, Clone)]
pub struct StatisticLogger {
    path: String,
}

impl StatisticLogger {
    pub fn new(components: impl IntoIterator<Item = impl Display>) -> Self {
        Self {
            path: components.into_iter().join("_"),
        }
    }

    /// A logger for the statistic `component` nested below this one.
    pub fn attach_to_prefix(&self, component: impl Display) -> Self {
        if self.path.is_empty() {
            Self::new([component])
        } else {
            Self {
                path: format!("{}_{component}", self.path),
            }
        }
    }

    pub fn log_statistic(&self, value: impl Display) {
        log_statistic(&self.path, value);
    }
}
