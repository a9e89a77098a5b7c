use std::fmt::Display;

/// The mean of a stream of counts, such as the number of children of each branched state.
///
/// An empty stream has mean zero.
#[derive(Default, Debug, Copy, Clone)]
pub struct CumulativeMovingAverage {
    total: u64,
    count: u64,
}

impl CumulativeMovingAverage {
    pub fn add_term(&mut self, term: u64) {
        self.total += term;
        self.count += 1;
    }

    pub fn value(&self) -> f64 {
        match self.count {
            0 => 0.0,
            count => self.total as f64 / count as f64,
        }
    }
}

impl Display for CumulativeMovingAverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
