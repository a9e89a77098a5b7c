use fair_split::basic_types::ValuationError;
use thiserror::Error;

pub(crate) type FairSplitResult<T> = Result<T, FairSplitError>;

#[derive(Error, Debug)]
pub(crate) enum FairSplitError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The valuation '{0}' is not a number.")]
    InvalidNumber(String),
    #[error("The valuations are malformed, more details: {0}")]
    InvalidValuations(#[from] ValuationError),
}

impl FairSplitError {
    pub(crate) fn invalid_number(value: &str) -> Self {
        Self::InvalidNumber(value.to_owned())
    }
}
