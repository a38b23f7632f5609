/// Rejected pagination input.
///
/// Every variant names the offending field, its value, and the bound it
/// violates. Nothing is computed when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRequest {
    #[error("total number of pages ({total}) should not be lower than 1")]
    TotalPagesTooLow { total: u64 },

    #[error("current page ({current}) should not be lower than 1")]
    CurrentPageTooLow { current: u64 },

    #[error("current page ({current}) should not be higher than total number of pages ({total})")]
    CurrentPageExceedsTotal { current: u64, total: u64 },

    #[error("maximum number of visible pages ({maximum}) should be at least 7")]
    MaximumVisibleTooLow { maximum: u64 },

    #[error("omitted chunk marker should either be a string or an int, got {found}")]
    MarkerWrongType { found: &'static str },

    #[error(
        "omitted chunk marker ({marker}) should not be between 1 and total number of pages ({total})"
    )]
    MarkerCollidesWithPageNumber { marker: i64, total: u64 },
}

pub type Result<T> = std::result::Result<T, InvalidRequest>;

/// Failure while resolving a [`PaginationConfig`](crate::PaginationConfig)
/// from configuration sources.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Figment(#[from] figment::Error),
}
