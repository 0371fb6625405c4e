use thiserror::Error;

/// Conditions under which no histogram can be drawn.
///
/// These are "no data" outcomes rather than failures; callers are expected
/// to show an empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BinningError {
    #[error("no values to bin")]
    EmptyDomain,
    #[error("bucket count must be greater than zero")]
    ZeroBuckets,
}
