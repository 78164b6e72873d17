//! Error types for shoe access and round commands.

use thiserror::Error;

/// Errors reported by a [`ShoeService`](crate::ShoeService) implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service could not be reached or returned garbage.
    #[error("shoe service unavailable")]
    Unavailable,
    /// The service does not know the requested shoe.
    #[error("unknown shoe")]
    UnknownShoe,
    /// The shoe holds fewer cards than requested.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
    /// The service handed out fewer cards than requested.
    #[error("shoe returned {returned} of {requested} requested cards")]
    ShortDraw {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards actually returned.
        returned: usize,
    },
}

/// Errors that can occur when the tracker requests cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// A call to the shoe service failed.
    #[error("shoe service unavailable: {0}")]
    ServiceUnavailable(#[from] ServiceError),
    /// The shoe holds fewer cards than requested; nothing was drawn.
    #[error("not enough cards in the shoe ({remaining} left, {requested} requested)")]
    InsufficientCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards the service reported as remaining.
        remaining: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A call to the shoe service failed.
    #[error("shoe service unavailable: {0}")]
    ServiceUnavailable(ServiceError),
    /// Not enough cards in the shoe; the shoe was reshuffled and nothing was dealt.
    #[error("not enough cards in the shoe ({remaining} left, {requested} requested)")]
    InsufficientCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards the service reported as remaining.
        remaining: usize,
    },
}

impl From<DrawError> for DealError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::ServiceUnavailable(err) => Self::ServiceUnavailable(err),
            DrawError::InsufficientCards {
                requested,
                remaining,
            } => Self::InsufficientCards {
                requested,
                remaining,
            },
        }
    }
}

impl From<ServiceError> for DealError {
    fn from(err: ServiceError) -> Self {
        Self::ServiceUnavailable(err)
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal in the current round state.
    #[error("action not allowed in the current round state")]
    IllegalAction,
    /// A call to the shoe service failed.
    #[error("shoe service unavailable: {0}")]
    ServiceUnavailable(ServiceError),
    /// Not enough cards in the shoe to complete the action.
    #[error("not enough cards in the shoe ({remaining} left, {requested} requested)")]
    InsufficientCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards the service reported as remaining.
        remaining: usize,
    },
}

impl From<DrawError> for ActionError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::ServiceUnavailable(err) => Self::ServiceUnavailable(err),
            DrawError::InsufficientCards {
                requested,
                remaining,
            } => Self::InsufficientCards {
                requested,
                remaining,
            },
        }
    }
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// A call to the shoe service failed.
    #[error("shoe service unavailable: {0}")]
    ServiceUnavailable(ServiceError),
}

impl From<ServiceError> for ReshuffleError {
    fn from(err: ServiceError) -> Self {
        Self::ServiceUnavailable(err)
    }
}
