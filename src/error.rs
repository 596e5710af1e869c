//! Error types for supply and table operations.

use thiserror::Error;

/// Errors raised by a draw from a [`Supply`](crate::Supply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SupplyError {
    /// A draw was requested but every card has already been dealt. In normal
    /// single-deck play this indicates a configuration mistake (deck too
    /// small for the table), not a recoverable runtime condition.
    #[error("not enough undealt cards to satisfy the draw")]
    InsufficientCards,
}

/// Errors raised when starting a table round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the table maximum.
    #[error("bet exceeds the table maximum")]
    BetTooLarge,
    /// Bet exceeds the player's pot.
    #[error("bet exceeds the player's pot")]
    InsufficientFunds,
    /// The supply ran out of cards mid-round.
    #[error(transparent)]
    Supply(#[from] SupplyError),
}
