//! A single-deck blackjack engine.
//!
//! The crate models the card [`Supply`] (shuffle, deal, recall, reset to
//! factory order), blackjack [`Hand`] evaluation (soft/hard ace resolution,
//! bust and natural detection, showdown ranking), and the scripted
//! [`DealerPolicy`], plus a one-player [`Table`] that runs whole rounds with
//! an injected decision source.
//!
//! # Example
//!
//! ```
//! use pontoon::{Decision, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! let summary = table
//!     .play_round(5, |hand| {
//!         if hand.total() < 17 {
//!             Decision::Hit
//!         } else {
//!             Decision::Stand
//!         }
//!     })
//!     .expect("a fresh single deck cannot run out in one round");
//! println!("{:?}, pot is now {}", summary.outcome, summary.pot);
//! ```

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod policy;
pub mod supply;
pub mod table;

pub use card::{Card, Rank, Suit};
pub use error::{RoundError, SupplyError};
pub use hand::Hand;
pub use options::TableOptions;
pub use outcome::{RoundOutcome, RoundSummary, settle};
pub use policy::{DealerPolicy, PolicyState};
pub use supply::{SUPPLY_SIZE, Supply};
pub use table::{Decision, Table};
