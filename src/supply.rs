//! The card supply: an undealt stack plus a record of dealt cards.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::error::SupplyError;

/// Number of cards in a standard supply.
pub const SUPPLY_SIZE: usize = 52;

/// The pool of cards backing one table.
///
/// Undealt cards form a stack whose top is the dealing end; dealt cards are
/// kept in a separate history with the most recently dealt card at the front.
/// Every card is in exactly one of the two collections at any time, so for a
/// standard supply `remaining() + dealt_count() == 52` holds across any
/// sequence of operations.
///
/// Dealing is LIFO with respect to insertion order: a supply built with
/// [`Supply::new_fixed`] deals the *last* card of the given sequence first.
/// Test fixtures rely on this, so list scripted draws in reverse.
#[derive(Debug, Clone)]
pub struct Supply {
    undealt: Vec<Card>,
    dealt: VecDeque<Card>,
    shuffled: bool,
}

impl Supply {
    /// Creates a full 52-card supply in canonical order, nothing dealt.
    ///
    /// The supply is not shuffled automatically.
    #[must_use]
    pub fn new_standard() -> Self {
        let mut undealt = Vec::with_capacity(SUPPLY_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                undealt.push(Card::new(rank, suit));
            }
        }
        Self {
            undealt,
            dealt: VecDeque::new(),
            shuffled: false,
        }
    }

    /// Creates a supply holding exactly the given cards, nothing dealt.
    ///
    /// Intended for scripted play in tests: duplicates and partial decks are
    /// permitted, and the cards deal in reverse of the given order.
    #[must_use]
    pub fn new_fixed<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self {
            undealt: cards.into_iter().collect(),
            dealt: VecDeque::new(),
            shuffled: false,
        }
    }

    /// Shuffles the undealt cards in place and sets the shuffled flag.
    ///
    /// Dealt history is untouched. Deterministic under a seeded generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.undealt.shuffle(rng);
        self.shuffled = true;
    }

    /// Removes and returns the card at the dealing end, recording it at the
    /// front of the dealt history.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::InsufficientCards`] when no undealt cards
    /// remain.
    pub fn deal_one(&mut self) -> Result<Card, SupplyError> {
        let card = self.undealt.pop().ok_or(SupplyError::InsufficientCards)?;
        self.dealt.push_front(card);
        Ok(card)
    }

    /// Deals `count` cards, returned in the order dealt.
    ///
    /// The deal is atomic: the remaining count is checked up front, so a
    /// failing call leaves the supply unmutated.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::InsufficientCards`] when fewer than `count`
    /// undealt cards remain.
    pub fn deal_n(&mut self, count: usize) -> Result<Vec<Card>, SupplyError> {
        if self.undealt.len() < count {
            return Err(SupplyError::InsufficientCards);
        }
        (0..count).map(|_| self.deal_one()).collect()
    }

    /// Moves all dealt cards back into the undealt stack and clears the
    /// dealt history.
    ///
    /// The resulting undealt order is unspecified; call [`Supply::sort`] if
    /// canonical order is needed. The shuffled flag is left alone.
    pub fn gather(&mut self) {
        self.undealt.extend(self.dealt.drain(..));
    }

    /// Sorts the undealt cards into canonical order and clears the shuffled
    /// flag.
    pub fn sort(&mut self) {
        self.undealt.sort_unstable();
        self.shuffled = false;
    }

    /// Whether the supply has been shuffled since creation or the last
    /// [`Supply::sort`].
    #[must_use]
    pub const fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.undealt.len()
    }

    /// Number of cards in the dealt history.
    #[must_use]
    pub fn dealt_count(&self) -> usize {
        self.dealt.len()
    }
}

impl Default for Supply {
    fn default() -> Self {
        Self::new_standard()
    }
}
