//! Hand accumulation and blackjack evaluation.

use core::cmp::Ordering;
use core::fmt;

use crate::card::{Card, Rank};
use crate::error::SupplyError;
use crate::supply::Supply;

/// A blackjack hand drawn from a [`Supply`].
///
/// Cards are kept in draw order. The derived scoring state is recomputed
/// wholesale after every draw rather than patched incrementally, so it can
/// never drift from the held cards.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    total: u8,
    value: u8,
    soft: bool,
    busted: bool,
    blackjack: bool,
}

impl Hand {
    /// Creates a hand by drawing the initial two cards from `supply`.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::InsufficientCards`] when the supply holds fewer
    /// than two undealt cards; the supply is left unmutated.
    pub fn deal_from(supply: &mut Supply) -> Result<Self, SupplyError> {
        let cards = supply.deal_n(2)?;
        let mut hand = Self {
            cards,
            total: 0,
            value: 0,
            soft: false,
            busted: false,
            blackjack: false,
        };
        hand.update();
        Ok(hand)
    }

    /// Draws one more card from `supply` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::InsufficientCards`] when the supply is empty;
    /// the hand is left exactly as it was before the call.
    pub fn hit(&mut self, supply: &mut Supply) -> Result<Card, SupplyError> {
        let card = supply.deal_one()?;
        self.cards.push(card);
        self.update();
        Ok(card)
    }

    /// Recomputes every derived field from the held cards.
    ///
    /// At most one Ace can count as 11 without busting, so a single +10
    /// adjustment when the hard sum is 11 or less covers every soft hand.
    fn update(&mut self) {
        let mut hard_sum: u8 = 0;
        let mut ace_in_hand = false;
        for card in &self.cards {
            if card.rank == Rank::Ace {
                ace_in_hand = true;
            }
            hard_sum = hard_sum.saturating_add(card.rank.point_value());
        }

        self.total = hard_sum;
        self.value = hard_sum;
        self.soft = false;
        self.busted = false;
        self.blackjack = false;

        if hard_sum > 21 {
            self.busted = true;
            self.value = 0;
        } else if hard_sum <= 11 && ace_in_hand {
            self.total = hard_sum + 10;
            self.value = self.total;
            self.soft = true;
            self.blackjack = self.cards.len() == 2 && self.total == 21;
        }
    }

    /// The held cards, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of held cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand holds no cards. Hands created through
    /// [`Hand::deal_from`] always hold at least two.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Displayed total: the hard sum, plus 10 when one Ace counts as 11.
    ///
    /// A busted hand's total still shows the overshot sum; see
    /// [`Hand::value`] for the ranking value.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Ranking value: equal to [`Hand::total`] unless busted, in which case
    /// it is 0 so any standing hand beats it.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Whether an Ace is currently counted as 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft
    }

    /// Whether the hard sum exceeds 21.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.busted
    }

    /// Whether the hand is a two-card natural 21.
    #[must_use]
    pub const fn is_blackjack(&self) -> bool {
        self.blackjack
    }

    /// Ranks this hand against another at showdown.
    ///
    /// Primary key is [`Hand::value`], so a bust loses to any standing hand.
    /// On equal value a natural outranks a multi-card 21; two naturals, or
    /// two equal non-naturals, compare equal (a push). The comparison is
    /// symmetric: the dealer-natural-beats-a-push rule is applied by the
    /// table on top of this.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.blackjack.cmp(&other.blackjack))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spades)
    }

    /// Builds a hand that drew the given cards in the given order.
    fn hand_of(draws: &[Rank]) -> Hand {
        let mut fixture: Vec<Card> = draws.iter().rev().map(|&r| card(r)).collect();
        // Suits only need to differ enough to be legal; vary them cyclically.
        for (i, c) in fixture.iter_mut().enumerate() {
            c.suit = Suit::ALL[i % 4];
        }
        let mut supply = Supply::new_fixed(fixture);
        let mut hand = Hand::deal_from(&mut supply).unwrap();
        for _ in 2..draws.len() {
            hand.hit(&mut supply).unwrap();
        }
        hand
    }

    #[test]
    fn ace_ten_is_a_natural() {
        let hand = hand_of(&[Rank::Ace, Rank::Ten]);
        assert_eq!(hand.total(), 21);
        assert_eq!(hand.value(), 21);
        assert!(hand.is_soft());
        assert!(hand.is_blackjack());
        assert!(!hand.is_busted());
    }

    #[test]
    fn two_aces_make_a_soft_twelve() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace]);
        assert_eq!(hand.total(), 12);
        assert!(hand.is_soft());
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn three_card_twenty_one_is_hard_and_not_a_natural() {
        let hand = hand_of(&[Rank::Ten, Rank::Ten, Rank::Ace]);
        assert_eq!(hand.total(), 21);
        assert_eq!(hand.value(), 21);
        assert!(!hand.is_soft());
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn bust_zeroes_the_value_but_keeps_the_total() {
        let hand = hand_of(&[Rank::King, Rank::Queen, Rank::Five]);
        assert!(hand.is_busted());
        assert_eq!(hand.value(), 0);
        assert_eq!(hand.total(), 25);
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn evaluation_ignores_draw_order() {
        let a = hand_of(&[Rank::Ace, Rank::Six, Rank::Nine]);
        let b = hand_of(&[Rank::Nine, Rank::Six, Rank::Ace]);
        assert_eq!(a.total(), b.total());
        assert_eq!(a.value(), b.value());
        assert_eq!(a.is_soft(), b.is_soft());
        assert_eq!(a.is_busted(), b.is_busted());
    }

    #[test]
    fn hit_leaves_hand_valid_when_supply_is_exhausted() {
        let mut supply = Supply::new_fixed([card(Rank::Seven), card(Rank::Eight)]);
        let mut hand = Hand::deal_from(&mut supply).unwrap();

        assert_eq!(hand.hit(&mut supply), Err(SupplyError::InsufficientCards));
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.total(), 15);
    }

    #[test]
    fn natural_outranks_a_three_card_twenty_one() {
        let natural = hand_of(&[Rank::Ace, Rank::King]);
        let slow = hand_of(&[Rank::Ten, Rank::Ten, Rank::Ace]);
        assert_eq!(natural.compare(&slow), Ordering::Greater);
        assert_eq!(slow.compare(&natural), Ordering::Less);
    }

    #[test]
    fn two_naturals_push() {
        let a = hand_of(&[Rank::Ace, Rank::King]);
        let b = hand_of(&[Rank::Ace, Rank::Queen]);
        assert_eq!(a.compare(&b), Ordering::Equal);
    }

    #[test]
    fn bust_loses_to_any_standing_hand() {
        let busted = hand_of(&[Rank::King, Rank::Queen, Rank::Five]);
        let modest = hand_of(&[Rank::Two, Rank::Three]);
        assert_eq!(busted.compare(&modest), Ordering::Less);
    }
}
