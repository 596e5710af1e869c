//! Round settlement: the showdown rule and its payout arithmetic.

use core::cmp::Ordering;

use crate::card::Card;
use crate::hand::Hand;

/// How the player's hand fared against the dealer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player wins even money.
    Win,
    /// Player wins with a natural, paid 3:2.
    Blackjack,
    /// Player loses the bet.
    Lose,
    /// Tie; the bet is returned.
    Push,
}

impl RoundOutcome {
    /// Signed chip movement for a settled bet.
    ///
    /// A natural pays 3:2 rounded down; a push moves nothing.
    #[must_use]
    pub const fn payout(self, bet: u32) -> i64 {
        let bet = bet as i64;
        match self {
            Self::Win => bet,
            Self::Blackjack => bet + bet / 2,
            Self::Lose => -bet,
            Self::Push => 0,
        }
    }
}

/// Applies the table's showdown rule to two played-out hands.
///
/// This is [`Hand::compare`] plus the one house asymmetry: a dealer natural
/// also beats a push, including a push of two naturals.
#[must_use]
pub fn settle(player: &Hand, dealer: &Hand) -> RoundOutcome {
    match player.compare(dealer) {
        Ordering::Greater if player.is_blackjack() => RoundOutcome::Blackjack,
        Ordering::Greater => RoundOutcome::Win,
        Ordering::Less => RoundOutcome::Lose,
        Ordering::Equal if dealer.is_blackjack() => RoundOutcome::Lose,
        Ordering::Equal => RoundOutcome::Push,
    }
}

/// Settled result of one table round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The bet that was staked.
    pub bet: u32,
    /// Signed chip movement (positive = profit).
    pub net: i64,
    /// The player's pot after settlement.
    pub pot: u32,
    /// The player's final cards, in draw order.
    pub player_cards: Vec<Card>,
    /// The player's final ranking value (0 when busted).
    pub player_value: u8,
    /// The dealer's final cards, in draw order.
    pub dealer_cards: Vec<Card>,
    /// The dealer's final ranking value.
    pub dealer_value: u8,
    /// Whether the dealer held a natural.
    pub dealer_blackjack: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};
    use crate::supply::Supply;

    fn hand_of(draws: &[Rank]) -> Hand {
        let cards: Vec<Card> = draws
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &rank)| Card::new(rank, Suit::ALL[i % 4]))
            .collect();
        let mut supply = Supply::new_fixed(cards);
        let mut hand = Hand::deal_from(&mut supply).unwrap();
        for _ in 2..draws.len() {
            hand.hit(&mut supply).unwrap();
        }
        hand
    }

    #[test]
    fn higher_value_wins_even_money() {
        let player = hand_of(&[Rank::Ten, Rank::Nine]);
        let dealer = hand_of(&[Rank::Ten, Rank::Seven]);
        assert_eq!(settle(&player, &dealer), RoundOutcome::Win);
        assert_eq!(RoundOutcome::Win.payout(10), 10);
    }

    #[test]
    fn natural_beats_dealer_twenty_and_pays_three_to_two() {
        let player = hand_of(&[Rank::Ace, Rank::King]);
        let dealer = hand_of(&[Rank::Ten, Rank::Ten]);
        assert_eq!(settle(&player, &dealer), RoundOutcome::Blackjack);
        assert_eq!(RoundOutcome::Blackjack.payout(10), 15);
        // 3:2 on an odd bet rounds down.
        assert_eq!(RoundOutcome::Blackjack.payout(5), 7);
    }

    #[test]
    fn natural_beats_a_three_card_twenty_one() {
        let player = hand_of(&[Rank::Ace, Rank::King]);
        let dealer = hand_of(&[Rank::Ten, Rank::Five, Rank::Six]);
        assert_eq!(settle(&player, &dealer), RoundOutcome::Blackjack);
    }

    #[test]
    fn equal_standing_hands_push() {
        let player = hand_of(&[Rank::Ten, Rank::Eight]);
        let dealer = hand_of(&[Rank::Nine, Rank::Nine]);
        assert_eq!(settle(&player, &dealer), RoundOutcome::Push);
        assert_eq!(RoundOutcome::Push.payout(10), 0);
    }

    #[test]
    fn dealer_natural_beats_a_push_of_naturals() {
        let player = hand_of(&[Rank::Ace, Rank::King]);
        let dealer = hand_of(&[Rank::Ace, Rank::Queen]);
        assert_eq!(settle(&player, &dealer), RoundOutcome::Lose);
    }

    #[test]
    fn dealer_natural_beats_a_slow_twenty_one() {
        let player = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        let dealer = hand_of(&[Rank::Ace, Rank::Jack]);
        assert_eq!(settle(&player, &dealer), RoundOutcome::Lose);
    }

    #[test]
    fn bust_loses_the_bet() {
        let player = hand_of(&[Rank::King, Rank::Queen, Rank::Five]);
        let dealer = hand_of(&[Rank::Ten, Rank::Seven]);
        assert_eq!(settle(&player, &dealer), RoundOutcome::Lose);
        assert_eq!(RoundOutcome::Lose.payout(10), -10);
    }
}
