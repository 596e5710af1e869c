//! Round orchestration: bets, dealing, turn flow, and settlement.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::TableOptions;
use crate::outcome::{self, RoundOutcome, RoundSummary};
use crate::policy::DealerPolicy;
use crate::supply::Supply;

/// A player's choice when asked to act on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw one more card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// A one-player blackjack table.
///
/// The table owns the supply, the pot, the dealer policy, and a seeded
/// generator, and runs one round at a time: the player's decisions come from
/// an injected callback, so any decision source works, from a stdin prompt to
/// a scripted strategy in tests.
#[derive(Debug)]
pub struct Table {
    supply: Supply,
    policy: DealerPolicy,
    options: TableOptions,
    rng: ChaCha8Rng,
    pot: u32,
}

impl Table {
    /// Creates a table with the given options and shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use pontoon::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.pot(), 100);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            supply: Supply::new_standard(),
            policy: DealerPolicy::new(options.hit_on_soft_17),
            options,
            rng: ChaCha8Rng::seed_from_u64(seed),
            pot: options.starting_pot,
        }
    }

    /// Chips the player currently holds.
    #[must_use]
    pub const fn pot(&self) -> u32 {
        self.pot
    }

    /// Read access to the card supply.
    #[must_use]
    pub const fn supply(&self) -> &Supply {
        &self.supply
    }

    /// The dealer policy in force at this table.
    #[must_use]
    pub const fn dealer_policy(&self) -> DealerPolicy {
        self.policy
    }

    fn check_bet(&self, bet: u32) -> Result<(), RoundError> {
        if bet == 0 {
            return Err(RoundError::ZeroBet);
        }
        if bet > self.options.max_bet {
            return Err(RoundError::BetTooLarge);
        }
        if bet > self.pot {
            return Err(RoundError::InsufficientFunds);
        }
        Ok(())
    }

    /// Plays one full round for the given bet.
    ///
    /// The supply is gathered and reshuffled, the dealer's hand is dealt and
    /// then the player's, and `decide` is consulted until the player stands,
    /// reaches 21, or busts. The dealer then plays out their scripted policy
    /// (skipped when the player already busted), the showdown rule settles
    /// the bet, and the pot is updated.
    ///
    /// # Errors
    ///
    /// Returns a bet validation error before any card moves, or a
    /// [`SupplyError`](crate::SupplyError) wrapped in
    /// [`RoundError::Supply`] if the single deck is somehow exhausted
    /// mid-round.
    pub fn play_round<F>(&mut self, bet: u32, mut decide: F) -> Result<RoundSummary, RoundError>
    where
        F: FnMut(&Hand) -> Decision,
    {
        self.check_bet(bet)?;

        self.supply.gather();
        self.supply.shuffle(&mut self.rng);

        let mut dealer = Hand::deal_from(&mut self.supply)?;
        let mut player = Hand::deal_from(&mut self.supply)?;

        while player.total() < 21 && decide(&player) == Decision::Hit {
            player.hit(&mut self.supply)?;
        }

        if !player.is_busted() {
            self.policy.play(&mut dealer, &mut self.supply)?;
        }

        let outcome = outcome::settle(&player, &dealer);
        let net = outcome.payout(bet);
        // check_bet bounded the bet by the pot, so a loss cannot underflow.
        self.pot = match outcome {
            RoundOutcome::Win | RoundOutcome::Blackjack | RoundOutcome::Push => {
                self.pot + net.unsigned_abs() as u32
            }
            RoundOutcome::Lose => self.pot - bet,
        };

        Ok(RoundSummary {
            outcome,
            bet,
            net,
            pot: self.pot,
            player_value: player.value(),
            player_cards: player.cards().to_vec(),
            dealer_value: dealer.value(),
            dealer_blackjack: dealer.is_blackjack(),
            dealer_cards: dealer.cards().to_vec(),
        })
    }
}
