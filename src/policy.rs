//! Scripted dealer play.

use crate::error::SupplyError;
use crate::hand::Hand;
use crate::supply::Supply;

/// Whether a policy wants another card for the hand it governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyState {
    /// The policy will draw at least one more card.
    Drawing,
    /// The policy has finished with the hand (stand, bust, or 21).
    Done,
}

/// The house's fixed hit/stand script.
///
/// The dealer draws below 17 and stands at 18 or higher; the configurable
/// part is 17 itself. Under the default "hit on soft 17" rule (the common
/// casino variant) a soft 17 is drawn on and only a hard 17 stands; the
/// alternate rule stands on any 17.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerPolicy {
    hit_on_soft_17: bool,
}

impl DealerPolicy {
    /// Creates a policy with the given soft-17 rule.
    #[must_use]
    pub const fn new(hit_on_soft_17: bool) -> Self {
        Self { hit_on_soft_17 }
    }

    /// Whether this policy draws on a soft 17.
    #[must_use]
    pub const fn hits_on_soft_17(&self) -> bool {
        self.hit_on_soft_17
    }

    /// Evaluates the transition rule against a hand without drawing.
    #[must_use]
    pub fn assess(&self, hand: &Hand) -> PolicyState {
        if hand.total() < 17 || (hand.total() == 17 && hand.is_soft() && self.hit_on_soft_17) {
            PolicyState::Drawing
        } else {
            PolicyState::Done
        }
    }

    /// Performs at most one assess-then-draw step and reports the state the
    /// hand is left in.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::InsufficientCards`] when a draw is required but
    /// the supply is empty; the hand keeps its pre-call state.
    pub fn advance(&self, hand: &mut Hand, supply: &mut Supply) -> Result<PolicyState, SupplyError> {
        if self.assess(hand) == PolicyState::Done {
            return Ok(PolicyState::Done);
        }
        hand.hit(supply)?;
        Ok(self.assess(hand))
    }

    /// Runs [`DealerPolicy::advance`] until the policy is done with the hand.
    ///
    /// # Errors
    ///
    /// Returns [`SupplyError::InsufficientCards`] when the supply runs out
    /// mid-play; the hand remains valid as of the last completed draw.
    pub fn play(&self, hand: &mut Hand, supply: &mut Supply) -> Result<(), SupplyError> {
        while self.advance(hand, supply)? == PolicyState::Drawing {}
        Ok(())
    }
}

impl Default for DealerPolicy {
    /// The common casino rule: hit on soft 17.
    fn default() -> Self {
        Self::new(true)
    }
}
