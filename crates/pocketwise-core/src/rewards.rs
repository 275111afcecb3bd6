//! Gamified reward claims
//!
//! Entering a giveaway opens a dialog, spins a three-reel slot machine and,
//! on a win, lets the user claim the prize. The dialog sequence is modelled as
//! an explicit state machine so the UI can only offer the valid next step.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use thiserror::Error;

use crate::model::{Reward, RewardStatus};

/// How long the reels spin before the outcome is revealed
pub const SPIN_DURATION_MS: u32 = 1_500;

pub const REEL_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotSymbol {
    Rupee,
    Gift,
    Star,
    Coin,
    Seven,
}

impl SlotSymbol {
    pub const ALL: [SlotSymbol; 5] = [
        SlotSymbol::Rupee,
        SlotSymbol::Gift,
        SlotSymbol::Star,
        SlotSymbol::Coin,
        SlotSymbol::Seven,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            SlotSymbol::Rupee => "₹",
            SlotSymbol::Gift => "🎁",
            SlotSymbol::Star => "⭐",
            SlotSymbol::Coin => "🪙",
            SlotSymbol::Seven => "7",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinResult {
    /// All reels match
    Jackpot,
    /// Exactly two reels match
    Win,
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinOutcome {
    pub reels: [SlotSymbol; REEL_COUNT],
    pub result: SpinResult,
}

impl SpinOutcome {
    pub fn from_reels(reels: [SlotSymbol; REEL_COUNT]) -> Self {
        let [a, b, c] = reels;
        let result = if a == b && b == c {
            SpinResult::Jackpot
        } else if a == b || b == c || a == c {
            SpinResult::Win
        } else {
            SpinResult::Miss
        };
        Self { reels, result }
    }

    pub fn is_win(&self) -> bool {
        self.result != SpinResult::Miss
    }

    pub fn headline(&self) -> &'static str {
        match self.result {
            SpinResult::Jackpot => "Jackpot!",
            SpinResult::Win => "You won!",
            SpinResult::Miss => "So close. Try again?",
        }
    }
}

/// Spin all reels once
pub fn spin<R: Rng + ?Sized>(rng: &mut R) -> SpinOutcome {
    let mut reels = [SlotSymbol::Rupee; REEL_COUNT];
    for reel in &mut reels {
        *reel = SlotSymbol::ALL[rng.gen_range(0..SlotSymbol::ALL.len())];
    }
    SpinOutcome::from_reels(reels)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimError {
    #[error("reward '{0}' has already been claimed")]
    AlreadyClaimed(String),

    #[error("the spin did not win, nothing to claim")]
    NotAWin,

    #[error("reward '{0}' is not in the giveaway list")]
    UnknownReward(String),

    #[error("cannot {action} while {state}")]
    OutOfOrder { action: &'static str, state: &'static str },

    #[error("spin {0:?} was superseded by a newer spin")]
    StaleSpin(SpinTicket),
}

/// Identifies one pull of the lever
///
/// Tickets are unique for the life of the process, so an outcome computed for
/// a spin that was abandoned (dialog closed, another reward opened) can never
/// finish a later spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpinTicket(u64);

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

impl SpinTicket {
    fn issue() -> Self {
        SpinTicket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

/// Where the claim dialog currently is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClaimFlow {
    /// Dialog closed
    #[default]
    Idle,
    /// Dialog open, waiting for the user to pull the lever
    Confirming { reward_id: String },
    /// Reels turning; the UI finishes this after [`SPIN_DURATION_MS`]
    Spinning { reward_id: String, ticket: SpinTicket },
    Revealed { reward_id: String, outcome: SpinOutcome },
    Claimed { reward_id: String },
}

impl ClaimFlow {
    fn state_name(&self) -> &'static str {
        match self {
            ClaimFlow::Idle => "the dialog is closed",
            ClaimFlow::Confirming { .. } => "waiting to spin",
            ClaimFlow::Spinning { .. } => "the reels are spinning",
            ClaimFlow::Revealed { .. } => "the result is showing",
            ClaimFlow::Claimed { .. } => "the reward is claimed",
        }
    }

    fn out_of_order(&self, action: &'static str) -> ClaimError {
        ClaimError::OutOfOrder {
            action,
            state: self.state_name(),
        }
    }

    pub fn reward_id(&self) -> Option<&str> {
        match self {
            ClaimFlow::Idle => None,
            ClaimFlow::Confirming { reward_id }
            | ClaimFlow::Spinning { reward_id, .. }
            | ClaimFlow::Revealed { reward_id, .. }
            | ClaimFlow::Claimed { reward_id } => Some(reward_id),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ClaimFlow::Idle)
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self, ClaimFlow::Spinning { .. })
    }

    /// Whether the reels are still turning for the spin that issued `ticket`
    pub fn is_spinning_for(&self, ticket: SpinTicket) -> bool {
        matches!(self, ClaimFlow::Spinning { ticket: current, .. } if *current == ticket)
    }

    /// Open the dialog for `reward`
    pub fn open(&mut self, reward: &Reward) -> Result<(), ClaimError> {
        if !matches!(self, ClaimFlow::Idle | ClaimFlow::Claimed { .. }) {
            return Err(self.out_of_order("open a reward"));
        }
        if reward.is_claimed() {
            return Err(ClaimError::AlreadyClaimed(reward.id.clone()));
        }
        *self = ClaimFlow::Confirming {
            reward_id: reward.id.clone(),
        };
        Ok(())
    }

    /// Pull the lever; also allowed again after a miss
    ///
    /// The returned ticket must be handed back to [`ClaimFlow::finish_spin`].
    pub fn start_spin(&mut self) -> Result<SpinTicket, ClaimError> {
        let reward_id = match self {
            ClaimFlow::Confirming { reward_id } => reward_id.clone(),
            ClaimFlow::Revealed { reward_id, outcome } if !outcome.is_win() => reward_id.clone(),
            _ => return Err(self.out_of_order("spin")),
        };
        let ticket = SpinTicket::issue();
        *self = ClaimFlow::Spinning { reward_id, ticket };
        Ok(ticket)
    }

    /// Stop the reels of spin `ticket` on `outcome`
    pub fn finish_spin(&mut self, ticket: SpinTicket, outcome: SpinOutcome) -> Result<(), ClaimError> {
        let reward_id = match self {
            ClaimFlow::Spinning { reward_id, ticket: current } if *current == ticket => std::mem::take(reward_id),
            ClaimFlow::Spinning { .. } => return Err(ClaimError::StaleSpin(ticket)),
            _ => return Err(self.out_of_order("reveal a spin")),
        };
        *self = ClaimFlow::Revealed { reward_id, outcome };
        Ok(())
    }

    /// Mark the revealed reward as claimed in `rewards`
    pub fn claim(&mut self, rewards: &mut [Reward]) -> Result<(), ClaimError> {
        let (reward_id, won) = match self {
            ClaimFlow::Revealed { reward_id, outcome } => (reward_id.clone(), outcome.is_win()),
            _ => return Err(self.out_of_order("claim")),
        };
        if !won {
            return Err(ClaimError::NotAWin);
        }
        let reward = rewards
            .iter_mut()
            .find(|r| r.id == reward_id)
            .ok_or_else(|| ClaimError::UnknownReward(reward_id.clone()))?;
        if reward.is_claimed() {
            return Err(ClaimError::AlreadyClaimed(reward_id));
        }
        reward.status = RewardStatus::Claimed;
        *self = ClaimFlow::Claimed { reward_id };
        Ok(())
    }

    /// Close the dialog from any state
    pub fn close(&mut self) {
        *self = ClaimFlow::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::sample_dataset;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::SlotSymbol::{Coin, Gift, Rupee, Seven, Star};

    fn win() -> SpinOutcome {
        SpinOutcome::from_reels([Star, Star, Coin])
    }

    fn miss() -> SpinOutcome {
        SpinOutcome::from_reels([Star, Gift, Coin])
    }

    #[test]
    fn test_outcome_classification() {
        assert_eq!(SpinOutcome::from_reels([Seven, Seven, Seven]).result, SpinResult::Jackpot);
        assert_eq!(SpinOutcome::from_reels([Rupee, Gift, Rupee]).result, SpinResult::Win);
        assert_eq!(SpinOutcome::from_reels([Rupee, Gift, Gift]).result, SpinResult::Win);
        assert_eq!(miss().result, SpinResult::Miss);
        assert!(!miss().is_win());
    }

    #[test]
    fn test_seeded_spin_is_reproducible() {
        let a = spin(&mut StdRng::seed_from_u64(42));
        let b = spin(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_eq!(a, SpinOutcome::from_reels(a.reels));
    }

    #[test]
    fn test_full_claim_flow() {
        let mut rewards = sample_dataset().rewards;
        let mut flow = ClaimFlow::default();

        flow.open(&rewards[0]).unwrap();
        assert_eq!(flow.reward_id(), Some(rewards[0].id.as_str()));
        let ticket = flow.start_spin().unwrap();
        assert!(flow.is_spinning());
        assert!(flow.is_spinning_for(ticket));
        flow.finish_spin(ticket, win()).unwrap();
        flow.claim(&mut rewards).unwrap();

        assert!(rewards[0].is_claimed());
        assert!(matches!(flow, ClaimFlow::Claimed { .. }));

        flow.close();
        assert!(!flow.is_open());
    }

    #[test]
    fn test_miss_cannot_claim_but_can_retry() {
        let mut rewards = sample_dataset().rewards;
        let mut flow = ClaimFlow::default();
        flow.open(&rewards[1]).unwrap();
        let ticket = flow.start_spin().unwrap();
        flow.finish_spin(ticket, miss()).unwrap();

        assert_eq!(flow.claim(&mut rewards), Err(ClaimError::NotAWin));
        assert!(!rewards[1].is_claimed());

        let retry = flow.start_spin().unwrap();
        assert_ne!(retry, ticket);
        flow.finish_spin(retry, win()).unwrap();
        flow.claim(&mut rewards).unwrap();
        assert!(rewards[1].is_claimed());
    }

    #[test]
    fn test_claimed_reward_cannot_be_reopened() {
        let mut rewards = sample_dataset().rewards;
        rewards[2].status = RewardStatus::Claimed;
        let mut flow = ClaimFlow::default();
        assert_eq!(
            flow.open(&rewards[2]),
            Err(ClaimError::AlreadyClaimed(rewards[2].id.clone()))
        );
        assert_eq!(flow, ClaimFlow::Idle);
    }

    #[test]
    fn test_out_of_order_steps() {
        let rewards = sample_dataset().rewards;
        let mut flow = ClaimFlow::default();
        assert!(matches!(flow.start_spin(), Err(ClaimError::OutOfOrder { .. })));

        flow.open(&rewards[0]).unwrap();
        assert!(matches!(flow.open(&rewards[1]), Err(ClaimError::OutOfOrder { .. })));

        let ticket = flow.start_spin().unwrap();
        assert!(matches!(flow.start_spin(), Err(ClaimError::OutOfOrder { .. })));

        flow.finish_spin(ticket, win()).unwrap();
        assert!(matches!(flow.finish_spin(ticket, win()), Err(ClaimError::OutOfOrder { .. })));
        // No retry after a win
        assert!(matches!(flow.start_spin(), Err(ClaimError::OutOfOrder { .. })));
    }

    #[test]
    fn test_close_mid_spin_resets() {
        let rewards = sample_dataset().rewards;
        let mut flow = ClaimFlow::default();
        flow.open(&rewards[0]).unwrap();
        let ticket = flow.start_spin().unwrap();
        flow.close();
        assert_eq!(flow, ClaimFlow::Idle);
        assert!(matches!(flow.finish_spin(ticket, win()), Err(ClaimError::OutOfOrder { .. })));
    }

    #[test]
    fn test_abandoned_spin_cannot_finish_a_newer_one() {
        let rewards = sample_dataset().rewards;
        let mut flow = ClaimFlow::default();
        flow.open(&rewards[0]).unwrap();
        let abandoned = flow.start_spin().unwrap();
        flow.close();

        flow.open(&rewards[1]).unwrap();
        let current = flow.start_spin().unwrap();
        assert!(!flow.is_spinning_for(abandoned));

        assert_eq!(flow.finish_spin(abandoned, win()), Err(ClaimError::StaleSpin(abandoned)));
        assert!(flow.is_spinning_for(current));
        assert_eq!(flow.reward_id(), Some(rewards[1].id.as_str()));

        flow.finish_spin(current, miss()).unwrap();
        assert!(matches!(flow, ClaimFlow::Revealed { outcome, .. } if outcome == miss()));
    }
}
