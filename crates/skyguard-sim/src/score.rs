//! Running score and economy tracked by the engine.

use skyguard_core::constants::*;
use skyguard_core::enums::TargetKind;
use skyguard_core::state::ScoreView;

/// Score, funds, and engagement counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    pub score: u32,
    pub funds: u32,
    pub hits: u32,
    pub kills: u32,
    pub missiles_launched: u32,
    pub missiles_expired: u32,
    pub targets_escaped: u32,
}

impl ScoreState {
    pub fn new(funds: u32) -> Self {
        Self {
            funds,
            ..Default::default()
        }
    }

    /// Credit a hit on a target of this kind. Returns (score, funds) awarded.
    pub fn award_hit(&mut self, kind: TargetKind) -> (u32, u32) {
        let (score, funds) = reward_for(kind);
        self.score += score;
        self.funds += funds;
        self.hits += 1;
        (score, funds)
    }

    /// Deduct `cost` if affordable. Leaves funds untouched otherwise.
    pub fn try_spend(&mut self, cost: u32) -> bool {
        match self.funds.checked_sub(cost) {
            Some(left) => {
                self.funds = left;
                true
            }
            None => false,
        }
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            funds: self.funds,
            hits: self.hits,
            kills: self.kills,
            missiles_launched: self.missiles_launched,
            missiles_expired: self.missiles_expired,
            targets_escaped: self.targets_escaped,
        }
    }
}

/// (score, funds) earned per hit.
pub fn reward_for(kind: TargetKind) -> (u32, u32) {
    match kind {
        TargetKind::Drone => DRONE_REWARD,
        TargetKind::Plane => PLANE_REWARD,
        TargetKind::Cruise => CRUISE_REWARD,
    }
}
