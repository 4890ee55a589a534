//! Player level, experience and gold.

use crate::constants::{EXP_PER_LEVEL, QUEST_GOLD_REWARD, STARTING_LEVEL};

/// Experience needed to clear the given level.
pub fn exp_to_level_up(level: u32) -> u32 {
    level * EXP_PER_LEVEL
}

/// Session-scoped hero stats. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub level: u32,
    pub exp: u32,
    pub gold: u32,
}

/// What a quest reward did to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardOutcome {
    pub exp_gained: u32,
    pub gold_gained: u32,
    /// New level, if the reward crossed the threshold
    pub level_up: Option<u32>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerProfile {
    pub fn new() -> Self {
        Self {
            level: STARTING_LEVEL,
            exp: 0,
            gold: 0,
        }
    }

    pub fn exp_to_level_up(&self) -> u32 {
        exp_to_level_up(self.level)
    }

    /// Credits a finished quest: experience, the fixed gold payout, and at
    /// most one level-up. Crossing the threshold resets experience to zero
    /// and discards any overflow.
    pub fn apply_quest_reward(&mut self, exp: u32) -> RewardOutcome {
        self.exp = self.exp.saturating_add(exp);
        self.gold = self.gold.saturating_add(QUEST_GOLD_REWARD);

        let level_up = if self.exp >= self.exp_to_level_up() {
            self.level += 1;
            self.exp = 0;
            Some(self.level)
        } else {
            None
        };

        RewardOutcome {
            exp_gained: exp,
            gold_gained: QUEST_GOLD_REWARD,
            level_up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile() {
        let profile = PlayerProfile::new();
        assert_eq!(profile.level, 1);
        assert_eq!(profile.exp, 0);
        assert_eq!(profile.gold, 0);
        assert_eq!(profile.exp_to_level_up(), 100);
    }

    #[test]
    fn test_reward_below_threshold() {
        let mut profile = PlayerProfile::new();
        let outcome = profile.apply_quest_reward(50);
        assert_eq!(profile.exp, 50);
        assert_eq!(profile.gold, 100);
        assert_eq!(profile.level, 1);
        assert_eq!(outcome.level_up, None);
        assert_eq!(outcome.exp_gained, 50);
        assert_eq!(outcome.gold_gained, 100);
    }

    #[test]
    fn test_reward_reaching_threshold_levels_up() {
        let mut profile = PlayerProfile::new();
        profile.apply_quest_reward(50);
        let outcome = profile.apply_quest_reward(50);
        assert_eq!(profile.level, 2);
        assert_eq!(profile.exp, 0);
        assert_eq!(profile.gold, 200);
        assert_eq!(outcome.level_up, Some(2));
    }

    #[test]
    fn test_large_reward_levels_up_once() {
        let mut profile = PlayerProfile::new();
        let outcome = profile.apply_quest_reward(450);
        assert_eq!(outcome.level_up, Some(2));
        assert_eq!(profile.level, 2);
        assert_eq!(profile.exp, 0);
    }

    #[test]
    fn test_threshold_scales_with_level() {
        let mut profile = PlayerProfile::new();
        profile.apply_quest_reward(100);
        assert_eq!(profile.level, 2);
        profile.apply_quest_reward(150);
        assert_eq!(profile.level, 2);
        assert_eq!(profile.exp, 150);
        profile.apply_quest_reward(50);
        assert_eq!(profile.level, 3);
        assert_eq!(profile.exp, 0);
    }

    #[test]
    fn test_exp_invariant_holds_over_many_rewards() {
        let mut profile = PlayerProfile::new();
        let mut last_gold = 0;
        for exp in [50, 100, 200, 50, 50, 100, 200, 200, 50, 100] {
            profile.apply_quest_reward(exp);
            assert!(profile.level >= 1);
            assert!(profile.exp < profile.exp_to_level_up());
            assert!(profile.gold >= last_gold);
            last_gold = profile.gold;
        }
    }
}
