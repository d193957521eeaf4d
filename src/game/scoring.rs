use crate::game::constants::{BASE_SCORE, STREAK_BONUS_STEP, STREAK_BONUS_THRESHOLD};
use crate::game::difficulty::Difficulty;

/// 单局得分明细
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundScore {
    /// 基础分 × 难度倍率
    pub base: u32,
    /// 连胜加分
    pub streak_bonus: u32,
    pub total: u32,
}

/// 计分引擎
pub struct ScoringEngine;

impl ScoringEngine {
    /// 计算单局得分
    ///
    /// # 参数
    ///
    /// - `difficulty`: 难度
    /// - `consecutive_wins`: 连胜局数（包含本局，即自增后的值）
    ///
    /// # 返回
    ///
    /// `10 × 倍率 + 连胜加分`
    #[inline]
    pub fn compute_score(difficulty: Difficulty, consecutive_wins: u32) -> u32 {
        Self::breakdown(difficulty, consecutive_wins).total
    }

    /// 计算得分明细
    pub fn breakdown(difficulty: Difficulty, consecutive_wins: u32) -> RoundScore {
        let base = BASE_SCORE * difficulty.multiplier();
        let streak_bonus = Self::streak_bonus(consecutive_wins);
        RoundScore {
            base,
            streak_bonus,
            total: base.saturating_add(streak_bonus),
        }
    }

    /// 连胜加分
    ///
    /// 连胜 3 局起，每局加 `(连胜 - 2) × 5`，此前为 0
    #[inline]
    pub fn streak_bonus(consecutive_wins: u32) -> u32 {
        if consecutive_wins >= STREAK_BONUS_THRESHOLD {
            (consecutive_wins - (STREAK_BONUS_THRESHOLD - 1)).saturating_mul(STREAK_BONUS_STEP)
        } else {
            0
        }
    }
}
