use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::game::difficulty::Difficulty;

/// 成绩记录
///
/// 只在回合成功后创建，`score` 为截至本局的会话累计分。创建后不可修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    difficulty: Difficulty,
    score: u32,
    /// Unix 时间戳（秒）
    #[serde(with = "time::serde::timestamp")]
    timestamp: OffsetDateTime,
    /// 旧数据可能缺少该字段
    #[serde(default)]
    consecutive_wins: u32,
}

impl ScoreRecord {
    /// 以当前时间创建记录
    pub fn new(difficulty: Difficulty, score: u32, consecutive_wins: u32) -> Self {
        Self::with_timestamp(difficulty, score, consecutive_wins, OffsetDateTime::now_utc())
    }

    pub fn with_timestamp(
        difficulty: Difficulty,
        score: u32,
        consecutive_wins: u32,
        timestamp: OffsetDateTime,
    ) -> Self {
        // 持久化精度为秒
        let timestamp = timestamp.replace_nanosecond(0).unwrap_or(timestamp);
        Self {
            difficulty,
            score,
            timestamp,
            consecutive_wins,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    pub fn consecutive_wins(&self) -> u32 {
        self.consecutive_wins
    }
}

/// 排行榜条目（名次从 1 开始）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedScore {
    pub rank: usize,
    pub record: ScoreRecord,
}

/// 计分栏摘要：本次会话分、最高分、连胜
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreSummary {
    pub session: u32,
    pub best: u32,
    pub streak: u32,
}
