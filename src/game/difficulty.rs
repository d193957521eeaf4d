use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::game::constants::COUNTDOWN_START;

/// 难度
///
/// 每个难度对应固定的网格尺寸，牌数 = 行 × 列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// 简单：2×2
    Easy,
    /// 中等：2×3
    Medium,
    /// 困难：3×3
    Hard,
}

impl Difficulty {
    /// 所有难度
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// 网格尺寸 `(行, 列)`
    pub fn grid_size(&self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (2, 2),
            Difficulty::Medium => (2, 3),
            Difficulty::Hard => (3, 3),
        }
    }

    /// 本难度一局的牌数
    pub fn tile_count(&self) -> usize {
        let (rows, columns) = self.grid_size();
        rows * columns
    }

    /// 默认配置下的记忆时长（秒），所有难度相同
    ///
    /// 实际倒计时以 `GameConfig::countdown_start` 为准。
    pub fn memorize_seconds(&self) -> u32 {
        COUNTDOWN_START
    }

    /// 计分倍率
    pub fn multiplier(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// 网格位置 `slot` 对应的 `(行, 列)`，按行优先排列
    ///
    /// # Panics
    ///
    /// `slot` 超出网格时 panic。
    pub fn grid_position(&self, slot: usize) -> (usize, usize) {
        assert!(
            slot < self.tile_count(),
            "slot {} out of bounds for {} grid",
            slot,
            self
        );
        let (_, columns) = self.grid_size();
        (slot / columns, slot % columns)
    }

    /// 持久化使用的原始值
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// 解析原始值；无法识别时返回 `None`
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "Easy" => Some(Difficulty::Easy),
            "Medium" => Some(Difficulty::Medium),
            "Hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// 未知难度字符串按简单难度处理，旧数据不会因此整体解码失败
impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Difficulty::from_raw(&raw).unwrap_or(Difficulty::Easy))
    }
}
