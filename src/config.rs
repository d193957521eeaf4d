//! 引擎配置
//!
//! 默认值即线上实际行为：倒计时从 10 开始，数到 5 时洗牌。

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::constants::{COUNTDOWN_START, DEFAULT_TOP_LIMIT, LEADERBOARD_PAGE_LIMIT, SHUFFLE_AT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// 记忆倒计时起始值
    pub countdown_start: u32,
    /// 倒计时到达该值时打乱牌面，0 表示不洗牌
    pub shuffle_at: u32,
    /// `top_scores_default` 的条数
    pub default_top_limit: usize,
    /// 排行榜页面条数
    pub leaderboard_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            countdown_start: COUNTDOWN_START,
            shuffle_at: SHUFFLE_AT,
            default_top_limit: DEFAULT_TOP_LIMIT,
            leaderboard_limit: LEADERBOARD_PAGE_LIMIT,
        }
    }
}

impl GameConfig {
    /// 从 JSON 字符串解析，缺省字段取默认值
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// 校验字段取值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown_start == 0 {
            return Err(ConfigError::Invalid {
                detail: "countdown_start must be positive".to_string(),
            });
        }
        if self.shuffle_at >= self.countdown_start {
            return Err(ConfigError::Invalid {
                detail: format!(
                    "shuffle_at ({}) must be below countdown_start ({})",
                    self.shuffle_at, self.countdown_start
                ),
            });
        }
        Ok(())
    }
}
