//! 错误类型
//!
//! 持久化与配置加载的错误统一在此定义。游戏内的非法输入不走错误通道，
//! 由状态机直接忽略。

use thiserror::Error;

/// 键值存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 底层文件读写失败
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    /// 写入前编码失败
    #[error("store encode error: {0}")]
    Encode(serde_json::Error),
    /// 读取后解码失败
    #[error("store decode error for key `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// 字段取值不合法
    #[error("invalid config: {detail}")]
    Invalid { detail: String },
}

/// 牌 ID 解析错误（格式：`<花色>-<点数>`）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTileError {
    #[error("malformed tile id `{0}`")]
    Format(String),
    #[error("unknown suit `{0}`")]
    Suit(String),
    #[error("rank {rank} out of range for suit `{suit}`")]
    Rank { suit: String, rank: u8 },
}
