/// 持久化模块
/// 
/// 包含键值存储抽象、成绩记录和排行榜服务

pub mod kv;
pub mod record;
pub mod leaderboard;

// 重新导出常用类型
pub use kv::{KeyValueStore, MemoryStore, JsonFileStore};
pub use record::{ScoreRecord, RankedScore, ScoreSummary};
pub use leaderboard::Leaderboard;
