/// Folgend 记忆翻牌游戏引擎
/// 
/// 回合状态机、计分与排行榜持久化；表现层只负责渲染引擎状态与事件

pub mod error;
pub mod config;
pub mod tile;
pub mod game;
pub mod store;

// 重新导出常用类型
pub use error::{StoreError, ConfigError, ParseTileError};
pub use config::GameConfig;
pub use tile::{Tile, Suit, TileCatalog, TileSequence};
pub use game::difficulty::Difficulty;
pub use game::scoring::{ScoringEngine, RoundScore};
pub use game::state::{Round, RoundState, RoundOutcome};
pub use game::event::RoundEvent;
pub use game::game_engine::RoundEngine;
pub use game::player_callback::{PlayerCallback, FnPlayerCallback};
pub use game::prompt::{AlertConfig, AlertAction, AlertActionStyle, ButtonStyle, RoundCommand};
pub use store::{KeyValueStore, MemoryStore, JsonFileStore, Leaderboard, ScoreRecord, RankedScore, ScoreSummary};
