/// 游戏逻辑模块
/// 
/// 包含难度、计分、回合状态机、事件与弹窗配置

pub mod constants;
pub mod difficulty;
pub mod scoring;
pub mod state;
pub mod event;
pub mod game_engine;
pub mod player_callback;
pub mod prompt;
