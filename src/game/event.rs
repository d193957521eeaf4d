use crate::game::difficulty::Difficulty;
use crate::game::state::RoundOutcome;
use crate::store::record::ScoreRecord;
use crate::tile::Tile;

/// 状态机对外发出的事件
///
/// 每个入口方法按发生顺序返回本次产生的事件，表现层据此播放动画。
/// 被忽略的输入不产生任何事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// 新一局开始
    RoundStarted { difficulty: Difficulty, tile_count: usize },
    /// 亮出第 `index` 张牌（从 0 开始，按答案顺序）
    RevealStep { index: usize, tile: Tile },
    /// 倒计时变化
    CountdownChanged { value: u32 },
    /// 牌面位置已打乱
    ShuffleTriggered,
    /// 进入点选阶段
    PlayingStarted,
    /// 点选正确，`position` 从 1 开始
    SelectionCorrect { position: usize, tile: Tile },
    /// 点选错误
    SelectionWrong { expected: Tile, selected: Tile },
    /// 本局结束
    ///
    /// `streak`：成功时为本局后的连胜数，失败时为被清零前的连胜数
    RoundFinished { outcome: RoundOutcome, streak: u32 },
    /// 成绩已写入，`points` 为本局得分
    ScoreSaved { record: ScoreRecord, points: u32 },
}
