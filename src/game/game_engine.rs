use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::GameConfig;
use crate::error::ParseTileError;
use crate::game::difficulty::Difficulty;
use crate::game::event::RoundEvent;
use crate::game::player_callback::PlayerCallback;
use crate::game::prompt::RoundCommand;
use crate::game::scoring::ScoringEngine;
use crate::game::state::{Round, RoundOutcome, RoundState};
use crate::store::kv::KeyValueStore;
use crate::store::leaderboard::Leaderboard;
use crate::tile::{Tile, TileCatalog};

/// 回合引擎
///
/// 驱动一局游戏的完整生命周期。引擎本身不计时，倒计时完全由外部的 `tick()` 推进。
/// 排行榜服务由调用方持有，需要时以 `&mut` 传入。
#[derive(Debug, Clone)]
pub struct RoundEngine {
    config: GameConfig,
    catalog: TileCatalog,
    rng: StdRng,
    state: RoundState,
    round: Option<Round>,
}

impl RoundEngine {
    /// 创建引擎，随机源取自系统熵
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// 使用固定种子创建引擎（可复现）
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            config,
            catalog: TileCatalog::new(),
            rng,
            state: RoundState::Waiting,
            round: None,
        }
    }

    // ---- 查询 ----

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// 当前一局的难度
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.round.as_ref().map(Round::difficulty)
    }

    /// 答案顺序；没有进行中的一局时为空
    pub fn sequence(&self) -> &[Tile] {
        self.round.as_ref().map(Round::sequence).unwrap_or(&[])
    }

    pub fn selections(&self) -> &[Tile] {
        self.round.as_ref().map(Round::selections).unwrap_or(&[])
    }

    pub fn countdown(&self) -> u32 {
        self.round.as_ref().map(Round::countdown).unwrap_or(0)
    }

    /// 按网格位置排列的牌面
    pub fn layout(&self) -> Vec<Tile> {
        self.round.as_ref().map(Round::layout).unwrap_or_default()
    }

    /// 是否接受点选
    pub fn is_interaction_enabled(&self) -> bool {
        self.state == RoundState::Playing
    }

    // ---- 入口 ----

    /// 开始新的一局（新会话）
    ///
    /// 任何状态下都可调用，进行中的一局直接丢弃。该难度的会话累计分清零，
    /// 持久化的连胜计数保持不变。
    pub fn start_round<S: KeyValueStore>(
        &mut self,
        difficulty: Difficulty,
        leaderboard: &mut Leaderboard<S>,
    ) -> Vec<RoundEvent> {
        leaderboard.reset_session_score(difficulty);
        self.begin_round(difficulty)
    }

    /// 成功后继续下一局，会话累计分保留
    ///
    /// 仅在上一局成功结束后有效，否则忽略。
    pub fn start_next_round(&mut self) -> Vec<RoundEvent> {
        match (self.state, self.difficulty()) {
            (RoundState::Finished(RoundOutcome::Success), Some(difficulty)) => self.begin_round(difficulty),
            _ => Vec::new(),
        }
    }

    fn begin_round(&mut self, difficulty: Difficulty) -> Vec<RoundEvent> {
        let sequence = self
            .catalog
            .draw_random_subset(difficulty.tile_count(), &mut self.rng);
        let round = Round::new(difficulty, sequence);

        let mut events = Vec::with_capacity(round.sequence().len() + 1);
        events.push(RoundEvent::RoundStarted {
            difficulty,
            tile_count: round.sequence().len(),
        });
        events.extend(
            round
                .sequence()
                .iter()
                .enumerate()
                .map(|(index, &tile)| RoundEvent::RevealStep { index, tile }),
        );

        debug!(difficulty = %difficulty, tiles = round.sequence().len(), "round started");
        self.round = Some(round);
        self.state = RoundState::Showing;
        events
    }

    /// 表现层通知亮牌完成，进入记忆倒计时
    pub fn finish_reveal(&mut self) -> Vec<RoundEvent> {
        if self.state != RoundState::Showing {
            return Vec::new();
        }
        let start = self.config.countdown_start;
        if let Some(round) = self.round.as_mut() {
            round.set_countdown(start);
        }
        self.state = RoundState::Memorizing;
        debug!(countdown = start, "memorizing");
        vec![RoundEvent::CountdownChanged { value: start }]
    }

    /// 倒计时推进一格
    ///
    /// 到达洗牌点时打乱牌面，归零时进入点选阶段。非记忆阶段的 tick 忽略。
    pub fn tick(&mut self) -> Vec<RoundEvent> {
        if self.state != RoundState::Memorizing {
            return Vec::new();
        }
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };

        let value = round.countdown().saturating_sub(1);
        round.set_countdown(value);
        let mut events = vec![RoundEvent::CountdownChanged { value }];

        // shuffle_at 为 0 时不洗牌
        if value == 0 {
            round.clear_selections();
            self.state = RoundState::Playing;
            debug!("playing");
            events.push(RoundEvent::PlayingStarted);
        } else if value == self.config.shuffle_at {
            round.shuffle_display(&mut self.rng);
            debug!(layout = ?round.display_order(), "tiles shuffled");
            events.push(RoundEvent::ShuffleTriggered);
        }
        events
    }

    /// 玩家点选一张牌
    ///
    /// 以下情况忽略（不改变状态、不产生事件）：
    /// - 不在点选阶段
    /// - 牌不在本局网格上
    /// - 牌已被选过
    pub fn select_tile<S: KeyValueStore>(
        &mut self,
        tile: Tile,
        leaderboard: &mut Leaderboard<S>,
    ) -> Vec<RoundEvent> {
        if self.state != RoundState::Playing {
            return Vec::new();
        }
        let Some(round) = self.round.as_mut() else {
            return Vec::new();
        };
        if !round.contains(tile) || round.is_selected(tile) {
            return Vec::new();
        }
        let Some(expected) = round.expected_next() else {
            return Vec::new();
        };
        let difficulty = round.difficulty();

        if tile != expected {
            debug!(expected = %expected, selected = %tile, "wrong selection");
            let streak = leaderboard.record_loss(difficulty);
            self.state = RoundState::Finished(RoundOutcome::Failure);
            return vec![
                RoundEvent::SelectionWrong { expected, selected: tile },
                RoundEvent::RoundFinished {
                    outcome: RoundOutcome::Failure,
                    streak,
                },
            ];
        }

        let position = round.push_selection(tile);
        let mut events = vec![RoundEvent::SelectionCorrect { position, tile }];
        if !round.is_complete() {
            return events;
        }

        self.state = RoundState::Finished(RoundOutcome::Success);
        let (record, points) =
            leaderboard.record_win(difficulty, |wins| ScoringEngine::compute_score(difficulty, wins));
        events.push(RoundEvent::RoundFinished {
            outcome: RoundOutcome::Success,
            streak: record.consecutive_wins(),
        });
        events.push(RoundEvent::ScoreSaved { record, points });
        events
    }

    /// 按牌 ID 点选，如 `"wan-3"`
    pub fn select_tile_id<S: KeyValueStore>(
        &mut self,
        tile_id: &str,
        leaderboard: &mut Leaderboard<S>,
    ) -> Result<Vec<RoundEvent>, ParseTileError> {
        let tile: Tile = tile_id.parse()?;
        Ok(self.select_tile(tile, leaderboard))
    }

    /// 按网格位置点选
    ///
    /// # Panics
    ///
    /// 有进行中的一局且 `slot` 超出网格时 panic。
    pub fn select_slot<S: KeyValueStore>(
        &mut self,
        slot: usize,
        leaderboard: &mut Leaderboard<S>,
    ) -> Vec<RoundEvent> {
        match self.round.as_ref().map(|round| round.tile_at_slot(slot)) {
            Some(tile) => self.select_tile(tile, leaderboard),
            None => Vec::new(),
        }
    }

    /// 放弃当前一局，回到等待状态
    ///
    /// 幂等，不触碰排行榜。
    pub fn reset_round(&mut self) {
        if self.state != RoundState::Waiting {
            debug!(from = ?self.state, "round reset");
        }
        self.round = None;
        self.state = RoundState::Waiting;
    }

    /// 执行弹窗按钮对应的命令
    pub fn apply_command(&mut self, command: RoundCommand) -> Vec<RoundEvent> {
        match command {
            RoundCommand::Reset | RoundCommand::Exit => {
                self.reset_round();
                Vec::new()
            }
            RoundCommand::StartNextRound => self.start_next_round(),
        }
    }

    // ---- 自动驱动 ----

    /// 开始新会话并自动跑完一局
    ///
    /// 返回本局结果；玩家中途放弃时返回 `None`，此时引擎已重置。
    pub fn play_round<S, C>(
        &mut self,
        difficulty: Difficulty,
        leaderboard: &mut Leaderboard<S>,
        callback: &mut C,
    ) -> Option<RoundOutcome>
    where
        S: KeyValueStore,
        C: PlayerCallback + ?Sized,
    {
        let events = self.start_round(difficulty, leaderboard);
        self.drive(events, leaderboard, callback)
    }

    /// 在上一局成功的基础上自动跑下一局
    ///
    /// 上一局不是成功结束时返回 `None`，不改变状态。
    pub fn play_next_round<S, C>(
        &mut self,
        leaderboard: &mut Leaderboard<S>,
        callback: &mut C,
    ) -> Option<RoundOutcome>
    where
        S: KeyValueStore,
        C: PlayerCallback + ?Sized,
    {
        let events = self.start_next_round();
        if events.is_empty() {
            return None;
        }
        self.drive(events, leaderboard, callback)
    }

    fn drive<S, C>(
        &mut self,
        events: Vec<RoundEvent>,
        leaderboard: &mut Leaderboard<S>,
        callback: &mut C,
    ) -> Option<RoundOutcome>
    where
        S: KeyValueStore,
        C: PlayerCallback + ?Sized,
    {
        notify(callback, &events);
        notify(callback, &self.finish_reveal());
        while self.state == RoundState::Memorizing {
            let events = self.tick();
            notify(callback, &events);
        }

        // 每次有效点选都会推进或结束本局，被忽略的点选计入上限防止死循环
        let max_attempts = self.sequence().len() * 4;
        for _ in 0..max_attempts {
            if let RoundState::Finished(outcome) = self.state {
                return Some(outcome);
            }
            let Some(tile) = callback.choose_tile(self) else {
                break;
            };
            let events = self.select_tile(tile, leaderboard);
            notify(callback, &events);
        }

        if let RoundState::Finished(outcome) = self.state {
            return Some(outcome);
        }
        self.reset_round();
        None
    }
}

fn notify<C: PlayerCallback + ?Sized>(callback: &mut C, events: &[RoundEvent]) {
    for event in events {
        callback.on_event(event);
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
