use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::StoreError;
use crate::game::constants::{CONSECUTIVE_WINS_KEY_PREFIX, SCORES_KEY};
use crate::game::difficulty::Difficulty;
use crate::store::kv::KeyValueStore;
use crate::store::record::{RankedScore, ScoreRecord, ScoreSummary};

/// 排行榜服务
///
/// 管理三类数据：
/// - 成绩历史：持久化，只追加
/// - 连胜计数：持久化，按难度
/// - 会话累计分：仅内存，按难度，构造时为 0
///
/// 持久化是尽力而为的：读失败视为空数据，写失败记录日志后丢弃，游戏照常进行。
#[derive(Debug)]
pub struct Leaderboard<S: KeyValueStore> {
    store: S,
    session_scores: HashMap<Difficulty, u32>,
    default_top_limit: usize,
    page_limit: usize,
}

impl<S: KeyValueStore> Leaderboard<S> {
    /// 使用默认配置创建
    pub fn new(store: S) -> Self {
        Self::with_config(store, &GameConfig::default())
    }

    pub fn with_config(store: S, config: &GameConfig) -> Self {
        Self {
            store,
            session_scores: HashMap::new(),
            default_top_limit: config.default_top_limit,
            page_limit: config.leaderboard_limit,
        }
    }

    /// 底层存储
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ---- 成绩历史 ----

    /// 追加一条成绩记录
    pub fn save_score(&mut self, record: ScoreRecord) {
        let mut scores = self.all_scores();
        scores.push(record);

        let encoded = match serde_json::to_string(&scores) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %StoreError::Encode(err), "dropping score record");
                return;
            }
        };
        match self.store.set(SCORES_KEY, encoded) {
            Ok(()) => debug!(total = scores.len(), "score history saved"),
            Err(err) => warn!(error = %err, "failed to persist score history"),
        }
    }

    /// 全部成绩（插入顺序）
    ///
    /// 存储不可读或任意一条记录解码失败时，整个历史视为空。
    pub fn all_scores(&self) -> Vec<ScoreRecord> {
        let raw = match self.store.get(SCORES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "score history unavailable, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(scores) => scores,
            Err(source) => {
                let err = StoreError::Decode {
                    key: SCORES_KEY.to_string(),
                    source,
                };
                warn!(error = %err, "score history corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    /// 指定难度的最高成绩
    ///
    /// 只包含分数大于 0 的记录，按分数降序；同分保持插入顺序。
    pub fn top_scores(&self, difficulty: Difficulty, limit: usize) -> Vec<ScoreRecord> {
        let mut scores: Vec<ScoreRecord> = self
            .all_scores()
            .into_iter()
            .filter(|r| r.difficulty() == difficulty && r.score() > 0)
            .collect();
        // sort_by 是稳定排序
        scores.sort_by(|a, b| b.score().cmp(&a.score()));
        scores.truncate(limit);
        scores
    }

    /// 按默认条数查询最高成绩
    pub fn top_scores_default(&self, difficulty: Difficulty) -> Vec<ScoreRecord> {
        self.top_scores(difficulty, self.default_top_limit)
    }

    /// 排行榜页面数据（带名次）
    pub fn leaderboard_page(&self, difficulty: Difficulty) -> Vec<RankedScore> {
        self.top_scores(difficulty, self.page_limit)
            .into_iter()
            .enumerate()
            .map(|(i, record)| RankedScore { rank: i + 1, record })
            .collect()
    }

    /// 最高分；没有记录时为 0
    pub fn best_score(&self, difficulty: Difficulty) -> u32 {
        self.top_scores(difficulty, 1)
            .first()
            .map(ScoreRecord::score)
            .unwrap_or(0)
    }

    // ---- 连胜计数 ----

    fn wins_key(difficulty: Difficulty) -> String {
        format!("{}_{}", CONSECUTIVE_WINS_KEY_PREFIX, difficulty.as_str())
    }

    /// 连胜局数，默认 0
    pub fn consecutive_wins(&self, difficulty: Difficulty) -> u32 {
        let key = Self::wins_key(difficulty);
        match self.store.get(&key) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(key = %key, value = %raw, "unreadable win counter, treating as 0");
                0
            }),
            Ok(None) => 0,
            Err(err) => {
                warn!(key = %key, error = %err, "win counter unavailable, treating as 0");
                0
            }
        }
    }

    /// 连胜 +1
    pub fn increment_consecutive_wins(&mut self, difficulty: Difficulty) {
        let next = self.consecutive_wins(difficulty).saturating_add(1);
        self.write_wins(difficulty, next);
    }

    /// 连胜清零
    pub fn reset_consecutive_wins(&mut self, difficulty: Difficulty) {
        self.write_wins(difficulty, 0);
    }

    fn write_wins(&mut self, difficulty: Difficulty, value: u32) {
        let key = Self::wins_key(difficulty);
        if let Err(err) = self.store.set(&key, value.to_string()) {
            warn!(key = %key, error = %err, "failed to persist win counter");
        }
    }

    // ---- 会话累计分 ----

    pub fn current_session_score(&self, difficulty: Difficulty) -> u32 {
        self.session_scores.get(&difficulty).copied().unwrap_or(0)
    }

    pub fn add_to_session_score(&mut self, difficulty: Difficulty, points: u32) {
        let entry = self.session_scores.entry(difficulty).or_insert(0);
        *entry = entry.saturating_add(points);
    }

    pub fn reset_session_score(&mut self, difficulty: Difficulty) {
        self.session_scores.insert(difficulty, 0);
    }

    /// 计分栏摘要
    pub fn summary(&self, difficulty: Difficulty) -> ScoreSummary {
        ScoreSummary {
            session: self.current_session_score(difficulty),
            best: self.best_score(difficulty),
            streak: self.consecutive_wins(difficulty),
        }
    }

    /// 记录一局胜利：连胜 +1、累计得分、写入成绩
    ///
    /// 返回写入的记录和本局得分
    pub(crate) fn record_win(&mut self, difficulty: Difficulty, points_for: impl FnOnce(u32) -> u32) -> (ScoreRecord, u32) {
        let wins = self.consecutive_wins(difficulty).saturating_add(1);
        self.write_wins(difficulty, wins);

        let points = points_for(wins);
        self.add_to_session_score(difficulty, points);

        let record = ScoreRecord::new(difficulty, self.current_session_score(difficulty), wins);
        self.save_score(record.clone());
        info!(
            difficulty = %difficulty,
            points,
            session = record.score(),
            streak = wins,
            "round won"
        );
        (record, points)
    }

    /// 记录一局失败：连胜与会话分清零，不写成绩
    ///
    /// 返回清零前的连胜数
    pub(crate) fn record_loss(&mut self, difficulty: Difficulty) -> u32 {
        let streak = self.consecutive_wins(difficulty);
        self.reset_consecutive_wins(difficulty);
        self.reset_session_score(difficulty);
        info!(difficulty = %difficulty, final_streak = streak, "round lost");
        streak
    }
}
