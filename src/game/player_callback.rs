use crate::game::event::RoundEvent;
use crate::game::game_engine::RoundEngine;
use crate::tile::Tile;

/// 示例玩家
///
/// 用于演示程序和端到端测试
pub mod examples {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// 过目不忘的玩家
    ///
    /// 通过亮牌事件记住顺序，之后按顺序点选
    #[derive(Debug, Default)]
    pub struct PerfectMemoryPlayer {
        remembered: Vec<Tile>,
    }

    impl PerfectMemoryPlayer {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl PlayerCallback for PerfectMemoryPlayer {
        fn choose_tile(&mut self, engine: &RoundEngine) -> Option<Tile> {
            self.remembered.get(engine.selections().len()).copied()
        }

        fn on_event(&mut self, event: &RoundEvent) {
            match event {
                RoundEvent::RoundStarted { .. } => self.remembered.clear(),
                RoundEvent::RevealStep { tile, .. } => self.remembered.push(*tile),
                _ => {}
            }
        }
    }

    /// 随机点选的玩家（用于测试失败路径）
    ///
    /// 每次从网格上尚未选过的牌中随机挑一张
    #[derive(Debug)]
    pub struct RandomPlayer {
        rng: StdRng,
    }

    impl RandomPlayer {
        pub fn new(seed: u64) -> Self {
            Self {
                rng: StdRng::seed_from_u64(seed),
            }
        }
    }

    impl PlayerCallback for RandomPlayer {
        fn choose_tile(&mut self, engine: &RoundEngine) -> Option<Tile> {
            let candidates: Vec<Tile> = engine
                .layout()
                .into_iter()
                .filter(|tile| !engine.selections().contains(tile))
                .collect();
            candidates.choose(&mut self.rng).copied()
        }
    }
}

/// 玩家回调 trait
///
/// 自动驱动一局时，引擎通过它获取玩家的点选并通知事件
pub trait PlayerCallback {
    /// 根据当前局面返回要点选的牌
    ///
    /// # 返回
    ///
    /// `None` 表示玩家放弃本局
    fn choose_tile(&mut self, engine: &RoundEngine) -> Option<Tile>;

    /// 接收引擎事件，默认忽略
    fn on_event(&mut self, _event: &RoundEvent) {}
}

/// 函数式回调适配器
///
/// 将函数转换为 PlayerCallback trait
pub struct FnPlayerCallback<F> {
    callback: F,
}

impl<F> FnPlayerCallback<F>
where
    F: FnMut(&RoundEngine) -> Option<Tile>,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> PlayerCallback for FnPlayerCallback<F>
where
    F: FnMut(&RoundEngine) -> Option<Tile>,
{
    fn choose_tile(&mut self, engine: &RoundEngine) -> Option<Tile> {
        (self.callback)(engine)
    }
}
