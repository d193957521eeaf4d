use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::game::difficulty::Difficulty;
use crate::tile::{Tile, TileSequence};

/// 回合结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    Success,
    Failure,
}

/// 回合状态
///
/// `Waiting → Showing → Memorizing → Playing → Finished`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// 等待开始
    #[default]
    Waiting,
    /// 逐张亮牌
    Showing,
    /// 记忆倒计时
    Memorizing,
    /// 玩家按顺序点选
    Playing,
    /// 本局结束
    Finished(RoundOutcome),
}

impl RoundState {
    pub fn is_finished(&self) -> bool {
        matches!(self, RoundState::Finished(_))
    }
}

/// 单局数据
///
/// 不变量：
/// - `sequence` 无重复，长度等于难度牌数
/// - `selections` 始终是 `sequence` 的前缀
/// - `display_order` 是 `0..sequence.len()` 的一个排列，洗牌只改变它
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    difficulty: Difficulty,
    /// 需要复现的顺序
    sequence: TileSequence,
    /// 网格位置 -> `sequence` 下标
    display_order: SmallVec<[usize; 9]>,
    /// 玩家已正确点选的牌
    selections: TileSequence,
    /// 记忆倒计时当前值
    countdown: u32,
}

impl Round {
    /// 创建新一局
    ///
    /// # Panics
    ///
    /// 序列长度与难度不符或存在重复牌时 panic。
    pub fn new(difficulty: Difficulty, sequence: TileSequence) -> Self {
        assert_eq!(
            sequence.len(),
            difficulty.tile_count(),
            "sequence length must match {} tile count",
            difficulty
        );
        assert!(
            sequence
                .iter()
                .enumerate()
                .all(|(i, tile)| !sequence[..i].contains(tile)),
            "sequence must not contain duplicate tiles"
        );
        let display_order = (0..sequence.len()).collect();
        Self {
            difficulty,
            sequence,
            display_order,
            selections: TileSequence::new(),
            countdown: 0,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn sequence(&self) -> &[Tile] {
        &self.sequence
    }

    pub fn selections(&self) -> &[Tile] {
        &self.selections
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub(crate) fn set_countdown(&mut self, value: u32) {
        self.countdown = value;
    }

    /// 下一张应点选的牌；已全部完成时为 `None`
    pub fn expected_next(&self) -> Option<Tile> {
        self.sequence.get(self.selections.len()).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.selections.len() == self.sequence.len()
    }

    /// 牌是否在本局网格上
    pub fn contains(&self, tile: Tile) -> bool {
        self.sequence.contains(&tile)
    }

    pub fn is_selected(&self, tile: Tile) -> bool {
        self.selections.contains(&tile)
    }

    /// 网格位置上的牌
    ///
    /// # Panics
    ///
    /// `slot` 超出网格时 panic。
    pub fn tile_at_slot(&self, slot: usize) -> Tile {
        assert!(
            slot < self.display_order.len(),
            "slot {} out of bounds for {} tiles",
            slot,
            self.display_order.len()
        );
        self.sequence[self.display_order[slot]]
    }

    /// 牌所在的网格位置
    pub fn slot_of(&self, tile: Tile) -> Option<usize> {
        self.display_order
            .iter()
            .position(|&index| self.sequence[index] == tile)
    }

    /// 按网格位置排列的牌面
    pub fn layout(&self) -> Vec<Tile> {
        self.display_order.iter().map(|&i| self.sequence[i]).collect()
    }

    pub fn display_order(&self) -> &[usize] {
        &self.display_order
    }

    /// 打乱牌面位置，答案顺序不变
    ///
    /// 两张及以上时保证新排列与原排列不同。
    pub fn shuffle_display<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let previous = self.display_order.clone();
        self.display_order.shuffle(rng);
        if self.display_order.len() > 1 && self.display_order == previous {
            self.display_order.rotate_left(1);
        }
    }

    /// 记录一次正确点选，返回其序号（从 1 开始）
    pub(crate) fn push_selection(&mut self, tile: Tile) -> usize {
        debug_assert_eq!(self.expected_next(), Some(tile));
        self.selections.push(tile);
        self.selections.len()
    }

    pub(crate) fn clear_selections(&mut self) {
        self.selections.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use smallvec::smallvec;

    fn easy_round() -> Round {
        Round::new(
            Difficulty::Easy,
            smallvec![Tile::Wan(1), Tile::Circle(2), Tile::Fangs(3), Tile::Strip(4)],
        )
    }

    #[test]
    fn test_round_creation() {
        let round = easy_round();
        assert_eq!(round.sequence().len(), 4);
        assert!(round.selections().is_empty());
        assert_eq!(round.expected_next(), Some(Tile::Wan(1)));
        assert_eq!(round.display_order(), &[0, 1, 2, 3]);
        assert_eq!(round.tile_at_slot(2), Tile::Fangs(3));
    }

    #[test]
    #[should_panic(expected = "sequence length")]
    fn test_round_wrong_length() {
        Round::new(Difficulty::Medium, smallvec![Tile::Wan(1)]);
    }

    #[test]
    #[should_panic(expected = "duplicate")]
    fn test_round_duplicates() {
        Round::new(
            Difficulty::Easy,
            smallvec![Tile::Wan(1), Tile::Wan(1), Tile::Wan(2), Tile::Wan(3)],
        );
    }

    #[test]
    fn test_selections_prefix() {
        let mut round = easy_round();
        assert_eq!(round.push_selection(Tile::Wan(1)), 1);
        assert_eq!(round.push_selection(Tile::Circle(2)), 2);
        assert_eq!(round.selections(), &round.sequence()[..2]);
        assert!(round.is_selected(Tile::Wan(1)));
        assert!(!round.is_complete());

        round.clear_selections();
        assert!(round.selections().is_empty());
    }

    #[test]
    fn test_shuffle_keeps_sequence() {
        let mut round = easy_round();
        let sequence = round.sequence().to_vec();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let before = round.display_order().to_vec();
            round.shuffle_display(&mut rng);
            assert_ne!(round.display_order(), before.as_slice());
            assert_eq!(round.sequence(), sequence.as_slice());

            let mut sorted = round.display_order().to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_slot_lookup() {
        let mut round = easy_round();
        round.shuffle_display(&mut StdRng::seed_from_u64(9));
        for slot in 0..4 {
            let tile = round.tile_at_slot(slot);
            assert_eq!(round.slot_of(tile), Some(slot));
        }
        assert_eq!(round.slot_of(Tile::Wan(9)), None);
        assert_eq!(round.layout().len(), 4);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_tile_at_slot_out_of_bounds() {
        easy_round().tile_at_slot(4);
    }
}
