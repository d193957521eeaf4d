use super::tile::{Suit, Tile};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// 单局牌序列（最多 9 张，困难模式 3×3）
pub type TileSequence = SmallVec<[Tile; 9]>;

/// 牌目录
///
/// 固定的 35 张牌全集，按 筒 1-9、万 1-9、条 1-9、风 1-8 的顺序生成。
/// 目录本身无状态，随机性由调用方传入。
#[derive(Debug, Clone)]
pub struct TileCatalog {
    tiles: Box<[Tile]>,
}

impl TileCatalog {
    /// 创建完整目录（35 张）
    pub fn new() -> Self {
        Self {
            tiles: create_all_tiles().into_boxed_slice(),
        }
    }

    /// 目录中的全部牌（生成顺序）
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// 随机抽取 `count` 张不重复的牌
    ///
    /// 对完整目录做一次 Fisher-Yates 洗牌，然后取前 `count` 张。
    ///
    /// # Panics
    ///
    /// `count` 超过目录大小（35）时 panic，属于调用方的编程错误。
    pub fn draw_random_subset<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> TileSequence {
        assert!(
            count <= self.tiles.len(),
            "cannot draw {} tiles from a catalog of {}",
            count,
            self.tiles.len()
        );
        let mut shuffled = self.tiles.to_vec();
        shuffled.shuffle(rng);
        shuffled.into_iter().take(count).collect()
    }
}

impl Default for TileCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// 按固定顺序生成全部 35 张牌
pub fn create_all_tiles() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(Tile::TOTAL_COUNT);
    for suit in Suit::all() {
        for rank in Tile::MIN_RANK..=suit.max_rank() {
            if let Some(tile) = Tile::new(suit, rank) {
                tiles.push(tile);
            }
        }
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_creation() {
        let catalog = TileCatalog::new();
        assert_eq!(catalog.len(), Tile::TOTAL_COUNT);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_order() {
        let tiles = create_all_tiles();
        assert_eq!(tiles[0], Tile::Circle(1));
        assert_eq!(tiles[8], Tile::Circle(9));
        assert_eq!(tiles[9], Tile::Wan(1));
        assert_eq!(tiles[18], Tile::Strip(1));
        assert_eq!(tiles[27], Tile::Fangs(1));
        assert_eq!(tiles[34], Tile::Fangs(8));

        // 生成顺序与紧凑索引一致
        for (i, tile) in tiles.iter().enumerate() {
            assert_eq!(tile.to_index() as usize, i);
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<String> = create_all_tiles().iter().map(|t| t.id()).collect();
        assert_eq!(ids.len(), Tile::TOTAL_COUNT);
    }

    #[test]
    fn test_draw_subset() {
        let catalog = TileCatalog::new();
        let mut rng = StdRng::seed_from_u64(7);

        for count in [0, 4, 6, 9, 35] {
            let drawn = catalog.draw_random_subset(count, &mut rng);
            assert_eq!(drawn.len(), count);
            let unique: HashSet<Tile> = drawn.iter().copied().collect();
            assert_eq!(unique.len(), count);
        }
    }

    #[test]
    fn test_draw_deterministic_with_seed() {
        let catalog = TileCatalog::new();
        let a = catalog.draw_random_subset(9, &mut StdRng::seed_from_u64(42));
        let b = catalog.draw_random_subset(9, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "cannot draw 36 tiles")]
    fn test_draw_too_many_panics() {
        let catalog = TileCatalog::new();
        let mut rng = StdRng::seed_from_u64(1);
        catalog.draw_random_subset(36, &mut rng);
    }
}
