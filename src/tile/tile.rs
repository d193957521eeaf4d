use std::fmt;
use std::str::FromStr;

use crate::error::ParseTileError;

/// 麻将牌
///
/// 记忆游戏使用 35 张各不相同的牌：筒、万、条各 9 张（1-9），风牌 8 张（1-8）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Tile {
    /// 筒子（1-9）
    Circle(u8),
    /// 万子（1-9）
    Wan(u8),
    /// 条子（1-9）
    Strip(u8),
    /// 风牌（1-8）
    Fangs(u8),
}

impl Tile {
    /// 总牌数：35 张
    pub const TOTAL_COUNT: usize = 35;

    pub const MIN_RANK: u8 = 1;

    /// 创建一张牌，验证点数范围
    pub fn new(suit: Suit, rank: u8) -> Option<Self> {
        if rank < Self::MIN_RANK || rank > suit.max_rank() {
            return None;
        }
        Some(match suit {
            Suit::Circle => Tile::Circle(rank),
            Suit::Wan => Tile::Wan(rank),
            Suit::Strip => Tile::Strip(rank),
            Suit::Fangs => Tile::Fangs(rank),
        })
    }

    /// 获取花色
    pub fn suit(&self) -> Suit {
        match self {
            Tile::Circle(_) => Suit::Circle,
            Tile::Wan(_) => Suit::Wan,
            Tile::Strip(_) => Suit::Strip,
            Tile::Fangs(_) => Suit::Fangs,
        }
    }

    /// 获取点数
    pub fn rank(&self) -> u8 {
        match self {
            Tile::Circle(r) | Tile::Wan(r) | Tile::Strip(r) | Tile::Fangs(r) => *r,
        }
    }

    /// 牌的唯一 ID，如 `circle-3`
    pub fn id(&self) -> String {
        format!("{}-{}", self.suit().as_str(), self.rank())
    }

    /// 资源图片名，如 `folgend-fangs-2`
    pub fn image_name(&self) -> String {
        format!("folgend-{}", self.id())
    }

    /// 转换为 0-34 的紧凑索引
    ///
    /// 映射规则（与目录生成顺序一致）：
    /// - 筒子：0-8
    /// - 万子：9-17
    /// - 条子：18-26
    /// - 风牌：27-34
    pub fn to_index(&self) -> u8 {
        self.suit() as u8 * 9 + (self.rank() - 1)
    }

    /// 从紧凑索引创建牌
    pub fn from_index(index: u8) -> Option<Self> {
        if index as usize >= Self::TOTAL_COUNT {
            return None;
        }
        let suit = Suit::all()[(index / 9) as usize];
        Tile::new(suit, index % 9 + 1)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit().as_str(), self.rank())
    }
}

impl FromStr for Tile {
    type Err = ParseTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit_str, rank_str) = s
            .split_once('-')
            .ok_or_else(|| ParseTileError::Format(s.to_string()))?;
        let suit: Suit = suit_str.parse()?;
        let rank: u8 = rank_str
            .parse()
            .map_err(|_| ParseTileError::Format(s.to_string()))?;
        Tile::new(suit, rank).ok_or_else(|| ParseTileError::Rank {
            suit: suit_str.to_string(),
            rank,
        })
    }
}

/// 花色枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Suit {
    Circle = 0,
    Wan = 1,
    Strip = 2,
    Fangs = 3,
}

impl Suit {
    /// 所有花色（按目录生成顺序）
    pub fn all() -> [Suit; 4] {
        [Suit::Circle, Suit::Wan, Suit::Strip, Suit::Fangs]
    }

    /// 该花色的最大点数
    pub fn max_rank(&self) -> u8 {
        match self {
            Suit::Fangs => 8,
            _ => 9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Circle => "circle",
            Suit::Wan => "wan",
            Suit::Strip => "strip",
            Suit::Fangs => "fangs",
        }
    }
}

impl FromStr for Suit {
    type Err = ParseTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Suit::Circle),
            "wan" => Ok(Suit::Wan),
            "strip" => Ok(Suit::Strip),
            "fangs" => Ok(Suit::Fangs),
            other => Err(ParseTileError::Suit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_creation() {
        let tile = Tile::new(Suit::Wan, 1).unwrap();
        assert_eq!(tile.suit(), Suit::Wan);
        assert_eq!(tile.rank(), 1);

        let tile = Tile::new(Suit::Circle, 9).unwrap();
        assert_eq!(tile.suit(), Suit::Circle);
        assert_eq!(tile.rank(), 9);

        // 无效的点数
        assert!(Tile::new(Suit::Wan, 0).is_none());
        assert!(Tile::new(Suit::Wan, 10).is_none());
        // 风牌只有 1-8
        assert!(Tile::new(Suit::Fangs, 8).is_some());
        assert!(Tile::new(Suit::Fangs, 9).is_none());
    }

    #[test]
    fn test_tile_id_and_image_name() {
        assert_eq!(Tile::Circle(3).id(), "circle-3");
        assert_eq!(Tile::Fangs(8).id(), "fangs-8");
        assert_eq!(Tile::Strip(1).image_name(), "folgend-strip-1");
        assert_eq!(Tile::Fangs(2).image_name(), "folgend-fangs-2");
        assert_eq!(Tile::Wan(5).to_string(), Tile::Wan(5).id());
    }

    #[test]
    fn test_tile_parse() {
        assert_eq!("wan-7".parse::<Tile>(), Ok(Tile::Wan(7)));
        assert_eq!("fangs-1".parse::<Tile>(), Ok(Tile::Fangs(1)));

        assert!(matches!("wan7".parse::<Tile>(), Err(ParseTileError::Format(_))));
        assert!(matches!("dragon-1".parse::<Tile>(), Err(ParseTileError::Suit(_))));
        assert!(matches!(
            "fangs-9".parse::<Tile>(),
            Err(ParseTileError::Rank { rank: 9, .. })
        ));
        assert!(matches!("circle-x".parse::<Tile>(), Err(ParseTileError::Format(_))));
    }

    #[test]
    fn test_tile_index_conversion() {
        assert_eq!(Tile::Circle(1).to_index(), 0);
        assert_eq!(Tile::Wan(1).to_index(), 9);
        assert_eq!(Tile::Strip(9).to_index(), 26);
        assert_eq!(Tile::Fangs(8).to_index(), 34);

        for index in 0..Tile::TOTAL_COUNT as u8 {
            let tile = Tile::from_index(index).unwrap();
            assert_eq!(tile.to_index(), index);
        }
        assert!(Tile::from_index(35).is_none());
    }
}
