/// 牌相关模块
/// 
/// 包含牌（Tile）与牌目录（TileCatalog）的实现

pub mod tile;
pub mod catalog;

// 重新导出常用类型
pub use tile::{Tile, Suit};
pub use catalog::{TileCatalog, TileSequence, create_all_tiles};
