/// 游戏常量定义
///
/// 集中管理所有魔法数字，提高代码可维护性

/// 记忆倒计时起始值（秒）
///
/// 所有难度相同。"玩法说明"中按难度区分的 10/8/6 秒并未实际生效。
pub const COUNTDOWN_START: u32 = 10;

/// 倒计时到达该值时打乱牌面位置
pub const SHUFFLE_AT: u32 = 5;

/// 单局基础得分
pub const BASE_SCORE: u32 = 10;

/// 连胜达到该局数后开始加分
pub const STREAK_BONUS_THRESHOLD: u32 = 3;

/// 连胜每多一局的加分
pub const STREAK_BONUS_STEP: u32 = 5;

/// 排行榜查询默认条数
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// 排行榜页面展示条数
pub const LEADERBOARD_PAGE_LIMIT: usize = 20;

/// 持久化键：成绩历史
pub const SCORES_KEY: &str = "scores";

/// 持久化键前缀：按难度的连胜计数（`consecutiveWins_<难度>`）
pub const CONSECUTIVE_WINS_KEY_PREFIX: &str = "consecutiveWins";
