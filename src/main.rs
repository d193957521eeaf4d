//! 可执行文件入口（用于测试和调试）
//!
//! 用示例玩家自动跑几局，成绩写入 `folgend-scores.json`（可用第一个参数指定路径）。
//! 日志级别通过 `RUST_LOG` 控制，默认 `info`。

use folgend_engine::game::player_callback::examples::{PerfectMemoryPlayer, RandomPlayer};
use folgend_engine::{AlertConfig, Difficulty, GameConfig, JsonFileStore, Leaderboard, RoundEngine, RoundOutcome};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "folgend-scores.json".to_string());
    let config = GameConfig::default();
    let mut leaderboard = Leaderboard::with_config(JsonFileStore::open(&path)?, &config);
    let mut engine = RoundEngine::new(config);

    println!("Folgend 引擎测试，成绩文件：{}", path);

    for difficulty in Difficulty::all() {
        // 过目不忘的玩家连赢三局
        let mut player = PerfectMemoryPlayer::new();
        let mut outcome = engine.play_round(difficulty, &mut leaderboard, &mut player);
        for _ in 0..2 {
            if outcome != Some(RoundOutcome::Success) {
                break;
            }
            outcome = engine.play_next_round(&mut leaderboard, &mut player);
        }

        // 随机玩家大概率失败，连胜清零
        let mut guesser = RandomPlayer::new(difficulty.tile_count() as u64);
        let streak_before = leaderboard.consecutive_wins(difficulty);
        if engine.play_round(difficulty, &mut leaderboard, &mut guesser) == Some(RoundOutcome::Failure) {
            println!("{}", AlertConfig::round_failed(streak_before).message);
        }
        engine.reset_round();

        let summary = leaderboard.summary(difficulty);
        println!(
            "[{}] Score: {} | Best: {} | Streak: {}",
            difficulty, summary.session, summary.best, summary.streak
        );
        for entry in leaderboard.leaderboard_page(difficulty).iter().take(3) {
            println!(
                "  #{} {} 分（连胜 {}）",
                entry.rank,
                entry.record.score(),
                entry.record.consecutive_wins()
            );
        }
    }

    Ok(())
}
