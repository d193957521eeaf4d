use folgend_engine::game::scoring::RoundScore;
use folgend_engine::{Difficulty, ScoringEngine};

#[test]
fn test_base_score_by_difficulty() {
    // 前两局没有连胜加分，只有 10 × 倍率
    for wins in [0, 1, 2] {
        assert_eq!(ScoringEngine::compute_score(Difficulty::Easy, wins), 10);
        assert_eq!(ScoringEngine::compute_score(Difficulty::Medium, wins), 20);
        assert_eq!(ScoringEngine::compute_score(Difficulty::Hard, wins), 30);
    }
}

#[test]
fn test_streak_bonus_starts_at_third_win() {
    assert_eq!(ScoringEngine::streak_bonus(2), 0);
    assert_eq!(ScoringEngine::streak_bonus(3), 5);
    assert_eq!(ScoringEngine::streak_bonus(4), 10);
    assert_eq!(ScoringEngine::streak_bonus(10), 40);

    assert_eq!(ScoringEngine::compute_score(Difficulty::Easy, 1), 10);
    assert_eq!(ScoringEngine::compute_score(Difficulty::Medium, 3), 25);
    assert_eq!(ScoringEngine::compute_score(Difficulty::Hard, 5), 45);
}

#[test]
fn test_breakdown_sums_to_total() {
    let score = ScoringEngine::breakdown(Difficulty::Hard, 4);
    assert_eq!(
        score,
        RoundScore {
            base: 30,
            streak_bonus: 10,
            total: 40,
        }
    );

    for difficulty in Difficulty::all() {
        for wins in 0..20 {
            let score = ScoringEngine::breakdown(difficulty, wins);
            assert_eq!(score.base + score.streak_bonus, score.total);
            assert_eq!(score.total, ScoringEngine::compute_score(difficulty, wins));
        }
    }
}

#[test]
fn test_session_accumulation() {
    // 简单模式连赢 4 局：10 + 10 + 15 + 20
    let session: u32 = (1..=4)
        .map(|wins| ScoringEngine::compute_score(Difficulty::Easy, wins))
        .sum();
    assert_eq!(session, 55);
}

#[test]
fn test_huge_streak_saturates() {
    // 极端连胜数不会溢出
    let score = ScoringEngine::compute_score(Difficulty::Hard, u32::MAX);
    assert_eq!(score, u32::MAX);
}
