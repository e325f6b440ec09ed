//! Full games of the bot against a seeded random opponent.
//!
//! At depth 3 the bot, playing X, cannot lose: an exhaustive walk of every
//! O reply sequence ends in a win or a draw. Seeded random play must
//! therefore never produce an O win.

use rand::{SeedableRng, rngs::StdRng};
use ttt_bot::{Board, MatchStats, Outcome, Player, best_move, random_move};

fn play_one(rng: &mut StdRng) -> Outcome {
    let mut state = Board::new();
    let mut turn = Player::X;

    while !state.winner().is_over() {
        state = match turn {
            Player::X => best_move(&state, turn).state,
            Player::O => random_move(&state, turn, rng),
        };
        turn = turn.opponent();
    }

    state.winner()
}

#[test]
fn bot_never_loses_as_x() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut stats = MatchStats::default();

    for _ in 0..100 {
        let outcome = play_one(&mut rng);
        assert_ne!(outcome, Outcome::Win(Player::O));
        stats.record(outcome, Player::X);
    }

    assert_eq!(stats.total_games, 100);
    assert_eq!(stats.losses, 0);
    assert!(stats.wins > stats.draws, "random play should mostly lose");
}

#[test]
fn games_always_finish_within_nine_moves() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..25 {
        let mut state = Board::new();
        let mut turn = Player::X;
        let mut plies = 0;

        while !state.winner().is_over() {
            state = match turn {
                Player::X => best_move(&state, turn).state,
                Player::O => random_move(&state, turn, &mut rng),
            };
            turn = turn.opponent();
            plies += 1;
            assert!(plies <= 9);
        }

        assert!(state.winner().is_over());
    }
}
