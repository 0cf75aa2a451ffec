//! Tests for the minimax oracle.

use rayon::prelude::*;
use std::collections::HashSet;
use strictly_nxn::{
    Engine, GameError, GameState, Model, Move, Outcome, Player, SearchConfig, find_best_move,
    game_outcome, game_over, minimax, move_generator, search,
};

fn play(first: Player, cells: &[(usize, usize)]) -> GameState {
    let moves: Vec<_> = cells.iter().map(|&(r, c)| Move::new(r, c)).collect();
    GameState::replay(first, 3, &moves).unwrap()
}

/// Every distinct undecided 3×3 state reachable from `first` opening.
fn reachable_undecided(first: Player) -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut frontier = vec![GameState::new(first, 3)];
    let mut result = Vec::new();

    while let Some(game) = frontier.pop() {
        if !seen.insert(game.clone()) || game_over(&game) {
            continue;
        }
        for mv in move_generator(&game) {
            frontier.push(game.apply(mv).unwrap());
        }
        result.push(game);
    }
    result
}

#[test]
fn test_reachable_state_count() {
    // Counting the empty board. Boards whose every line is dead end as
    // draws early, so 40 positions of classic play never arise.
    assert_eq!(reachable_undecided(Player::Cross).len(), 4480);
}

#[test]
fn test_pruning_agrees_with_minimax_everywhere() {
    let plain = SearchConfig::new();
    let pruned = SearchConfig::new().with_pruning(true);

    let mismatches: Vec<_> = reachable_undecided(Player::Cross)
        .into_par_iter()
        .filter_map(|game| {
            let expected = search(&game, game.turn(), &plain).unwrap();
            let actual = search(&game, game.turn(), &pruned).unwrap();
            let same = expected.best_move == actual.best_move && expected.score == actual.score;
            (!same).then(|| (game.render(), expected, actual))
        })
        .collect();

    assert!(mismatches.is_empty(), "mismatches: {:?}", mismatches);
}

#[test]
fn test_best_move_is_legal_and_consistent() {
    let pruned = SearchConfig::new().with_pruning(true);

    reachable_undecided(Player::Nought)
        .into_par_iter()
        .for_each(|game| {
            let perspective = game.turn();
            let report = search(&game, perspective, &pruned).unwrap();
            let mv = report.best_move.expect("undecided state has a move");
            assert!(game.piece_at(mv).is_none(), "{} occupied in\n{}", mv, game);

            // Re-search the reply position for the same perspective.
            let child = game.apply(mv).unwrap();
            let follow_up = search(&child, perspective, &pruned).unwrap();
            assert_eq!(follow_up.score, report.score, "after {} in\n{}", mv, game);
        });
}

#[test]
fn test_find_best_move_on_terminal_state() {
    let won = play(Player::Cross, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    assert_eq!(find_best_move(&won), Err(GameError::NoMoveAvailable));
}

#[test]
fn test_takes_immediate_win() {
    // X X .
    // O O .
    // . . .
    let game = play(Player::Cross, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(find_best_move(&game), Ok(Move::new(0, 2)));
    assert_eq!(minimax(&game, Player::Cross), Ok((Some(Move::new(0, 2)), 1)));
}

#[test]
fn test_blocks_immediate_loss() {
    // . . .
    // . O .
    // X X .   O to move
    let game = play(Player::Cross, &[(2, 0), (1, 1), (2, 1)]);
    let (mv, score) = minimax(&game, Player::Nought).unwrap();
    assert_eq!(mv, Some(Move::new(2, 2)));
    assert!(score >= 0);
}

#[test]
fn test_self_play_draws() {
    for first in [Player::Cross, Player::Nought] {
        let engine = Engine::new(SearchConfig::new().with_pruning(true));
        let mut game = engine.game_start(first, 3);
        while !engine.game_over(&game) {
            let mv = engine.find_best_move(&game).unwrap();
            game = engine.apply_move(&game, mv).unwrap();
        }
        assert_eq!(engine.game_outcome(&game), Outcome::Draw, "\n{}", game);
    }
}

#[test]
fn test_parallel_matches_sequential() {
    for cells in [&[][..], &[(1, 1)][..], &[(0, 0), (2, 2), (0, 2)][..]] {
        let game = play(Player::Cross, cells);
        for pruning in [false, true] {
            let sequential = SearchConfig::new().with_pruning(pruning);
            let parallel = sequential.with_parallel(true);

            let a = search(&game, game.turn(), &sequential).unwrap();
            let b = search(&game, game.turn(), &parallel).unwrap();
            assert_eq!(a.best_move, b.best_move);
            assert_eq!(a.score, b.score);
        }
    }
}

#[test]
fn test_four_by_four_endgame() {
    // X X X .
    // O O O .
    // X O X O
    // O X . .   X to move, (0, 3) wins at once
    let moves: Vec<_> = [
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (0, 2),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
        (2, 3),
        (3, 1),
        (3, 0),
    ]
    .iter()
    .map(|&(r, c)| Move::new(r, c))
    .collect();
    let game = GameState::replay(Player::Cross, 4, &moves).unwrap();
    assert_eq!(game_outcome(&game), Outcome::Undecided);

    let engine = Engine::new(SearchConfig::new().with_pruning(true));
    let report = engine.search(&game).unwrap();
    assert_eq!(report.best_move, Some(Move::new(0, 3)));
    assert_eq!(report.score, 1);
}
