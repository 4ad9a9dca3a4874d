use super::*;
use game_core::Piece;
use std::collections::{HashMap, HashSet};

/// Synthetic game tree standing in for a rules backend.
///
/// Moves are child indices 0..branching, the applied trail is the path from
/// the root, and a node's score is looked up from an override table or
/// derived deterministically from its path. Apply/undo calls are counted so
/// tests can check the restoration discipline and node-visit bounds.
struct TreeGame {
    branching: usize,
    path: Vec<usize>,
    terminal: HashSet<Vec<usize>>,
    overrides: HashMap<Vec<usize>, Score>,
    applies: u64,
    undos: u64,
}

impl TreeGame {
    fn new(branching: usize) -> Self {
        Self {
            branching,
            path: Vec::new(),
            terminal: HashSet::new(),
            overrides: HashMap::new(),
            applies: 0,
            undos: 0,
        }
    }

    fn with_scores(branching: usize, scores: &[(&[usize], Score)]) -> Self {
        let mut game = Self::new(branching);
        for (path, score) in scores {
            game.overrides.insert(path.to_vec(), *score);
        }
        game
    }

    fn mark_terminal(&mut self, path: &[usize]) {
        self.terminal.insert(path.to_vec());
    }

    fn score_here(&self) -> Score {
        if let Some(&s) = self.overrides.get(&self.path) {
            return s;
        }
        // Deterministic pseudo-random leaf values in [-100, 100].
        let mut h: i64 = 0x9e3779b9;
        for &m in &self.path {
            h = h.wrapping_mul(31).wrapping_add(m as i64 + 7);
        }
        (h.rem_euclid(201) - 100) as Score
    }
}

impl Rules for TreeGame {
    type Move = usize;

    fn side_to_move(&self) -> Side {
        if self.path.len() % 2 == 0 {
            Side::White
        } else {
            Side::Black
        }
    }

    fn legal_moves(&self) -> Vec<usize> {
        if self.is_game_over() {
            Vec::new()
        } else {
            (0..self.branching).collect()
        }
    }

    fn is_game_over(&self) -> bool {
        self.terminal.contains(&self.path)
    }

    fn apply(&mut self, mv: usize) {
        self.path.push(mv);
        self.applies += 1;
    }

    fn undo(&mut self) {
        assert!(self.path.pop().is_some(), "undo without a matching apply");
        self.undos += 1;
    }

    fn pieces(&self) -> Vec<(u8, Piece)> {
        Vec::new()
    }
}

/// Scores the synthetic tree directly from its path.
struct PathEval;

impl Evaluator<TreeGame> for PathEval {
    fn evaluate(&self, game: &TreeGame, _maximizer: Side) -> Score {
        game.score_here()
    }
}

/// Unpruned reference minimax of the same depth.
fn plain_minimax(game: &mut TreeGame, depth: u8, maximizing: bool, nodes: &mut u64) -> Score {
    if depth == 0 || game.is_game_over() {
        return game.score_here();
    }
    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };
    for mv in game.legal_moves() {
        game.apply(mv);
        *nodes += 1;
        let score = plain_minimax(game, depth - 1, !maximizing, nodes);
        game.undo();
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

#[test]
fn test_pruning_matches_plain_minimax() {
    for branching in 2..=4 {
        for depth in 1..=4 {
            for maximizing in [true, false] {
                let mut game = TreeGame::new(branching);
                let mut nodes = 0;
                let expected = plain_minimax(&mut game, depth, maximizing, &mut nodes);
                let mut nodes = 0;
                let got = alpha_beta(
                    &mut game,
                    depth,
                    -SCORE_INF,
                    SCORE_INF,
                    maximizing,
                    Side::White,
                    &PathEval,
                    &mut nodes,
                );
                assert_eq!(
                    got, expected,
                    "branching={} depth={} maximizing={}",
                    branching, depth, maximizing
                );
            }
        }
    }
}

#[test]
fn test_pruning_never_visits_more_nodes() {
    let mut game = TreeGame::new(4);
    let mut plain_nodes = 0;
    plain_minimax(&mut game, 4, true, &mut plain_nodes);

    let mut pruned_nodes = 0;
    alpha_beta(
        &mut game,
        4,
        -SCORE_INF,
        SCORE_INF,
        true,
        Side::White,
        &PathEval,
        &mut pruned_nodes,
    );

    assert!(pruned_nodes <= plain_nodes);
    // Full-tree bound: sum of b^i for i in 1..=depth.
    let full: u64 = (1..=4u32).map(|i| 4u64.pow(i)).sum();
    assert_eq!(plain_nodes, full);
}

#[test]
fn test_position_restored_after_search() {
    let mut game = TreeGame::new(3);
    let mut nodes = 0;
    alpha_beta(
        &mut game,
        4,
        -SCORE_INF,
        SCORE_INF,
        true,
        Side::White,
        &PathEval,
        &mut nodes,
    );
    // Varied leaf scores force cutoffs, so this also covers the
    // early-break exit path.
    assert!(game.path.is_empty());
    assert_eq!(game.applies, game.undos);
}

#[test]
fn test_terminal_short_circuit() {
    let mut game = TreeGame::with_scores(3, &[(&[], 17)]);
    game.mark_terminal(&[]);
    let mut nodes = 0;
    let score = alpha_beta(
        &mut game,
        5,
        -SCORE_INF,
        SCORE_INF,
        true,
        Side::White,
        &PathEval,
        &mut nodes,
    );
    assert_eq!(score, 17);
    assert_eq!(game.applies, 0);
    assert_eq!(game.undos, 0);
    assert_eq!(nodes, 0);
}

#[test]
fn test_terminal_position_inside_the_tree() {
    // Child 0 ends the game immediately with a winning score; the search
    // must take its evaluation without expanding it further.
    let mut game = TreeGame::with_scores(2, &[(&[0], 99), (&[1, 0], 1), (&[1, 1], 2)]);
    game.mark_terminal(&[0]);
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&mut game, 2, &PathEval, &mut nodes).unwrap();
    assert_eq!(mv, 0);
    assert_eq!(score, 99);
}

#[test]
fn test_pick_best_move_prefers_highest_scoring_root() {
    let mut game = TreeGame::with_scores(3, &[(&[0], 5), (&[1], 42), (&[2], 7)]);
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&mut game, 1, &PathEval, &mut nodes).unwrap();
    assert_eq!(mv, 1);
    assert_eq!(score, 42);
    assert_eq!(nodes, 3);
}

#[test]
fn test_root_tie_break_returns_first_enumerated_move() {
    let mut game = TreeGame::with_scores(3, &[(&[0], 7), (&[1], 7), (&[2], 7)]);
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&mut game, 1, &PathEval, &mut nodes).unwrap();
    assert_eq!(mv, 0);
    assert_eq!(score, 7);

    // The first move *achieving the maximum* wins, not the first overall.
    let mut game = TreeGame::with_scores(3, &[(&[0], 3), (&[1], 9), (&[2], 9)]);
    let mut nodes = 0;
    let (mv, _) = pick_best_move(&mut game, 1, &PathEval, &mut nodes).unwrap();
    assert_eq!(mv, 1);
}

#[test]
fn test_root_search_lets_the_opponent_reply() {
    // Move 0 looks great until the minimizer answers.
    let mut game = TreeGame::with_scores(
        2,
        &[(&[0, 0], 0), (&[0, 1], -50), (&[1, 0], 10), (&[1, 1], 5)],
    );
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&mut game, 2, &PathEval, &mut nodes).unwrap();
    assert_eq!(mv, 1);
    assert_eq!(score, 5);
}

#[test]
fn test_best_move_none_when_no_legal_moves() {
    let mut game = TreeGame::new(3);
    game.mark_terminal(&[]);
    let mut nodes = 0;
    assert!(pick_best_move(&mut game, 3, &PathEval, &mut nodes).is_none());
    assert_eq!(nodes, 0);
}

#[test]
fn test_pick_best_move_restores_position() {
    let mut game = TreeGame::new(3);
    let mut nodes = 0;
    pick_best_move(&mut game, 3, &PathEval, &mut nodes).unwrap();
    assert!(game.path.is_empty());
    assert_eq!(game.applies, game.undos);
}

#[test]
fn test_depth_zero_request_is_one_ply_lookahead() {
    // depth 0 saturates: each root move is evaluated directly.
    let mut game = TreeGame::with_scores(2, &[(&[0], -3), (&[1], 4)]);
    let mut nodes = 0;
    let (mv, score) = pick_best_move(&mut game, 0, &PathEval, &mut nodes).unwrap();
    assert_eq!(mv, 1);
    assert_eq!(score, 4);
    assert_eq!(nodes, 2);
}
