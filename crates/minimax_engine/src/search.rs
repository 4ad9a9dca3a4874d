//! Minimax search with alpha-beta pruning

use game_core::{Evaluator, Rules, Score, Side, SCORE_INF};

/// Picks the best move for the side to move, searching each root move to
/// `depth - 1` with the opponent minimizing.
///
/// Root moves are compared with strict greater-than, so the first move in
/// the backend's enumeration order that achieves the maximum score wins
/// ties. `alpha` is raised across root candidates, but the root window's
/// upper bound stays at +infinity: the root itself is never pruned, only
/// its descendants.
///
/// Returns `None` exactly when the root has no legal moves (checkmate or
/// stalemate); deciding what that means is the caller's job.
///
/// # Arguments
/// * `pos` - shared position, mutated in place and restored before return
/// * `depth` - requested search depth in plies
/// * `eval` - static evaluator applied at the leaves
/// * `nodes` - counter incremented once per position visited
pub fn pick_best_move<P, E>(
    pos: &mut P,
    depth: u8,
    eval: &E,
    nodes: &mut u64,
) -> Option<(P::Move, Score)>
where
    P: Rules,
    E: Evaluator<P>,
{
    let maximizer = pos.side_to_move();
    let moves = pos.legal_moves();

    let mut best: Option<(P::Move, Score)> = None;
    let mut alpha = -SCORE_INF;

    for mv in moves {
        pos.apply(mv);
        *nodes += 1;
        let score = alpha_beta(
            pos,
            depth.saturating_sub(1),
            alpha,
            SCORE_INF,
            false,
            maximizer,
            eval,
            nodes,
        );
        pos.undo();

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
        if score > alpha {
            alpha = score;
        }
    }

    best
}

/// Recursive minimax with alpha-beta pruning.
///
/// `alpha` and `beta` are the best scores already guaranteed to the
/// maximizing and minimizing side respectively; subtrees that cannot affect
/// the decision are cut, which never changes the returned score relative to
/// an unpruned minimax of the same depth.
///
/// At `depth == 0` or a terminal position this delegates to the evaluator
/// without expanding any moves. On every other path each move is applied,
/// searched one ply shallower for the other side, and undone before the
/// cutoff test, so the shared position is restored on every exit.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta<P, E>(
    pos: &mut P,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    maximizer: Side,
    eval: &E,
    nodes: &mut u64,
) -> Score
where
    P: Rules,
    E: Evaluator<P>,
{
    if depth == 0 || pos.is_game_over() {
        return eval.evaluate(pos, maximizer);
    }

    let moves = pos.legal_moves();
    // Terminal positions were caught above, so a non-terminal position
    // with no moves means the backend broke its contract.
    debug_assert!(
        !moves.is_empty(),
        "rules backend reported a non-terminal position with no legal moves"
    );

    if maximizing {
        let mut best = -SCORE_INF;
        for mv in moves {
            pos.apply(mv);
            *nodes += 1;
            let score = alpha_beta(pos, depth - 1, alpha, beta, false, maximizer, eval, nodes);
            pos.undo();

            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = SCORE_INF;
        for mv in moves {
            pos.apply(mv);
            *nodes += 1;
            let score = alpha_beta(pos, depth - 1, alpha, beta, true, maximizer, eval, nodes);
            pos.undo();

            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
