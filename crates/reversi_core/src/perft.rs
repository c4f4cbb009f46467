use crate::{
    board::Board,
    movegen::{apply_move, has_legal_move, legal_moves_into},
    types::{Move, Player},
};

/// Pure perft node count.
/// Counts all leaf positions from the current one down to `depth`. A forced
/// pass counts as one ply; a position where neither side can move is a leaf.
pub fn perft(board: &Board, player: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, player: Player, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(board, player, buf);

        if buf.is_empty() {
            if has_legal_move(board, player.opponent()) {
                return inner(board, player.opponent(), depth - 1, rest);
            }
            return 1;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            if let Ok(next) = apply_move(board, mv, player) {
                nodes += inner(&next, player.opponent(), depth - 1, rest);
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, player, depth, &mut layers[..])
}
