//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Castling, en passant and promotion are not played, so published counts
//! only match up to the depth where those moves first appear.

use super::generate_legal_moves;
use crate::{MoveError, Position};

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32) -> Result<u64, MoveError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generate_legal_moves(position)?;

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for m in moves.iter() {
        let mut next = position.clone();
        next.apply(m)?;
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(position: &Position, depth: u32) -> Result<Vec<(String, u64)>, MoveError> {
    let moves = generate_legal_moves(position)?;
    let mut results = Vec::with_capacity(moves.len());

    for m in moves.to_sorted_vec() {
        let nodes = if depth > 1 {
            let mut next = position.clone();
            next.apply(m)?;
            perft(&next, depth - 1)?
        } else {
            1
        };
        results.push((m.to_notation(), nodes));
    }

    Ok(results)
}
