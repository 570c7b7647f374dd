//! Players that choose moves for the driver.
//!
//! The rules engine only checks legality; move quality is the agent's
//! business. Every agent is told its color once with
//! [`Agent::assign_identity`] before it is asked for a move.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

use crate::board::{Board, Color};
use crate::geometry::Point;

/// Probability mass over the mover's legal list.
pub type MoveProbs = Vec<(Point, f32)>;

pub trait Agent {
    /// Short label used in logs and match output.
    fn name(&self) -> &str;

    fn assign_identity(&mut self, color: Color);

    fn select_move(&mut self, board: &Board) -> Result<Point>;

    /// Pick a move and report the distribution it was drawn from.
    ///
    /// The default spreads the mass uniformly over the legal list.
    fn select_move_with_probs(&mut self, board: &Board, _temperature: f64) -> Result<(Point, MoveProbs)> {
        let mv = self.select_move(board)?;
        Ok((mv, uniform_probs(board.current_legal_moves())))
    }

    /// Forget anything carried over from the previous game.
    fn reset_search_state(&mut self) {}
}

pub fn uniform_probs(legal: &[Point]) -> MoveProbs {
    if legal.is_empty() {
        return Vec::new();
    }
    let p = 1.0 / legal.len() as f32;
    legal.iter().map(|&pt| (pt, p)).collect()
}

/// Expand sparse move probabilities to one entry per board point.
pub fn dense_probs(probs: &MoveProbs, area: usize) -> Vec<f32> {
    let mut dense = vec![0.0; area];
    for &(pt, p) in probs {
        dense[pt] = p;
    }
    dense
}

// =============================================================================
// Random agent
// =============================================================================

/// Plays uniformly at random among its legal moves.
pub struct RandomAgent {
    rng: fastrand::Rng,
    color: Option<Color>,
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
            color: None,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            color: None,
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn assign_identity(&mut self, color: Color) {
        self.color = Some(color);
    }

    fn select_move(&mut self, board: &Board) -> Result<Point> {
        let legal = board.current_legal_moves();
        if legal.is_empty() {
            bail!("no legal move for {}", board.current_player());
        }
        Ok(legal[self.rng.usize(..legal.len())])
    }
}

// =============================================================================
// Human agent
// =============================================================================

/// Reads `row,col` moves from a text stream, re-prompting on bad input.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
    color: Option<Color>,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: None,
        }
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn assign_identity(&mut self, color: Color) {
        self.color = Some(color);
    }

    fn select_move(&mut self, board: &Board) -> Result<Point> {
        let mut line = String::new();
        loop {
            write!(self.output, "Your move (row,col): ")?;
            self.output.flush()?;

            line.clear();
            let n = self.input.read_line(&mut line).context("reading move")?;
            if n == 0 {
                bail!("input closed before a move was entered");
            }
            match board.geometry().parse_location(&line) {
                Ok(pt) if board.is_legal(pt) => return Ok(pt),
                Ok(pt) => writeln!(self.output, "illegal move {pt}, try again")?,
                Err(e) => writeln!(self.output, "{e}, try again")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_random_agent_plays_legal() {
        let mut board = Board::new(4, 4).unwrap();
        let mut agent = RandomAgent::with_seed(7);
        agent.assign_identity(Color::Black);
        for _ in 0..5 {
            let mv = agent.select_move(&board).unwrap();
            assert!(board.is_legal(mv));
            board.apply(mv).unwrap();
        }
    }

    #[test]
    fn test_default_probs_are_uniform() {
        let board = Board::new(2, 2).unwrap();
        let mut agent = RandomAgent::with_seed(1);
        let (mv, probs) = agent.select_move_with_probs(&board, 1.0).unwrap();
        assert!(probs.iter().any(|&(pt, _)| pt == mv));
        assert_eq!(probs.len(), 4);
        assert!(probs.iter().all(|&(_, p)| p == 0.25));
        assert_eq!(dense_probs(&probs, 4), vec![0.25; 4]);
    }

    #[test]
    fn test_human_agent_reprompts() {
        let mut board = Board::new(3, 3).unwrap();
        board.apply(4).unwrap();
        let input = Cursor::new("nonsense\n1,1\n5,5\n0,2\n");
        let mut out = Vec::new();
        let mut human = HumanAgent::new(input, &mut out);
        human.assign_identity(Color::White);
        assert_eq!(human.select_move(&board).unwrap(), 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("try again").count(), 3);
    }

    #[test]
    fn test_human_agent_eof() {
        let board = Board::new(3, 3).unwrap();
        let mut human = HumanAgent::new(Cursor::new(""), Vec::new());
        assert!(human.select_move(&board).is_err());
    }
}
