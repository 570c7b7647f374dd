//! Monte Carlo Tree Search agent with random rollouts.
//!
//! Selection uses the PUCT score with uniform priors over the legal list,
//! leaves are expanded on their first visit and evaluated by a single
//! random playout. Each simulation works on its own clone of the board.
//!
//! The tree is rebuilt for every decision. The last search tree is kept
//! only so callers can inspect it, and is dropped by
//! [`Agent::reset_search_state`].

use anyhow::{Result, bail};
use tracing::trace;

use crate::agent::{Agent, MoveProbs};
use crate::board::{Board, Color, GameStatus};
use crate::constants::{C_PUCT, GREEDY_TEMP, N_PLAYOUT};
use crate::geometry::Point;
use crate::playout::random_playout;

/// Search settings.
#[derive(Debug, Clone, Copy)]
pub struct MctsConfig {
    /// Simulations per decision
    pub n_playout: usize,
    pub c_puct: f64,
    /// Seed for the rollout RNG; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            n_playout: N_PLAYOUT,
            c_puct: C_PUCT,
            seed: None,
        }
    }
}

/// A node in the search tree.
///
/// `value` is accumulated from the point of view of `mover`, the player who
/// made the move leading to this node.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub mv: Option<Point>,
    pub mover: Color,
    pub visits: u32,
    pub value: f64,
    /// Uniform prior over the parent's legal moves
    pub prior: f64,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn root(board: &Board) -> Self {
        Self {
            mv: None,
            mover: board.opponent(),
            visits: 0,
            value: 0.0,
            prior: 1.0,
            children: Vec::new(),
        }
    }

    /// Mean value of this node for its mover.
    #[inline]
    pub fn q(&self) -> f64 {
        if self.visits > 0 {
            self.value / self.visits as f64
        } else {
            0.0
        }
    }

    fn expand(&mut self, board: &Board) {
        let legal = board.current_legal_moves();
        let prior = 1.0 / legal.len() as f64;
        let mover = board.current_player();
        self.children = legal
            .iter()
            .map(|&pt| TreeNode {
                mv: Some(pt),
                mover,
                visits: 0,
                value: 0.0,
                prior,
                children: Vec::new(),
            })
            .collect();
    }
}

/// PUCT urgency of a child given its parent's visit count.
fn puct(child: &TreeNode, parent_visits: u32, c_puct: f64) -> f64 {
    let u = c_puct * child.prior * (parent_visits as f64).sqrt() / (1.0 + child.visits as f64);
    child.q() + u
}

fn most_urgent(node: &TreeNode, c_puct: f64) -> usize {
    node.children
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            puct(a, node.visits, c_puct)
                .partial_cmp(&puct(b, node.visits, c_puct))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Run one simulation: descend, expand, roll out, back up.
fn simulate(root: &mut TreeNode, board: &Board, c_puct: f64, rng: &mut fastrand::Rng) -> Result<()> {
    let mut state = board.clone();
    let mut path = Vec::new();

    // Descend
    let mut node = &mut *root;
    while !node.children.is_empty() {
        let idx = most_urgent(node, c_puct);
        path.push(idx);
        node = &mut node.children[idx];
        if let Some(mv) = node.mv {
            state.apply(mv)?;
        }
    }

    // Expand and evaluate
    let winner = match state.status() {
        GameStatus::Ended { winner } => winner,
        GameStatus::InProgress => {
            node.expand(&state);
            random_playout(&mut state, rng)?
        }
    };

    // Back up
    let mut node = root;
    backup(node, winner);
    for &idx in &path {
        node = &mut node.children[idx];
        backup(node, winner);
    }
    Ok(())
}

#[inline]
fn backup(node: &mut TreeNode, winner: Color) {
    node.visits += 1;
    node.value += if node.mover == winner { 1.0 } else { -1.0 };
}

/// Turn root visit counts into move probabilities.
///
/// `p ~ visits^(1/temperature)`, computed in log space. At or below
/// [`GREEDY_TEMP`] all mass goes to the most visited move.
pub fn visit_probs(root: &TreeNode, temperature: f64) -> MoveProbs {
    if root.children.is_empty() {
        return Vec::new();
    }
    if temperature <= GREEDY_TEMP {
        let best = best_child(root);
        return root
            .children
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.mv.map(|pt| (pt, if i == best { 1.0 } else { 0.0 })))
            .collect();
    }
    let logits: Vec<f64> = root
        .children
        .iter()
        .map(|c| (c.visits as f64 + 1e-10).ln() / temperature)
        .collect();
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    root.children
        .iter()
        .zip(exps)
        .filter_map(|(c, e)| c.mv.map(|pt| (pt, (e / total) as f32)))
        .collect()
}

fn best_child(root: &TreeNode) -> usize {
    root.children
        .iter()
        .enumerate()
        .max_by_key(|(_, c)| c.visits)
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Agent that plays by tree search.
pub struct MctsAgent {
    config: MctsConfig,
    rng: fastrand::Rng,
    color: Option<Color>,
    last_tree: Option<TreeNode>,
}

impl MctsAgent {
    pub fn new(config: MctsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            config,
            rng,
            color: None,
            last_tree: None,
        }
    }

    /// The tree built by the most recent decision, if any.
    pub fn last_tree(&self) -> Option<&TreeNode> {
        self.last_tree.as_ref()
    }

    /// Run a full search from `board` and return the root.
    pub fn search(&mut self, board: &Board) -> Result<TreeNode> {
        if board.current_legal_moves().is_empty() {
            bail!("no legal move for {}", board.current_player());
        }
        let mut root = TreeNode::root(board);
        root.expand(board);
        for _ in 0..self.config.n_playout {
            simulate(&mut root, board, self.config.c_puct, &mut self.rng)?;
        }
        trace!(
            player = %board.current_player(),
            sims = root.visits,
            children = root.children.len(),
            "search done"
        );
        Ok(root)
    }

    fn sample(&mut self, probs: &MoveProbs) -> Option<Point> {
        let r = self.rng.f32();
        let mut acc = 0.0;
        for &(pt, p) in probs {
            acc += p;
            if r < acc {
                return Some(pt);
            }
        }
        probs.iter().rev().find(|&&(_, p)| p > 0.0).map(|&(pt, _)| pt)
    }
}

impl Agent for MctsAgent {
    fn name(&self) -> &str {
        "mcts"
    }

    fn assign_identity(&mut self, color: Color) {
        self.color = Some(color);
    }

    fn select_move(&mut self, board: &Board) -> Result<Point> {
        let root = self.search(board)?;
        let best = best_child(&root);
        let mv = root.children[best].mv;
        self.last_tree = Some(root);
        match mv {
            Some(pt) => Ok(pt),
            None => bail!("search produced no move"),
        }
    }

    fn select_move_with_probs(&mut self, board: &Board, temperature: f64) -> Result<(Point, MoveProbs)> {
        let root = self.search(board)?;
        let probs = visit_probs(&root, temperature);
        self.last_tree = Some(root);
        match self.sample(&probs) {
            Some(pt) => Ok((pt, probs)),
            None => bail!("search produced no move"),
        }
    }

    fn reset_search_state(&mut self) {
        self.last_tree = None;
    }
}
