//! Hand-built game trees for exercising the search without a real board.
//!
//! Values are from player one's point of view. Interior values are what the
//! evaluator reports when the depth limit cuts the tree there; leaf values
//! are terminal utilities. Moves are node ids, numbered in preorder from 0.

use std::rc::Rc;

use isolation_core::{GameState, Player};

pub enum Shape {
    Leaf(f64),
    Node(f64, Vec<Shape>),
}

pub fn leaf(value: f64) -> Shape {
    Shape::Leaf(value)
}

pub fn node(value: f64, children: Vec<Shape>) -> Shape {
    Shape::Node(value, children)
}

#[derive(Debug)]
struct TreeNode {
    value: f64,
    children: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct TreeState {
    nodes: Rc<Vec<TreeNode>>,
    id: usize,
    active: Player,
}

impl TreeState {
    pub fn new(shape: Shape) -> Self {
        fn build(shape: Shape, nodes: &mut Vec<TreeNode>) -> usize {
            let id = nodes.len();
            match shape {
                Shape::Leaf(value) => nodes.push(TreeNode {
                    value,
                    children: Vec::new(),
                }),
                Shape::Node(value, children) => {
                    nodes.push(TreeNode {
                        value,
                        children: Vec::new(),
                    });
                    let ids: Vec<usize> = children.into_iter().map(|c| build(c, nodes)).collect();
                    nodes[id].children = ids;
                }
            }
            id
        }

        let mut nodes = Vec::new();
        build(shape, &mut nodes);
        TreeState {
            nodes: Rc::new(nodes),
            id: 0,
            active: Player::One,
        }
    }

    fn value_for(&self, player: Player) -> f64 {
        let value = self.nodes[self.id].value;
        match player {
            Player::One => value,
            Player::Two => -value,
        }
    }
}

impl GameState for TreeState {
    type Move = usize;

    fn active_player(&self) -> Player {
        self.active
    }

    fn legal_moves(&self) -> Vec<usize> {
        self.nodes[self.id].children.clone()
    }

    fn forecast_move(&self, mv: usize) -> Self {
        TreeState {
            nodes: Rc::clone(&self.nodes),
            id: mv,
            active: self.active.opponent(),
        }
    }

    fn utility(&self, player: Player) -> f64 {
        self.value_for(player)
    }
}

/// Evaluator reading the stored node value.
pub fn tree_eval(state: &TreeState, player: Player) -> f64 {
    state.value_for(player)
}

/// A full binary tree of the given height with pseudo-random node values.
pub fn binary_tree(height: u32, seed: u64) -> TreeState {
    fn grow(height: u32, state: &mut u64) -> Shape {
        *state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let value = ((*state >> 33) % 201) as f64 - 100.0;
        if height == 0 {
            leaf(value)
        } else {
            node(value, vec![grow(height - 1, state), grow(height - 1, state)])
        }
    }
    let mut state = seed;
    TreeState::new(grow(height, &mut state))
}
