//! Minimal Tic-Tac-Toe environment shared by the integration tests.

#![allow(dead_code)]

use qtab_rl::{Learner, RandomSource};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(char),
    Draw,
}

/// Board encoded as nine cells of `X`, `O`, or `.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [char; 9],
}

impl Board {
    pub fn new() -> Self {
        Self { cells: ['.'; 9] }
    }

    /// State identifier handed to the agent
    pub fn key(&self) -> String {
        self.cells.iter().collect()
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        if self.outcome().is_some() {
            return Vec::new();
        }
        (0..9).filter(|&i| self.cells[i] == '.').collect()
    }

    pub fn play(&mut self, position: usize, mark: char) {
        assert_eq!(self.cells[position], '.', "cell {position} is taken");
        self.cells[position] = mark;
    }

    pub fn outcome(&self) -> Option<Outcome> {
        for line in LINES {
            let mark = self.cells[line[0]];
            if mark != '.' && line.iter().all(|&i| self.cells[i] == mark) {
                return Some(Outcome::Win(mark));
            }
        }
        if self.cells.iter().all(|&c| c != '.') {
            return Some(Outcome::Draw);
        }
        None
    }
}

fn reward_for(outcome: Outcome, mark: char) -> f64 {
    match outcome {
        Outcome::Win(winner) if winner == mark => 1.0,
        Outcome::Win(_) => -1.0,
        Outcome::Draw => 0.0,
    }
}

/// Play one game with the learner as `X` against a uniformly random `O`
///
/// When `learn` is set, the learner is updated after each of its moves
/// with the state it faces on its next turn.
pub fn play_against_random<L, R>(learner: &mut L, opponent: &mut R, learn: bool) -> Outcome
where
    L: Learner<String, usize>,
    R: RandomSource,
{
    let mut board = Board::new();

    loop {
        let state = board.key();
        let moves = board.legal_moves();
        let action = learner
            .choose_action(&state, &moves)
            .expect("game continues only while moves remain");
        board.play(action, 'X');

        if let Some(outcome) = board.outcome() {
            if learn {
                learner.update(&state, &action, reward_for(outcome, 'X'), &board.key(), &[]);
            }
            return outcome;
        }

        let replies = board.legal_moves();
        let reply = replies[opponent.pick(replies.len())];
        board.play(reply, 'O');

        let next_state = board.key();
        let next_moves = board.legal_moves();
        let reward = board.outcome().map_or(0.0, |outcome| reward_for(outcome, 'X'));
        if learn {
            learner.update(&state, &action, reward, &next_state, &next_moves);
        }

        if let Some(outcome) = board.outcome() {
            return outcome;
        }
    }
}
