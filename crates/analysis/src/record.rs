use serde::{Deserialize, Serialize};
use tessera_core::{Board, Direction};
use tessera_eval::Score;
use tessera_search::DirectionEval;

/// One direction's recorded fitness; None marks a direction that left
/// the board unchanged at recording time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionScore {
    pub direction: Direction,
    pub fitness: Option<Score>,
}

impl From<DirectionEval> for DirectionScore {
    fn from(eval: DirectionEval) -> Self {
        Self {
            direction: eval.direction,
            fitness: eval.fitness,
        }
    }
}

/// A turn where the human played a different direction than the engine
/// picked, captured with the board and the full fitness snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Disagreement {
    pub turn: u32,
    pub board: Board,
    pub human: Direction,
    pub engine: Direction,
    pub scores: [DirectionScore; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisagreementSeverity {
    Minor,
    Moderate,
    Major,
}

impl Disagreement {
    pub fn snapshot(evals: [DirectionEval; 4]) -> [DirectionScore; 4] {
        evals.map(DirectionScore::from)
    }

    fn score_of(&self, direction: Direction) -> Option<Score> {
        self.scores
            .iter()
            .find(|entry| entry.direction == direction)
            .and_then(|entry| entry.fitness)
    }

    pub fn engine_score(&self) -> Option<Score> {
        self.score_of(self.engine)
    }

    pub fn human_score(&self) -> Option<Score> {
        self.score_of(self.human)
    }

    /// Fitness given up by the human's choice relative to the engine's.
    /// None when the snapshot lacks either score.
    pub fn deficit(&self) -> Option<Score> {
        Some(self.engine_score()? - self.human_score()?)
    }
}

/// Grade a deficit against the engine-side score it was measured from.
/// Thresholds are relative: late-game positions carry much larger
/// absolute fitness than early ones.
pub fn classify_severity(deficit: f64, reference: f64) -> DisagreementSeverity {
    let ratio = deficit / reference.abs().max(1.0);
    if ratio.is_nan() || ratio < 0.01 {
        DisagreementSeverity::Minor
    } else if ratio < 0.05 {
        DisagreementSeverity::Moderate
    } else {
        DisagreementSeverity::Major
    }
}
