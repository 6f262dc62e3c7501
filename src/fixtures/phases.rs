use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::random::random_string_with_rng;

/// Bracket style of a tournament phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseType {
    Elimination,
    Draw,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPhase {
    pub title: String,
    pub tournament_id: String,
    #[serde(rename = "type")]
    pub phase_type: PhaseType,
}

/// Creation body for a phase, wrapped in the envelope the API expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhasePayload {
    pub phase: NewPhase,
}

/// Builds a randomized phase creation payload for the given tournament.
///
/// The title is random per call and the type is a uniform choice between
/// elimination and draw. The tournament id is copied verbatim and not
/// validated. Pure aside from randomness; no I/O.
pub fn phase_payload(tournament_id: &str) -> PhasePayload {
    phase_payload_with_rng(tournament_id, &mut rand::thread_rng())
}

/// Seedable variant of [`phase_payload`] for reproducible test scenarios.
pub fn phase_payload_with_rng<R: Rng>(tournament_id: &str, rng: &mut R) -> PhasePayload {
    let phase_type = if rng.gen_bool(0.5) {
        PhaseType::Elimination
    } else {
        PhaseType::Draw
    };

    PhasePayload {
        phase: NewPhase {
            title: random_string_with_rng(rng),
            tournament_id: tournament_id.to_string(),
            phase_type,
        },
    }
}
