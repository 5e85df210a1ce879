//! Single guess evaluation command

use crate::core::{EvaluateError, Evaluation, evaluate};
use serde::Serialize;

/// Result of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluateReport {
    pub answer: String,
    pub guess: String,
    pub states: Evaluation,
}

/// Evaluate `guess` against `answer`
///
/// Both words are reported lowercased, the way they were compared.
///
/// # Errors
///
/// Returns `EvaluateError::LengthMismatch` if the lengths differ.
pub fn evaluate_pair(answer: &str, guess: &str) -> Result<EvaluateReport, EvaluateError> {
    let states = evaluate(answer, guess)?;
    Ok(EvaluateReport {
        answer: answer.to_lowercase(),
        guess: guess.to_lowercase(),
        states,
    })
}
