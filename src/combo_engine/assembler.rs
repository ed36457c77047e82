//! Turns an ordered selection into the public combo shape.

use crate::combo_engine::models::{GeneratedCombo, TrickCandidate, TrickSummary};

/// Separator between trick names in combo notation.
pub const NOTATION_SEPARATOR: &str = " > ";

/// Project each trick to `(id, name)`, keeping the draw order.
pub fn assemble(selected: &[TrickCandidate]) -> Vec<TrickSummary> {
    selected.iter().map(TrickCandidate::summary).collect()
}

/// Format the selection as notation (e.g. "Backflip > 540 Kick > Webster").
pub fn notation(selected: &[TrickCandidate]) -> String {
    selected
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(NOTATION_SEPARATOR)
}

/// Assemble the final [`GeneratedCombo`]: summaries, summed difficulty, notation.
pub fn build_combo(selected: &[TrickCandidate]) -> GeneratedCombo {
    GeneratedCombo {
        tricks: assemble(selected),
        total_difficulty: selected.iter().filter_map(|t| t.difficulty).sum(),
        notation: notation(selected),
    }
}
