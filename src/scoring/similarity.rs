use super::error::ScoringError;

/// Cosine similarity of two equal-length, non-zero vectors.
///
/// Computed as the dot product over the product of norms, so inputs need not
/// be normalized. The result is clamped to `[-1.0, 1.0]`.
///
/// # Errors
///
/// [`ScoringError::InvalidVector`] for empty, mismatched, non-finite or
/// zero-norm input.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, ScoringError> {
    if a.is_empty() || b.is_empty() {
        return Err(ScoringError::InvalidVector {
            reason: "zero-length vector".to_string(),
        });
    }

    if a.len() != b.len() {
        return Err(ScoringError::InvalidVector {
            reason: format!("dimension mismatch: {} vs {}", a.len(), b.len()),
        });
    }

    if a.iter().chain(b.iter()).any(|x| !x.is_finite()) {
        return Err(ScoringError::InvalidVector {
            reason: "non-finite component".to_string(),
        });
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(ScoringError::InvalidVector {
            reason: "zero-norm vector".to_string(),
        });
    }

    Ok((dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0))
}
