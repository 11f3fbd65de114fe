//! Ranking score for filtered rows.
//!
//! `score = rating * (votes + 1)^0.25`
//!
//! The quarter root damps vote count so that a well-rated place with few
//! votes is not buried under a mediocre one with thousands.

use data_loader::Row;

/// Exponent applied to `votes + 1`
pub const SCORE_VOTE_EXPONENT: f64 = 0.25;

/// Popularity-adjusted score for a rating and vote count.
pub fn score(rating: f32, votes: u32) -> f64 {
    f64::from(rating) * (f64::from(votes) + 1.0).powf(SCORE_VOTE_EXPONENT)
}

/// Score a row, or `None` if it lacks a usable rating or vote count.
pub fn score_row(row: &Row) -> Option<f64> {
    match (row.rating, row.votes) {
        (Some(rating), Some(votes)) if !rating.is_nan() => Some(score(rating, votes)),
        _ => None,
    }
}
