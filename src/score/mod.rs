//! Heuristic scoring engine.
//!
//! Converts raw extracted signals into 0-100 sub-scores, category signals,
//! the weighted overall score, and the recommendation list. Every function
//! here is pure and deterministic: the same signals always produce the same
//! scores.

mod aggregate;
mod off_page;
mod on_page;
mod recommend;
mod security;
mod technical;

// Re-export public API
pub use aggregate::{
    collect_check_scores, off_page_average, on_page_average, overall_score, resolve_performance,
    summarize, technical_average,
};
pub use off_page::{build_off_page, social_signals};
pub use on_page::{
    score_headings, score_images, score_keywords, score_links, score_meta_description,
    score_structured_data, score_title,
};
pub use recommend::generate_recommendations;
pub use security::evaluate_security;
pub use technical::{
    canonical_signal, meta_robots_signal, mobile_usability_signal, page_speed_signal,
    schema_signal,
};
