//! On-page sub-score computation.
//!
//! Each scorer takes the raw facts one extractor produced and returns the
//! corresponding report record with its 0-100 score and recommendations.

use crate::config::{META_DESCRIPTION_LENGTH_RANGE, TITLE_LENGTH_RANGE};
use crate::parse::{phrase_occurrences, ImageStats, LinkFacts, StructuredDataFacts};
use crate::report::{
    HeadingLevelSignal, HeadingSignals, ImageSignal, KeywordSignal, KeywordStat, LinkSignal,
    MetaDescriptionSignal, StructuredDataSignal, TitleSignal,
};

/// Scores the page title by length band.
///
/// Empty scores 0; outside the preferred range scores 70 with a lengthen or
/// shorten recommendation; inside scores 100.
pub fn score_title(text: String) -> TitleSignal {
    let length = text.chars().count();
    let (min, max) = TITLE_LENGTH_RANGE;

    let (score, recommendations) = if length == 0 {
        (
            0,
            vec!["Add a <title> tag describing the page content".to_string()],
        )
    } else if length < min {
        (
            70,
            vec![format!(
                "Lengthen the page title to {min}-{max} characters (currently {length})"
            )],
        )
    } else if length > max {
        (
            70,
            vec![format!(
                "Shorten the page title to {min}-{max} characters (currently {length})"
            )],
        )
    } else {
        (100, Vec::new())
    };

    TitleSignal {
        text,
        length,
        score,
        recommendations,
    }
}

/// Scores the meta description by length band, same shape as the title.
pub fn score_meta_description(text: Option<String>) -> MetaDescriptionSignal {
    let length = text.as_deref().map(|t| t.chars().count()).unwrap_or(0);
    let (min, max) = META_DESCRIPTION_LENGTH_RANGE;

    let (score, recommendations) = if length == 0 {
        (
            0,
            vec!["Add a meta description summarizing the page".to_string()],
        )
    } else if length < min {
        (
            70,
            vec![format!(
                "Lengthen the meta description to {min}-{max} characters (currently {length})"
            )],
        )
    } else if length > max {
        (
            70,
            vec![format!(
                "Shorten the meta description to {min}-{max} characters (currently {length})"
            )],
        )
    } else {
        (100, Vec::new())
    };

    MetaDescriptionSignal {
        text,
        length,
        score,
        recommendations,
    }
}

/// Scores the heading outline.
///
/// H1 score: 100 for exactly one, 0 for none, 50 for duplicates (a duplicate
/// H1 is penalized, not treated as missing). Structure score additionally
/// requires at least one H2 below a healthy H1.
pub fn score_headings(levels: [HeadingLevelSignal; 6]) -> HeadingSignals {
    let h1_count = levels[0].count;
    let h2_count = levels[1].count;

    let h1_score = match h1_count {
        1 => 100,
        0 => 0,
        _ => 50,
    };

    let structure_score = if h1_count == 0 {
        0
    } else if h1_count > 1 {
        50
    } else if h2_count == 0 {
        70
    } else {
        100
    };

    let mut recommendations = Vec::new();
    match h1_count {
        0 => recommendations.push("Add exactly one H1 heading to the page".to_string()),
        1 => {}
        n => recommendations.push(format!("Reduce the {n} H1 headings to a single H1")),
    }
    if h1_count >= 1 && h2_count == 0 {
        recommendations.push("Add H2 subheadings to structure the content".to_string());
    }

    let [h1, h2, h3, h4, h5, h6] = levels;
    HeadingSignals {
        h1,
        h2,
        h3,
        h4,
        h5,
        h6,
        h1_score,
        structure_score,
        recommendations,
    }
}

/// Scores image alt coverage.
///
/// A page with no images is vacuously compliant and scores 100.
pub fn score_images(stats: ImageStats) -> ImageSignal {
    let score = if stats.total == 0 {
        100
    } else {
        let with_alt = stats.total - stats.without_alt;
        ((with_alt as f64 / stats.total as f64) * 100.0).round() as u8
    };

    let recommendations = if stats.without_alt > 0 {
        vec![format!(
            "Add alt text to {} image(s) missing it",
            stats.without_alt
        )]
    } else {
        Vec::new()
    };

    ImageSignal {
        total: stats.total,
        without_alt: stats.without_alt,
        score,
        recommendations,
    }
}

/// Scores the link profile.
///
/// A page with no links scores the hard floor of 30. Otherwise the score
/// starts at 100, loses points proportionally to the flagged-issue ratio,
/// gains a bonus for a balanced internal/external mix, and is penalized when
/// nofollow links exceed half of all links. The final score is clamped to
/// [30, 100]: the floor applies to linked pages too, so one bad link can
/// never rank below having no links at all.
pub fn score_links(facts: LinkFacts) -> LinkSignal {
    let score = if facts.total == 0 {
        30
    } else {
        let mut score = 100.0;
        score -= (facts.issue_count() as f64 / facts.total as f64) * 100.0;

        let min = facts.internal.min(facts.external) as f64;
        let max = facts.internal.max(facts.external) as f64;
        if max > 0.0 && min / max > 0.3 {
            score += 10.0;
        }

        if facts.nofollow * 2 > facts.total {
            score -= 20.0;
        }

        score.round().clamp(30.0, 100.0) as u8
    };

    let mut recommendations = Vec::new();
    if facts.total == 0 {
        recommendations.push("Add internal links so crawlers can discover related pages".to_string());
    }
    if facts.issue_count() > 0 {
        recommendations.push("Use descriptive link text instead of generic phrases".to_string());
    }
    if facts.total > 0 && facts.nofollow * 2 > facts.total {
        recommendations.push("Review nofollow usage; most links on the page are nofollow".to_string());
    }

    LinkSignal {
        total: facts.total,
        internal: facts.internal,
        external: facts.external,
        nofollow: facts.nofollow,
        broken: facts.broken,
        issues: facts.issues,
        score,
        recommendations,
    }
}

/// Scores keyword usage.
///
/// Per keyword: a base score by density band (0% scores 0; under 0.5% scores
/// 60; under 1% scores 80; 1-3% scores 100; above 3% scores 30 as keyword
/// stuffing), plus placement bonuses for title (+10), meta description (+5),
/// H1 (+10) and H2 (+5), capped at 100. The signal score is the rounded mean.
pub fn score_keywords(
    keyword_list: Vec<String>,
    derived: bool,
    words: &[String],
    title: &str,
    meta_description: Option<&str>,
    h1_texts: &[String],
    h2_texts: &[String],
) -> KeywordSignal {
    let total_words = words.len();
    let title_lower = title.to_lowercase();
    let meta_lower = meta_description.unwrap_or_default().to_lowercase();
    let h1_lower: Vec<String> = h1_texts.iter().map(|t| t.to_lowercase()).collect();
    let h2_lower: Vec<String> = h2_texts.iter().map(|t| t.to_lowercase()).collect();

    let keywords: Vec<KeywordStat> = keyword_list
        .into_iter()
        .map(|keyword| {
            let keyword_lower = keyword.to_lowercase();
            let occurrences = phrase_occurrences(words, &keyword_lower);
            let density = if total_words == 0 {
                0.0
            } else {
                occurrences as f64 / total_words as f64 * 100.0
            };

            let base: u32 = if occurrences == 0 {
                0
            } else if density < 0.5 {
                60
            } else if density < 1.0 {
                80
            } else if density <= 3.0 {
                100
            } else {
                // Keyword stuffing band.
                30
            };

            let in_title = title_lower.contains(&keyword_lower);
            let in_meta_description = meta_lower.contains(&keyword_lower);
            let in_h1 = h1_lower.iter().any(|t| t.contains(&keyword_lower));
            let in_h2 = h2_lower.iter().any(|t| t.contains(&keyword_lower));

            let mut score = base;
            if in_title {
                score += 10;
            }
            if in_meta_description {
                score += 5;
            }
            if in_h1 {
                score += 10;
            }
            if in_h2 {
                score += 5;
            }

            KeywordStat {
                keyword,
                occurrences,
                density,
                in_title,
                in_meta_description,
                in_h1,
                in_h2,
                score: score.min(100) as u8,
            }
        })
        .collect();

    let score = if keywords.is_empty() {
        0
    } else {
        let sum: u32 = keywords.iter().map(|k| k.score as u32).sum();
        (sum as f64 / keywords.len() as f64).round() as u8
    };

    let mut recommendations = Vec::new();
    if keywords.iter().any(|k| k.occurrences == 0) {
        recommendations.push("Use the target keywords in the page copy".to_string());
    }
    if let Some(stuffed) = keywords.iter().find(|k| k.density > 3.0) {
        recommendations.push(format!(
            "Reduce repetition of '{}'; its density reads as keyword stuffing",
            stuffed.keyword
        ));
    }
    if !keywords.is_empty() && keywords.iter().all(|k| !k.in_title) {
        recommendations.push("Include a target keyword in the page title".to_string());
    }

    KeywordSignal {
        derived,
        total_words,
        keywords,
        score,
        recommendations,
    }
}

/// Scores structured data presence and validity.
///
/// Nothing found scores 0. Otherwise: 60 base, +20 when every JSON-LD block
/// parsed, +10 for more than one distinct type, +10 more for more than three.
pub fn score_structured_data(facts: &StructuredDataFacts) -> StructuredDataSignal {
    let found = facts.json_ld_blocks > 0 || facts.microdata_items > 0;

    let score = if !found {
        0
    } else {
        let mut score = 60u8;
        if facts.json_ld_valid {
            score += 20;
        }
        if facts.types.len() > 1 {
            score += 10;
        }
        if facts.types.len() > 3 {
            score += 10;
        }
        score
    };

    let mut recommendations = Vec::new();
    if !found {
        recommendations
            .push("Add structured data (JSON-LD) so search engines understand the page".to_string());
    } else if !facts.json_ld_valid {
        recommendations.push("Fix the malformed JSON-LD block(s) on the page".to_string());
    }

    StructuredDataSignal {
        types: facts.types.clone(),
        json_ld_blocks: facts.json_ld_blocks,
        json_ld_valid: facts.json_ld_valid,
        microdata_items: facts.microdata_items,
        score,
        recommendations,
    }
}
