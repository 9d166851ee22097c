use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete satisfaction bucket derived from a 0-5 rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingTier {
    NeedsImprovement,
    Average,
    SomewhatSatisfied,
    Satisfied,
    VerySatisfied,
}

impl RatingTier {
    /// `floor(rating)` clamped into `0..=4`. NaN lands in the lowest tier.
    pub fn from_rating(rating: f64) -> Self {
        if rating.is_nan() {
            return Self::NeedsImprovement;
        }
        match rating.floor().clamp(0.0, 4.0) as u8 {
            0 => Self::NeedsImprovement,
            1 => Self::Average,
            2 => Self::SomewhatSatisfied,
            3 => Self::Satisfied,
            _ => Self::VerySatisfied,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NeedsImprovement => "개선 필요",
            Self::Average => "보통",
            Self::SomewhatSatisfied => "다소 만족",
            Self::Satisfied => "만족",
            Self::VerySatisfied => "매우 만족",
        }
    }
}

impl fmt::Display for RatingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingSummary {
    pub tier: RatingTier,
    pub label: &'static str,
}

pub fn summarize(rating: f64) -> RatingSummary {
    let tier = RatingTier::from_rating(rating);
    RatingSummary {
        tier,
        label: tier.label(),
    }
}

/// Header line for an activity's review section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewHeadline {
    pub summary: RatingSummary,
    /// Rating with one decimal place, e.g. `"4.3"`
    pub rating_text: String,
    /// Review count with thousands separators, e.g. `"1,204"`
    pub count_text: String,
}

impl ReviewHeadline {
    pub fn new(rating: f64, review_count: u64) -> Self {
        Self {
            summary: summarize(rating),
            rating_text: format!("{:.1}", rating),
            count_text: group_thousands(review_count),
        }
    }
}

impl fmt::Display for ReviewHeadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "★ {} {} ({}개 후기)",
            self.rating_text, self.summary.label, self.count_text
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_floor_of_rating() {
        assert_eq!(summarize(0.0).tier, RatingTier::NeedsImprovement);
        assert_eq!(summarize(0.99).tier, RatingTier::NeedsImprovement);
        assert_eq!(summarize(1.0).tier, RatingTier::Average);
        assert_eq!(summarize(2.5).tier, RatingTier::SomewhatSatisfied);
        assert_eq!(summarize(3.999).tier, RatingTier::Satisfied);
        assert_eq!(summarize(4.7).tier, RatingTier::VerySatisfied);
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(summarize(5.0).tier, RatingTier::VerySatisfied);
        assert_eq!(summarize(120.0).tier, RatingTier::VerySatisfied);
        assert_eq!(summarize(f64::INFINITY).tier, RatingTier::VerySatisfied);
        assert_eq!(summarize(-3.2).tier, RatingTier::NeedsImprovement);
        assert_eq!(summarize(f64::NAN).tier, RatingTier::NeedsImprovement);
    }

    #[test]
    fn tier_index_stays_in_range() {
        let mut rating = -2.0;
        while rating < 7.0 {
            let tier = summarize(rating).tier.index();
            assert!(tier <= 4);
            assert_eq!(tier as f64, rating.clamp(0.0, 4.999).floor());
            rating += 0.25;
        }
    }

    #[test]
    fn labels_line_up_with_tiers() {
        assert_eq!(summarize(0.5).label, "개선 필요");
        assert_eq!(summarize(1.5).label, "보통");
        assert_eq!(summarize(2.5).label, "다소 만족");
        assert_eq!(summarize(3.5).label, "만족");
        assert_eq!(summarize(4.5).label, "매우 만족");
    }

    #[test]
    fn headline_formats_rating_and_count() {
        let headline = ReviewHeadline::new(4.26, 1_234_567);
        assert_eq!(headline.rating_text, "4.3");
        assert_eq!(headline.count_text, "1,234,567");
        assert_eq!(headline.to_string(), "★ 4.3 매우 만족 (1,234,567개 후기)");

        assert_eq!(ReviewHeadline::new(3.0, 999).count_text, "999");
        assert_eq!(ReviewHeadline::new(3.0, 1000).count_text, "1,000");
        assert_eq!(ReviewHeadline::new(3.0, 0).count_text, "0");
    }
}
