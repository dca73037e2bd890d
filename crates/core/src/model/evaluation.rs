//! Score percentage and the qualitative tier shown on the results screen.

/// `round(100 * score / total)`, or 0 for an empty quiz.
///
/// Halves round up, and a score above `total` is clamped to 100.
#[must_use]
pub fn percentage(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let score = score.min(total);
    let rounded = (200 * score + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

/// Five fixed bands over `[0, 100]`, each inclusive of its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// 100
    Perfect,
    /// 85 to 99
    Excellent,
    /// 70 to 84
    Good,
    /// 50 to 69
    Fair,
    /// below 50
    NeedsPractice,
}

impl Tier {
    #[must_use]
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            100.. => Tier::Perfect,
            85..=99 => Tier::Excellent,
            70..=84 => Tier::Good,
            50..=69 => Tier::Fair,
            _ => Tier::NeedsPractice,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Tier::Perfect => "Perfect score!",
            Tier::Excellent => "Excellent work!",
            Tier::Good => "Good job!",
            Tier::Fair => "Not bad!",
            Tier::NeedsPractice => "Keep practicing!",
        }
    }

    #[must_use]
    pub fn feedback(self) -> &'static str {
        match self {
            Tier::Perfect => {
                "You answered every question correctly. Your grammar is rock solid."
            }
            Tier::Excellent => {
                "You have a strong grasp of these rules. Review the few you missed and you will be flawless."
            }
            Tier::Good => {
                "You know most of the rules. Read the explanations for your mistakes to close the gaps."
            }
            Tier::Fair => {
                "You are on your way. Focus on the categories with the lowest scores and try again."
            }
            Tier::NeedsPractice => {
                "These rules are still new to you. Start with Beginner questions and read each explanation carefully."
            }
        }
    }
}
