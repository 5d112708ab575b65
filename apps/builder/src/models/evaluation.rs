use serde::{Deserialize, Serialize};

/// Score and feedback returned by the ATS evaluation service.
///
/// The service is asked for 0–100 but nothing enforces it, so `score` is kept
/// as received and [`AtsEvaluation::display_score`] clamps at the edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsEvaluation {
    pub score: i64,
    #[serde(default)]
    pub feedback: Vec<String>,
}

/// Coarse bucket used to pick the score badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    NeedsWork,
    Fair,
    Strong,
}

impl AtsEvaluation {
    pub fn display_score(&self) -> u8 {
        self.score.clamp(0, 100) as u8
    }

    pub fn band(&self) -> ScoreBand {
        match self.display_score() {
            80..=100 => ScoreBand::Strong,
            50..=79 => ScoreBand::Fair,
            _ => ScoreBand::NeedsWork,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(score: i64) -> AtsEvaluation {
        AtsEvaluation {
            score,
            feedback: vec![],
        }
    }

    #[test]
    fn test_display_score_clamps_out_of_range_values() {
        assert_eq!(evaluation(140).display_score(), 100);
        assert_eq!(evaluation(-12).display_score(), 0);
        assert_eq!(evaluation(73).display_score(), 73);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(evaluation(85).band(), ScoreBand::Strong);
        assert_eq!(evaluation(50).band(), ScoreBand::Fair);
        assert_eq!(evaluation(49).band(), ScoreBand::NeedsWork);
        assert_eq!(evaluation(500).band(), ScoreBand::Strong);
    }

    #[test]
    fn test_feedback_defaults_to_empty() {
        let eval: AtsEvaluation = serde_json::from_str(r#"{"score": 64}"#).unwrap();
        assert_eq!(eval.score, 64);
        assert!(eval.feedback.is_empty());
    }
}
