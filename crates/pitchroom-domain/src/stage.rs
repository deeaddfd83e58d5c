//! Stage state machines
//!
//! [`PipelineStage`] tracks one submission's extraction run; transitions are
//! forward-only and any component may short-circuit to `Final` with a
//! degraded record, but the run never aborts the enclosing submission flow.
//! [`ReviewStage`] is the administrator-facing due-diligence ladder.

/// State of one submission's extraction pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Raw upload received, nothing done yet
    New,
    /// Document converted to plain text
    TextExtracted,
    /// Generation backend was called
    ModelInvoked,
    /// Raw response parsed into a field mapping
    Parsed,
    /// Categorical fields reconciled against vocabularies
    VocabReconciled,
    /// Every schema field present (sentinel filled in)
    Defaulted,
    /// Record handed off; terminal
    Final,
}

impl PipelineStage {
    /// The next stage in the pipeline; `Final` is terminal
    pub fn advance(&self) -> Self {
        match self {
            PipelineStage::New => PipelineStage::TextExtracted,
            PipelineStage::TextExtracted => PipelineStage::ModelInvoked,
            PipelineStage::ModelInvoked => PipelineStage::Parsed,
            PipelineStage::Parsed => PipelineStage::VocabReconciled,
            PipelineStage::VocabReconciled => PipelineStage::Defaulted,
            PipelineStage::Defaulted | PipelineStage::Final => PipelineStage::Final,
        }
    }

    /// Whether the run has reached its terminal state
    pub fn is_final(&self) -> bool {
        matches!(self, PipelineStage::Final)
    }

    /// Get the stage name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::New => "new",
            PipelineStage::TextExtracted => "text_extracted",
            PipelineStage::ModelInvoked => "model_invoked",
            PipelineStage::Parsed => "parsed",
            PipelineStage::VocabReconciled => "vocab_reconciled",
            PipelineStage::Defaulted => "defaulted",
            PipelineStage::Final => "final",
        }
    }
}

/// Due-diligence / operations stage of a submission under review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewStage {
    /// Newly arrived, not yet contacted
    Identified,
    /// Introductory call held
    IntroCall,
    /// NDA signed and deck received
    NdaAndDeck,
    /// Financials under review
    Financials,
    /// Four-pager drafted
    FourPager,
    /// First investment committee
    Ic1,
    /// Second investment committee
    Ic2,
    /// Local due diligence
    LocalDd,
    /// Round raised
    Raised,
    /// Portfolio company operating
    Operating,
    /// Position exited
    Exited,
    /// Written off
    Bankrupt,
}

impl ReviewStage {
    /// All review stages in pipeline order
    pub const ALL: [ReviewStage; 12] = [
        ReviewStage::Identified,
        ReviewStage::IntroCall,
        ReviewStage::NdaAndDeck,
        ReviewStage::Financials,
        ReviewStage::FourPager,
        ReviewStage::Ic1,
        ReviewStage::Ic2,
        ReviewStage::LocalDd,
        ReviewStage::Raised,
        ReviewStage::Operating,
        ReviewStage::Exited,
        ReviewStage::Bankrupt,
    ];

    /// Get the stage's display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStage::Identified => "Identified",
            ReviewStage::IntroCall => "Intro call",
            ReviewStage::NdaAndDeck => "NDA and Deck",
            ReviewStage::Financials => "Financials",
            ReviewStage::FourPager => "4-pager",
            ReviewStage::Ic1 => "IC1",
            ReviewStage::Ic2 => "IC2",
            ReviewStage::LocalDd => "Local DD",
            ReviewStage::Raised => "Raised",
            ReviewStage::Operating => "Operating",
            ReviewStage::Exited => "Exited",
            ReviewStage::Bankrupt => "Bankrupt",
        }
    }

    /// Parse a stage from its display name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl Default for ReviewStage {
    fn default() -> Self {
        ReviewStage::Identified
    }
}

impl std::str::FromStr for ReviewStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid review stage: {}", s))
    }
}

impl std::fmt::Display for ReviewStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_walks_forward_to_final() {
        let mut stage = PipelineStage::New;
        let mut steps = 0;
        while !stage.is_final() {
            stage = stage.advance();
            steps += 1;
        }
        assert_eq!(steps, 6);
        assert_eq!(stage.advance(), PipelineStage::Final);
    }

    #[test]
    fn test_review_stage_round_trip() {
        for stage in ReviewStage::ALL {
            assert_eq!(ReviewStage::parse(stage.as_str()), Some(stage));
        }
    }

    #[test]
    fn test_review_stage_parse_is_case_insensitive() {
        assert_eq!(ReviewStage::parse("intro call"), Some(ReviewStage::IntroCall));
        assert_eq!(ReviewStage::parse("  RAISED "), Some(ReviewStage::Raised));
        assert_eq!(ReviewStage::parse("Series Z"), None);
    }

    #[test]
    fn test_default_is_identified() {
        assert_eq!(ReviewStage::default(), ReviewStage::Identified);
    }
}
