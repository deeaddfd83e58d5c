//! Controlled vocabularies
//!
//! Fixed ordered sets of canonical labels used for reconciliation, filtering
//! and reporting. Labels never change at runtime; matching only maps external
//! input onto these sets, never extends them. All lists are process-wide
//! constants and safe to share across concurrent pipeline runs.

/// A fixed ordered set of canonical string labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    name: &'static str,
    labels: &'static [&'static str],
}

impl Vocabulary {
    /// Create a vocabulary over a static label list
    pub const fn new(name: &'static str, labels: &'static [&'static str]) -> Self {
        Self { name, labels }
    }

    /// Vocabulary name, for logs and error messages
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Canonical labels, in their fixed order
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Whether the exact label is part of the vocabulary
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| *l == label)
    }
}

/// The 17 UN Sustainable Development Goals
pub const SDGS: Vocabulary = Vocabulary::new(
    "sdg",
    &[
        "No poverty (SDG 1)",
        "Zero hunger (SDG 2)",
        "Good health and well-being (SDG 3)",
        "Quality education (SDG 4)",
        "Gender equality (SDG 5)",
        "Clean water and sanitation (SDG 6)",
        "Affordable and clean energy (SDG 7)",
        "Decent work and economic growth (SDG 8)",
        "Industry, innovation and infrastructure (SDG 9)",
        "Reduced inequalities (SDG 10)",
        "Sustainable cities and communities (SDG 11)",
        "Responsible consumption and production (SDG 12)",
        "Climate action (SDG 13)",
        "Life below water (SDG 14)",
        "Life on land (SDG 15)",
        "Peace, justice, and strong institutions (SDG 16)",
        "Partnerships for the goals (SDG 17)",
    ],
);

/// Project maturity stages
pub const MATURITY_STAGES: Vocabulary = Vocabulary::new(
    "maturity",
    &["Ideation", "Validation", "Pilot", "Growth", "Scale", "Mature"],
);

/// Sector / theme labels
pub const SECTORS: Vocabulary = Vocabulary::new(
    "sector",
    &[
        "Agriculture",
        "Air",
        "Biodiversity & ecosystems",
        "Climate",
        "Diversity & inclusion",
        "Education",
        "Employment / Livelihoods creation",
        "Energy",
        "Financial services",
        "Health",
        "Infrastructure",
        "Land",
        "Oceans & coastal zones",
        "Sustainable cities",
        "Sustainable consumption & production",
        "Sustainable tourism",
        "Water Treatment",
        "Other",
    ],
);

/// Operating regions
pub const REGIONS: Vocabulary = Vocabulary::new(
    "region",
    &["Global", "Western Economies", "Africa", "Asia", "SEA", "Latam"],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdg_count() {
        assert_eq!(SDGS.labels().len(), 17);
    }

    #[test]
    fn test_contains_is_exact() {
        assert!(SDGS.contains("No poverty (SDG 1)"));
        assert!(!SDGS.contains("no poverty (sdg 1)"));
        assert!(!SDGS.contains("No poverty"));
    }

    #[test]
    fn test_maturity_order() {
        assert_eq!(MATURITY_STAGES.labels().first(), Some(&"Ideation"));
        assert_eq!(MATURITY_STAGES.labels().last(), Some(&"Mature"));
    }
}
