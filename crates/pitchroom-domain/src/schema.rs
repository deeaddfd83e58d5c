//! The fixed extraction schema
//!
//! The schema is a fixed ordered list of 20 named fields, invariant across
//! runs. Field names are the exact strings the model is asked to key its
//! JSON response by, and the exact column names reporting collaborators see.

/// One named slot of the fixed extraction output structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemaField {
    /// Registered name of the project
    ProjectName,
    /// Sector(s) the project operates in
    SpecificSectors,
    /// Operating region (Global, Africa, Asia, ...)
    RegionOfOperation,
    /// Main country of current operations
    MainCountry,
    /// How the project makes money
    BusinessModel,
    /// Maturity stage (Ideation ... Mature)
    MaturityStage,
    /// Founding/core team description
    CoreTeam,
    /// Key risks identified in the pitch
    KeyRisks,
    /// Trailing twelve-month revenues in USD
    Revenues,
    /// Year the project expects to break even
    BreakevenYear,
    /// Addressable market size or SOM in USD
    MarketSize,
    /// Expected internal rate of return, percent
    ExpectedIrr,
    /// Financing need or round size in USD
    FinancingNeed,
    /// Financing instrument (equity, debt, ...)
    Instrument,
    /// Use of proceeds, percent
    UseOfProceeds,
    /// Impact area description
    ImpactArea,
    /// Up to three targeted SDGs
    SdgsTargeted,
    /// Problem statement
    Problem,
    /// Solution statement
    Solution,
    /// Barrier(s) to entry
    BarriersToEntry,
}

/// Expected value shape of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Free text
    Text,
    /// Numeric amount (currency amounts are plain numbers, no symbols)
    Numeric,
    /// Percentage value
    Percentage,
    /// Calendar year
    Year,
    /// Single value from a controlled vocabulary
    Enumerated,
    /// Small list of values from a controlled vocabulary
    EnumeratedList,
}

impl SchemaField {
    /// All schema fields in their fixed order
    pub const ALL: [SchemaField; 20] = [
        SchemaField::ProjectName,
        SchemaField::SpecificSectors,
        SchemaField::RegionOfOperation,
        SchemaField::MainCountry,
        SchemaField::BusinessModel,
        SchemaField::MaturityStage,
        SchemaField::CoreTeam,
        SchemaField::KeyRisks,
        SchemaField::Revenues,
        SchemaField::BreakevenYear,
        SchemaField::MarketSize,
        SchemaField::ExpectedIrr,
        SchemaField::FinancingNeed,
        SchemaField::Instrument,
        SchemaField::UseOfProceeds,
        SchemaField::ImpactArea,
        SchemaField::SdgsTargeted,
        SchemaField::Problem,
        SchemaField::Solution,
        SchemaField::BarriersToEntry,
    ];

    /// Get the field's display name, as used in prompts, JSON keys and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaField::ProjectName => "Project Name",
            SchemaField::SpecificSectors => "Specific Sector(s)",
            SchemaField::RegionOfOperation => "Region of operation",
            SchemaField::MainCountry => "Main country of current operations",
            SchemaField::BusinessModel => "Business Model",
            SchemaField::MaturityStage => "Maturity stage",
            SchemaField::CoreTeam => "Core team",
            SchemaField::KeyRisks => "Key risks",
            SchemaField::Revenues => "Last 12 months revenues (USD)",
            SchemaField::BreakevenYear => "Breakeven year",
            SchemaField::MarketSize => "Market size or SOM (USD)",
            SchemaField::ExpectedIrr => "Expected IRR (%)",
            SchemaField::FinancingNeed => "Financing need or round size (USD)",
            SchemaField::Instrument => "Instrument",
            SchemaField::UseOfProceeds => "Use of proceeds (%)",
            SchemaField::ImpactArea => "Impact Area",
            SchemaField::SdgsTargeted => "3 main SDGs targeted",
            SchemaField::Problem => "Problem",
            SchemaField::Solution => "Solution",
            SchemaField::BarriersToEntry => "Barrier(s) to entry",
        }
    }

    /// Parse a field from its display name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }

    /// The value shape this field is expected to hold
    pub fn shape(&self) -> ValueShape {
        match self {
            SchemaField::Revenues
            | SchemaField::MarketSize
            | SchemaField::FinancingNeed => ValueShape::Numeric,
            SchemaField::ExpectedIrr | SchemaField::UseOfProceeds => ValueShape::Percentage,
            SchemaField::BreakevenYear => ValueShape::Year,
            SchemaField::MaturityStage | SchemaField::RegionOfOperation => ValueShape::Enumerated,
            SchemaField::SdgsTargeted => ValueShape::EnumeratedList,
            _ => ValueShape::Text,
        }
    }
}

impl std::str::FromStr for SchemaField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown schema field: {}", s))
    }
}

impl std::fmt::Display for SchemaField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
