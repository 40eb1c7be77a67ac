//! Paper Catalog
//!
//! Data model for the pre-loaded research paper catalog: the `Paper` record,
//! the two fixed collections (`Category::Red` / `Category::Blue`), and the
//! impact-tier derivation. The catalog is embedded as a JSON artifact at
//! compile time and deserialized once at startup; it is never mutated
//! afterwards, and every displayed sequence is derived fresh from it.

use serde::Deserialize;

/// Fixed resolver prefix for DOI links. The raw `doi` value is appended
/// verbatim, no encoding.
pub const DOI_RESOLVER: &str = "https://doi.org/";

/// The embedded catalog artifact. Produced by the ingestion build step,
/// treated as a static input here.
static CATALOG_JSON: &str = include_str!("../../assets/papers.json");

// ============================================================================
// Types
// ============================================================================

/// The two labeled collections of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Red,
    Blue,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Red => "red",
            Category::Blue => "blue",
        }
    }

    /// Panel heading for this collection.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Red => "Red Team",
            Category::Blue => "Blue Team",
        }
    }

    /// One-line description shown under the panel heading.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Red => "Attacks, jailbreaks, and adversarial evaluation",
            Category::Blue => "Defenses, alignment, and safety tooling",
        }
    }

    pub fn all() -> &'static [Category] {
        &[Category::Red, Category::Blue]
    }
}

/// A single research paper record.
///
/// Immutable once loaded. `id` is not part of the artifact; it is assigned at
/// catalog construction from the category and position (`red-0`, `blue-3`, …)
/// so per-card state can be keyed by a stable identity rather than a
/// render-time index.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paper {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub authors: String,
    pub year: i32,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub citations: u32,
    pub impact: f32,
    /// Absent in the artifact is equivalent to empty: no chips, no matches.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub doi: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "dateAdded")]
    pub date_added: Option<String>,
    pub pdf_filename: Option<String>,
}

impl Paper {
    /// Resolver link for the DOI, when one is present.
    pub fn doi_link(&self) -> Option<String> {
        self.doi.as_ref().map(|doi| format!("{DOI_RESOLVER}{doi}"))
    }

    pub fn impact_tier(&self) -> ImpactTier {
        ImpactTier::from_score(self.impact)
    }
}

/// Three-tier indicator derived from the numeric impact score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactTier {
    High,
    Medium,
    Low,
}

impl ImpactTier {
    /// Fixed thresholds: ≥85 high, ≥70 medium, else low.
    pub fn from_score(score: f32) -> Self {
        if score >= 85.0 {
            ImpactTier::High
        } else if score >= 70.0 {
            ImpactTier::Medium
        } else {
            ImpactTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactTier::High => "High Impact",
            ImpactTier::Medium => "Medium Impact",
            ImpactTier::Low => "Low Impact",
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// The complete, immutable paper catalog: two ordered collections, set once
/// at load time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    red: Vec<Paper>,
    #[serde(default)]
    blue: Vec<Paper>,
}

impl Catalog {
    /// Parse a catalog artifact and assign stable per-record ids.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        for &category in Category::all() {
            let papers = match category {
                Category::Red => &mut catalog.red,
                Category::Blue => &mut catalog.blue,
            };
            for (position, paper) in papers.iter_mut().enumerate() {
                paper.id = format!("{}-{}", category.as_str(), position);
            }
        }
        Ok(catalog)
    }

    pub fn papers(&self, category: Category) -> &[Paper] {
        match category {
            Category::Red => &self.red,
            Category::Blue => &self.blue,
        }
    }

    /// Total record count across both collections.
    pub fn total(&self) -> usize {
        self.red.len() + self.blue.len()
    }
}

/// Load the catalog embedded into the binary.
pub fn load_catalog() -> Result<Catalog, serde_json::Error> {
    Catalog::parse(CATALOG_JSON)
}
