use crate::assistant::AssistantScript;
use crate::error::CatalogError;
use crate::leaderboard::Leaderboard;
use crate::model::{ClassificationResult, EnvironmentalImpact, Prediction, WasteCategory};
use crate::rewards::{Badge, UserStats};
use crate::tips::SustainabilityTip;
use serde::{Deserialize, Serialize};

const EMBEDDED_CATALOG: &str = include_str!("../../config/catalog.yaml");

/// Canned classification output for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    pub category: WasteCategory,
    pub predictions: Vec<Prediction>,
    pub disposal_tips: Vec<String>,
    pub impact: EnvironmentalImpact,
}

impl CategoryProfile {
    pub fn to_result(&self) -> ClassificationResult {
        let mut result = ClassificationResult {
            primary_category: self.category,
            predictions: self.predictions.clone(),
            disposal_tips: self.disposal_tips.clone(),
            environmental_impact: self.impact,
        };
        result.sort_predictions();
        result
    }
}

/// All read-only data the app displays: classifier profiles and the
/// gamification, leaderboard, tip and assistant content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub profiles: Vec<CategoryProfile>,
    pub user: UserStats,
    pub badges: Vec<Badge>,
    pub leaderboard: Leaderboard,
    pub tips: Vec<SustainabilityTip>,
    pub assistant: AssistantScript,
}

impl Catalog {
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn profile(&self, category: WasteCategory) -> Option<&CategoryProfile> {
        self.profiles.iter().find(|p| p.category == category)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.profiles.is_empty() {
            return Err(CatalogError::Invalid("no category profiles".into()));
        }
        for profile in &self.profiles {
            if profile.predictions.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "{} profile has no predictions",
                    profile.category
                )));
            }
            if let Some(p) = profile
                .predictions
                .iter()
                .find(|p| !(0.0..=1.0).contains(&p.confidence))
            {
                return Err(CatalogError::Invalid(format!(
                    "{} profile has confidence {} for {} outside [0, 1]",
                    profile.category, p.confidence, p.category
                )));
            }
            let top = profile.to_result().predictions[0].category;
            if top != profile.category {
                return Err(CatalogError::Invalid(format!(
                    "{} profile ranks {} as its most confident prediction",
                    profile.category, top
                )));
            }
            if profile.disposal_tips.is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "{} profile has no disposal tips",
                    profile.category
                )));
            }
        }
        if self.assistant.replies.is_empty() {
            return Err(CatalogError::Invalid("assistant has no replies".into()));
        }
        Ok(())
    }
}

/// Source of the catalog. Swapping the implementation swaps where the mock
/// data comes from without touching presentation code.
pub trait CatalogRepository {
    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// The catalog compiled into the binary from `config/catalog.yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    pub fn source() -> &'static str {
        EMBEDDED_CATALOG
    }
}

impl CatalogRepository for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::from_yaml_str(EMBEDDED_CATALOG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn embedded_catalog_loads_and_covers_every_category() {
        let catalog = EmbeddedCatalog.load().unwrap();
        for category in WasteCategory::iter() {
            let profile = catalog.profile(category).expect("profile for every category");
            assert_eq!(profile.predictions[0].category, category);
        }
        assert_eq!(catalog.user.points, 1250);
        assert_eq!(catalog.badges.len(), 8);
        assert_eq!(catalog.tips.len(), 5);
        assert_eq!(catalog.leaderboard.weekly.len(), 10);
        assert_eq!(catalog.assistant.replies.len(), 5);
    }

    #[test]
    fn profile_impact_matches_category_table() {
        let catalog = EmbeddedCatalog.load().unwrap();
        let recyclable = catalog.profile(WasteCategory::Recyclable).unwrap();
        assert_eq!(recyclable.impact.co2_saved_kg, 3.5);
        assert_eq!(recyclable.impact.water_saved_liters, 500.0);
        assert_eq!(recyclable.impact.energy_saved_kwh, 7.2);

        let hazardous = catalog.profile(WasteCategory::Hazardous).unwrap();
        assert_eq!(hazardous.impact, EnvironmentalImpact::default());
    }

    #[test]
    fn only_recyclable_primary_is_flagged_recyclable() {
        let catalog = EmbeddedCatalog.load().unwrap();
        for profile in &catalog.profiles {
            let result = profile.to_result();
            assert_eq!(
                result.is_recyclable(),
                profile.category == WasteCategory::Recyclable,
                "{}",
                profile.category
            );
        }
    }

    #[test]
    fn empty_predictions_are_rejected() {
        let mut catalog = EmbeddedCatalog.load().unwrap();
        catalog.profiles[0].predictions.clear();
        assert!(matches!(catalog.validate(), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        let mut catalog = EmbeddedCatalog.load().unwrap();
        catalog.profiles[1].predictions[0].confidence = 1.5;
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("outside [0, 1]"));
    }

    #[test]
    fn profile_outranked_by_another_category_is_rejected() {
        let mut catalog = EmbeddedCatalog.load().unwrap();
        let recyclable = catalog
            .profiles
            .iter_mut()
            .find(|p| p.category == WasteCategory::Recyclable)
            .unwrap();
        let own = recyclable
            .predictions
            .iter_mut()
            .find(|p| p.category == WasteCategory::Recyclable)
            .unwrap();
        own.confidence = 0.05;

        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
        assert!(err.to_string().contains("Recyclable profile ranks Compostable"));
    }

    #[test]
    fn every_embedded_profile_leads_with_its_own_category() {
        let catalog = EmbeddedCatalog.load().unwrap();
        for profile in &catalog.profiles {
            let result = profile.to_result();
            assert_eq!(result.predictions[0].category, result.primary_category);
        }
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_yaml_str("profiles: {"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn serialized_catalog_reloads_unchanged() {
        let catalog = EmbeddedCatalog.load().unwrap();
        let yaml = serde_yaml::to_string(&catalog).unwrap();
        assert_eq!(Catalog::from_yaml_str(&yaml).unwrap(), catalog);
    }
}
