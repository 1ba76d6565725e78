use crate::model::{ClassificationResult, WasteCategory};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBar {
    pub label: String,
    pub percent: u8,
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactTile {
    pub label: &'static str,
    pub value: String,
    pub class: &'static str,
}

/// Everything the results panel displays, derived from one result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub category: String,
    pub recyclable: bool,
    pub badge: &'static str,
    pub bars: Vec<ConfidenceBar>,
    pub tips: Vec<(usize, String)>,
    pub tiles: [ImpactTile; 3],
    pub share_text: String,
}

pub fn percent(confidence: f32) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

pub fn share_text(result: &ClassificationResult) -> String {
    format!(
        "I just classified {} waste with EcoSnap and saved {}kg of CO2!",
        result.primary_category, result.environmental_impact.co2_saved_kg
    )
}

impl From<&ClassificationResult> for ResultView {
    fn from(result: &ClassificationResult) -> Self {
        let recyclable = result.is_recyclable();
        let impact = result.environmental_impact;

        ResultView {
            category: result.primary_category.to_string(),
            recyclable,
            badge: if recyclable { "Recyclable" } else { "Not Recyclable" },
            bars: result
                .predictions
                .iter()
                .enumerate()
                .map(|(i, p)| ConfidenceBar {
                    label: p.category.to_string(),
                    percent: percent(p.confidence),
                    primary: i == 0,
                })
                .collect(),
            tips: result
                .disposal_tips
                .iter()
                .enumerate()
                .map(|(i, tip)| (i + 1, tip.clone()))
                .collect(),
            tiles: [
                ImpactTile {
                    label: "CO₂ Saved",
                    value: format!("{} kg", impact.co2_saved_kg),
                    class: "impact-co2",
                },
                ImpactTile {
                    label: "Water Saved",
                    value: format!("{} L", impact.water_saved_liters),
                    class: "impact-water",
                },
                ImpactTile {
                    label: "Energy Saved",
                    value: format!("{} kWh", impact.energy_saved_kwh),
                    class: "impact-energy",
                },
            ],
            share_text: share_text(result),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedResult {
    pub id: Uuid,
    pub category: WasteCategory,
    pub co2_saved_kg: f64,
}

/// In-memory history of saved classifications for the current page load.
#[derive(Debug, Default)]
pub struct SavedResults {
    entries: Vec<SavedResult>,
}

impl SavedResults {
    pub fn save(&mut self, result: &ClassificationResult) -> &SavedResult {
        let entry = SavedResult {
            id: Uuid::new_v4(),
            category: result.primary_category,
            co2_saved_kg: result.environmental_impact.co2_saved_kg,
        };
        log::info!("Saved {} result {}", entry.category, entry.id);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[SavedResult] {
        &self.entries
    }

    pub fn total_co2_saved_kg(&self) -> f64 {
        self.entries.iter().map(|e| e.co2_saved_kg).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogRepository, EmbeddedCatalog};

    fn result(category: WasteCategory) -> ClassificationResult {
        EmbeddedCatalog
            .load()
            .unwrap()
            .profile(category)
            .unwrap()
            .to_result()
    }

    #[test]
    fn share_text_names_category_and_co2_in_kg() {
        let text = share_text(&result(WasteCategory::Recyclable));
        assert!(text.contains("Recyclable"));
        assert!(text.contains("3.5kg"));

        let text = share_text(&result(WasteCategory::Landfill));
        assert!(text.contains("Landfill"));
        assert!(text.contains("0kg"));
    }

    #[test]
    fn view_badge_follows_first_prediction() {
        let mut r = result(WasteCategory::Compostable);
        assert_eq!(ResultView::from(&r).badge, "Not Recyclable");

        r.predictions[0].recyclable = true;
        let view = ResultView::from(&r);
        assert!(view.recyclable);
        assert_eq!(view.badge, "Recyclable");
    }

    #[test]
    fn view_bars_tips_and_tiles() {
        let view = ResultView::from(&result(WasteCategory::Recyclable));

        let percents: Vec<u8> = view.bars.iter().map(|b| b.percent).collect();
        assert_eq!(percents, vec![85, 12, 3]);
        assert!(view.bars[0].primary && !view.bars[1].primary);

        assert_eq!(view.tips[0], (1, "Clean and dry before recycling".to_string()));
        assert_eq!(view.tips.len(), 3);

        assert_eq!(view.tiles[0].value, "3.5 kg");
        assert_eq!(view.tiles[1].value, "500 L");
        assert_eq!(view.tiles[2].value, "7.2 kWh");
    }

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(percent(0.126), 13);
        assert_eq!(percent(1.7), 100);
        assert_eq!(percent(-0.2), 0);
    }

    #[test]
    fn saving_records_lightweight_entries() {
        let mut saved = SavedResults::default();
        let first = saved.save(&result(WasteCategory::Recyclable)).id;
        let second = saved.save(&result(WasteCategory::Compostable)).id;

        assert_ne!(first, second);
        assert_eq!(saved.entries().len(), 2);
        assert!((saved.total_co2_saved_kg() - 5.6).abs() < 1e-9);
    }
}
