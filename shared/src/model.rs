use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Identifier issued by [`crate::capture::ImageSlot`] for every accepted image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize)]
pub struct ImageId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, Serialize, Deserialize)]
pub enum CaptureSource {
    Upload,
    Camera,
}

/// A locally held image: an object URL for uploads or a PNG data URL for
/// camera snapshots. Never leaves the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageHandle {
    pub id: ImageId,
    pub name: String,
    pub mime: String,
    pub source: CaptureSource,
    pub url: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum WasteCategory {
    Recyclable,
    Compostable,
    Hazardous,
    Landfill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category: WasteCategory,
    pub confidence: f32,
    pub recyclable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentalImpact {
    pub co2_saved_kg: f64,
    pub water_saved_liters: f64,
    pub energy_saved_kwh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub primary_category: WasteCategory,
    pub predictions: Vec<Prediction>,
    pub disposal_tips: Vec<String>,
    pub environmental_impact: EnvironmentalImpact,
}

impl ClassificationResult {
    /// The entry that drives the recyclable badge. Predictions are never
    /// empty once a result has been built by the simulator.
    pub fn primary(&self) -> Option<&Prediction> {
        self.predictions.first()
    }

    pub fn is_recyclable(&self) -> bool {
        self.primary().is_some_and(|p| p.recyclable)
    }

    /// Orders predictions by descending confidence so that index 0 is the
    /// highest-confidence entry.
    pub fn sort_predictions(&mut self) {
        self.predictions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}
