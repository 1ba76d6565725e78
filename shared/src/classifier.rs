use crate::catalog::{Catalog, CategoryProfile};
use crate::error::AnalysisError;
use crate::model::{ClassificationResult, ImageHandle, WasteCategory};
use crate::settings::Settings;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::VecDeque;
use std::time::Duration;

pub const UNRECOGNIZED_MESSAGE: &str =
    "We couldn't recognize this item. Try a clearer photo or a different angle.";

pub type ClassificationOutcome = Result<ClassificationResult, AnalysisError>;

/// Strategy that turns an image into a classification outcome. The caller
/// waits [`ClassificationBackend::delay`] before asking for the outcome.
pub trait ClassificationBackend {
    fn classify(&mut self, image: &ImageHandle) -> ClassificationOutcome;

    fn delay(&self) -> Duration;
}

/// Random label picker over the catalog's category profiles.
pub struct MockClassifier<R: Rng> {
    profiles: Vec<CategoryProfile>,
    failure_rate: f64,
    delay: Duration,
    rng: R,
}

impl<R: Rng> MockClassifier<R> {
    pub fn new(catalog: &Catalog, settings: &Settings, rng: R) -> Self {
        Self {
            profiles: catalog.profiles.clone(),
            failure_rate: settings.failure_rate(),
            delay: settings.analysis_delay(),
            rng,
        }
    }
}

impl<R: Rng> ClassificationBackend for MockClassifier<R> {
    fn classify(&mut self, image: &ImageHandle) -> ClassificationOutcome {
        if self.rng.gen_bool(self.failure_rate) {
            log::info!("Simulated analysis failure for image {}", image.id);
            return Err(AnalysisError::new(UNRECOGNIZED_MESSAGE));
        }

        let profile = self
            .profiles
            .choose(&mut self.rng)
            .ok_or_else(|| AnalysisError::new(UNRECOGNIZED_MESSAGE))?;

        log::info!("Image {} classified as {}", image.id, profile.category);
        Ok(profile.to_result())
    }

    fn delay(&self) -> Duration {
        self.delay
    }
}

/// Deterministic backend: replays queued outcomes, then keeps answering with
/// the fallback category.
pub struct FixedClassifier {
    catalog: Catalog,
    fallback: WasteCategory,
    queued: VecDeque<Result<WasteCategory, String>>,
    delay: Duration,
}

impl FixedClassifier {
    pub fn new(catalog: Catalog, fallback: WasteCategory) -> Self {
        Self {
            catalog,
            fallback,
            queued: VecDeque::new(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn then_category(mut self, category: WasteCategory) -> Self {
        self.queued.push_back(Ok(category));
        self
    }

    pub fn then_failure(mut self, message: impl Into<String>) -> Self {
        self.queued.push_back(Err(message.into()));
        self
    }

    fn result_for(&self, category: WasteCategory) -> ClassificationOutcome {
        self.catalog
            .profile(category)
            .map(CategoryProfile::to_result)
            .ok_or_else(|| AnalysisError::new(UNRECOGNIZED_MESSAGE))
    }
}

impl ClassificationBackend for FixedClassifier {
    fn classify(&mut self, _image: &ImageHandle) -> ClassificationOutcome {
        match self.queued.pop_front() {
            Some(Ok(category)) => self.result_for(category),
            Some(Err(message)) => Err(AnalysisError::new(message)),
            None => self.result_for(self.fallback),
        }
    }

    fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogRepository, EmbeddedCatalog};
    use crate::model::{CaptureSource, ImageId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn image() -> ImageHandle {
        ImageHandle {
            id: ImageId(1),
            name: "bottle.jpg".into(),
            mime: "image/jpeg".into(),
            source: CaptureSource::Upload,
            url: "blob:bottle".into(),
        }
    }

    fn settings_with_failure_rate(rate: f64) -> Settings {
        let mut settings = Settings::default();
        settings.analysis.failure_rate = rate;
        settings
    }

    #[test]
    fn every_outcome_is_result_xor_error_with_non_empty_predictions() {
        let catalog = EmbeddedCatalog.load().unwrap();
        let mut classifier =
            MockClassifier::new(&catalog, &Settings::default(), StdRng::seed_from_u64(42));

        let mut failures = 0;
        for _ in 0..500 {
            match classifier.classify(&image()) {
                Ok(result) => {
                    assert!(!result.predictions.is_empty());
                    assert!(!result.disposal_tips.is_empty());
                    assert_eq!(result.predictions[0].category, result.primary_category);
                    assert_eq!(result.is_recyclable(), result.predictions[0].recyclable);
                }
                Err(err) => {
                    assert_eq!(err.message, UNRECOGNIZED_MESSAGE);
                    failures += 1;
                }
            }
        }
        // ~10% failure rate; loose bounds keep the seed from mattering.
        assert!((10..=100).contains(&failures), "failures = {failures}");
    }

    #[test]
    fn zero_failure_rate_never_fails() {
        let catalog = EmbeddedCatalog.load().unwrap();
        let mut classifier = MockClassifier::new(
            &catalog,
            &settings_with_failure_rate(0.0),
            StdRng::seed_from_u64(3),
        );
        assert!((0..200).all(|_| classifier.classify(&image()).is_ok()));
    }

    #[test]
    fn certain_failure_always_fails() {
        let catalog = EmbeddedCatalog.load().unwrap();
        let mut classifier = MockClassifier::new(
            &catalog,
            &settings_with_failure_rate(1.0),
            StdRng::seed_from_u64(3),
        );
        assert!((0..50).all(|_| classifier.classify(&image()).is_err()));
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let catalog = EmbeddedCatalog.load().unwrap();
        let run = |seed| {
            let mut c = MockClassifier::new(&catalog, &Settings::default(), StdRng::seed_from_u64(seed));
            (0..20)
                .map(|_| c.classify(&image()).map(|r| r.primary_category).ok())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn delay_stays_in_window() {
        let catalog = EmbeddedCatalog.load().unwrap();
        let classifier =
            MockClassifier::new(&catalog, &Settings::default(), StdRng::seed_from_u64(0));
        let delay = classifier.delay();
        assert!(delay >= Duration::from_millis(1500) && delay <= Duration::from_millis(2500));
    }

    #[test]
    fn fixed_classifier_replays_queue_then_falls_back() {
        let catalog = EmbeddedCatalog.load().unwrap();
        let mut classifier = FixedClassifier::new(catalog, WasteCategory::Landfill)
            .then_category(WasteCategory::Compostable)
            .then_failure("blurry");

        assert_eq!(
            classifier.classify(&image()).unwrap().primary_category,
            WasteCategory::Compostable
        );
        assert_eq!(classifier.classify(&image()).unwrap_err().message, "blurry");
        assert_eq!(
            classifier.classify(&image()).unwrap().primary_category,
            WasteCategory::Landfill
        );
    }
}
