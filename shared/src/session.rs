use crate::classifier::ClassificationOutcome;
use crate::error::{AnalysisError, SessionError};
use crate::model::{ClassificationResult, ImageHandle};
use derive_more::Display;

/// Generation counter carried by every classification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisTicket {
    pub token: RequestToken,
    pub image: ImageHandle,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Analyzing(RequestToken),
    Completed(ClassificationResult),
    Failed(AnalysisError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

/// Tracks the current image and its single in-flight classification.
///
/// Every new image or new request bumps the generation, so an outcome that
/// resolves late for an older request is recognised and discarded instead
/// of overwriting the newer state.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    generation: u64,
    image: Option<ImageHandle>,
    state: AnalysisState,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.state, AnalysisState::Analyzing(_))
    }

    /// Supersedes the current image and invalidates any pending request.
    /// Returns the previous image so its resources can be released.
    pub fn select_image(&mut self, image: ImageHandle) -> Option<ImageHandle> {
        self.generation += 1;
        self.state = AnalysisState::Idle;
        self.image.replace(image)
    }

    pub fn begin(&mut self) -> Result<AnalysisTicket, SessionError> {
        let image = self.image.clone().ok_or(SessionError::NoImageSelected)?;
        self.generation += 1;
        let token = RequestToken(self.generation);
        self.state = AnalysisState::Analyzing(token);
        log::debug!("Analysis {} started for image {}", token, image.id);
        Ok(AnalysisTicket { token, image })
    }

    /// Re-runs classification on the same image after a failure.
    pub fn retry(&mut self) -> Result<AnalysisTicket, SessionError> {
        match self.state {
            AnalysisState::Failed(_) => self.begin(),
            _ => Err(SessionError::NothingToRetry),
        }
    }

    pub fn resolve(&mut self, token: RequestToken, outcome: ClassificationOutcome) -> Resolution {
        if self.state != AnalysisState::Analyzing(token) {
            log::debug!("Dropping stale analysis result {}", token);
            return Resolution::Stale;
        }
        self.state = match outcome {
            Ok(result) => AnalysisState::Completed(result),
            Err(error) => AnalysisState::Failed(error),
        };
        Resolution::Applied
    }

    pub fn reset(&mut self) -> Option<ImageHandle> {
        self.generation += 1;
        self.state = AnalysisState::Idle;
        self.image.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogRepository, EmbeddedCatalog};
    use crate::classifier::{ClassificationBackend, FixedClassifier};
    use crate::model::{CaptureSource, ImageId, WasteCategory};

    fn image(id: u64) -> ImageHandle {
        ImageHandle {
            id: ImageId(id),
            name: format!("item-{id}.jpg"),
            mime: "image/jpeg".into(),
            source: CaptureSource::Upload,
            url: format!("blob:{id}"),
        }
    }

    fn classifier() -> FixedClassifier {
        FixedClassifier::new(EmbeddedCatalog.load().unwrap(), WasteCategory::Recyclable)
    }

    #[test]
    fn begin_without_image_fails() {
        let mut session = AnalysisSession::new();
        assert_eq!(session.begin().unwrap_err(), SessionError::NoImageSelected);
    }

    #[test]
    fn outcome_for_current_request_is_applied() {
        let mut session = AnalysisSession::new();
        let mut backend = classifier();
        session.select_image(image(1));
        let ticket = session.begin().unwrap();
        assert!(session.is_analyzing());

        let outcome = backend.classify(&ticket.image);
        assert_eq!(session.resolve(ticket.token, outcome), Resolution::Applied);
        assert!(matches!(session.state(), AnalysisState::Completed(r) if r.primary_category == WasteCategory::Recyclable));
    }

    #[test]
    fn late_result_for_previous_image_is_discarded() {
        let mut session = AnalysisSession::new();
        let mut backend = classifier()
            .then_category(WasteCategory::Hazardous)
            .then_category(WasteCategory::Compostable);

        session.select_image(image(1));
        let first = session.begin().unwrap();

        session.select_image(image(2));
        let second = session.begin().unwrap();

        let stale = backend.classify(&first.image);
        assert_eq!(session.resolve(first.token, stale), Resolution::Stale);
        assert!(session.is_analyzing());

        let fresh = backend.classify(&second.image);
        assert_eq!(session.resolve(second.token, fresh), Resolution::Applied);
        assert_eq!(session.image().unwrap().id, ImageId(2));
        assert!(matches!(session.state(), AnalysisState::Completed(r) if r.primary_category == WasteCategory::Compostable));
    }

    #[test]
    fn selecting_new_image_returns_previous_and_goes_idle() {
        let mut session = AnalysisSession::new();
        session.select_image(image(1));
        session.begin().unwrap();

        let previous = session.select_image(image(2));

        assert_eq!(previous.unwrap().id, ImageId(1));
        assert_eq!(session.state(), &AnalysisState::Idle);
    }

    #[test]
    fn outcome_resolves_once() {
        let mut session = AnalysisSession::new();
        session.select_image(image(1));
        let ticket = session.begin().unwrap();

        let failed = Err(AnalysisError::new("nope"));
        assert_eq!(session.resolve(ticket.token, failed.clone()), Resolution::Applied);
        assert_eq!(session.resolve(ticket.token, failed), Resolution::Stale);
    }

    #[test]
    fn retry_only_after_failure_and_reuses_image() {
        let mut session = AnalysisSession::new();
        session.select_image(image(5));
        assert_eq!(session.retry().unwrap_err(), SessionError::NothingToRetry);

        let ticket = session.begin().unwrap();
        session.resolve(ticket.token, Err(AnalysisError::new("blurry")));

        let retry = session.retry().unwrap();
        assert_ne!(retry.token, ticket.token);
        assert_eq!(retry.image.id, ImageId(5));
        assert!(session.is_analyzing());
    }

    #[test]
    fn reset_clears_image_and_invalidates_pending() {
        let mut session = AnalysisSession::new();
        session.select_image(image(1));
        let ticket = session.begin().unwrap();

        assert_eq!(session.reset().unwrap().id, ImageId(1));
        assert_eq!(
            session.resolve(ticket.token, Err(AnalysisError::new("late"))),
            Resolution::Stale
        );
        assert!(session.image().is_none());
    }
}
