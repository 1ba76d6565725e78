//! Domain core of EcoSnap: capture validation, the simulated classifier,
//! the analysis session and everything the UI renders. Free of browser
//! APIs so it builds and tests natively as well as on `wasm32`.

pub mod assistant;
pub mod capture;
pub mod catalog;
pub mod classifier;
pub mod error;
pub mod leaderboard;
pub mod model;
pub mod notice;
pub mod presenter;
pub mod rewards;
pub mod session;
pub mod settings;
pub mod tips;

pub use catalog::{Catalog, CatalogRepository, EmbeddedCatalog};
pub use classifier::{ClassificationBackend, ClassificationOutcome, FixedClassifier, MockClassifier};
pub use error::{AnalysisError, CaptureError, CatalogError, SessionError};
pub use model::{
    CaptureSource, ClassificationResult, EnvironmentalImpact, ImageHandle, ImageId, Prediction,
    WasteCategory,
};
pub use session::{AnalysisSession, AnalysisState, RequestToken, Resolution};
pub use settings::Settings;
