//! Garantie Common Library
//!
//! Von der Brücke und der Web-App (WASM) gemeinsam genutzte Typen und Logik

pub mod error;
pub mod export;
pub mod image;
pub mod relay_shape;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use export::{ExportPayload, SCHEMA_VERSION};
pub use image::{fit_inside, normalize_to_data_url, NormalizeOptions, PhotoFormat};
pub use relay_shape::validate_shape;
pub use store::{
    normalize_minutes, IdentificationPatch, ProblemDetailsPatch, WizardStore, WorkStepPatch,
};
pub use types::{
    IdentificationData, ProblemDetailsData, ProblemPhotoSlot, ProblemPhotos, WizardData,
    WorkProcessStep, REQUIRED_PROBLEM_PHOTOS,
};
