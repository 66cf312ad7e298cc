//! # heartcheck core
//!
//! Core pipeline for the heart-disease screening front-end.
//!
//! This crate turns user-entered clinical values into a well-formed remote
//! prediction request and turns the response into a display model:
//! - Field schemas and categorical wire encodings ([`schema`])
//! - Per-submission form state with collection-time validation ([`form`])
//! - Wire encoding to the fixed thirteen-field JSON record ([`encode`])
//! - Display model assembly for the comparison chart ([`present`])
//!
//! **No network concerns**: the HTTP call to the prediction service lives in
//! `heartcheck-client`; terminal rendering lives in `heartcheck-cli`.

pub mod config;
pub mod encode;
pub mod error;
pub mod form;
pub mod present;
pub mod schema;
pub mod validation;

pub use config::{ClientConfig, DEFAULT_ENDPOINT_URL};
pub use encode::{encode, PredictionRequest};
pub use error::{ScreeningError, ScreeningResult};
pub use form::FormState;
pub use present::{present, DisplayModel, CHART_FEATURES, GOOD_RANGE, MAX_RANGE};
pub use schema::{
    field_schema, ExerciseAngina, FastingBloodSugar, FieldDomain, FieldSchema, RestingEcg, Sex,
    StSlope, Thalassemia, FIELD_SCHEMAS,
};
