//! @ai:module:intent Classifier service access and prediction normalization
//! @ai:module:layer infrastructure
//! @ai:module:public_api ClassifierClientTrait, FastTextClient, MockClassifierClient, PredictionAdapter

pub mod adapter;
pub mod client;

pub use adapter::PredictionAdapter;
pub use client::{ClassifierClientTrait, FastTextClient, MockClassifierClient, Prediction};
