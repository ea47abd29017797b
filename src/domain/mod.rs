// Domain layer - View-models and filter encoding
pub mod dashboard;
pub mod filters;
