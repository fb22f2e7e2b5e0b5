//! Domain layer containing the request-scoped business logic.
//!
//! This layer has no dependencies on infrastructure or presentation concerns.
//! All entities here are request-scoped values with no shared mutable state.
//!
//! # Modules
//!
//! - [`validation`] - Action-name and body validation with accumulated errors
//! - [`continent`] - Static ISO-3166 country to continent mapping
//! - [`action_date`] - Timezone-local action timestamp computation

pub mod action_date;
pub mod continent;
pub mod validation;
