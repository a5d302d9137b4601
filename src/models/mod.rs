//! Domain models
//!
//! This module contains the canonical schema the rating engine works on.
//! Request DTOs are normalised into these types before the engine is invoked.

pub mod contest;
pub mod participant;
pub mod rating;
pub mod submission;

pub use contest::*;
pub use participant::*;
pub use rating::*;
pub use submission::*;
