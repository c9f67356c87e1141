//! # stormwatch-domain
//!
//! Pure domain model for the stormwatch surveillance dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Clips** (motion-triggered recordings) and their typed list rendering
//! - Define **Settings** (the four detection tunables) and their form encoding
//! - Define **Endpoints** (the backend URLs the dashboard talks to)
//! - Define the **live image** cache buster and the **player** state machine
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod clip;
pub mod endpoint;
pub mod live;
pub mod player;
pub mod settings;
