//! # stormwatch-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **dashboard host page** at `/`: an HTML shell that loads the
//!   WASM dashboard and tells it where the backend lives and how often to poll
//! - Serve the compiled **WASM bundle** and stylesheet under `/pkg`
//! - Answer `/health` for liveness checks
//!
//! The surveillance backend itself (live frames, clips, settings) is a
//! separate service; this adapter never proxies or stores any of it.
//!
//! ## Dependency rule
//! Depends on `stormwatch-app` (for the dashboard refresh periods) and
//! `stormwatch-domain` (for backend endpoints). Never leaks axum types into
//! the domain.

pub mod dashboard;
pub mod router;
pub mod state;
