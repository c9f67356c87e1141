//! # stormwatch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `SurveillanceApi` — the four backend requests (driven/outbound)
//!   - `DashboardView` — the page the dashboard draws into
//!   - `MediaPlayer` — the shared clip player
//! - Define **use-case services**:
//!   - `LiveImageRefresher` — re-targets the live image every tick
//!   - `ClipListRefresher` — fetches and renders the clip list
//!   - `SettingsService` — populates and submits the settings form
//!   - `PlaybackService` — switches the player to a selected clip
//! - Provide the periodic **scheduler** with cancellable job handles
//! - Compose everything into the headless [`dashboard::DashboardClient`]
//!
//! ## Dependency rule
//! Depends on `stormwatch-domain` only (plus `tokio` for timers and tasks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod dashboard;
pub mod ports;
pub mod scheduler;
pub mod services;
