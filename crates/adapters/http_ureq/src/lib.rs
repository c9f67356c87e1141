//! # stormwatch-adapter-http-ureq
//!
//! Native implementation of the [`SurveillanceApi`] port built on
//! [ureq](https://docs.rs/ureq).
//!
//! ## Responsibilities
//! - Issue the four backend requests (`live.jpeg`, `clips`, `settings` GET/POST)
//! - Keep the blocking ureq calls off the async runtime (`spawn_blocking`)
//! - Map transport, status and decoding failures into [`TransportError`]
//!
//! ## Dependency rule
//! Depends on `stormwatch-app` (for the port trait) and `stormwatch-domain`
//! (for request/response types). Never leaks ureq types past this crate.

mod client;

pub use client::{HttpClientConfig, HttpSurveillanceApi};

#[doc(no_inline)]
pub use stormwatch_app::ports::SurveillanceApi;
#[doc(no_inline)]
pub use stormwatch_domain::error::TransportError;
