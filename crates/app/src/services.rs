//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod clip_list;
pub mod live_image;
pub mod playback;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;
