//! Media player port — the single shared clip player.

/// A media element that can be retargeted and controlled.
pub trait MediaPlayer: Send + Sync {
    fn pause(&self);

    /// Point the player's source at `url` and reload it.
    fn load(&self, url: &str);

    fn play(&self);
}
