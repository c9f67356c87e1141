//! Live image cache buster.

/// Produces a fresh cache-busting value on every tick.
///
/// The value is the wall-clock time in milliseconds. When the clock has not
/// advanced (or went backwards) since the previous tick, the previous value
/// plus one is used instead, so two consecutive sources are never equal.
#[derive(Debug, Clone, Default)]
pub struct LiveImage {
    last: Option<i64>,
}

impl LiveImage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cache buster for a tick happening at `now_millis`.
    pub fn next(&mut self, now_millis: i64) -> i64 {
        let value = match self.last {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last = Some(value);
        value
    }

}
