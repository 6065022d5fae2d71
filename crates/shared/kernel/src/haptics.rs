//! Haptic feedback as a device capability.
//!
//! The host capability is probed once, when [`Haptics::select`] is called at startup.
//! Call sites only ever see a [`Haptics`] handle, which silently does nothing when the
//! host cannot vibrate.

use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// A vibration pattern in milliseconds: a single pulse, or alternating on/off durations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PulsePattern {
    Single(u32),
    Sequence(Cow<'static, [u32]>),
}

impl PulsePattern {
    /// Short pulse acknowledging a tap.
    pub const TAP: Self = Self::Single(40);

    /// On/off/on pattern marking a transaction milestone.
    pub const MILESTONE: Self = Self::Sequence(Cow::Borrowed(&[100, 50, 100]));

    #[must_use]
    pub fn durations(&self) -> &[u32] {
        match self {
            Self::Single(ms) => std::slice::from_ref(ms),
            Self::Sequence(steps) => &steps[..],
        }
    }

    /// Wall-clock length of the whole pattern, pauses included.
    #[must_use]
    pub fn total(&self) -> Duration {
        Duration::from_millis(self.durations().iter().map(|&ms| u64::from(ms)).sum())
    }

    /// Argument accepted by `navigator.vibrate`.
    #[must_use]
    pub fn to_js(&self) -> String {
        match self {
            Self::Single(ms) => ms.to_string(),
            Self::Sequence(steps) => {
                let joined = steps.iter().map(u32::to_string).collect::<Vec<_>>().join(",");
                format!("[{joined}]")
            },
        }
    }
}

/// A host that may be able to vibrate.
pub trait HapticDevice: Debug + Send + Sync {
    /// Whether the host exposes a vibration capability at all.
    fn is_available(&self) -> bool;

    /// Fire-and-forget pulse. Implementations must never fail loudly.
    fn pulse(&self, pattern: &PulsePattern);
}

/// Device for hosts without vibration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticDevice for NoopHaptics {
    fn is_available(&self) -> bool {
        false
    }

    fn pulse(&self, _pattern: &PulsePattern) {}
}

/// Shared handle to the haptic device chosen at startup.
#[derive(Debug, Clone)]
pub struct Haptics {
    device: Arc<dyn HapticDevice>,
}

impl Default for Haptics {
    fn default() -> Self {
        Self::disabled()
    }
}

impl Haptics {
    /// Uses `device` if it reports the capability, otherwise falls back to [`NoopHaptics`].
    pub fn select<D: HapticDevice + 'static>(device: D) -> Self {
        if device.is_available() {
            debug!(device = ?device, "Haptic feedback enabled");
            Self { device: Arc::new(device) }
        } else {
            debug!(device = ?device, "Haptic feedback unavailable, pulses are skipped");
            Self::disabled()
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self { device: Arc::new(NoopHaptics) }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.device.is_available()
    }

    pub fn pulse(&self, pattern: &PulsePattern) {
        trace!(pattern = %pattern.to_js(), "Haptic pulse");
        self.device.pulse(pattern);
    }

    pub fn tap(&self) {
        self.pulse(&PulsePattern::TAP);
    }

    pub fn milestone(&self) {
        self.pulse(&PulsePattern::MILESTONE);
    }
}

/// Vibrates through the webview's `navigator.vibrate`.
///
/// Only mobile webviews and browsers implement the API; desktop webviews report the
/// capability as missing so [`Haptics::select`] falls back to a no-op.
#[cfg(feature = "client")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewHaptics;

#[cfg(feature = "client")]
impl HapticDevice for WebviewHaptics {
    fn is_available(&self) -> bool {
        cfg!(any(target_os = "android", target_os = "ios", target_arch = "wasm32"))
    }

    fn pulse(&self, pattern: &PulsePattern) {
        let script =
            format!("if ('vibrate' in navigator) {{ navigator.vibrate({}); }}", pattern.to_js());
        let _ = dioxus::document::eval(&script);
    }
}

/// Test double that records every pulse it receives.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Clone)]
pub struct RecordingHaptics {
    available: bool,
    pulses: Arc<parking_lot::Mutex<Vec<PulsePattern>>>,
}

#[cfg(any(test, feature = "testing"))]
impl Default for RecordingHaptics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl RecordingHaptics {
    #[must_use]
    pub fn new() -> Self {
        Self { available: true, pulses: Arc::default() }
    }

    /// A device that claims the host cannot vibrate.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { available: false, ..Self::new() }
    }

    #[must_use]
    pub fn pulses(&self) -> Vec<PulsePattern> {
        self.pulses.lock().clone()
    }
}

#[cfg(any(test, feature = "testing"))]
impl HapticDevice for RecordingHaptics {
    fn is_available(&self) -> bool {
        self.available
    }

    fn pulse(&self, pattern: &PulsePattern) {
        self.pulses.lock().push(pattern.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_render_for_the_vibration_api() {
        assert_eq!(PulsePattern::TAP.to_js(), "40");
        assert_eq!(PulsePattern::MILESTONE.to_js(), "[100,50,100]");
        assert_eq!(PulsePattern::MILESTONE.total(), Duration::from_millis(250));
    }

    #[test]
    fn available_device_receives_pulses() {
        let device = RecordingHaptics::new();
        let haptics = Haptics::select(device.clone());

        haptics.tap();
        haptics.milestone();

        assert!(haptics.is_enabled());
        assert_eq!(device.pulses(), vec![PulsePattern::TAP, PulsePattern::MILESTONE]);
    }

    #[test]
    fn unavailable_device_is_never_called() {
        let device = RecordingHaptics::unavailable();
        let haptics = Haptics::select(device.clone());

        haptics.tap();

        assert!(!haptics.is_enabled());
        assert!(device.pulses().is_empty());
    }
}
