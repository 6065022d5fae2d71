use crate::shell::ShellEffect;
use dioxus::document;
use edupath_kernel::haptics::Haptics;
use tracing::{trace, warn};

/// Runs the page-level part of a shell effect.
///
/// Router moves (`Push`, `Replace`, `Back`) need the application's route type and are
/// left to the caller; they are ignored here.
pub fn apply_effect(effect: &ShellEffect, haptics: &Haptics) {
    let script = match effect {
        ShellEffect::Haptic(pattern) => {
            haptics.pulse(pattern);
            return;
        },
        ShellEffect::Push(_) | ShellEffect::Replace(_) | ShellEffect::Back => return,
        ShellEffect::ScrollToTop => "window.scrollTo(0, 0);".to_owned(),
        ShellEffect::LockBodyScroll => "document.body.style.overflow = 'hidden';".to_owned(),
        ShellEffect::UnlockBodyScroll => "document.body.style.overflow = 'unset';".to_owned(),
        ShellEffect::OpenExternal(url) => match serde_json::to_string(url) {
            Ok(quoted) => format!("window.open({quoted}, '_blank');"),
            Err(e) => {
                warn!(error = %e, url = %url, "Cannot encode external link");
                return;
            },
        },
    };

    trace!(?effect, "Running shell effect");
    let _ = document::eval(&script);
}
