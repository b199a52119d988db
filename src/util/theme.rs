//! Theme application for the settings-controlled appearance mode.
//!
//! Applies a `data-theme` attribute to the `<html>` element. The `Auto`
//! mode resolves against the system color-scheme preference. Server renders
//! safely no-op to keep output deterministic.

use crate::state::settings::ThemeMode;

/// Resolve `Auto` against the system preference; fixed modes pass through.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::Auto => {
            if system_prefers_dark() {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            }
        }
        fixed => fixed,
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        let attr = match resolve_mode(mode) {
            ThemeMode::Dark => "dark",
            _ => "light",
        };
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", attr);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
