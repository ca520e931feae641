//! Page Transitions
//!
//! Internal links fade the page out before navigating.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Whether a click on a link with this `href` and `target` gets the fade.
/// Only same-site relative references qualify; anything carrying a scheme
/// (`https:`, `mailto:`, `javascript:`, `data:` ...) or an authority (`//`)
/// navigates on its own, as do fragments.
pub fn should_intercept(href: &str, target: Option<&str>, modified: bool) -> bool {
    let href = href.trim();
    if href.is_empty() || modified {
        return false;
    }
    if matches!(target, Some(t) if !t.is_empty() && t != "_self") {
        return false;
    }
    !(href.starts_with('#') || href.starts_with("//") || has_scheme(href))
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"` before any path,
/// query or fragment delimiter.
fn has_scheme(href: &str) -> bool {
    let Some(colon) = href.find(':') else {
        return false;
    };
    let scheme = &href[..colon];
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Installs one delegated click listener on the document. Call once.
pub fn install(delay_ms: u32) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        if ev.default_prevented() {
            return;
        }
        let Some(link) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href]").ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let modified = ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key();
        if !should_intercept(&href, link.get_attribute("target").as_deref(), modified) {
            return;
        }

        ev.prevent_default();
        fade_out_then_go(href, delay_ms);
    });

    if let Err(err) = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::error!("[TRANSITION] could not install link listener: {:?}", err);
    }
    // Listener lives as long as the page
    on_click.forget();
}

fn fade_out_then_go(href: String, delay_ms: u32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(body) = window.document().and_then(|d| d.body()) {
        let _ = body.class_list().add_1("fade-out");
    }
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if let Err(err) = window.location().set_href(&href) {
            log::error!("[TRANSITION] navigation to {} failed: {:?}", href, err);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_links_are_intercepted() {
        assert!(should_intercept("/plantoes", None, false));
        assert!(should_intercept("escalas/", Some("_self"), false));
        assert!(should_intercept("/usuarios?page=2", Some(""), false));
        assert!(should_intercept("./plantoes?hora=08:00", None, false));
        assert!(should_intercept("escalas/3:editar", None, false));
    }

    #[test]
    fn test_any_scheme_passes_through() {
        assert!(!should_intercept("vbscript:msgbox(1)", None, false));
        assert!(!should_intercept("data:text/html,hi", None, false));
        assert!(!should_intercept("ftp://files.example/x", None, false));
        assert!(!should_intercept("tel:+5511999999999", None, false));
    }

    #[test]
    fn test_other_links_pass_through() {
        assert!(!should_intercept("#topo", None, false));
        assert!(!should_intercept("javascript:void(0)", None, false));
        assert!(!should_intercept("JavaScript:alert(1)", None, false));
        assert!(!should_intercept("https://vercel.com", None, false));
        assert!(!should_intercept("//cdn.example/x.js", None, false));
        assert!(!should_intercept("mailto:rh@escala360.com", None, false));
        assert!(!should_intercept("", None, false));
        assert!(!should_intercept("/plantoes", Some("_blank"), false));
        assert!(!should_intercept("/plantoes", None, true));
    }
}
