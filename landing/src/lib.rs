//! # octorouter-landing
//!
//! Leptos SSR renderer for the OctoRouter marketing site.
//!
//! The site is content-driven: literal records in [`content`] flow
//! through pure section renderers in [`components`], concatenated in the
//! fixed order [`compose::page_sections`] declares. Rendering is one
//! synchronous pass from content to an HTML string - no hydration, no
//! reactive runtime, no I/O - so the same input always produces the
//! same page.
//!
//! ## Quick start
//!
//! ```rust
//! use octorouter_landing::{render_home, Variant};
//!
//! let html = render_home(Variant::Extended);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//!
//! std::fs::write("index.html", html).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - content records and the literal copy
//! - [`compose`] - the presentation variant and ordered page model
//! - [`config`] - the shared navigation/branding configuration
//! - [`theme`] - light/dark class pairs keyed by semantic role
//! - [`components`] - Leptos section and card renderers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod compose;
pub mod config;
pub mod content;
pub mod theme;

use components::{section_view, Document, Nav};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use compose::{Section, Variant};
pub use config::{base_options, nav_config, BrandMark, NavConfig};

/// Render the complete home page for a presentation variant.
///
/// Returns a full HTML document as a `String`, including
/// `<!DOCTYPE html>`.
pub fn render_home(variant: Variant) -> String {
    let doc = view! { <Document variant=variant /> };

    // Leptos doesn't include DOCTYPE, so add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Render a single section of the page model to an HTML fragment.
pub fn render_section(section: Section) -> String {
    section_view(section).to_html()
}

/// Render only the navigation chrome for a variant.
///
/// Useful for the hosting shell and for checking both brand-mark shapes
/// without rendering a whole page.
pub fn render_nav(variant: Variant) -> String {
    let config = nav_config(variant);
    view! { <Nav config=config /> }.to_html()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_is_deterministic() {
        for variant in [Variant::Compact, Variant::Extended] {
            assert_eq!(render_home(variant), render_home(variant));
        }
    }

    #[test]
    fn home_page_is_a_complete_document() {
        let html = render_home(Variant::Extended);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("OctoRouter"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn extended_page_carries_every_section_in_order() {
        let html = render_home(Variant::Extended);
        let positions: Vec<_> = ["id=\"hero\"", "id=\"features\"", "id=\"how-it-works\"",
            "id=\"code-preview\"", "id=\"use-cases\"", "id=\"faq\""]
            .iter()
            .map(|id| html.find(id).expect("section missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn compact_page_omits_the_later_sections() {
        let html = render_home(Variant::Compact);
        assert!(html.contains("id=\"hero\""));
        assert!(html.contains("id=\"features\""));
        assert!(html.contains("id=\"code-preview\""));
        assert!(!html.contains("id=\"how-it-works\""));
        assert!(!html.contains("id=\"use-cases\""));
        assert!(!html.contains("id=\"faq\""));
    }

    #[test]
    fn section_chrome_survives_hero_render() {
        // Background decoration is chrome, not content.
        let html = render_section(Section::Hero);
        assert!(html.contains("pointer-events-none"));
        assert!(html.contains("animate-pulse"));
    }

    #[test]
    fn every_color_bearing_section_ships_dark_classes() {
        for variant in [Variant::Compact, Variant::Extended] {
            let html = render_home(variant);
            assert!(html.contains("dark:"));
        }
    }
}
