//! Shared layout configuration: the navigation branding every page gets.
//!
//! The hosting shell wraps each page in chrome it builds from one
//! immutable [`NavConfig`]. The provider here is total and
//! side-effect-free: no I/O, no environment reads, just a value. The
//! generator binary serializes it to `site.json` so the shell receives
//! it by injection at build time rather than through shared state.

use serde::Serialize;

use crate::compose::Variant;

/// The brand mark shown next to the product name.
///
/// Both shapes satisfy the same contract: a short visual badge rendered
/// adjacent to the product name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BrandMark {
    /// External image asset.
    Logo {
        /// Image path, relative to the site root.
        src: &'static str,
        /// Alt text.
        alt: &'static str,
    },
    /// Inline two-letter gradient badge.
    Monogram {
        /// The letters, e.g. `"OR"`.
        letters: &'static str,
    },
}

/// One link in the shared navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link label.
    pub label: &'static str,
    /// Link target.
    pub href: &'static str,
    /// Whether the link leaves the site (rendered with `target="_blank"`).
    pub external: bool,
}

/// Site-wide navigation branding, built once per site build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavConfig {
    /// The brand mark.
    pub mark: BrandMark,
    /// Product name rendered adjacent to the mark.
    pub product_name: &'static str,
    /// Short tagline, used in the document title.
    pub tagline: &'static str,
    /// Shared navigation links.
    pub links: Vec<NavLink>,
}

/// Default layout options for the current revision of the site.
///
/// Zero-argument and pure; repeated calls return equal values.
pub fn base_options() -> NavConfig {
    nav_config(Variant::Extended)
}

/// Layout options for a specific presentation variant.
///
/// `Compact` carries the original image logo; `Extended` carries the
/// inline gradient monogram. Everything else is shared.
pub fn nav_config(variant: Variant) -> NavConfig {
    let mark = match variant {
        Variant::Compact => BrandMark::Logo {
            src: "/octorouter-logo.svg",
            alt: "OctoRouter logo",
        },
        Variant::Extended => BrandMark::Monogram { letters: "OR" },
    };
    NavConfig {
        mark,
        product_name: "OctoRouter",
        tagline: "The Smart Gateway for LLM Infrastructure",
        links: vec![
            NavLink { label: "Docs", href: "/docs", external: false },
            NavLink {
                label: "GitHub",
                href: "https://github.com/oviecodes/octo-router",
                external: true,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_options_is_stable_across_calls() {
        assert_eq!(base_options(), base_options());
    }

    #[test]
    fn product_name_is_never_empty() {
        assert!(!base_options().product_name.is_empty());
        assert!(!nav_config(Variant::Compact).product_name.is_empty());
    }

    #[test]
    fn each_variant_carries_its_own_mark() {
        assert!(matches!(nav_config(Variant::Compact).mark, BrandMark::Logo { .. }));
        assert!(matches!(
            nav_config(Variant::Extended).mark,
            BrandMark::Monogram { .. }
        ));
    }

    #[test]
    fn manifest_serializes_the_mark_kind() {
        let json = serde_json::to_string(&base_options()).unwrap();
        assert!(json.contains("\"kind\":\"monogram\""));
        assert!(json.contains("\"product_name\":\"OctoRouter\""));
    }
}
