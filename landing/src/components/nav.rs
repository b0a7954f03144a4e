//! Shared navigation chrome, built from the layout configuration.
//!
//! The nav never owns its branding: it consumes the [`NavConfig`] value
//! the provider hands to the hosting shell.

use leptos::prelude::*;

use crate::config::{BrandMark, NavConfig};
use crate::theme::{classes, Role};

/// Site navigation bar: brand mark, product name, shared links.
#[component]
pub fn Nav(
    /// The shared layout configuration.
    config: NavConfig,
) -> impl IntoView {
    view! {
        <nav class=format!(
            "nav sticky top-0 z-10 border-b backdrop-blur-md {}",
            classes(Role::NavSurface),
        )>
            <div class="max-w-6xl mx-auto px-4 h-14 flex items-center justify-between">
                <a href="/" class="nav-brand font-bold flex items-center gap-2">
                    <Brand mark=config.mark />
                    <span class=format!("nav-title {}", classes(Role::Heading))>
                        {config.product_name}
                    </span>
                </a>
                <div class="nav-links flex items-center gap-6">
                    {config
                        .links
                        .into_iter()
                        .map(|link| {
                            let target = if link.external { Some("_blank") } else { None };
                            view! {
                                <a
                                    href=link.href
                                    target=target
                                    class=format!(
                                        "nav-link text-sm font-medium transition-colors {}",
                                        classes(Role::Body),
                                    )
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}

/// The brand mark, in either of its two shapes.
#[component]
fn Brand(
    /// The mark to render.
    mark: BrandMark,
) -> impl IntoView {
    match mark {
        BrandMark::Logo { src, alt } => {
            view! { <img class="nav-logo h-6 w-auto" src=src alt=alt /> }.into_any()
        }
        BrandMark::Monogram { letters } => view! {
            <span class=format!(
                "nav-monogram h-6 w-6 rounded-md inline-flex items-center justify-center text-xs font-extrabold {}",
                classes(Role::Monogram),
            )>{letters}</span>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use crate::compose::Variant;
    use crate::{render_home, render_nav};

    #[test]
    fn logo_variant_renders_image_and_product_name() {
        let html = render_nav(Variant::Compact);
        assert!(html.contains("nav-logo"));
        assert!(html.contains("octorouter-logo.svg"));
        assert!(html.contains("OctoRouter"));
    }

    #[test]
    fn monogram_variant_renders_badge_and_product_name() {
        let html = render_nav(Variant::Extended);
        assert!(html.contains("nav-monogram"));
        assert!(html.contains("OR"));
        assert!(html.contains("OctoRouter"));
    }

    #[test]
    fn every_page_gets_the_shared_links() {
        for variant in [Variant::Compact, Variant::Extended] {
            let html = render_home(variant);
            assert!(html.contains("href=\"/docs\""));
            assert!(html.contains("github.com/oviecodes/octo-router"));
        }
    }
}
