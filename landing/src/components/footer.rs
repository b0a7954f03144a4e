//! Page footer: brand echo and shared links.

use leptos::prelude::*;

use crate::config::NavConfig;
use crate::theme::{classes, Role};

/// The footer, built from the same configuration as the nav.
#[component]
pub fn Footer(
    /// The shared layout configuration.
    config: NavConfig,
) -> impl IntoView {
    view! {
        <footer class=format!("footer border-t px-4 py-10 {}", classes(Role::Divider))>
            <div class="max-w-6xl mx-auto flex flex-col items-center gap-4 text-center">
                <span class=format!("footer-title font-bold {}", classes(Role::Heading))>
                    {config.product_name}
                </span>
                <div class="footer-links flex items-center gap-6">
                    {config
                        .links
                        .into_iter()
                        .map(|link| {
                            let target = if link.external { Some("_blank") } else { None };
                            view! {
                                <a
                                    href=link.href
                                    target=target
                                    class=format!("footer-link text-sm {}", classes(Role::Body))
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <p class=format!("footer-copyright text-xs {}", classes(Role::Muted))>
                    {config.tagline}
                </p>
            </div>
        </footer>
    }
}
