//! Shared heading block used by every titled section.

use leptos::prelude::*;

use crate::theme::{classes, Role};

/// Eyebrow + title + optional description, centered above a section.
///
/// Part of the section chrome: it renders even when the section's
/// content array is empty.
#[component]
pub fn SectionHeader(
    /// Small uppercase label above the title.
    eyebrow: &'static str,
    /// The section title.
    title: &'static str,
    /// Supporting sentence under the title. Empty string renders nothing.
    #[prop(default = "")]
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-header max-w-2xl mx-auto text-center mb-12">
            <p class=format!(
                "text-sm font-semibold uppercase tracking-wider mb-2 {}",
                classes(Role::Accent),
            )>{eyebrow}</p>
            <h2 class=format!(
                "text-3xl md:text-4xl font-bold tracking-tight {}",
                classes(Role::Heading),
            )>{title}</h2>
            {if description.is_empty() {
                view! { "" }.into_any()
            } else {
                view! {
                    <p class=format!("mt-4 text-lg {}", classes(Role::Body))>{description}</p>
                }
                .into_any()
            }}
        </div>
    }
}
