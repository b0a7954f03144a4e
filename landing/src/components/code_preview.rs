//! Terminal-window preview of the routing configuration.

use leptos::prelude::*;

use crate::content::CodeSample;
use crate::theme::{classes, Role};

/// A code sample inside window chrome (traffic-light dots + file name).
#[component]
pub fn CodePreview(
    /// The snippet to preview.
    sample: CodeSample,
) -> impl IntoView {
    view! {
        <section id="code-preview" class="code-preview px-4 py-16">
            <div class=format!(
                "max-w-4xl mx-auto rounded-2xl border backdrop-blur-xl overflow-hidden shadow-2xl {}",
                classes(Role::CodeSurface),
            )>
                <div class=format!(
                    "px-4 py-2 flex items-center gap-1.5 border-b {}",
                    classes(Role::Divider),
                )>
                    <div class="w-3 h-3 rounded-full bg-red-500/50"></div>
                    <div class="w-3 h-3 rounded-full bg-yellow-500/50"></div>
                    <div class="w-3 h-3 rounded-full bg-green-500/50"></div>
                    <span class=format!(
                        "ml-2 text-xs font-mono italic {}",
                        classes(Role::Muted),
                    )>{sample.file_name}</span>
                </div>
                <div class="p-6 overflow-x-auto text-left">
                    <pre class=format!("text-sm font-mono {}", classes(Role::CodeText))>
                        <code>{sample.code}</code>
                    </pre>
                </div>
            </div>
        </section>
    }
}
