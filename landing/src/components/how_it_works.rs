//! Request-lifecycle walkthrough: numbered step cards.

use leptos::prelude::*;

use super::SectionHeader;
use crate::content::Step;
use crate::theme::{classes, Role};

/// The "How it works" section. Ordinals are authored, not generated;
/// the renderer prints them as given.
#[component]
pub fn HowItWorks(
    /// Steps to render, in authored order.
    items: Vec<Step>,
) -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works px-4 py-16">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    eyebrow="How it works"
                    title="One request, three moves"
                    description="Every call follows the same path through the gateway."
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 text-left">
                    {items
                        .into_iter()
                        .map(|s| view! { <StepCard step=s /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One numbered step card. The ordinal is the visual anchor.
#[component]
fn StepCard(
    /// The step to render.
    step: Step,
) -> impl IntoView {
    view! {
        <div class=format!(
            "step-card p-6 rounded-2xl border {} {}",
            classes(Role::Surface),
            classes(Role::SurfaceBorder),
        )>
            <div class=format!(
                "step-ordinal text-4xl font-extrabold mb-4 {}",
                classes(Role::Accent),
            )>{step.ordinal}</div>
            <h3 class=format!("text-lg font-bold mb-2 {}", classes(Role::Heading))>
                {step.title}
            </h3>
            <p class=format!("text-sm leading-relaxed {}", classes(Role::Body))>
                {step.description}
            </p>
        </div>
    }
}
