//! Deployment-scenario grid.

use leptos::prelude::*;

use super::SectionHeader;
use crate::content::UseCase;
use crate::theme::{classes, Role};

/// The use-case grid. Two-field cards, no icon.
#[component]
pub fn UseCases(
    /// Use cases to render.
    items: Vec<UseCase>,
) -> impl IntoView {
    view! {
        <section id="use-cases" class="use-cases px-4 py-16">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    eyebrow="Use cases"
                    title="Where OctoRouter fits"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 text-left">
                    {items
                        .into_iter()
                        .map(|u| view! { <UseCaseCard use_case=u /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One use-case card.
#[component]
fn UseCaseCard(
    /// The use case to render.
    use_case: UseCase,
) -> impl IntoView {
    view! {
        <div class=format!(
            "use-case-card p-6 rounded-2xl border transition-all {} {} {}",
            classes(Role::Surface),
            classes(Role::SurfaceBorder),
            classes(Role::SurfaceHover),
        )>
            <h3 class=format!("text-lg font-bold mb-2 {}", classes(Role::Heading))>
                {use_case.title}
            </h3>
            <p class=format!("text-sm leading-relaxed {}", classes(Role::Body))>
                {use_case.description}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::compose::Section;
    use crate::content::USE_CASES;
    use crate::render_section;

    #[test]
    fn renders_one_card_per_use_case() {
        let html = render_section(Section::UseCases(USE_CASES));
        assert_eq!(html.matches("use-case-card").count(), USE_CASES.len());
    }

    #[test]
    fn empty_list_still_renders_the_section_shell() {
        let html = render_section(Section::UseCases(&[]));
        assert_eq!(html.matches("use-case-card").count(), 0);
        assert!(html.contains("id=\"use-cases\""));
        assert!(html.contains("Where OctoRouter fits"));
    }
}
