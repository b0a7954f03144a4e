//! Feature grid and its card.

use leptos::prelude::*;

use super::SectionHeader;
use crate::content::Feature;
use crate::theme::{classes, Role};

/// The feature grid. One card per entry, input order preserved.
#[component]
pub fn Features(
    /// Feature entries to render.
    items: Vec<Feature>,
) -> impl IntoView {
    view! {
        <section id="features" class="features px-4 py-16">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    eyebrow="Features"
                    title="Everything a gateway should do"
                    description="Routing, budgets, and deployment handled at the edge of your stack."
                />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 text-left">
                    {items
                        .into_iter()
                        .map(|f| view! { <FeatureCard feature=f /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One feature card: icon, title, description, hover emphasis.
#[component]
fn FeatureCard(
    /// The feature to render.
    feature: Feature,
) -> impl IntoView {
    view! {
        <div class=format!(
            "feature-card group p-6 rounded-2xl border transition-all {} {} {}",
            classes(Role::Surface),
            classes(Role::SurfaceBorder),
            classes(Role::SurfaceHover),
        )>
            <div class="text-3xl mb-4 grayscale group-hover:grayscale-0 transition-all duration-500">
                {feature.icon}
            </div>
            <h3 class=format!("text-lg font-bold mb-2 {}", classes(Role::Heading))>
                {feature.title}
            </h3>
            <p class=format!("text-sm leading-relaxed {}", classes(Role::Body))>
                {feature.description}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::compose::Section;
    use crate::content::FEATURES;
    use crate::render_section;

    #[test]
    fn renders_one_card_per_feature() {
        let html = render_section(Section::Features(FEATURES));
        assert_eq!(html.matches("feature-card").count(), FEATURES.len());
    }

    #[test]
    fn cards_keep_authored_order() {
        let html = render_section(Section::Features(FEATURES));
        let a = html.find("Semantic Routing").unwrap();
        let b = html.find("Cost Controls").unwrap();
        let c = html.find("Docker Ready").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn empty_strings_render_as_empty_content_not_a_crash() {
        const BLANK: &[crate::content::Feature] =
            &[crate::content::Feature { title: "", description: "", icon: "" }];
        let html = render_section(Section::Features(BLANK));
        assert_eq!(html.matches("feature-card").count(), 1);
    }

    #[test]
    fn empty_grid_keeps_section_chrome() {
        let html = render_section(Section::Features(&[]));
        assert_eq!(html.matches("feature-card").count(), 0);
        assert!(html.contains("section-header"));
        assert!(html.contains("id=\"features\""));
    }
}
