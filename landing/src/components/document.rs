//! Root document component: the complete HTML page.
//!
//! This is the hosting-shell seam. The shell chrome (nav, footer) wraps
//! `<main>`, which carries the composed sections in their authored
//! order. The shell consumes the layout provider's value; the page
//! itself never touches navigation state.

use leptos::prelude::*;

use super::{CodePreview, Faq, Features, Footer, Hero, HowItWorks, Nav, UseCases};
use crate::compose::{page_sections, Section, Variant};
use crate::config::nav_config;
use crate::theme::{classes, Role};

/// The complete HTML document for one presentation variant.
#[component]
pub fn Document(
    /// Which revision of the page to render.
    variant: Variant,
) -> impl IntoView {
    let nav = nav_config(variant);
    let title = format!("{} — {}", nav.product_name, nav.tagline);
    let sections = page_sections(variant);

    view! {
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                // Utility classes are resolved by the external styling
                // system; the CDN build keeps the generated page standalone.
                <script src="https://cdn.tailwindcss.com"></script>
            </head>
            <body class=classes(Role::PageBg)>
                <Nav config=nav.clone() />
                <main class="flex flex-col">
                    {sections.into_iter().map(section_view).collect::<Vec<_>>()}
                </main>
                <Footer config=nav />
            </body>
        </html>
    }
}

/// Render one section of the page model.
///
/// Content slices are copied into owned vectors at this seam so the
/// section components can hold their props by value.
pub(crate) fn section_view(section: Section) -> AnyView {
    match section {
        Section::Hero => view! { <Hero /> }.into_any(),
        Section::Features(items) => {
            view! { <Features items=items.to_vec() /> }.into_any()
        }
        Section::HowItWorks(items) => {
            view! { <HowItWorks items=items.to_vec() /> }.into_any()
        }
        Section::CodePreview(sample) => {
            view! { <CodePreview sample=*sample /> }.into_any()
        }
        Section::UseCases(items) => {
            view! { <UseCases items=items.to_vec() /> }.into_any()
        }
        Section::Faq(items) => view! { <Faq items=items.to_vec() /> }.into_any(),
    }
}
