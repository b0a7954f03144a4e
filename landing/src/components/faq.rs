//! Frequently asked questions.

use leptos::prelude::*;

use super::SectionHeader;
use crate::content::FaqItem;
use crate::theme::{classes, Role};

/// The FAQ section. Static question/answer cards, no disclosure state.
#[component]
pub fn Faq(
    /// Questions to render, in authored order.
    items: Vec<FaqItem>,
) -> impl IntoView {
    view! {
        <section id="faq" class="faq px-4 py-16">
            <div class="max-w-3xl mx-auto">
                <SectionHeader eyebrow="FAQ" title="Common questions" />
                <div class="flex flex-col gap-4 text-left">
                    {items
                        .into_iter()
                        .map(|q| view! { <FaqCard item=q /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One question/answer card.
#[component]
fn FaqCard(
    /// The entry to render.
    item: FaqItem,
) -> impl IntoView {
    view! {
        <div class=format!(
            "faq-item p-6 rounded-2xl border {} {}",
            classes(Role::Surface),
            classes(Role::SurfaceBorder),
        )>
            <h3 class=format!("text-base font-bold mb-2 {}", classes(Role::Heading))>
                {item.question}
            </h3>
            <p class=format!("text-sm leading-relaxed {}", classes(Role::Body))>
                {item.answer}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::compose::Section;
    use crate::content::FAQ;
    use crate::render_section;

    #[test]
    fn renders_one_card_per_question() {
        let html = render_section(Section::Faq(FAQ));
        assert_eq!(html.matches("faq-item").count(), FAQ.len());
    }

    #[test]
    fn questions_keep_authored_order() {
        let html = render_section(Section::Faq(FAQ));
        let mut last = 0;
        for item in FAQ {
            // The question text itself may contain escaped entities; match
            // on a stable prefix instead.
            let needle: String = item.question.chars().take_while(|c| *c != '&').collect();
            let pos = html[last..].find(needle.trim()).expect("question missing");
            last += pos + 1;
        }
    }
}
