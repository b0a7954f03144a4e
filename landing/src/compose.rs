//! Page composition: the ordered section model for the home page.
//!
//! Two visual revisions of the home page ship from one model. The
//! presentation variant decides which sections appear and which brand
//! mark the navigation carries; it never reorders anything. Composition
//! is a pure function of the variant, so rendering the same page twice
//! always yields the same section sequence.

use crate::content::{
    CodeSample, FaqItem, Feature, Step, UseCase, CONFIG_PREVIEW, FAQ, FEATURES, STEPS, USE_CASES,
};

/// Which visual revision of the site to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// The launch revision: logo brand mark, shorter page.
    Compact,
    /// The current revision: monogram brand mark, full section set.
    Extended,
}

/// One section of the home page, carrying its content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Section {
    /// Headline, badge, and calls to action.
    Hero,
    /// The feature grid.
    Features(&'static [Feature]),
    /// Numbered request-lifecycle walkthrough.
    HowItWorks(&'static [Step]),
    /// Terminal-window preview of the routing config.
    CodePreview(&'static CodeSample),
    /// Deployment-scenario grid.
    UseCases(&'static [UseCase]),
    /// Question/answer cards.
    Faq(&'static [FaqItem]),
}

/// The ordered sections for a variant.
///
/// Order is fixed at authorship: Hero, Features, HowItWorks, CodePreview,
/// UseCases, Faq. `Compact` drops the later additions but keeps the
/// relative order of what remains.
pub fn page_sections(variant: Variant) -> Vec<Section> {
    match variant {
        Variant::Compact => vec![
            Section::Hero,
            Section::Features(FEATURES),
            Section::CodePreview(&CONFIG_PREVIEW),
        ],
        Variant::Extended => vec![
            Section::Hero,
            Section::Features(FEATURES),
            Section::HowItWorks(STEPS),
            Section::CodePreview(&CONFIG_PREVIEW),
            Section::UseCases(USE_CASES),
            Section::Faq(FAQ),
        ],
    }
}
