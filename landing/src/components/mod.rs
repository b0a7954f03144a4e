//! Leptos components for the marketing page.
//!
//! One file per section, plus the document shell and shared chrome.
//! Every component is a one-shot pure transform from content records to
//! markup: input order preserved, given strings rendered verbatim, no
//! signals and no reactive runtime.

mod code_preview;
mod document;
mod faq;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod nav;
mod section_header;
mod use_cases;

pub use code_preview::CodePreview;
pub use document::Document;
pub(crate) use document::section_view;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub(crate) use section_header::SectionHeader;
pub use use_cases::UseCases;
