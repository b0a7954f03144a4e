//! Content records and the literal copy for the marketing site.
//!
//! Everything the page shows lives here as `const` data. The records are
//! closed: title and description are always present, icon/ordinal are
//! section-specific extras. Renderers print whatever strings they are
//! given verbatim - content quality is enforced by the tests in this
//! module, not by runtime checks.

use serde::Serialize;

/// A call-to-action link (label + target).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Cta {
    /// Button label.
    pub label: &'static str,
    /// Link target.
    pub href: &'static str,
}

/// Copy for the hero section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HeroCopy {
    /// Small pill above the title.
    pub badge: &'static str,
    /// First line of the headline.
    pub title_top: &'static str,
    /// Second line of the headline.
    pub title_bottom: &'static str,
    /// Supporting paragraph under the headline.
    pub description: &'static str,
    /// Primary call to action.
    pub primary_cta: Cta,
    /// Secondary call to action.
    pub secondary_cta: Cta,
}

/// One entry in the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Card heading.
    pub title: &'static str,
    /// Card body text.
    pub description: &'static str,
    /// Emoji glyph shown above the heading.
    pub icon: &'static str,
}

/// One numbered step in the "How it works" walkthrough.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 1-based position, the card's visual anchor. Must be sequential
    /// within a section; the tests below enforce that on the literals.
    pub ordinal: usize,
    /// Card heading.
    pub title: &'static str,
    /// Card body text.
    pub description: &'static str,
}

/// One entry in the use-case grid. Two fields, no icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct UseCase {
    /// Card heading.
    pub title: &'static str,
    /// Card body text.
    pub description: &'static str,
}

/// One question/answer pair in the FAQ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    /// The question, rendered as the card heading.
    pub question: &'static str,
    /// The answer.
    pub answer: &'static str,
}

/// A code snippet previewed in terminal-window chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CodeSample {
    /// File name shown in the window title bar.
    pub file_name: &'static str,
    /// The snippet itself, rendered verbatim in a `<pre>` block.
    pub code: &'static str,
}

/// Hero copy for the home page.
pub const HERO: HeroCopy = HeroCopy {
    badge: "OpenAI compatible, cost-aware routing",
    title_top: "The Smart Gateway",
    title_bottom: "for LLM Infrastructure",
    description: "Route requests based on intent, cost, and latency. \
                  Maximize resilience with automatic fallbacks and local \
                  embedding-based classification.",
    primary_cta: Cta { label: "Get Started", href: "/docs" },
    secondary_cta: Cta {
        label: "View on GitHub",
        href: "https://github.com/oviecodes/octo-router",
    },
};

/// The three headline features.
pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Semantic Routing",
        description: "Locally run ONNX embeddings classify intent and route \
                      each request to the best model for the task.",
        icon: "🧠",
    },
    Feature {
        title: "Cost Controls",
        description: "Budgets with Redis-backed state. The gateway swaps to \
                      cheaper models automatically to stay under your limit.",
        icon: "💰",
    },
    Feature {
        title: "Docker Ready",
        description: "Built in Go, shipped as a single container. Drops into \
                      Kubernetes and modern orchestrators without ceremony.",
        icon: "🐳",
    },
];

/// The request lifecycle, as three numbered steps.
pub const STEPS: &[Step] = &[
    Step {
        ordinal: 1,
        title: "Receive Request",
        description: "An OpenAI-compatible request lands on the gateway. \
                      Auth, validation, and tenant resolution happen up front.",
    },
    Step {
        ordinal: 2,
        title: "Route & Optimize",
        description: "The routing pipeline scores providers by intent, cost, \
                      and latency, then picks the best model under budget.",
    },
    Step {
        ordinal: 3,
        title: "Proxy Response",
        description: "The gateway forwards the call, streams tokens back, and \
                      records usage for budgets and rate limits.",
    },
];

/// Deployment scenarios for the use-case grid.
pub const USE_CASES: &[UseCase] = &[
    UseCase {
        title: "Multi-Tenant SaaS",
        description: "Resolve tenants per request and keep every customer's \
                      keys, budgets, and rate limits isolated.",
    },
    UseCase {
        title: "Budget-Capped Teams",
        description: "Give each team a monthly spend ceiling. The gateway \
                      downgrades models before the cap, never after.",
    },
    UseCase {
        title: "Latency-Sensitive Apps",
        description: "Route to the provider answering fastest right now, from \
                      live measurements instead of static tables.",
    },
    UseCase {
        title: "Provider Failover",
        description: "When a provider degrades, automatic fallbacks retry the \
                      request elsewhere with no client-side changes.",
    },
];

/// Frequently asked questions.
pub const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "Is OctoRouter OpenAI-compatible?",
        answer: "Yes. Point any OpenAI SDK at the gateway's base URL and keep \
                 your existing request and response shapes, streaming included.",
    },
    FaqItem {
        question: "Which providers are supported?",
        answer: "OpenAI, Anthropic, and Gemini ship out of the box. Providers \
                 are declared in config.yaml and can be mixed per routing group.",
    },
    FaqItem {
        question: "How does semantic routing work?",
        answer: "A local ONNX embedding model classifies each prompt's intent, \
                 and routing groups map intents to the providers allowed to \
                 serve them. No prompt leaves the gateway for classification.",
    },
    FaqItem {
        question: "Can I cap spending?",
        answer: "Budgets are tracked in Redis per provider, team, or tenant. \
                 Near the limit the router swaps to cheaper models; past it, \
                 requests are rejected cleanly.",
    },
    FaqItem {
        question: "How do I deploy it?",
        answer: "One container. Docker Compose for a quick start, plain \
                 Kubernetes manifests for production, configuration as a \
                 single mounted config.yaml.",
    },
];

/// The routing-config preview shown in the code window.
pub const CONFIG_PREVIEW: CodeSample = CodeSample {
    file_name: "config.yaml",
    code: r#"routing:
  strategy: "weighted"
  policies:
    semantic:
      enabled: true
      engine: "embedding"
      model_path: "assets/models/embedding.onnx"
      groups:
        - name: "coding"
          required_capability: "code-gen"
          allow_providers: ["openai", "anthropic"]"#,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn feature_grid_matches_home_page_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["Semantic Routing", "Cost Controls", "Docker Ready"]);
    }

    #[test]
    fn step_ordinals_are_sequential_without_gaps() {
        let ordinals: Vec<_> = STEPS.iter().map(|s| s.ordinal).collect();
        let expected: Vec<_> = (1..=STEPS.len()).collect();
        assert_eq!(ordinals, expected);
    }

    #[test]
    fn step_titles_follow_the_request_lifecycle() {
        let titles: Vec<_> = STEPS.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["Receive Request", "Route & Optimize", "Proxy Response"]
        );
    }

    #[test]
    fn no_card_ships_with_empty_copy() {
        for f in FEATURES {
            assert!(!f.title.is_empty() && !f.description.is_empty());
            assert!(!f.icon.is_empty());
        }
        for s in STEPS {
            assert!(!s.title.is_empty() && !s.description.is_empty());
        }
        for u in USE_CASES {
            assert!(!u.title.is_empty() && !u.description.is_empty());
        }
        for q in FAQ {
            assert!(!q.question.is_empty() && !q.answer.is_empty());
        }
    }

    #[test]
    fn hero_copy_is_complete() {
        assert!(!HERO.badge.is_empty());
        assert!(!HERO.title_top.is_empty());
        assert!(!HERO.title_bottom.is_empty());
        assert!(!HERO.description.is_empty());
        assert!(!HERO.primary_cta.label.is_empty());
        assert!(!HERO.secondary_cta.href.is_empty());
    }

    #[test]
    fn config_preview_names_its_file() {
        assert_eq!(CONFIG_PREVIEW.file_name, "config.yaml");
        assert!(CONFIG_PREVIEW.code.contains("strategy"));
    }
}
