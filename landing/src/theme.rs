//! Light/dark presentation table, keyed by semantic role.
//!
//! The styling engine is an external utility-class system; this crate's
//! obligation is that every color-bearing element carries both a light
//! and a dark treatment. Rather than branching on a theme at render
//! time, each role maps to a static `{ light, dark }` class pair and
//! both halves ship on the element. Determinism falls out for free.

/// Semantic styling roles used across the sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Whole-page background.
    PageBg,
    /// Card/panel background.
    Surface,
    /// Card/panel border.
    SurfaceBorder,
    /// Hover emphasis on interactive cards.
    SurfaceHover,
    /// Section and card headings.
    Heading,
    /// Body copy.
    Body,
    /// De-emphasized copy (eyebrows, captions).
    Muted,
    /// Accent text (links, badge copy, ordinals).
    Accent,
    /// Hero badge pill surface.
    BadgeSurface,
    /// Navigation bar surface.
    NavSurface,
    /// Code window surface.
    CodeSurface,
    /// Code text.
    CodeText,
    /// Primary call-to-action button.
    CtaPrimary,
    /// Secondary call-to-action button.
    CtaSecondary,
    /// Inline two-letter brand monogram.
    Monogram,
    /// Horizontal rules and header bars.
    Divider,
}

/// Every role, for exhaustive property checks.
pub const ROLES: &[Role] = &[
    Role::PageBg,
    Role::Surface,
    Role::SurfaceBorder,
    Role::SurfaceHover,
    Role::Heading,
    Role::Body,
    Role::Muted,
    Role::Accent,
    Role::BadgeSurface,
    Role::NavSurface,
    Role::CodeSurface,
    Role::CodeText,
    Role::CtaPrimary,
    Role::CtaSecondary,
    Role::Monogram,
    Role::Divider,
];

/// The light and dark halves of a role's treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePair {
    /// Classes applied in light mode.
    pub light: &'static str,
    /// Classes applied in dark mode. Every token carries the `dark:` prefix.
    pub dark: &'static str,
}

/// Look up the class pair for a role.
pub fn pair(role: Role) -> ThemePair {
    match role {
        Role::PageBg => ThemePair {
            light: "bg-white",
            dark: "dark:bg-zinc-950",
        },
        Role::Surface => ThemePair {
            light: "bg-zinc-50",
            dark: "dark:bg-white/[0.03]",
        },
        Role::SurfaceBorder => ThemePair {
            light: "border-zinc-200",
            dark: "dark:border-white/5",
        },
        Role::SurfaceHover => ThemePair {
            light: "hover:border-indigo-300 hover:bg-zinc-100",
            dark: "dark:hover:border-indigo-500/30 dark:hover:bg-white/[0.05]",
        },
        Role::Heading => ThemePair {
            light: "text-zinc-900",
            dark: "dark:text-white",
        },
        Role::Body => ThemePair {
            light: "text-zinc-600",
            dark: "dark:text-zinc-400",
        },
        Role::Muted => ThemePair {
            light: "text-zinc-500",
            dark: "dark:text-zinc-500",
        },
        Role::Accent => ThemePair {
            light: "text-indigo-600",
            dark: "dark:text-indigo-300",
        },
        Role::BadgeSurface => ThemePair {
            light: "bg-indigo-50 border-indigo-200",
            dark: "dark:bg-white/5 dark:border-white/10",
        },
        Role::NavSurface => ThemePair {
            light: "bg-white/80 border-zinc-200",
            dark: "dark:bg-zinc-950/80 dark:border-white/10",
        },
        Role::CodeSurface => ThemePair {
            light: "bg-zinc-900 border-zinc-800",
            dark: "dark:bg-black/40 dark:border-white/10",
        },
        Role::CodeText => ThemePair {
            light: "text-zinc-200",
            dark: "dark:text-zinc-300",
        },
        Role::CtaPrimary => ThemePair {
            light: "bg-indigo-600 text-white hover:bg-indigo-500",
            dark: "dark:bg-indigo-600 dark:text-white dark:hover:bg-indigo-500",
        },
        Role::CtaSecondary => ThemePair {
            light: "bg-zinc-100 text-zinc-900 border-zinc-200 hover:bg-zinc-200",
            dark: "dark:bg-white/5 dark:text-white dark:border-white/10 dark:hover:bg-white/10",
        },
        Role::Monogram => ThemePair {
            light: "bg-gradient-to-br from-indigo-500 to-purple-500 text-white",
            dark: "dark:from-indigo-400 dark:to-purple-400 dark:text-white",
        },
        Role::Divider => ThemePair {
            light: "border-zinc-200",
            dark: "dark:border-white/10",
        },
    }
}

/// Both halves of a role's treatment, joined for a `class` attribute.
pub fn classes(role: Role) -> String {
    let p = pair(role);
    format!("{} {}", p.light, p.dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_both_halves() {
        for &role in ROLES {
            let p = pair(role);
            assert!(!p.light.is_empty(), "{role:?} has no light treatment");
            assert!(!p.dark.is_empty(), "{role:?} has no dark treatment");
        }
    }

    #[test]
    fn dark_halves_only_carry_dark_tokens() {
        for &role in ROLES {
            for token in pair(role).dark.split_whitespace() {
                assert!(
                    token.starts_with("dark:"),
                    "{role:?} dark token {token} missing dark: prefix"
                );
            }
        }
    }

    #[test]
    fn light_halves_never_carry_dark_tokens() {
        for &role in ROLES {
            for token in pair(role).light.split_whitespace() {
                assert!(
                    !token.starts_with("dark:"),
                    "{role:?} light token {token} is dark-prefixed"
                );
            }
        }
    }

    #[test]
    fn roles_list_has_no_duplicates() {
        for (i, a) in ROLES.iter().enumerate() {
            for b in &ROLES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn classes_joins_both_halves() {
        let joined = classes(Role::Heading);
        assert!(joined.contains("text-zinc-900"));
        assert!(joined.contains("dark:text-white"));
    }
}
