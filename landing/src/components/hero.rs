//! Hero section: badge, gradient headline, calls to action, background orbs.

use leptos::prelude::*;

use crate::content::HERO;
use crate::theme::{classes, Role};

/// The page hero. Content comes from [`crate::content::HERO`].
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero relative overflow-hidden px-4 py-12 md:py-24">
            <BackgroundOrbs />
            <div class="max-w-6xl mx-auto flex flex-col items-center text-center">
                <div class=format!(
                    "mb-6 px-4 py-1.5 rounded-full border backdrop-blur-md inline-flex items-center gap-2 {}",
                    classes(Role::BadgeSurface),
                )>
                    <span class="relative flex h-2 w-2">
                        <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-indigo-400 opacity-75"></span>
                        <span class="relative inline-flex rounded-full h-2 w-2 bg-indigo-500"></span>
                    </span>
                    <span class=format!("text-sm font-medium {}", classes(Role::Accent))>
                        {HERO.badge}
                    </span>
                </div>

                <h1 class=format!(
                    "text-5xl md:text-7xl font-extrabold tracking-tight mb-8 leading-[1.1] {}",
                    classes(Role::Heading),
                )>
                    {HERO.title_top}
                    <br />
                    {HERO.title_bottom}
                </h1>

                <p class=format!(
                    "max-w-2xl text-lg md:text-xl mb-10 leading-relaxed {}",
                    classes(Role::Body),
                )>{HERO.description}</p>

                <div class="flex flex-col sm:flex-row gap-4">
                    <a
                        href=HERO.primary_cta.href
                        class=format!(
                            "px-8 py-3.5 rounded-xl font-semibold transition-all active:scale-95 {}",
                            classes(Role::CtaPrimary),
                        )
                    >
                        {HERO.primary_cta.label}
                    </a>
                    <a
                        href=HERO.secondary_cta.href
                        class=format!(
                            "px-8 py-3.5 rounded-xl font-semibold border transition-all active:scale-95 {}",
                            classes(Role::CtaSecondary),
                        )
                    >
                        {HERO.secondary_cta.label}
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Decorative blurred orbs behind the hero. Pure chrome, pointer-transparent.
#[component]
fn BackgroundOrbs() -> impl IntoView {
    view! {
        <div class="absolute top-0 left-1/2 -translate-x-1/2 w-full h-full -z-10 pointer-events-none opacity-20">
            <div class="absolute top-[-10%] left-[-10%] w-[40%] h-[40%] bg-indigo-500 rounded-full blur-[120px] animate-pulse"></div>
            <div class="absolute bottom-[20%] right-[-5%] w-[35%] h-[35%] bg-purple-500 rounded-full blur-[100px] animate-pulse delay-700"></div>
            <div class="absolute top-[40%] left-[20%] w-[25%] h-[25%] bg-cyan-400 rounded-full blur-[80px] animate-pulse delay-1000"></div>
        </div>
    }
}
