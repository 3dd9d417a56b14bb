use leptos::prelude::*;

use super::effects::Reveal;
use crate::motion::Parallax;
use crate::nav;
use crate::persona::{LabeledItem, Persona};
use crate::projects::{partition, Project, CONTACT, PROJECTS};
use crate::theme::{Theme, ToneTokens};

const SECTION_CLASS: &str = "relative z-10 px-4 sm:px-6 lg:px-8 pb-24 md:pb-32";
const HEADING_CLASS: &str = "mt-4 text-2xl sm:text-3xl md:text-5xl font-semibold tracking-tight";
const PILL_LINK_CLASS: &str = "inline-flex items-center gap-2 rounded-full border px-4 py-2 text-xs uppercase tracking-wide transition-all duration-500 hover:-translate-y-0.5 hover:border-[#C3E41D]/60 hover:text-[#C3E41D]";

/// `base` followed by whichever tone tokens `pick` chooses for the current
/// theme.
fn toned(
    theme: Signal<Theme>,
    base: &'static str,
    pick: fn(&ToneTokens) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || format!("{base} {}", pick(&theme.get().tokens()))
}

fn label(t: &ToneTokens) -> String {
    t.label_text.to_string()
}

fn muted(t: &ToneTokens) -> String {
    t.muted_text.to_string()
}

fn body(t: &ToneTokens) -> String {
    t.body_text.to_string()
}

fn card(t: &ToneTokens) -> String {
    format!("{} {} {}", t.border_tone, t.panel_bg, t.body_text)
}

fn strong_panel(t: &ToneTokens) -> String {
    format!("{} {}", t.border_tone, t.panel_bg_strong)
}

fn panel(t: &ToneTokens) -> String {
    format!("{} {}", t.border_tone, t.panel_bg)
}

fn divider(t: &ToneTokens) -> String {
    t.border_tone_soft.to_string()
}

#[component]
fn Eyebrow(#[prop(into)] theme: Signal<Theme>, text: &'static str) -> impl IntoView {
    view! { <p class=toned(theme, "text-sm uppercase tracking-[0.25em]", label)>{text}</p> }
}

#[component]
pub fn PortfolioSections(
    persona: &'static Persona,
    #[prop(into)] theme: Signal<Theme>,
    #[prop(into)] parallax: Signal<Parallax>,
    #[prop(into)] on_view_projects: Callback<()>,
) -> impl IntoView {
    view! {
        <AboutSection persona theme parallax />
        <BuildSection persona theme on_view_projects />
        <ProjectsSection persona theme parallax />
        <ExperienceSection persona theme parallax />
        <TechStackSection persona theme />
        <ContactSection persona theme parallax />
    }
}

#[component]
fn SectionFrame(
    id: &'static str,
    #[prop(into)] theme: Signal<Theme>,
    #[prop(default = SECTION_CLASS)] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class=class>
            <div class=toned(theme, "max-w-6xl mx-auto border-t pt-24 md:pt-32", divider)>
                {children()}
            </div>
        </section>
    }
}

#[component]
fn AboutSection(
    persona: &'static Persona,
    theme: Signal<Theme>,
    parallax: Signal<Parallax>,
) -> impl IntoView {
    view! {
        <SectionFrame id=nav::ABOUT theme>
            <div class="grid lg:grid-cols-[1.05fr_0.95fr] gap-10 lg:gap-14 items-start">
                <Reveal>
                    <div>
                        <Eyebrow theme text="About" />
                        <h2 class=HEADING_CLASS>{persona.about_title}</h2>
                        <p class=toned(
                            theme,
                            "mt-6 text-base sm:text-lg leading-relaxed max-w-2xl",
                            muted,
                        )>{persona.about_body}</p>
                        <div class="mt-10 flex flex-wrap gap-3">
                            {persona
                                .about_tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <span class=move || {
                                            let t = theme.get().tokens();
                                            format!(
                                                "rounded-full border {} px-4 py-1.5 text-sm {} transition-all duration-500 hover:-translate-y-1 hover:border-[#C3E41D]/60 hover:text-[#C3E41D]",
                                                t.chip_border,
                                                t.body_text,
                                            )
                                        }>{*tag}</span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
                <Reveal delay=120>
                    <div
                        class=toned(
                            theme,
                            "rounded-3xl border p-8 transition-transform duration-700 hover:-translate-y-2",
                            strong_panel,
                        )
                        style:transform=move || parallax.get().transform(-0.03)
                    >
                        <Eyebrow theme text="Core Strengths" />
                        <ul class=toned(theme, "mt-6 space-y-4", body)>
                            {persona
                                .core_strengths
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li class="flex gap-3">
                                            <span class="mt-1 h-2.5 w-2.5 rounded-full bg-[#C3E41D]" />
                                            <span>{*item}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </Reveal>
            </div>
        </SectionFrame>
    }
}

#[component]
fn BuildSection(
    persona: &'static Persona,
    theme: Signal<Theme>,
    on_view_projects: Callback<()>,
) -> impl IntoView {
    view! {
        <SectionFrame id=nav::BUILD theme>
            <Reveal>
                <div class="flex items-end justify-between flex-wrap gap-6">
                    <div class="max-w-2xl">
                        <Eyebrow theme text="What I Build" />
                        <h2 class=HEADING_CLASS>{persona.build_heading}</h2>
                    </div>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-medium bg-[#C3E41D] text-black hover:bg-[#d3f046] transition-transform duration-500 hover:-translate-y-1"
                        on:click=move |_| on_view_projects.run(())
                    >
                        "View Projects"
                    </button>
                </div>
            </Reveal>
            <div class="mt-12 md:mt-14 grid sm:grid-cols-2 lg:grid-cols-3 gap-5 md:gap-6">
                {persona
                    .what_i_build
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        view! {
                            <Reveal delay={index as u32 * 80}>
                                <div class=toned(
                                    theme,
                                    "rounded-2xl border p-6 transition-all duration-700 hover:-translate-y-2 hover:border-[#C3E41D]/40 hover:bg-neutral-950/60",
                                    card,
                                )>
                                    <p class="text-base sm:text-lg leading-relaxed">{*item}</p>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    theme: Signal<Theme>,
    parallax: Signal<Parallax>,
    speed: f64,
    with_links: bool,
) -> impl IntoView {
    let links = with_links
        .then(|| project.demo_link())
        .flatten()
        .map(|href| {
            view! {
                <div class="mt-5 flex flex-wrap gap-3">
                    <a href=href target="_blank" rel="noopener noreferrer" class=toned(theme, PILL_LINK_CLASS, panel)>
                        "Live Demo"
                    </a>
                </div>
            }
        });

    view! {
        <article
            class=toned(
                theme,
                "rounded-3xl border p-8 transition-all duration-700 hover:-translate-y-2 hover:border-[#C3E41D]/40",
                panel,
            )
            style:transform=move || parallax.get().transform(speed)
        >
            <h3 class="text-2xl font-semibold">{project.title}</h3>
            <p class=toned(theme, "mt-3 leading-relaxed text-sm sm:text-base", muted)>
                {project.summary}
            </p>
            {links}
            <div class="mt-6">
                <p class=toned(theme, "text-sm uppercase tracking-[0.2em]", label)>"Highlights"</p>
                <ul class=toned(theme, "mt-3 space-y-2", body)>
                    {project
                        .highlights
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="flex gap-3">
                                    <span class=move || {
                                        format!(
                                            "mt-2 h-1.5 w-1.5 rounded-full {}",
                                            theme.get().tokens().bullet_tone,
                                        )
                                    } />
                                    <span>{*item}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <div class="mt-6 flex flex-wrap gap-2">
                {project
                    .focus
                    .iter()
                    .map(|item| {
                        view! {
                            <span class=move || {
                                let t = theme.get().tokens();
                                format!(
                                    "rounded-full border {} px-3 py-1 text-xs uppercase tracking-wide {}",
                                    t.chip_border,
                                    t.muted_text,
                                )
                            }>{*item}</span>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
fn ProjectsSection(
    persona: &'static Persona,
    theme: Signal<Theme>,
    parallax: Signal<Parallax>,
) -> impl IntoView {
    let (primary, other) = partition(PROJECTS, persona.primary_category);

    view! {
        <SectionFrame id=nav::PROJECTS theme>
            <Reveal>
                <div class="flex flex-wrap items-end justify-between gap-6">
                    <div class="max-w-2xl">
                        <Eyebrow theme text="Key Projects" />
                        <h2 class=HEADING_CLASS>{persona.projects_heading}</h2>
                    </div>
                    <p class=toned(theme, "max-w-md text-sm sm:text-base", muted)>
                        {persona.projects_intro}
                    </p>
                </div>
            </Reveal>
            <div class="mt-14 md:mt-16 grid lg:grid-cols-2 gap-7 md:gap-9">
                {primary
                    .into_iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <Reveal delay={index as u32 * 90}>
                                <ProjectCard project theme parallax speed={-0.015} with_links=true />
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="mt-16 md:mt-20">
                <Reveal>
                    <div class="flex flex-wrap items-end justify-between gap-6">
                        <div class="max-w-2xl">
                            <Eyebrow theme text=persona.other_projects_heading />
                            <h3 class="mt-4 text-xl sm:text-2xl md:text-3xl font-semibold tracking-tight">
                                {persona.other_projects_intro}
                            </h3>
                        </div>
                    </div>
                </Reveal>
                <div class="mt-10 grid lg:grid-cols-2 gap-7 md:gap-9">
                    {other
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <Reveal delay={index as u32 * 80}>
                                    <ProjectCard project theme parallax speed={-0.01} with_links=false />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </SectionFrame>
    }
}

#[component]
fn LabeledRows(
    items: &'static [LabeledItem],
    theme: Signal<Theme>,
) -> impl IntoView {
    let last = items.len().saturating_sub(1);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            view! {
                <div class=move || {
                    let t = theme.get().tokens();
                    if index < last {
                        format!("flex items-start justify-between gap-4 border-b {} pb-4", t.border_tone_soft)
                    } else {
                        "flex items-start justify-between gap-4".to_string()
                    }
                }>
                    <span>{item.label}</span>
                    <span class=toned(theme, "text-sm", label)>{item.value}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn ExperienceSection(
    persona: &'static Persona,
    theme: Signal<Theme>,
    parallax: Signal<Parallax>,
) -> impl IntoView {
    view! {
        <SectionFrame id=nav::EXPERIENCE theme>
            <div class="grid lg:grid-cols-[1fr_1fr] gap-10 lg:gap-14 items-start">
                <Reveal>
                    <div>
                        <Eyebrow theme text="Experience Focus" />
                        <h2 class=HEADING_CLASS>{persona.experience_heading}</h2>
                        <p class=toned(
                            theme,
                            "mt-6 text-base sm:text-lg leading-relaxed max-w-xl",
                            muted,
                        )>{persona.experience_body}</p>
                    </div>
                </Reveal>
                <Reveal delay=120>
                    <div
                        class=toned(
                            theme,
                            "rounded-3xl border p-8 transition-transform duration-700 hover:-translate-y-2",
                            panel,
                        )
                        style:transform=move || parallax.get().transform(0.02)
                    >
                        <Eyebrow theme text="Capabilities" />
                        <div class=toned(theme, "mt-6 space-y-4", body)>
                            <LabeledRows items=persona.capabilities theme />
                        </div>
                    </div>
                </Reveal>
            </div>
        </SectionFrame>
    }
}

#[component]
fn TechStackSection(persona: &'static Persona, theme: Signal<Theme>) -> impl IntoView {
    view! {
        <SectionFrame id=nav::WRITING theme>
            <Reveal>
                <div class="flex flex-wrap items-end justify-between gap-6">
                    <div class="max-w-2xl">
                        <Eyebrow theme text="Tech Stack" />
                        <h2 class=HEADING_CLASS>
                            "Tooling optimized for fast iteration and reliability."
                        </h2>
                    </div>
                    <div class=toned(theme, "max-w-md text-sm sm:text-base", muted)>
                        {persona.tech_stack_intro}
                    </div>
                </div>
            </Reveal>
            <div class="mt-12 md:mt-14 grid sm:grid-cols-2 gap-5 md:gap-6">
                {persona
                    .tech_stack
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        view! {
                            <Reveal delay={index as u32 * 80}>
                                <div class=toned(
                                    theme,
                                    "rounded-2xl border p-6 transition-all duration-700 hover:-translate-y-2 hover:border-[#C3E41D]/40",
                                    panel,
                                )>
                                    <p class=toned(theme, "text-sm uppercase tracking-[0.2em]", label)>
                                        {item.label}
                                    </p>
                                    <p class=toned(theme, "mt-3 text-base sm:text-lg", body)>
                                        {item.value}
                                    </p>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionFrame>
    }
}

#[component]
fn ContactSection(
    persona: &'static Persona,
    theme: Signal<Theme>,
    parallax: Signal<Parallax>,
) -> impl IntoView {
    let details = [
        LabeledItem { label: "Email", value: CONTACT.email },
        LabeledItem { label: "Phone", value: CONTACT.phone },
        LabeledItem { label: "Location", value: CONTACT.location },
        LabeledItem { label: "Availability", value: CONTACT.availability },
    ];
    let last = details.len() - 1;
    let links = [
        ("Email", CONTACT.mailto()),
        ("Call", CONTACT.tel()),
        ("GitHub", CONTACT.github.to_string()),
    ];

    view! {
        <SectionFrame id=nav::CONTACT theme class="relative z-10 px-4 sm:px-6 lg:px-8 pb-28 md:pb-36">
            <div class="grid lg:grid-cols-[1.05fr_0.95fr] gap-10 lg:gap-14 items-start">
                <Reveal>
                    <div>
                        <Eyebrow theme text="How I Work" />
                        <h2 class=HEADING_CLASS>{persona.how_i_work_heading}</h2>
                        <p class=toned(
                            theme,
                            "mt-6 text-base sm:text-lg leading-relaxed max-w-xl",
                            muted,
                        )>{persona.how_i_work_body}</p>
                        <div class="mt-10 grid sm:grid-cols-2 gap-4">
                            {persona
                                .work_principles
                                .iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    view! {
                                        <Reveal delay={index as u32 * 80}>
                                            <div class=toned(
                                                theme,
                                                "rounded-2xl border p-5 transition-all duration-700 hover:-translate-y-2 hover:border-[#C3E41D]/40",
                                                card,
                                            )>{*item}</div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
                <Reveal delay=120>
                    <div
                        class=toned(
                            theme,
                            "rounded-3xl border p-8 transition-transform duration-700 hover:-translate-y-2",
                            strong_panel,
                        )
                        style:transform=move || parallax.get().transform(-0.02)
                    >
                        <Eyebrow theme text="Let's Talk" />
                        <h3 class="mt-4 text-2xl font-semibold">{persona.contact_heading}</h3>
                        <p class=toned(theme, "mt-4", muted)>{persona.contact_body}</p>
                        <div class=toned(theme, "mt-6 space-y-3", body)>
                            {details
                                .into_iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    view! {
                                        <div class=move || {
                                            let t = theme.get().tokens();
                                            if index < last {
                                                format!("flex items-center justify-between border-b {} pb-3", t.border_tone_soft)
                                            } else {
                                                "flex items-center justify-between".to_string()
                                            }
                                        }>
                                            <span>{item.label}</span>
                                            <span class=toned(theme, "", label)>{item.value}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="mt-8 flex flex-wrap gap-3">
                            {links
                                .into_iter()
                                .map(|(text, href)| {
                                    view! {
                                        <a href=href class=toned(theme, PILL_LINK_CLASS, card)>
                                            {text}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </SectionFrame>
    }
}
