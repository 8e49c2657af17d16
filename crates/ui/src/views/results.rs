use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use quiz_core::model::{Category, CategoryId, CategoryProfile};
use services::{QuizSession, build_report};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{profile_heading, score_line};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<QuizSession>>();
    let navigator = use_navigator();

    let report = build_report(ctx.store(), &session.read().score_entries());
    let preview = report.is_preview();

    // In preview, expand the leading card once per stay; after that the
    // reader's own expand/collapse choices win. Scored reports never
    // auto-expand.
    let preview_first = if preview { report.first_category() } else { None };
    use_effect(move || session.write().sync_preview_expansion(preview_first));

    rsx! {
        div { class: "page",
            h2 { class: "results__title",
                if preview { "The nine types" } else { "Your resonance profile" }
            }

            if preview {
                div { class: "results__banner",
                    p {
                        "These are the nine profiles in their usual order. "
                        "Answer every statement to see how strongly each one resonates with you."
                    }
                    Link { class: "button", to: Route::Assessment {}, "Go to the questions" }
                }
            }

            ul { class: "results__list",
                for entry in report.entries() {
                    ReportCard {
                        heading: profile_heading(
                            &entry.profile,
                            ctx.store().category(entry.category).map(Category::label),
                        ),
                        score: if preview { String::new() } else { score_line(entry.average, entry.total) },
                        expanded: session.read().is_expanded(entry.category),
                        category: entry.category,
                        profile: Arc::clone(&entry.profile),
                    }
                }
            }

            div { class: "results__actions",
                Link { class: "button button--ghost", to: Route::Assessment {}, "Review answers" }
                button {
                    class: "button",
                    onclick: move |_| {
                        session.write().restart();
                        navigator.push(Route::Assessment {});
                    },
                    "Restart the quiz"
                }
            }
        }
    }
}

#[component]
fn ReportCard(
    heading: String,
    score: String,
    expanded: bool,
    category: CategoryId,
    profile: Arc<CategoryProfile>,
) -> Element {
    let mut session = use_context::<Signal<QuizSession>>();
    let navigator = use_navigator();

    rsx! {
        li { class: "results__card",
            header { class: "results__card-header",
                div {
                    h3 { "{heading}" }
                    p { class: "results__meta",
                        span { class: "results__center", "{profile.center.label()} center" }
                        if let Some(triad) = profile.instinct_triad.as_ref() {
                            span { class: "results__triad", " · {triad}" }
                        }
                    }
                    if !score.is_empty() {
                        p { class: "results__score", "{score}" }
                    }
                }
                div { class: "results__card-buttons",
                    button {
                        class: "button button--ghost",
                        onclick: move |_| session.write().toggle_expanded(category),
                        if expanded { "Hide details" } else { "Show details" }
                    }
                    button {
                        class: "button button--ghost",
                        onclick: move |_| {
                            let target = session.read().first_position_for(category);
                            if let Some(index) = target {
                                session.write().jump_to(index);
                                navigator.push(Route::Assessment {});
                            }
                        },
                        "Review these statements"
                    }
                }
            }
            p { class: "results__oneliner", "{profile.core_summary.one_liner}" }
            if expanded {
                ProfileDetail { profile: profile.clone() }
            }
        }
    }
}

#[component]
fn ProfileDetail(profile: Arc<CategoryProfile>) -> Element {
    let reading = &profile.further_reading;
    let has_reading = reading.naranjo_chapters.is_some()
        || reading.chestnut_sections.is_some()
        || reading.riso_sections.is_some();

    rsx! {
        div { class: "detail",
            section {
                h4 { "In short" }
                p { "{profile.core_summary.short_paragraph}" }
                dl {
                    dt { "Core motivation" }
                    dd { "{profile.core_summary.core_motivation}" }
                    dt { "Core fear" }
                    dd { "{profile.core_summary.core_fear}" }
                }
            }

            section {
                h4 { "Inner dynamics" }
                dl {
                    dt { "Passion" }
                    dd { "{profile.dynamics.passion}" }
                    dt { "Fixation" }
                    dd { "{profile.dynamics.fixation}" }
                    dt { "Virtue" }
                    dd { "{profile.dynamics.virtue}" }
                    if let Some(holy_idea) = profile.dynamics.holy_idea.as_ref() {
                        dt { "Holy idea" }
                        dd { "{holy_idea}" }
                    }
                }
            }

            section {
                h4 { "Structure" }
                p { "{profile.structure.center_description}" }
                dl {
                    if let Some(stance) = profile.structure.stance {
                        dt { "Stance" }
                        dd { "{stance.label()}" }
                    }
                    if let Some(harmony) = profile.structure.harmony {
                        dt { "Harmonic group" }
                        dd { "{harmony.label()}" }
                    }
                    if let Some(relation) = profile.structure.object_relation.as_ref() {
                        dt { "Object relation" }
                        dd { "{relation}" }
                    }
                }
            }

            section {
                h4 { "Under stress and in growth" }
                p {
                    strong { "Toward type {profile.arrows.stress_point}: " }
                    "{profile.arrows.stress_description}"
                }
                p {
                    strong { "Toward type {profile.arrows.growth_point}: " }
                    "{profile.arrows.growth_description}"
                }
            }

            section {
                h4 { "Wings" }
                p {
                    strong { "Type {profile.wings.left_wing} wing: " }
                    "{profile.wings.description_left}"
                }
                p {
                    strong { "Type {profile.wings.right_wing} wing: " }
                    "{profile.wings.description_right}"
                }
            }

            section {
                h4 { "Instinctual variants" }
                p { "{profile.instincts.overview}" }
                InstinctRow { title: "Self-preservation", variant: profile.instincts.self_pres.clone() }
                InstinctRow { title: "Social", variant: profile.instincts.social.clone() }
                InstinctRow { title: "One-to-one", variant: profile.instincts.sexual.clone() }
            }

            section {
                h4 { "Levels of development" }
                p { "{profile.levels_of_development.overview}" }
                ul { class: "levels",
                    for level in profile.levels_of_development.levels.iter() {
                        li { class: "levels__item levels__item--{level.band.css_suffix()}",
                            h5 { "Level {level.level} ({level.band.label()}): {level.label}" }
                            p { "{level.summary}" }
                            p { "{level.inner_world}" }
                            p { "{level.outer_behavior}" }
                            ul {
                                for marker in level.markers.iter() {
                                    li { "{marker}" }
                                }
                            }
                            p { class: "levels__notes", "{level.growth_notes}" }
                        }
                    }
                }
            }

            section {
                h4 { "Patterns" }
                StringList { title: "Strengths", items: profile.patterns.strengths.clone() }
                StringList { title: "Pitfalls", items: profile.patterns.pitfalls.clone() }
                if let Some(story) = profile.patterns.typical_childhood_story.as_ref() {
                    p {
                        strong { "Typical childhood story: " }
                        "{story}"
                    }
                }
                StringList { title: "Often mistyped as", items: profile.patterns.common_mistypings.clone() }
            }

            section {
                h4 { "Growth practices" }
                StringList { title: "Inner work", items: profile.growth_practices.inner_work.clone() }
                StringList { title: "With others", items: profile.growth_practices.relational_practices.clone() }
                if let Some(somatic) = profile.growth_practices.somatic_practices.as_ref() {
                    StringList { title: "In the body", items: somatic.clone() }
                }
            }

            section {
                h4 { "In relationships" }
                StringList { title: "What others appreciate", items: profile.relationships.what_others_appreciate.clone() }
                StringList { title: "What others struggle with", items: profile.relationships.what_others_struggle_with.clone() }
                p {
                    strong { "For partners and friends: " }
                    "{profile.relationships.notes_for_partners_friends}"
                }
            }

            if has_reading {
                section {
                    h4 { "Further reading" }
                    if let Some(items) = reading.naranjo_chapters.as_ref() {
                        StringList { title: "Naranjo", items: items.clone() }
                    }
                    if let Some(items) = reading.chestnut_sections.as_ref() {
                        StringList { title: "Chestnut", items: items.clone() }
                    }
                    if let Some(items) = reading.riso_sections.as_ref() {
                        StringList { title: "Riso and Hudson", items: items.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn InstinctRow(title: &'static str, variant: quiz_core::model::InstinctVariant) -> Element {
    rsx! {
        div { class: "instinct",
            h5 { "{title}: {variant.nickname}" }
            p { "{variant.description}" }
            ul {
                for item in variant.focus.iter() {
                    li { "{item}" }
                }
            }
        }
    }
}

#[component]
fn StringList(title: &'static str, items: Vec<String>) -> Element {
    if items.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "string-list",
            h5 { "{title}" }
            ul {
                for item in items.iter() {
                    li { "{item}" }
                }
            }
        }
    }
}
