use std::collections::HashSet;
use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{Category, Icon, ProblemStatement, SiteContent};
use crate::Route;

#[derive(Properties, PartialEq)]
struct ProblemCardProps {
    category: Icon,
    problem: ProblemStatement,
    selected: bool,
    on_select: Callback<u32>,
}

#[function_component(ProblemCard)]
fn problem_card(props: &ProblemCardProps) -> Html {
    let ProblemCardProps { category, problem, selected, on_select } = props;

    let select = {
        let on_select = on_select.clone();
        let id = problem.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(id);
        })
    };

    html! {
        <div class={classes!("problem-card", selected.then(|| "selected"))}>
            <div class="problem-card-header">
                <div class="problem-meta">
                    <span class="problem-icon">{category.glyph()}</span>
                    <span class="difficulty-badge">{problem.difficulty.label()}</span>
                </div>
                <h3>{&problem.title}</h3>
                <p class="problem-description">{&problem.description}</p>
            </div>
            <div class="problem-card-body">
                <div class="problem-details">{&problem.details}</div>
                <h4>{"Resources:"}</h4>
                <ul>
                    { for problem.resources.iter().map(|r| html! { <li>{r}</li> }) }
                </ul>
            </div>
            <button class="select-challenge" onclick={select}>
                {Icon::Lightbulb.glyph()}
                {if *selected { " Challenge Selected" } else { " Select This Challenge" }}
            </button>
        </div>
    }
}

/// Tab to open first: the one named in the URL when it exists.
fn initial_tab(content: &SiteContent, requested: Option<&str>) -> Option<String> {
    if let Some(slug) = requested {
        match content.category(slug) {
            Ok(category) => return Some(category.slug.clone()),
            Err(err) => warn!("{}, showing the first category", err),
        }
    }
    content.default_category().map(|c| c.slug.clone())
}

#[derive(Properties, PartialEq)]
pub struct ProblemsProps {
    #[prop_or_default]
    pub category: Option<String>,
}

#[function_component(Problems)]
pub fn problems(props: &ProblemsProps) -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let active = {
        let content = content.clone();
        let requested = props.category.clone();
        use_state(move || {
            content.and_then(|c| initial_tab(&c, requested.as_deref()))
        })
    };
    // Selections are keyed by (category, problem id); ids repeat across categories.
    let selected = use_state(HashSet::<(String, u32)>::new);

    // Same component across /problems/:category links; follow the URL.
    {
        let active = active.clone();
        let content = content.clone();
        let first_run = use_mut_ref(|| true);
        use_effect_with_deps(
            move |requested: &Option<String>| {
                if !std::mem::replace(&mut *first_run.borrow_mut(), false) {
                    if let Some(content) = content {
                        active.set(initial_tab(&content, requested.as_deref()));
                    }
                }
                || ()
            },
            props.category.clone(),
        );
    }

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let Some(content) = content else {
        return html! {};
    };

    let active_category: Option<&Category> = (*active)
        .as_deref()
        .and_then(|slug| content.category(slug).ok());

    let tabs = content.categories.iter().map(|category| {
        let is_active = active_category.map_or(false, |a| a.slug == category.slug);
        let onclick = {
            let active = active.clone();
            let slug = category.slug.clone();
            Callback::from(move |_: MouseEvent| {
                info!("problem tab switched to {}", slug);
                active.set(Some(slug.clone()));
            })
        };
        html! {
            <button
                class={classes!("problem-tab", is_active.then(|| "active"))}
                role="tab"
                aria-selected={is_active.to_string()}
                {onclick}
            >
                <span class="tab-icon">{category.icon.glyph()}</span>
                <span class="tab-label">{&category.label}</span>
            </button>
        }
    });

    let cards = active_category.map(|category| {
        html! {
            <div class="problem-grid" key={category.slug.clone()}>
                { for category.problems.iter().map(|problem| {
                    let key = (category.slug.clone(), problem.id);
                    let on_select = {
                        let selected = selected.clone();
                        let slug = category.slug.clone();
                        Callback::from(move |id: u32| {
                            let mut next = (*selected).clone();
                            let key = (slug.clone(), id);
                            if !next.remove(&key) {
                                info!("challenge selected: {} #{}", slug, id);
                                next.insert(key);
                            }
                            selected.set(next);
                        })
                    };
                    html! {
                        <ProblemCard
                            key={problem.id}
                            category={category.icon}
                            problem={problem.clone()}
                            selected={selected.contains(&key)}
                            {on_select}
                        />
                    }
                }) }
            </div>
        }
    });

    let track = &content.open_innovation;
    html! {
        <div class="problems-page">
            <style>{PROBLEMS_CSS}</style>
            <div class="problems-bg gradient"></div>
            <div class="problems-bg radial"></div>
            <div class="problems-bg grid"></div>

            <div class="problems-container">
                <div class="problems-title-row">
                    <Link<Route> to={Route::Home} classes="back-link">
                        {"←"}
                    </Link<Route>>
                    <h1 class="problems-title">{"Problem Statements"}</h1>
                </div>

                <p class="problems-intro">
                    {format!(
                        "Choose from the following problem statements for {}. Each category offers unique challenges that will push your creativity and technical skills to the limit.",
                        content.event.name
                    )}
                </p>

                <div class="problem-tabs" role="tablist">
                    { for tabs }
                </div>

                { for cards }

                <div class="open-track">
                    <div class="open-track-head">
                        <span class="accent-cyan">{Icon::Globe.glyph()}</span>
                        <h2>{&track.title}</h2>
                    </div>
                    <p>{&track.body}</p>
                    <div class="open-track-judging">
                        <span class="accent-purple">{Icon::Zap.glyph()}</span>
                        <span>{&track.judging}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

const PROBLEMS_CSS: &str = r#"
    .problems-page {
        min-height: 100vh;
        background: #000;
        color: #fff;
    }
    .problems-bg {
        position: fixed;
        inset: 0;
        z-index: -1;
    }
    .problems-bg.gradient {
        background: linear-gradient(to bottom, rgba(59, 7, 100, 0.3), #000 50%, #000);
    }
    .problems-bg.radial {
        background: radial-gradient(circle at center, rgba(0, 255, 255, 0.1) 0%, transparent 70%);
    }
    .problems-bg.grid {
        opacity: 0.2;
        background-image:
            linear-gradient(to right, #8884 1px, transparent 1px),
            linear-gradient(to bottom, #8884 1px, transparent 1px);
        background-size: 50px 50px;
    }
    .problems-container {
        max-width: 72rem;
        margin: 0 auto;
        padding: 5rem 1rem;
    }
    .problems-title-row {
        display: flex;
        align-items: center;
        margin-bottom: 2rem;
    }
    .back-link {
        margin-right: 1rem;
        font-size: 1.5rem;
        color: #22d3ee;
        text-decoration: none;
        padding: 0.25rem 0.75rem;
        border-radius: 0.375rem;
    }
    .back-link:hover {
        background: rgba(8, 51, 68, 0.3);
        color: #67e8f9;
    }
    .problems-title {
        font-size: clamp(1.875rem, 5vw, 3rem);
        font-weight: 700;
        margin: 0;
        background: linear-gradient(to right, #22d3ee, #a855f7);
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
        animation: drop-in 0.5s ease-out;
    }
    @keyframes drop-in {
        from { opacity: 0; transform: translateY(-20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .problems-intro {
        color: #d1d5db;
        margin-bottom: 3rem;
        max-width: 48rem;
    }
    .problem-tabs {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 0.25rem;
        padding: 0.25rem;
        margin-bottom: 2rem;
        background: rgba(0, 0, 0, 0.5);
        border: 1px solid rgba(6, 182, 212, 0.2);
        border-radius: 0.375rem;
        overflow-x: auto;
    }
    .problem-tab {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        white-space: nowrap;
        padding: 0.5rem 0.75rem;
        color: #9ca3af;
        background: transparent;
        border: none;
        border-radius: 0.25rem;
        cursor: pointer;
    }
    .problem-tab.active {
        color: #fff;
        background: linear-gradient(to right, rgba(6, 182, 212, 0.2), rgba(168, 85, 247, 0.2));
    }
    .problem-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1.5rem;
    }
    .problem-card {
        display: flex;
        flex-direction: column;
        height: 100%;
        padding: 1.5rem;
        background: rgba(0, 0, 0, 0.5);
        backdrop-filter: blur(12px);
        border: 1px solid rgba(6, 182, 212, 0.3);
        border-radius: 0.5rem;
        transition: border-color 0.2s;
        animation: fade-up 0.5s ease-out;
    }
    .problem-card:hover,
    .problem-card.selected {
        border-color: rgba(6, 182, 212, 0.5);
    }
    .problem-card.selected {
        box-shadow: 0 0 20px rgba(6, 182, 212, 0.25);
    }
    @keyframes fade-up {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .problem-meta {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 0.5rem;
    }
    .difficulty-badge {
        font-size: 0.75rem;
        padding: 0.125rem 0.5rem;
        border-radius: 9999px;
        background: rgba(6, 182, 212, 0.2);
        color: #22d3ee;
    }
    .problem-card h3 {
        font-size: 1.25rem;
        margin: 0 0 0.5rem;
    }
    .problem-description {
        color: #9ca3af;
    }
    .problem-card-body {
        flex-grow: 1;
    }
    .problem-details {
        font-size: 0.875rem;
        color: #d1d5db;
        margin-bottom: 1rem;
    }
    .problem-card h4 {
        font-size: 0.875rem;
        font-weight: 500;
        color: #22d3ee;
        margin: 0 0 0.5rem;
    }
    .problem-card ul {
        font-size: 0.875rem;
        color: #9ca3af;
        padding-left: 1.25rem;
        margin: 0 0 1.5rem;
    }
    .select-challenge {
        width: 100%;
        padding: 0.625rem;
        color: #fff;
        border: none;
        border-radius: 0.375rem;
        cursor: pointer;
        background: linear-gradient(to right, #06b6d4, #9333ea);
    }
    .select-challenge:hover {
        filter: brightness(0.9);
    }
    .open-track {
        margin-top: 4rem;
        padding: 1.5rem;
        background: rgba(0, 0, 0, 0.5);
        backdrop-filter: blur(12px);
        border: 1px solid rgba(6, 182, 212, 0.3);
        border-radius: 0.5rem;
        animation: fade-up 0.5s ease-out 0.5s both;
    }
    .open-track-head {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1rem;
    }
    .open-track-head h2 {
        font-size: 1.25rem;
        margin: 0;
    }
    .open-track p {
        color: #d1d5db;
        margin-bottom: 1rem;
    }
    .open-track-judging {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.875rem;
        color: #9ca3af;
    }
    .accent-cyan { color: #22d3ee; }
    .accent-purple { color: #c084fc; }
    @media (max-width: 768px) {
        .problem-tabs {
            grid-template-columns: repeat(2, 1fr);
        }
        .problem-grid {
            grid-template-columns: 1fr;
        }
    }
    @media (max-width: 640px) {
        .tab-label {
            display: none;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_prefers_known_slug() {
        let content = SiteContent::load().unwrap();
        assert_eq!(initial_tab(&content, Some("blockchain")).as_deref(), Some("blockchain"));
        assert_eq!(initial_tab(&content, None).as_deref(), Some("ai"));
        assert_eq!(initial_tab(&content, Some("quantum")).as_deref(), Some("ai"));
    }
}
