use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::content::{Icon, SiteContent};
use crate::engine::scroll::{section_progress, ScrollTransform};
use crate::Route;

#[function_component(ThemeSection)]
pub fn theme_section() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let section_ref = use_node_ref();
    // Both hooks re-render on change; the values themselves are read back
    // from the element.
    let _scroll = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    // The ref is only attached after the first render.
    {
        let update = use_force_update();
        use_effect_with_deps(
            move |_| {
                update.force_update();
                || ()
            },
            (),
        );
    }

    let transform = section_ref
        .cast::<Element>()
        .map(|section| {
            let rect = section.get_bounding_client_rect();
            section_progress(rect.top(), rect.height(), viewport_height)
        })
        .map(ScrollTransform::for_progress)
        .unwrap_or_else(|| ScrollTransform::for_progress(0.0));

    let Some(content) = content else {
        return html! {};
    };

    html! {
        <section id="theme" class="theme-section" ref={section_ref}>
            <style>{THEME_CSS}</style>
            <div class="theme-gradient"></div>
            <div class="theme-grid-bg"></div>

            <div class="theme-container">
                <div class="theme-header">
                    <h2>{"Hackathon Themes"}</h2>
                    <div class="theme-rule"></div>
                    <p>
                        {"Choose from our cutting-edge themes or bring your own innovative ideas to life during the 24-hour coding marathon."}
                    </p>
                </div>

                <div class="theme-cards" style={transform.style()}>
                    { for content.themes.iter().enumerate().map(|(index, theme)| {
                        let side = if index % 2 == 0 { "from-left" } else { "from-right" };
                        html! {
                            <div
                                class={classes!("theme-card", side)}
                                style={format!("animation-delay: {:.1}s;", index as f64 * 0.1)}
                            >
                                <div class="theme-card-head">
                                    <div class={classes!("theme-icon", theme.accent.class())}>
                                        {theme.icon.glyph()}
                                    </div>
                                    <h3>{&theme.title}</h3>
                                </div>
                                <p>{&theme.description}</p>
                                <div class="circuit-line">
                                    <div class="circuit-pulse"></div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="theme-footer">
                    <Link<Route> to={Route::Problems} classes="theme-cta">
                        <span>{"View Problem Statements"}</span>
                        <span class="theme-cta-arrow">{"→"}</span>
                    </Link<Route>>
                    <div class="theme-divider"></div>
                    <div class="theme-hint">
                        <span class="accent-cyan">{Icon::Zap.glyph()}</span>
                        <p>{"Explore detailed problem statements and choose your challenge"}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

const THEME_CSS: &str = r#"
    .theme-section {
        position: relative;
        min-height: 100vh;
        padding: 5rem 0;
        overflow: hidden;
    }
    .theme-gradient {
        position: absolute;
        inset: 0;
        z-index: -1;
        background: linear-gradient(to bottom, #000, rgba(8, 51, 68, 0.1), #000);
    }
    .theme-grid-bg {
        position: absolute;
        inset: 0;
        z-index: -2;
        opacity: 0.2;
        background-image:
            linear-gradient(to right, #8884 1px, transparent 1px),
            linear-gradient(to bottom, #8884 1px, transparent 1px);
        background-size: 40px 40px;
    }
    .theme-container {
        position: relative;
        z-index: 10;
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .theme-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .theme-header h2 {
        display: inline-block;
        font-size: clamp(1.875rem, 5vw, 3rem);
        font-weight: 700;
        margin-bottom: 1.5rem;
        background: linear-gradient(to right, #22d3ee, #a855f7);
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .theme-rule {
        width: 6rem;
        height: 0.25rem;
        margin: 0 auto 1.5rem;
        background: linear-gradient(to right, #06b6d4, #a855f7);
    }
    .theme-header p {
        font-size: 1.125rem;
        color: #d1d5db;
        max-width: 48rem;
        margin: 0 auto;
    }
    .theme-cards {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 2rem;
        margin-bottom: 4rem;
        will-change: transform, opacity;
    }
    .theme-card {
        padding: 1.5rem;
        background: rgba(0, 0, 0, 0.5);
        backdrop-filter: blur(12px);
        border: 1px solid rgba(6, 182, 212, 0.3);
        border-radius: 0.5rem;
        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.1);
        transition: border-color 0.2s;
        opacity: 0;
        animation: 0.5s ease-out forwards;
    }
    .theme-card:hover {
        border-color: rgba(6, 182, 212, 0.5);
    }
    .theme-card.from-left { animation-name: slide-from-left; }
    .theme-card.from-right { animation-name: slide-from-right; }
    @keyframes slide-from-left {
        from { opacity: 0; transform: translateX(-50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes slide-from-right {
        from { opacity: 0; transform: translateX(50px); }
        to { opacity: 1; transform: translateX(0); }
    }
    .theme-card-head {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1rem;
    }
    .theme-card-head h3 {
        font-size: 1.25rem;
        font-weight: 700;
        color: #fff;
        margin: 0;
    }
    .theme-icon {
        font-size: 2rem;
        padding: 0.75rem;
        background: rgba(0, 0, 0, 0.7);
        border: 1px solid rgba(6, 182, 212, 0.3);
        border-radius: 0.5rem;
    }
    .accent-cyan { color: #22d3ee; }
    .accent-purple { color: #c084fc; }
    .theme-card p {
        color: #d1d5db;
        margin-bottom: 1rem;
    }
    .circuit-line {
        position: relative;
        height: 0.25rem;
        width: 100%;
        border-radius: 9999px;
        overflow: hidden;
        background: linear-gradient(to right, rgba(6, 182, 212, 0.3), rgba(168, 85, 247, 0.3));
    }
    .circuit-pulse {
        position: absolute;
        top: 0;
        left: 0;
        height: 100%;
        width: 33%;
        background: linear-gradient(to right, #22d3ee, #c084fc);
        animation: circuit-sweep 2s linear infinite;
    }
    @keyframes circuit-sweep {
        from { transform: translateX(-100%); }
        to { transform: translateX(300%); }
    }
    .theme-footer {
        text-align: center;
    }
    .theme-cta {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
        font-size: 1.125rem;
        color: #fff;
        text-decoration: none;
        border-radius: 0.375rem;
        background: linear-gradient(to right, #06b6d4, #9333ea);
        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.2);
    }
    .theme-cta-arrow {
        transition: transform 0.2s;
    }
    .theme-cta:hover .theme-cta-arrow {
        transform: translateX(0.25rem);
    }
    .theme-divider {
        height: 2px;
        max-width: 28rem;
        margin: 4rem auto 0;
        background: linear-gradient(to right, transparent, rgba(6, 182, 212, 0.5), transparent);
    }
    .theme-hint {
        margin-top: 2rem;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        color: #9ca3af;
    }
    @media (max-width: 768px) {
        .theme-cards {
            grid-template-columns: 1fr;
        }
    }
"#;
