use std::rc::Rc;

use chrono::Utc;
use log::info;
use yew::prelude::*;

use crate::components::countdown::CountdownTimer;
use crate::components::glitch_text::GlitchText;
use crate::components::hero_scene::HeroScene;
use crate::components::particles::ParticlesBackground;
use crate::content::SiteContent;

fn scroll_to_section(id: &str) {
    let Some(section) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    // Smoothness comes from `scroll-behavior` on the root element.
    section.scroll_into_view();
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let live = use_state(|| false);
    let initial = {
        let content = content.clone();
        use_state(move || {
            content
                .map(|c| c.initial_countdown(Utc::now()))
                .unwrap_or_default()
        })
    };
    let Some(content) = content else {
        return html! {};
    };

    let on_elapsed = {
        let live = live.clone();
        Callback::from(move |_| live.set(true))
    };

    let learn_more = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        info!("hero: learn more");
        scroll_to_section("theme");
    });

    let event = &content.event;
    html! {
        <section id="home" class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-gradient"></div>
            <div class="hero-radial"></div>
            <div class="hero-grid"></div>

            <ParticlesBackground />

            <div class="hero-scene">
                <HeroScene />
            </div>

            <div class="hero-content">
                <div class="hero-panel fade-up" style="animation-delay: 0.5s;">
                    <GlitchText text={event.boot_text.clone()} class="hero-boot" />
                    <h1 class="hero-title">{&event.name}</h1>
                    <p class="hero-tagline">{&event.tagline}</p>
                </div>

                <div class="hero-countdown fade-in" style="animation-delay: 1s;">
                    {
                        if *live {
                            html! { <p class="hero-live">{">> EVENT IS LIVE"}</p> }
                        } else {
                            html! {}
                        }
                    }
                    <CountdownTimer initial={*initial} on_elapsed={on_elapsed} />
                </div>

                <div class="hero-cta-group fade-up" style="animation-delay: 1.5s;">
                    <button class="hero-cta" onclick={learn_more}>{"Learn More"}</button>
                    {
                        match &event.schedule_url {
                            Some(url) => html! {
                                <a class="hero-cta outline" href={url.clone()}>{"View Schedule"}</a>
                            },
                            None => html! {
                                <button class="hero-cta outline" disabled={true} title="Schedule coming soon">
                                    {"View Schedule"}
                                </button>
                            },
                        }
                    }
                </div>

                <div class="scroll-cue">{"⌄"}</div>
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        height: 100vh;
        min-height: 640px;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .hero-gradient {
        position: absolute;
        inset: 0;
        background: linear-gradient(to bottom, rgba(59, 7, 100, 0.3), #000 50%, #000);
    }
    .hero-radial {
        position: absolute;
        inset: 0;
        background: radial-gradient(circle at center, rgba(0, 255, 255, 0.15) 0%, transparent 70%);
    }
    .hero-grid {
        position: absolute;
        inset: 0;
        opacity: 0.2;
        background-image:
            linear-gradient(to right, #8884 1px, transparent 1px),
            linear-gradient(to bottom, #8884 1px, transparent 1px);
        background-size: 50px 50px;
    }
    .hero-scene {
        position: absolute;
        inset: 0;
        z-index: 0;
    }
    .hero-canvas {
        width: 100%;
        height: 100%;
        display: block;
    }
    .hero-content {
        position: relative;
        z-index: 10;
        width: 100%;
        max-width: 72rem;
        padding: 0 1rem;
        text-align: center;
    }
    .hero-panel {
        max-width: 48rem;
        margin: 0 auto 1.5rem;
        padding: 1.5rem;
        background: rgba(0, 0, 0, 0.7);
        backdrop-filter: blur(12px);
        border: 1px solid rgba(6, 182, 212, 0.5);
        border-radius: 0.5rem;
        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.2);
    }
    .hero-boot {
        font-size: 1.5rem;
        color: #22d3ee;
        margin-bottom: 0.5rem;
    }
    .hero-title {
        font-size: clamp(2.25rem, 7vw, 4.5rem);
        font-weight: 700;
        margin: 0 0 1rem;
        background: linear-gradient(to right, #22d3ee, #a855f7, #ec4899);
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
        filter: drop-shadow(0 2px 2px rgba(0, 255, 255, 0.5));
    }
    .hero-tagline {
        font-size: 1.5rem;
        color: #d1d5db;
        max-width: 42rem;
        margin: 0 auto;
    }
    .hero-countdown {
        margin-bottom: 2.5rem;
    }
    .hero-live {
        font-family: ui-monospace, monospace;
        color: #f0abfc;
        margin-bottom: 1rem;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
    }
    .hero-cta {
        padding: 1rem 2rem;
        font-size: 1.125rem;
        color: #fff;
        border: none;
        border-radius: 0.375rem;
        cursor: pointer;
        background: linear-gradient(to right, #06b6d4, #2563eb);
        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.2);
        transition: filter 0.2s;
        text-decoration: none;
    }
    .hero-cta:hover {
        filter: brightness(0.9);
    }
    .hero-cta.outline {
        background: transparent;
        border: 1px solid #06b6d4;
        color: #22d3ee;
    }
    .hero-cta.outline:hover {
        background: #083344;
    }
    .hero-cta:disabled {
        opacity: 0.5;
        cursor: not-allowed;
    }
    .hero-cta.outline:disabled:hover {
        background: transparent;
    }
    .scroll-cue {
        position: absolute;
        bottom: -6rem;
        left: 50%;
        transform: translateX(-50%);
        font-size: 2rem;
        color: #22d3ee;
        animation: cue-pulse 1s ease-in-out 2s infinite alternate;
        opacity: 0;
    }
    @keyframes cue-pulse {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    .fade-up {
        opacity: 0;
        animation: fade-up 1s ease-out forwards;
    }
    .fade-in {
        opacity: 0;
        animation: fade-in 1s ease-out forwards;
    }
    @keyframes fade-up {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @media (max-width: 768px) {
        .hero-boot { font-size: 1.25rem; }
        .hero-tagline { font-size: 1.25rem; }
    }
"#;
