use yew::prelude::*;

use crate::engine::particles::ParticleField;

/// Drifting dots and floating rings behind the hero. Positions are rolled
/// once per mount; the motion itself is CSS.
#[function_component(ParticlesBackground)]
pub fn particles_background() -> Html {
    let field = use_state(|| ParticleField::random(&mut rand::thread_rng()));

    html! {
        <>
            <style>{PARTICLES_CSS}</style>
            <div class="particle-layer">
                { for field.particles.iter().map(|p| html! {
                    <div class="particle" style={p.style()}></div>
                }) }
            </div>
            <div class="particle-layer">
                { for field.circuits.iter().map(|c| html! {
                    <div class="circuit" style={c.style()}></div>
                }) }
            </div>
        </>
    }
}

const PARTICLES_CSS: &str = r#"
    .particle-layer {
        position: absolute;
        inset: 0;
        pointer-events: none;
        overflow: hidden;
    }
    .particle {
        position: absolute;
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: rgba(6, 182, 212, 0.3);
        opacity: 0;
        animation-name: particle-rise;
        animation-iteration-count: infinite;
        animation-timing-function: ease-in-out;
    }
    @keyframes particle-rise {
        0% {
            transform: translateY(0) scale(0);
            opacity: 0;
        }
        50% {
            transform: translateY(calc(var(--rise) / 2)) scale(var(--peak));
            opacity: 0.5;
        }
        100% {
            transform: translateY(var(--rise)) scale(0);
            opacity: 0;
        }
    }
    .circuit {
        position: absolute;
        border: 2px solid rgba(6, 182, 212, 0.3);
        border-radius: 9999px;
        animation-name: circuit-drift;
        animation-iteration-count: infinite;
        animation-direction: alternate;
        animation-timing-function: ease-in-out;
    }
    @keyframes circuit-drift {
        0% {
            transform: translate(0, 0) scale(1) rotate(0deg);
            opacity: 0.1;
        }
        50% {
            transform: translate(calc(var(--dx) / 2), calc(var(--dy) / 2)) scale(1.2) rotate(180deg);
            opacity: 0.3;
        }
        100% {
            transform: translate(var(--dx), var(--dy)) scale(1) rotate(360deg);
            opacity: 0.1;
        }
    }
"#;
