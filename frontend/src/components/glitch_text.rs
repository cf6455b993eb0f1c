use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::config;
use crate::engine::typewriter::{noise, Millis, Phase, Typewriter, TypewriterTiming};

pub enum TypewriterAction {
    Reset(String),
    Reveal { now: Millis, glitch: bool },
    Pulse { now: Millis },
    Settle { at: Millis },
}

impl Reducible for Typewriter {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TypewriterAction::Reset(target) => next.reset(target),
            TypewriterAction::Reveal { now, glitch } => {
                next.reveal(now, glitch);
            }
            TypewriterAction::Pulse { now } => {
                next.idle_tick(now);
            }
            TypewriterAction::Settle { at } => next.settle(at),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn now_ms() -> Millis {
    Date::now() as Millis
}

type PendingSettle = Rc<RefCell<Option<Timeout>>>;

/// Arrange for the pulse ending at `until` to be cleared. Replacing the
/// previous timeout cancels it; the newest pulse always ends last.
fn schedule_settle(
    pending: &PendingSettle,
    dispatcher: &UseReducerDispatcher<Typewriter>,
    now: Millis,
    until: Millis,
) {
    let dispatcher = dispatcher.clone();
    let timeout = Timeout::new(until.saturating_sub(now) as u32, move || {
        dispatcher.dispatch(TypewriterAction::Settle { at: until });
    });
    *pending.borrow_mut() = Some(timeout);
}

#[derive(Properties, PartialEq)]
pub struct GlitchTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(config::BOOT_TEXT_TIMING)]
    pub timing: TypewriterTiming,
}

#[function_component(GlitchText)]
pub fn glitch_text(props: &GlitchTextProps) -> Html {
    let state = use_reducer({
        let text = props.text.to_string();
        let timing = props.timing;
        move || Typewriter::new(text, &timing)
    });
    let phase = state.phase();
    let pending: PendingSettle = use_mut_ref(|| None);

    // A new target starts over from an empty prefix
    {
        let dispatcher = state.dispatcher();
        let current = state.target().to_string();
        use_effect_with_deps(
            move |text| {
                if text.as_str() != current {
                    debug!("glitch text reset to {:?}", text.as_str());
                    dispatcher.dispatch(TypewriterAction::Reset(text.to_string()));
                }
                || ()
            },
            props.text.clone(),
        );
    }

    // Reveal ticks while revealing, periodic pulses once idle. Re-created
    // whenever the target or the phase changes.
    {
        let dispatcher = state.dispatcher();
        let pending = pending.clone();
        let timing = props.timing;
        use_effect_with_deps(
            move |(_, phase)| {
                let interval = match phase {
                    Phase::Revealing => Interval::new(timing.reveal_ms, move || {
                        let now = now_ms();
                        let glitch = timing.roll_glitch(&mut rand::thread_rng());
                        dispatcher.dispatch(TypewriterAction::Reveal { now, glitch });
                        if glitch {
                            schedule_settle(&pending, &dispatcher, now, timing.pulse_deadline(now));
                        }
                    }),
                    Phase::Idle => Interval::new(timing.idle_ms, move || {
                        let now = now_ms();
                        dispatcher.dispatch(TypewriterAction::Pulse { now });
                        schedule_settle(&pending, &dispatcher, now, timing.pulse_deadline(now));
                    }),
                };
                move || drop(interval)
            },
            (props.text.clone(), phase),
        );
    }

    // The last pulse timer outlives phase changes but not the component.
    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    let glitching = state.is_glitching();
    html! {
        <div class={classes!("glitch-text", props.class.clone(), glitching.then(|| "glitching"))}>
            <style>{GLITCH_CSS}</style>
            { state.revealed_text() }
            {
                if glitching {
                    let letters = noise(&mut rand::thread_rng(), config::GLITCH_NOISE_LEN);
                    html! {
                        <span class="glitch-noise">
                            { for letters.chars().map(|c| html! { <span>{c}</span> }) }
                        </span>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

const GLITCH_CSS: &str = r#"
    .glitch-text {
        font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
        min-height: 1.5em;
        transition: color 50ms linear;
    }
    .glitch-text.glitching {
        color: #ef4444;
        text-shadow: 2px 0 rgba(255, 0, 255, 0.6), -2px 0 rgba(0, 255, 255, 0.6);
    }
    .glitch-noise {
        display: inline-block;
        margin-left: 0.25rem;
    }
    .glitch-noise span {
        opacity: 0.7;
    }
"#;
