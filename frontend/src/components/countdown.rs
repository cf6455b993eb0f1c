use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, info};
use yew::prelude::*;

use crate::config;
use crate::engine::countdown::{pad2, Countdown};

pub enum CountdownAction {
    Tick,
    Restart(Countdown),
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick => {
                let next = self.ticked();
                // Skip the re-render once the floor is reached.
                if next == *self {
                    self
                } else {
                    Rc::new(next)
                }
            }
            CountdownAction::Restart(start) => Rc::new(start),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
    pub initial: Countdown,
    #[prop_or_default]
    pub on_elapsed: Callback<()>,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownProps) -> Html {
    let initial = props.initial;
    let remaining = use_reducer(move || initial);
    let elapsed = remaining.is_elapsed();

    // New starting point from the parent
    {
        let dispatcher = remaining.dispatcher();
        let first_run = use_mut_ref(|| true);
        use_effect_with_deps(
            move |initial| {
                if !std::mem::replace(&mut *first_run.borrow_mut(), false) {
                    dispatcher.dispatch(CountdownAction::Restart(*initial));
                }
                || ()
            },
            initial,
        );
    }

    // One tick per second while there is time left
    {
        let dispatcher = remaining.dispatcher();
        let total = remaining.total_seconds();
        use_effect_with_deps(
            move |elapsed| {
                let interval = (!*elapsed).then(|| {
                    debug!("countdown timer started with {}s remaining", total);
                    Interval::new(config::COUNTDOWN_TICK_MS, move || {
                        dispatcher.dispatch(CountdownAction::Tick);
                    })
                });
                move || drop(interval)
            },
            elapsed,
        );
    }

    {
        let on_elapsed = props.on_elapsed.clone();
        use_effect_with_deps(
            move |elapsed| {
                if *elapsed {
                    info!("countdown reached zero");
                    on_elapsed.emit(());
                }
                || ()
            },
            elapsed,
        );
    }

    html! {
        <div class="countdown-grid">
            <style>{COUNTDOWN_CSS}</style>
            { for remaining.units().iter().map(|(unit, value)| html! {
                <div class="countdown-unit" key={*unit}>
                    <div class="countdown-value">{pad2(*value)}</div>
                    <div class="countdown-label">{*unit}</div>
                </div>
            }) }
        </div>
    }
}

const COUNTDOWN_CSS: &str = r#"
    .countdown-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1rem;
        text-align: center;
        max-width: 32rem;
        margin: 0 auto;
    }
    .countdown-unit {
        display: flex;
        flex-direction: column;
    }
    .countdown-value {
        font-size: 2.25rem;
        font-weight: 700;
        padding: 0.75rem;
        background: rgba(0, 0, 0, 0.8);
        backdrop-filter: blur(4px);
        border: 1px solid rgba(6, 182, 212, 0.5);
        border-radius: 0.5rem;
        color: #22d3ee;
        box-shadow: 0 10px 15px rgba(6, 182, 212, 0.2);
        font-variant-numeric: tabular-nums;
    }
    .countdown-label {
        font-size: 0.75rem;
        text-transform: uppercase;
        margin-top: 0.5rem;
        color: #d1d5db;
    }
    @media (max-width: 480px) {
        .countdown-value {
            font-size: 1.5rem;
            padding: 0.5rem;
        }
    }
"#;
