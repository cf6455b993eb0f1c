use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod error;
mod engine {
    pub mod countdown;
    pub mod particles;
    pub mod scene;
    pub mod scroll;
    pub mod typewriter;
}
mod components {
    pub mod countdown;
    pub mod glitch_text;
    pub mod hero_scene;
    pub mod hero_section;
    pub mod particles;
    pub mod theme_section;
}
mod pages {
    pub mod landing;
    pub mod problems;
}

use content::SiteContent;
use pages::{landing::Landing, problems::Problems};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/problems")]
    Problems,
    #[at("/problems/:category")]
    ProblemCategory { category: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Problems => {
            info!("Rendering Problems page");
            html! { <Problems /> }
        },
        Route::ProblemCategory { category } => {
            info!("Rendering Problems page for {}", category);
            html! { <Problems category={Some(category)} /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(scroll_y > config::NAV_SOLID_AFTER_PX);
                    }
                });

                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    error!("could not attach nav scroll listener");
                }

                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                })
            } else {
                Box::new(|| ())
            };

            move || destructor()
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"MAKE-A-THON"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <a href="/#theme" class="nav-link">{"Themes"}</a>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Problems} classes="nav-cta">
                            {"Problems"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteContent>> context={props.content.clone()}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}


#[derive(Properties, PartialEq)]
pub struct LoadFailedProps {
    pub message: String,
}

#[function_component]
fn LoadFailed(props: &LoadFailedProps) -> Html {
    html! {
        <div class="load-failed">
            <h1>{">> SYSTEM FAULT"}</h1>
            <p>{"The site content could not be loaded."}</p>
            <pre>{&props.message}</pre>
        </div>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::load() {
        Ok(content) => {
            info!(
                "Loaded {} themes and {} problem categories",
                content.themes.len(),
                content.categories.len()
            );
            yew::Renderer::<App>::with_props(AppProps { content: Rc::new(content) }).render();
        }
        Err(err) => {
            error!("Failed to load site content: {}", err);
            yew::Renderer::<LoadFailed>::with_props(LoadFailedProps { message: err.to_string() }).render();
        }
    }
}
