use yew::prelude::*;

use crate::components::hero_section::HeroSection;
use crate::components::theme_section::ThemeSection;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
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

    html! {
        <div class="landing-page">
            <HeroSection />
            <ThemeSection />
            <footer class="site-footer">
                <p>{"MAKE-A-THON 6.0 · 24 hours · build something that matters"}</p>
            </footer>
        </div>
    }
}
