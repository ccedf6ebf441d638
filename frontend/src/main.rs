use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, info};

mod config;
mod animation;
mod signals;
mod components {
    pub mod decor;
    pub mod interactive;
    pub mod reveal;
    pub mod scroll_effects;
    pub mod text;
}
mod pages {
    pub mod contact;
    pub mod content;
    pub mod header;
    pub mod hero;
    pub mod landing;
    pub mod offer;
}

use pages::landing::Landing;
use components::reveal::ScrollReveal;


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
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
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <ScrollReveal>
                <h1>{"404"}</h1>
                <p>{"This page doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="cta-primary">
                    {"Back to the homepage"}
                </Link<Route>>
            </ScrollReveal>
            <style>
                {r#"
.not-found {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    font-family: 'Inter', system-ui, sans-serif;
}

.not-found h1 {
    font-size: 6rem;
    margin: 0;
    color: #dc2626;
}

.not-found .cta-primary {
    display: inline-block;
    margin-top: 1.5rem;
    padding: 0.9rem 2rem;
    border-radius: 0.75rem;
    background: linear-gradient(90deg, #ef4444, #dc2626);
    color: #fff;
    text-decoration: none;
    font-weight: 600;
}
                "#}
            </style>
        </div>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        // No logger to report through yet
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    debug!("log level {}", config::log_level());
    yew::Renderer::<App>::new().render();
}
