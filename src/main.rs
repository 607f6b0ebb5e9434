use log::{info, Level};
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod content;
mod lead;
mod motion;
mod components {
    pub mod footer;
    pub mod nav;
    pub mod reveal;
    pub mod tilt;
}
mod pages {
    pub mod landing;
    pub mod sections {
        pub mod audience;
        pub mod difference;
        pub mod hero;
        pub mod invitation;
        pub mod journey;
        pub mod philosophy;
        pub mod pillars;
        pub mod stories;
    }
}

use components::nav::Nav;
use lead::SharedLeadSink;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
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
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    let lead_sink = use_memo(|_| SharedLeadSink::from_config(), ());

    html! {
        <ContextProvider<SharedLeadSink> context={(*lead_sink).clone()}>
            <Global css={css!(r#"
                :root {
                    --ll-bg: #f9f3eb;
                    --ll-text: #a38c75;
                    --ll-gold: #b3804d;
                    --ll-dark: #53402d;
                    --ll-cream: #f6efe4;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: 'Poppins', 'Lato', sans-serif;
                    color: var(--ll-text);
                    background: radial-gradient(ellipse at top, white 0%, #fdfbf6 70%), var(--ll-bg);
                }
                .reveal {
                    opacity: 0;
                }
                .animate-fade-in {
                    animation: fadeIn 1s ease-out forwards;
                }
                @keyframes fadeIn {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }
                .gold-button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 2rem;
                    background: var(--ll-gold);
                    color: white;
                    font-weight: 600;
                    font-size: 1.125rem;
                    border-radius: 9999px;
                    text-decoration: none;
                }
                .closing-quote {
                    font-size: 1.875rem;
                    font-style: italic;
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }
            "#)} />
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SharedLeadSink>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");
    tracing_wasm::set_as_global_default();

    info!("Starting Limelight landing page");
    yew::Renderer::<App>::new().render();
}
