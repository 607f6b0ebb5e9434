use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::analytics::{self, AnalyticsEvent};
use crate::content::LOGO_IMAGE;

const DRAWER_LINKS: [(&str, &str); 3] = [
    ("#philosophy", "Philosophy"),
    ("#journey", "Spaces"),
    ("#community", "Community"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new({
                    let window = window.clone();
                    move || {
                        if let Some(scroll_y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                            is_scrolled.set(scroll_y > 10.0);
                        }
                    }
                });

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let mobile_book_tour = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            analytics::track(AnalyticsEvent::MobileNavBookTour);
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(4px);
                        border-bottom: 1px solid #f4ede3;
                        transition: box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        box-shadow: 0 2px 12px rgba(83, 64, 45, 0.12);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo img {
                        height: 2.5rem;
                        width: auto;
                    }
                    .nav-cta {
                        padding: 0.6rem 1.5rem;
                        background: var(--ll-gold);
                        color: white;
                        font-weight: 600;
                        border-radius: 9999px;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: var(--ll-dark);
                        font-size: 1.6rem;
                        cursor: pointer;
                    }
                    .mobile-drawer {
                        position: fixed;
                        inset: 0;
                        background: var(--ll-dark);
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        z-index: 60;
                    }
                    .mobile-drawer-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 3rem;
                        color: white;
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .mobile-drawer a {
                        color: white;
                        font-size: 1.5rem;
                        text-decoration: none;
                        margin-bottom: 1.5rem;
                    }
                    .mobile-drawer .drawer-close {
                        background: none;
                        border: none;
                        color: white;
                        font-size: 1.6rem;
                    }
                    .mobile-drawer .nav-cta {
                        margin-top: auto;
                        text-align: center;
                    }
                    @media (max-width: 1024px) {
                        .nav-content .nav-cta {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                "#}
            </style>
            <nav class="nav-content">
                <a href="/" class="nav-logo" onclick={analytics::on_click(AnalyticsEvent::LogoClicked)}>
                    <img src={LOGO_IMAGE} alt="Limelight Logo" />
                </a>
                <a href="#tour" class="nav-cta" onclick={analytics::on_click(AnalyticsEvent::NavBookTour)}>
                    {"Book Your Tour"}
                </a>
                <button class="burger-menu" aria-label="Open navigation menu" onclick={open_menu}>
                    <i class="fa-solid fa-bars"></i>
                </button>
            </nav>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-drawer">
                            <div class="mobile-drawer-header">
                                <span>{"LIMELIGHT"}</span>
                                <button class="drawer-close" aria-label="Close navigation menu" onclick={close_menu.clone()}>
                                    <i class="fa-solid fa-xmark"></i>
                                </button>
                            </div>
                            { for DRAWER_LINKS.iter().map(|(href, label)| html! {
                                <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                            }) }
                            <a href="#tour" onclick={close_menu.clone()}>{"Book a Tour"}</a>
                            <a href="#tour" class="nav-cta" onclick={mobile_book_tour}>
                                {"Book Your Tour"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
