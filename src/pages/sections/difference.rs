use std::rc::Rc;

use web_sys::{Event, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::components::reveal::FadeIn;
use crate::content::{self, DIFFERENCES};
use crate::motion::scroll_progress::{marker_style, scroll_progress, RegionBounds};

/// "Peace is the new Productivity": five differentiators laid along a road
/// whose marker follows the reader's scroll position.
#[function_component(Difference)]
pub fn difference() -> Html {
    let road = use_node_ref();
    let progress = use_state_eq(|| 0.0_f64);

    let recompute = {
        let road = road.clone();
        let progress = progress.clone();
        Rc::new(move || {
            if let Some(value) = measure(&road) {
                progress.set(value);
            }
        })
    };

    {
        let recompute = recompute.clone();
        use_event_with_window("scroll", move |_: Event| recompute());
    }
    {
        let recompute = recompute.clone();
        use_event_with_window("resize", move |_: Event| recompute());
    }
    use_effect_with_deps(
        move |_| {
            recompute();
            || ()
        },
        (),
    );

    html! {
        <section id="journey" class="difference">
            <style>
                {r#"
                    .difference {
                        padding: 8rem 0;
                        position: relative;
                        overflow: hidden;
                        background: var(--ll-bg);
                    }
                    .difference h2 {
                        text-align: center;
                        font-size: 3rem;
                        font-weight: 700;
                        color: var(--ll-dark);
                        margin-bottom: 4rem;
                    }
                    .difference h2 span {
                        color: var(--ll-gold);
                    }
                    .road {
                        position: relative;
                    }
                    .road-track {
                        position: absolute;
                        left: 50%;
                        top: 0;
                        bottom: 5rem;
                        width: 48px;
                        transform: translateX(-50%);
                        background: var(--ll-gold);
                    }
                    .road-marker {
                        position: absolute;
                        left: 50%;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, #b3804d, #f59e0b);
                        box-shadow: 0 0 0 4px white, 0 10px 20px rgba(0, 0, 0, 0.2);
                        pointer-events: none;
                    }
                    .road-steps {
                        display: flex;
                        flex-direction: column;
                        gap: 6rem;
                    }
                    .road-step {
                        display: flex;
                        align-items: stretch;
                        gap: 4rem;
                        padding: 0 2rem;
                    }
                    .road-step.reversed {
                        flex-direction: row-reverse;
                    }
                    .road-step > * {
                        flex: 1;
                    }
                    .road-step img {
                        width: 100%;
                        height: 100%;
                        min-height: 300px;
                        object-fit: cover;
                        border-radius: 0.75rem;
                    }
                    .difference-card {
                        background: white;
                        border-radius: 1rem;
                        padding: 2rem;
                        border: 1px solid #f4ede3;
                        box-shadow: 0 20px 25px #f4ede3;
                    }
                    .difference-card .icon {
                        display: inline-block;
                        background: var(--ll-dark);
                        color: var(--ll-gold);
                        padding: 0.75rem;
                        border-radius: 9999px;
                        margin-bottom: 1rem;
                    }
                    .difference-card h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: var(--ll-dark);
                    }
                    .difference-card .line {
                        font-style: italic;
                        font-size: 1.125rem;
                        margin-bottom: 1.5rem;
                    }
                    .feature-chips {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    .feature-chips span {
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: #f4ede3;
                        color: var(--ll-dark);
                        font-size: 0.875rem;
                    }
                    .feature-chips i {
                        color: var(--ll-gold);
                        margin-right: 0.5rem;
                    }
                    .difference-cta {
                        text-align: center;
                        margin-top: 4rem;
                    }
                    @media (max-width: 768px) {
                        .road-track {
                            left: 0;
                            width: 24px;
                            transform: none;
                        }
                        .road-step, .road-step.reversed {
                            flex-direction: column;
                            gap: 1.5rem;
                            padding-left: 2.5rem;
                        }
                    }
                "#}
            </style>
            <FadeIn>
                <h2>{"Peace is the new"}<br /><span>{"Productivity."}</span></h2>
            </FadeIn>
            <div class="road" ref={road}>
                <div class="road-track">
                    <div class="road-marker" style={marker_style(*progress)}></div>
                </div>
                <div class="road-steps">
                    { for DIFFERENCES.iter().enumerate().map(|(index, step)| html! {
                        <FadeIn delay={index as f64 * 0.1}>
                            <div class={classes!("road-step", (index % 2 == 1).then_some("reversed"))}>
                                <img src={step.image} alt={step.title} loading="lazy" />
                                { difference_card(step) }
                            </div>
                        </FadeIn>
                    }) }
                </div>
                <div class="difference-cta">
                    <a href="#customer-journey" class="gold-button">
                        {"Explore Our Spaces "}<i class="fa-solid fa-arrow-right"></i>
                    </a>
                </div>
            </div>
        </section>
    }
}

fn difference_card(step: &content::Difference) -> Html {
    html! {
        <div class="difference-card">
            <span class="icon"><i class={step.icon}></i></span>
            <h3>{ step.title }</h3>
            <p class="line">{ format!("\"{}\"", step.line) }</p>
            <div class="feature-chips">
                { for step.features.iter().map(|feature| html! {
                    <span><i class="fa-solid fa-circle-check"></i>{ *feature }</span>
                }) }
            </div>
        </div>
    }
}

/// Current progress through the road, or `None` while it isn't mounted.
fn measure(road: &NodeRef) -> Option<f64> {
    let road = road.cast::<HtmlElement>()?;
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let bounds = RegionBounds {
        top: road.get_bounding_client_rect().top() + scroll_y,
        height: f64::from(road.offset_height()),
    };
    Some(scroll_progress(scroll_y, viewport_height, bounds))
}
