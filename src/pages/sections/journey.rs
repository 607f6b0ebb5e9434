use yew::prelude::*;

use crate::components::reveal::FadeIn;
use crate::components::tilt::use_tilt_cards;
use crate::config::JOURNEY_TILT;
use crate::content::JOURNEY_STEPS;

#[function_component(Journey)]
pub fn journey() -> Html {
    let cards = use_tilt_cards(JOURNEY_STEPS.len(), "journey-card", JOURNEY_TILT);
    let last = JOURNEY_STEPS.len() - 1;

    html! {
        <section id="customer-journey" class="customer-journey">
            <style>
                {r#"
                    .customer-journey {
                        padding: 8rem 1.5rem;
                        background: linear-gradient(to bottom, #f9f3eb, rgba(244, 237, 227, 0.3), #f9f3eb);
                        position: relative;
                        overflow: hidden;
                    }
                    .customer-journey h2 {
                        text-align: center;
                        font-size: 3rem;
                        font-weight: 700;
                        color: var(--ll-dark);
                        margin-bottom: 5rem;
                    }
                    .customer-journey h2 span {
                        color: var(--ll-gold);
                    }
                    .journey-grid {
                        display: grid;
                        grid-template-columns: repeat(5, 1fr);
                        gap: 1rem;
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .journey-step {
                        position: relative;
                        height: 100%;
                    }
                    .journey-arrow {
                        position: absolute;
                        top: 6rem;
                        right: -0.75rem;
                        color: rgba(179, 128, 77, 0.4);
                    }
                    .journey-card {
                        position: relative;
                        height: 100%;
                        background: rgba(255, 255, 255, 0.9);
                        border-radius: 1.5rem;
                        padding: 2rem;
                        border: 1px solid rgba(179, 128, 77, 0.1);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.1);
                        transform-style: preserve-3d;
                        transition: transform 0.5s ease-out, box-shadow 0.5s ease-out;
                        cursor: pointer;
                    }
                    .journey-card:hover {
                        box-shadow: 0 20px 60px rgba(179, 128, 77, 0.3);
                    }
                    .journey-number {
                        position: absolute;
                        top: 1rem;
                        right: 1.25rem;
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: rgba(179, 128, 77, 0.15);
                    }
                    .journey-card .icon {
                        font-size: 2rem;
                        color: var(--ll-gold);
                        margin-bottom: 1.5rem;
                        filter: drop-shadow(0 0 8px rgba(179, 128, 77, 0.6));
                    }
                    .journey-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--ll-dark);
                    }
                    .journey-closing {
                        text-align: center;
                        margin-top: 5rem;
                    }
                    @media (max-width: 1024px) {
                        .journey-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .journey-arrow {
                            display: none;
                        }
                    }
                    @media (max-width: 640px) {
                        .journey-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <FadeIn>
                <h2>{"Five Steps."}<br />{"One "}<span>{"Transformation."}</span></h2>
            </FadeIn>
            <div class="journey-grid">
                { for JOURNEY_STEPS.iter().zip(cards.iter()).enumerate().map(|(index, (step, card))| html! {
                    <FadeIn class="journey-step" delay={index as f64 * 0.15}>
                        if index < last {
                            <span class="journey-arrow"><i class="fa-solid fa-arrow-right"></i></span>
                        }
                        <div class="journey-card" ref={card.clone()}>
                            <span class="journey-number">{ format!("{:02}", index + 1) }</span>
                            <div class="icon"><i class={step.icon}></i></div>
                            <h3>{ step.title }</h3>
                            <p>{ step.text }</p>
                        </div>
                    </FadeIn>
                }) }
            </div>
            <FadeIn class="journey-closing" delay={0.7}>
                <p class="closing-quote">
                    {"\"Limelight isn't a space you visit."}<br />{"It's a state you enter.\""}
                </p>
            </FadeIn>
        </section>
    }
}
