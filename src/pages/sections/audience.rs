use yew::prelude::*;

use crate::components::reveal::FadeIn;
use crate::components::tilt::use_tilt_cards;
use crate::config::AUDIENCE_TILT;
use crate::content::AUDIENCES;

/// "The Work Club for Conscious Achievers" audience cards.
#[function_component(Audience)]
pub fn audience() -> Html {
    let cards = use_tilt_cards(AUDIENCES.len(), "serve-card", AUDIENCE_TILT);

    html! {
        <section id="who-we-serve" class="who-we-serve">
            <style>
                {r#"
                    .who-we-serve {
                        padding: 8rem 1.5rem;
                        background: linear-gradient(to bottom, #f4ede3, white, #f4ede3);
                        overflow: hidden;
                    }
                    .who-we-serve h2 {
                        text-align: center;
                        font-size: 3rem;
                        font-weight: 700;
                        color: var(--ll-dark);
                        margin-bottom: 5rem;
                    }
                    .who-we-serve h2 span {
                        color: var(--ll-gold);
                    }
                    .serve-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        max-width: 1280px;
                        margin: 0 auto 4rem;
                    }
                    .serve-card {
                        height: 100%;
                        background: rgba(255, 255, 255, 0.9);
                        border-radius: 1.5rem;
                        padding: 2rem;
                        border: 1px solid rgba(179, 128, 77, 0.1);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.1);
                        transform-style: preserve-3d;
                        transition: transform 0.5s ease-out, box-shadow 0.5s ease-out;
                    }
                    .serve-card:hover {
                        box-shadow: 0 25px 70px rgba(197, 157, 47, 0.25);
                    }
                    .serve-card .icon {
                        font-size: 2rem;
                        color: var(--ll-gold);
                        margin: 0.5rem 0 2rem;
                    }
                    .serve-card h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--ll-dark);
                    }
                    .serve-closing {
                        text-align: center;
                    }
                    @media (max-width: 1024px) {
                        .serve-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .serve-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <FadeIn>
                <h2>{"The Work Club for"}<br /><span>{"Conscious Achievers."}</span></h2>
            </FadeIn>
            <div class="serve-grid">
                { for AUDIENCES.iter().zip(cards.iter()).enumerate().map(|(index, (card, node))| html! {
                    <FadeIn delay={index as f64 * 0.15}>
                        <div class="serve-card" ref={node.clone()}>
                            <div class="icon"><i class={card.icon}></i></div>
                            <h3>{ card.title }</h3>
                            <p>{ card.text }</p>
                        </div>
                    </FadeIn>
                }) }
            </div>
            <FadeIn class="serve-closing" delay={0.6}>
                <p class="closing-quote">
                    {"\"Every member here shares one unspoken trait—"}<br />
                    {"they value peace as much as performance.\""}
                </p>
            </FadeIn>
        </section>
    }
}
