use yew::prelude::*;

use crate::components::reveal::FadeIn;
use crate::content::PILLARS;

#[function_component(Pillars)]
pub fn pillars() -> Html {
    html! {
        <section id="why-limelight" class="pillars">
            <style>
                {r#"
                    .pillars {
                        padding: 8rem 1.5rem 4rem;
                        background: var(--ll-bg);
                        text-align: center;
                    }
                    .pillars h2 {
                        font-size: 3rem;
                        font-weight: 700;
                        color: var(--ll-dark);
                        margin-bottom: 4rem;
                    }
                    .pillars h2 span {
                        color: var(--ll-gold);
                    }
                    .pillar-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        max-width: 1280px;
                        margin: 0 auto 4rem;
                        text-align: left;
                    }
                    .pillar {
                        background: rgba(244, 237, 227, 0.5);
                        padding: 2rem;
                        border-radius: 1rem;
                    }
                    .pillar .icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: var(--ll-gold);
                        color: white;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                    }
                    .pillar h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--ll-dark);
                    }
                    @media (max-width: 1024px) {
                        .pillar-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .pillar-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <FadeIn>
                <h2>
                    {"We built Limelight like a five-star hotel"}<br />
                    {"— "}<span>{"only quieter."}</span>
                </h2>
            </FadeIn>
            <div class="pillar-grid">
                { for PILLARS.iter().enumerate().map(|(index, pillar)| html! {
                    <FadeIn class="pillar" delay={index as f64 * 0.1}>
                        <div class="icon"><i class={pillar.icon}></i></div>
                        <h3>{ pillar.title }</h3>
                        <p>{ pillar.text }</p>
                    </FadeIn>
                }) }
            </div>
            <FadeIn delay={0.4}>
                <p class="closing-quote">
                    {"“Because true luxury isn’t being seen"}<br />{"— it’s being understood.”"}
                </p>
                <a href="#membership" class="gold-button">
                    {"Explore Membership Plans "}<i class="fa-solid fa-arrow-right"></i>
                </a>
            </FadeIn>
        </section>
    }
}
