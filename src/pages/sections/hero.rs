use yew::prelude::*;

use crate::components::reveal::FadeIn;
use crate::content::HERO_IMAGE;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero" style={format!("background-image: url('{}');", HERO_IMAGE)}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        padding: 10rem 1.5rem;
                        background-size: cover;
                        background-position: center;
                        text-align: center;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                    }
                    .hero-content {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .hero h1 {
                        font-size: 4.5rem;
                        font-weight: 700;
                        color: white;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 span {
                        color: var(--ll-gold);
                    }
                    .hero-subtitle {
                        font-size: 1.5rem;
                        color: #e5e7eb;
                        margin-bottom: 2rem;
                    }
                    .hero-quote {
                        font-size: 1.125rem;
                        font-style: italic;
                        color: rgba(209, 213, 219, 0.7);
                        margin-bottom: 3rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .hero-cta-group a {
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        text-decoration: none;
                        border: 2px solid var(--ll-gold);
                    }
                    .hero-cta-group .primary {
                        background: var(--ll-gold);
                        color: white;
                        font-weight: 600;
                    }
                    .hero-cta-group .secondary {
                        background: rgba(255, 255, 255, 0.1);
                        border-color: white;
                        color: white;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 3rem;
                        }
                    }
                "#}
            </style>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <FadeIn>
                    <h1>{"Your Limelight "}<span>{"Awaits"}</span></h1>
                </FadeIn>
                <FadeIn delay={0.2}>
                    <p class="hero-subtitle">
                        <b>{"Where Ambition Meets Experience."}</b><br />
                        {"A premium CoWork by Payleaf — designed for founders, creators, and thinkers who prefer calm over clutter."}
                    </p>
                </FadeIn>
                <FadeIn delay={0.3}>
                    <p class="hero-quote">{"“Here, your focus finds its address.”"}</p>
                </FadeIn>
                <FadeIn delay={0.4}>
                    <div class="hero-cta-group">
                        <a href="#tour" class="primary">
                            {"Book a Private Tour "}<i class="fa-solid fa-arrow-right"></i>
                        </a>
                        <a href="#membership" class="secondary">{"Explore Membership Plans"}</a>
                    </div>
                </FadeIn>
            </div>
        </section>
    }
}
