use yew::prelude::*;

use crate::components::reveal::FadeIn;
use crate::content::PHILOSOPHY_IMAGE;

#[function_component(Philosophy)]
pub fn philosophy() -> Html {
    html! {
        <section id="philosophy" class="philosophy">
            <style>
                {r#"
                    .philosophy {
                        padding: 8rem 1.5rem;
                        background: #f4ede3;
                        text-align: center;
                    }
                    .philosophy-copy {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .philosophy h2 {
                        font-size: 3rem;
                        font-weight: 700;
                        color: var(--ll-dark);
                        margin-bottom: 1.5rem;
                    }
                    .philosophy h2 span {
                        color: var(--ll-gold);
                    }
                    .philosophy p {
                        font-size: 1.25rem;
                        line-height: 1.7;
                        margin-bottom: 3rem;
                    }
                    .philosophy .philosophy-quote {
                        font-size: 1.5rem;
                        font-style: italic;
                        margin-bottom: 4rem;
                    }
                    .philosophy img {
                        width: 100%;
                        max-width: 64rem;
                        max-height: 500px;
                        object-fit: cover;
                        border-radius: 0.75rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                    }
                "#}
            </style>
            <div class="philosophy-copy">
                <FadeIn>
                    <h2>{"We don’t rent desks."}<br />{"We "}<span>{"design experiences."}</span></h2>
                </FadeIn>
                <FadeIn delay={0.2}>
                    <p>
                        {"At Limelight, every square foot is crafted to inspire clarity. The warmth of sunlight, the silence between sounds, the way your chair meets your posture — everything here is intentional."}
                    </p>
                </FadeIn>
                <FadeIn delay={0.3}>
                    <p class="philosophy-quote">
                        {"“Work isn’t what you do here — it’s who you become while doing it.”"}
                    </p>
                </FadeIn>
            </div>
            <FadeIn delay={0.4}>
                <img src={PHILOSOPHY_IMAGE} alt="Soft sunlight on a desk, representing an intentional workspace" />
            </FadeIn>
        </section>
    }
}
