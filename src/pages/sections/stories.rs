use std::num::NonZeroUsize;
use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::use_interval;

use crate::components::reveal::FadeIn;
use crate::config::CAROUSEL_INTERVAL_MS;
use crate::content::TESTIMONIALS;
use crate::motion::carousel::Carousel;

const SLIDES: NonZeroUsize = match NonZeroUsize::new(TESTIMONIALS.len()) {
    Some(len) => len,
    None => panic!("testimonial carousel needs at least one slide"),
};

pub enum SlideAction {
    Next,
    Prev,
    Select(usize),
}

#[derive(Clone, PartialEq)]
struct Slides(Carousel);

impl Reducible for Slides {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = self.0;
        match action {
            SlideAction::Next => carousel.next(),
            SlideAction::Prev => carousel.prev(),
            SlideAction::Select(index) => carousel.select(index),
        }
        Rc::new(Slides(carousel))
    }
}

/// Testimonial carousel. Advances on its own every few seconds; the arrows
/// and dots move it immediately without touching that cadence.
#[function_component(Stories)]
pub fn stories() -> Html {
    let slides = use_reducer(|| Slides(Carousel::new(SLIDES)));

    {
        let dispatcher = slides.dispatcher();
        use_interval(move || dispatcher.dispatch(SlideAction::Next), CAROUSEL_INTERVAL_MS);
    }

    let on_prev = {
        let dispatcher = slides.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(SlideAction::Prev))
    };
    let on_next = {
        let dispatcher = slides.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(SlideAction::Next))
    };

    let carousel = slides.0;

    html! {
        <section id="community" class="stories">
            <style>
                {r#"
                    .stories {
                        padding: 4rem 1.5rem 5rem;
                        background: var(--ll-dark);
                        color: white;
                        position: relative;
                        overflow: hidden;
                    }
                    .stories-heading {
                        text-align: center;
                        max-width: 56rem;
                        margin: 0 auto 2rem;
                    }
                    .stories-kicker {
                        font-size: 1.5rem;
                        font-style: italic;
                        color: rgba(179, 128, 77, 0.8);
                    }
                    .stories-heading h3 {
                        font-size: 2.25rem;
                        font-style: italic;
                        color: var(--ll-gold);
                    }
                    .stories-heading h2 {
                        font-size: 3.75rem;
                        font-weight: 700;
                        line-height: 1.1;
                    }
                    .stories-heading h2 span {
                        color: var(--ll-gold);
                    }
                    .slides {
                        position: relative;
                        height: 700px;
                        max-width: 72rem;
                        margin: 0 auto;
                        border-radius: 1.5rem;
                        overflow: hidden;
                    }
                    .slide {
                        position: absolute;
                        inset: 0;
                        transition: all 1s ease-in-out;
                    }
                    .slide-active {
                        opacity: 1;
                        transform: scale(1);
                        z-index: 10;
                    }
                    .slide-previous {
                        opacity: 0;
                        transform: translateX(-100%) scale(0.95);
                    }
                    .slide-next {
                        opacity: 0;
                        transform: translateX(100%) scale(0.95);
                    }
                    .slide-hidden {
                        opacity: 0;
                        transform: scale(0.95);
                    }
                    .slide-backdrop {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        filter: blur(40px) brightness(0.3);
                        transform: scale(1.2);
                    }
                    .slide-portrait {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .slide-portrait img {
                        width: 20rem;
                        height: 20rem;
                        border-radius: 9999px;
                        object-fit: cover;
                        border: 4px solid rgba(179, 128, 77, 0.3);
                    }
                    .slide-caption {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 3rem;
                        text-align: center;
                        background: linear-gradient(to top, #53402d, rgba(83, 64, 45, 0.95), transparent);
                    }
                    .slide-caption blockquote {
                        font-size: 2.25rem;
                        font-style: italic;
                        margin-bottom: 1.5rem;
                    }
                    .slide-caption p {
                        color: var(--ll-gold);
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .slide-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 20;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.1);
                        color: white;
                        cursor: pointer;
                    }
                    .slide-arrow.prev {
                        left: 1.5rem;
                    }
                    .slide-arrow.next {
                        right: 1.5rem;
                    }
                    .slide-dots {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 20;
                        display: flex;
                        gap: 0.75rem;
                    }
                    .slide-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.3);
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .slide-dot.active {
                        width: 3rem;
                        background: var(--ll-gold);
                    }
                    @media (max-width: 768px) {
                        .slides {
                            height: 600px;
                        }
                        .slide-portrait img {
                            width: 16rem;
                            height: 16rem;
                        }
                        .slide-caption blockquote {
                            font-size: 1.5rem;
                        }
                    }
                "#}
            </style>
            <FadeIn class="stories-heading">
                <p class="stories-kicker">{"STORIES OF LIMELIGHT"}</p>
                <h3>{"\"What Silence Sounds Like.\""}</h3>
            </FadeIn>
            <FadeIn class="stories-heading" delay={0.2}>
                <h2>{"Real professionals."}<br /><span>{"Real transformation."}</span></h2>
            </FadeIn>
            <FadeIn delay={0.3}>
                <div class="slides">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <div class={carousel.position_of(index).class()}>
                            <div
                                class="slide-backdrop"
                                style={format!("background-image: url('{}');", testimonial.image)}
                            ></div>
                            <div class="slide-portrait">
                                <img src={testimonial.image} alt={testimonial.author} />
                            </div>
                            <div class="slide-caption">
                                <blockquote>{ format!("\"{}\"", testimonial.quote) }</blockquote>
                                <p>{ format!("— {}", testimonial.author) }</p>
                            </div>
                        </div>
                    }) }
                    <button class="slide-arrow prev" aria-label="Previous testimonial" onclick={on_prev}>
                        <i class="fa-solid fa-chevron-left"></i>
                    </button>
                    <button class="slide-arrow next" aria-label="Next testimonial" onclick={on_next}>
                        <i class="fa-solid fa-chevron-right"></i>
                    </button>
                    <div class="slide-dots">
                        { for (0..carousel.len()).map(|index| {
                            let dispatcher = slides.dispatcher();
                            html! {
                                <button
                                    class={classes!("slide-dot", (index == carousel.index()).then_some("active"))}
                                    aria-label={format!("Go to slide {}", index + 1)}
                                    onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(SlideAction::Select(index)))}
                                ></button>
                            }
                        }) }
                    </div>
                </div>
            </FadeIn>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: impl IntoIterator<Item = SlideAction>) -> usize {
        let mut slides = Rc::new(Slides(Carousel::new(SLIDES)));
        for action in actions {
            slides = slides.reduce(action);
        }
        slides.0.index()
    }

    #[test]
    fn reducer_follows_manual_navigation() {
        assert_eq!(reduce_all([SlideAction::Prev]), TESTIMONIALS.len() - 1);
        assert_eq!(reduce_all([SlideAction::Select(2), SlideAction::Next]), 3);
        assert_eq!(
            reduce_all([SlideAction::Next, SlideAction::Next, SlideAction::Next]),
            3
        );
    }

    #[test]
    fn timer_ticks_and_clicks_compose() {
        // a click right after an automatic advance moves twice in quick succession
        assert_eq!(reduce_all([SlideAction::Next, SlideAction::Next]), 2);
    }
}
