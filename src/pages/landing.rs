use yew::prelude::*;

use crate::components::footer::Footer;
use crate::pages::sections::{
    audience::Audience, difference::Difference, hero::Hero, invitation::Invitation,
    journey::Journey, philosophy::Philosophy, pillars::Pillars, stories::Stories,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <main class="landing-page">
                <Hero />
                <Philosophy />
                <Difference />
                <Journey />
                <Audience />
                <Pillars />
                <Stories />
                <Invitation />
            </main>
            <Footer />
        </>
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use crate::lead::{LeadField, LeadForm};
    use crate::motion::carousel::Carousel;
    use crate::motion::scroll_progress::{scroll_progress, RegionBounds};

    #[test]
    fn visitor_scrolls_browses_stories_and_books_a_tour() {
        // scroll to the middle of the tracked road
        let viewport_height = 900.0;
        let road = RegionBounds {
            top: 3_000.0,
            height: 2_000.0,
        };
        let start = road.top - viewport_height / 2.0;
        let marker = scroll_progress(start + road.height / 2.0, viewport_height, road);
        assert!((marker - 50.0).abs() < 0.5);

        // three clicks on "next" in the four-slide carousel
        let mut carousel = Carousel::new(NonZeroUsize::new(4).unwrap());
        for _ in 0..3 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 3);

        // book a tour with only the required fields
        let mut form = LeadForm::default();
        form.set(LeadField::Name, "A");
        form.set(LeadField::Email, "a@b.com");
        form.set(LeadField::Phone, "123");
        form.set(LeadField::Organization, "");
        form.set(LeadField::Requirement, "");

        let submitted_at = 60_000.0;
        let lead = form.submit(submitted_at).unwrap();
        assert_eq!(lead.email, "a@b.com");
        assert!(form.is_submitted());
        assert!(LeadField::ALL.iter().all(|field| form.value(*field).is_empty()));

        assert!(form.tick(submitted_at + 3_000.0));
        assert!(!form.is_submitted());
        assert!(LeadField::ALL.iter().all(|field| form.value(*field).is_empty()));
    }
}
