use std::num::NonZeroUsize;

/// Where a slide sits relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePosition {
    Active,
    /// Parked off-stage to the left.
    Previous,
    /// Parked off-stage to the right.
    Next,
    Hidden,
}

impl SlidePosition {
    pub fn class(self) -> &'static str {
        match self {
            SlidePosition::Active => "slide slide-active",
            SlidePosition::Previous => "slide slide-previous",
            SlidePosition::Next => "slide slide-next",
            SlidePosition::Hidden => "slide slide-hidden",
        }
    }
}

/// Index into a fixed, non-empty ring of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            index: 0,
            len: len.get(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jumps to slide `index`; out-of-range values wrap around.
    pub fn select(&mut self, index: usize) {
        self.index = index % self.len;
    }

    pub fn position_of(&self, slide: usize) -> SlidePosition {
        if slide == self.index {
            SlidePosition::Active
        } else if self.len > 1 && slide == (self.index + self.len - 1) % self.len {
            SlidePosition::Previous
        } else if self.len > 1 && slide == (self.index + 1) % self.len {
            SlidePosition::Next
        } else {
            SlidePosition::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(len: usize) -> Carousel {
        Carousel::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn next_then_prev_round_trips_from_every_index() {
        for len in 1..=6 {
            for start in 0..len {
                let mut carousel = ring(len);
                carousel.select(start);
                carousel.next();
                carousel.prev();
                assert_eq!(carousel.index(), start);
            }
        }
    }

    #[test]
    fn select_lands_on_requested_index() {
        let mut carousel = ring(5);
        for i in 0..5 {
            carousel.select(i);
            assert_eq!(carousel.index(), i);
        }
        carousel.select(7);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn n_steps_close_the_cycle() {
        let len = 4;
        for start in 0..len {
            let mut carousel = ring(len);
            carousel.select(start);
            for _ in 0..len {
                carousel.next();
            }
            assert_eq!(carousel.index(), start);
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut carousel = ring(4);
        carousel.prev();
        assert_eq!(carousel.index(), 3);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn neighbours_are_parked_with_wraparound() {
        let mut carousel = ring(4);
        let positions = |c: &Carousel| (0..4).map(|i| c.position_of(i)).collect::<Vec<_>>();

        assert_eq!(
            positions(&carousel),
            vec![
                SlidePosition::Active,
                SlidePosition::Next,
                SlidePosition::Hidden,
                SlidePosition::Previous,
            ]
        );

        carousel.select(3);
        assert_eq!(
            positions(&carousel),
            vec![
                SlidePosition::Next,
                SlidePosition::Hidden,
                SlidePosition::Previous,
                SlidePosition::Active,
            ]
        );
    }

    #[test]
    fn single_slide_has_no_neighbours() {
        let carousel = ring(1);
        assert_eq!(carousel.position_of(0), SlidePosition::Active);
    }
}
