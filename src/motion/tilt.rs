use std::collections::BTreeMap;

/// How strongly a family of cards reacts to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltProfile {
    /// Pixels of pointer offset per degree of rotation.
    pub sensitivity: f64,
    /// How far the card rises while tilted.
    pub lift_px: f64,
}

/// Viewport-space rectangle of a card, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub client_x: f64,
    pub client_y: f64,
}

/// A card's 3D transform. `Tilt::neutral()` is the resting pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub translate_y: f64,
}

impl Tilt {
    pub fn neutral() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            translate_y: 0.0,
        }
    }

    /// Rotation proportional to the pointer's offset from the card center.
    pub fn from_pointer(pointer: Pointer, rect: CardRect, profile: TiltProfile) -> Self {
        let x = pointer.client_x - rect.left;
        let y = pointer.client_y - rect.top;
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;
        Self {
            rotate_x: (y - center_y) / profile.sensitivity,
            rotate_y: (center_x - x) / profile.sensitivity,
            translate_y: -profile.lift_px,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    /// CSS `transform` value; the neutral pose maps to an empty string so the
    /// stylesheet's own transform takes over again.
    pub fn to_css(&self) -> String {
        if self.is_neutral() {
            return String::new();
        }
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY({}px)",
            self.rotate_x, self.rotate_y, self.translate_y
        )
    }
}

/// Tilt state for every card of one section, keyed by the card's position.
///
/// A section registers its cards when it mounts and clears the registry when
/// it unmounts; unregistered keys are ignored.
#[derive(Debug, Clone)]
pub struct TiltRegistry<K: Ord> {
    profile: TiltProfile,
    cards: BTreeMap<K, Option<Tilt>>,
}

impl<K: Ord + Clone> TiltRegistry<K> {
    pub fn new(profile: TiltProfile) -> Self {
        Self {
            profile,
            cards: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, key: K) {
        self.cards.entry(key).or_insert(None);
    }

    /// Recomputes the tilt of `key` for a pointer move. Only a hovered,
    /// registered card gets a transform.
    pub fn pointer_moved(
        &mut self,
        key: &K,
        hovered: bool,
        pointer: Pointer,
        rect: CardRect,
    ) -> Option<Tilt> {
        if !hovered {
            return None;
        }
        let slot = self.cards.get_mut(key)?;
        let tilt = Tilt::from_pointer(pointer, rect, self.profile);
        *slot = Some(tilt);
        Some(tilt)
    }

    /// Drops any transform held for `key`. Returns whether the key is
    /// registered, i.e. whether the card's style should be reset.
    pub fn pointer_left(&mut self, key: &K) -> bool {
        match self.cards.get_mut(key) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    pub fn tilt(&self, key: &K) -> Tilt {
        self.cards
            .get(key)
            .copied()
            .flatten()
            .unwrap_or_else(Tilt::neutral)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.cards.keys()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: TiltProfile = TiltProfile {
        sensitivity: 20.0,
        lift_px: 8.0,
    };

    const RECT: CardRect = CardRect {
        left: 100.0,
        top: 200.0,
        width: 300.0,
        height: 400.0,
    };

    fn center() -> Pointer {
        Pointer {
            client_x: 250.0,
            client_y: 400.0,
        }
    }

    #[test]
    fn center_of_card_has_no_rotation() {
        let tilt = Tilt::from_pointer(center(), RECT, PROFILE);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!(tilt.translate_y, -8.0);
    }

    #[test]
    fn rotation_follows_pointer_offset() {
        // bottom-right corner
        let pointer = Pointer {
            client_x: 400.0,
            client_y: 600.0,
        };
        let tilt = Tilt::from_pointer(pointer, RECT, PROFILE);
        assert_eq!(tilt.rotate_x, 10.0);
        assert_eq!(tilt.rotate_y, -7.5);
        assert_eq!(
            tilt.to_css(),
            "perspective(1000px) rotateX(10deg) rotateY(-7.5deg) translateY(-8px)"
        );
    }

    #[test]
    fn neutral_tilt_clears_the_transform() {
        assert_eq!(Tilt::neutral().to_css(), "");
    }

    #[test]
    fn only_hovered_registered_cards_tilt() {
        let mut registry = TiltRegistry::new(PROFILE);
        registry.register(0usize);
        registry.register(1usize);

        assert!(registry.pointer_moved(&0, false, center(), RECT).is_none());
        assert!(registry.pointer_moved(&7, true, center(), RECT).is_none());
        assert!(registry.pointer_moved(&1, true, center(), RECT).is_some());

        assert!(registry.tilt(&0).is_neutral());
        assert!(!registry.tilt(&1).is_neutral());
    }

    #[test]
    fn leaving_resets_regardless_of_magnitude() {
        let mut registry = TiltRegistry::new(TiltProfile {
            sensitivity: 1.0,
            lift_px: 12.0,
        });
        registry.register(3usize);
        let far = Pointer {
            client_x: -5_000.0,
            client_y: 9_000.0,
        };
        let tilt = registry.pointer_moved(&3, true, far, RECT).unwrap();
        assert!(tilt.rotate_x.abs() > 1_000.0);

        assert!(registry.pointer_left(&3));
        assert!(registry.tilt(&3).is_neutral());
        // leaving twice is harmless
        assert!(registry.pointer_left(&3));
        assert!(!registry.pointer_left(&4));
    }

    #[test]
    fn clear_forgets_every_card() {
        let mut registry = TiltRegistry::new(PROFILE);
        for key in 0..5usize {
            registry.register(key);
        }
        registry.register(2);
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.pointer_moved(&2, true, center(), RECT).is_none());
    }
}
