use crate::motion::tilt::TiltProfile;

#[cfg(debug_assertions)]
pub fn lead_endpoint() -> Option<&'static str> {
    None // Local builds only log captured leads
}

#[cfg(not(debug_assertions))]
pub fn lead_endpoint() -> Option<&'static str> {
    option_env!("LIMELIGHT_LEAD_ENDPOINT").filter(|url| !url.is_empty())
}

/// Auto-advance cadence of the testimonial carousel.
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;

/// How long the "Tour Requested" panel replaces the form.
pub const ACKNOWLEDGEMENT_MS: u32 = 3_000;

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Fraction of the viewport height the progress marker starts ahead of its region.
pub const PROGRESS_TRIGGER_RATIO: f64 = 0.5;

pub const JOURNEY_TILT: TiltProfile = TiltProfile {
    sensitivity: 20.0,
    lift_px: 8.0,
};

pub const AUDIENCE_TILT: TiltProfile = TiltProfile {
    sensitivity: 25.0,
    lift_px: 12.0,
};
