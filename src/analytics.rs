use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::MouseEvent;
use yew::Callback;

/// Interactions reported to the analytics collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsEvent {
    LogoClicked,
    NavBookTour,
    MobileNavBookTour,
    TourRequested,
}

impl AnalyticsEvent {
    pub fn name(self) -> &'static str {
        match self {
            AnalyticsEvent::LogoClicked => "Logo Clicked",
            AnalyticsEvent::NavBookTour => "Nav: Book Tour Clicked",
            AnalyticsEvent::MobileNavBookTour => "Mobile Nav: Book Tour Clicked",
            AnalyticsEvent::TourRequested => "Tour Requested",
        }
    }
}

#[derive(Serialize)]
struct DataLayerEntry<'a> {
    event: &'a str,
}

pub fn track(event: AnalyticsEvent) {
    tracing::info!(event = event.name(), "analytics event");
    if let Err(err) = push_to_data_layer(event) {
        log::debug!("dataLayer push skipped: {:?}", err);
    }
}

/// Click handler that reports `event` and lets the link navigate as usual.
pub fn on_click(event: AnalyticsEvent) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| track(event))
}

// Tag managers install `window.dataLayer`; without one this is a no-op.
fn push_to_data_layer(event: AnalyticsEvent) -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let layer = js_sys::Reflect::get(&window, &JsValue::from_str("dataLayer"))?;
    if layer.is_undefined() || layer.is_null() {
        return Ok(());
    }
    let layer: js_sys::Array = layer.dyn_into()?;
    let entry = serde_wasm_bindgen::to_value(&DataLayerEntry {
        event: event.name(),
    })?;
    layer.push(&entry);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_are_stable() {
        assert_eq!(AnalyticsEvent::LogoClicked.name(), "Logo Clicked");
        assert_eq!(AnalyticsEvent::NavBookTour.name(), "Nav: Book Tour Clicked");
        assert_eq!(
            AnalyticsEvent::MobileNavBookTour.name(),
            "Mobile Nav: Book Tour Clicked"
        );
        assert_eq!(AnalyticsEvent::TourRequested.name(), "Tour Requested");
    }
}
