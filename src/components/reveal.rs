use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::motion::reveal::RevealTarget;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds to wait after the element scrolls into view.
    #[prop_or(0.0)]
    pub delay: f64,
}

/// Wrapper that stays invisible until it first scrolls into view, then fades
/// in once and is never observed again.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |delay: &f64| {
                let target = Rc::new(RefCell::new(RevealTarget::new(*delay)));
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe(&element, target, revealed));

                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            props.delay,
        );
    }

    let style = RevealTarget::new(props.delay).animation_delay_css();

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*revealed).then_some("animate-fade-in"))}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

fn observe(
    element: &Element,
    target: Rc<RefCell<RevealTarget>>,
    revealed: UseStateHandle<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = ObserverCallback::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if target.borrow_mut().observe(entry.is_intersecting()) {
                    revealed.set(true);
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(err) => {
            // element keeps its pre-reveal styling
            log::debug!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}
