use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::motion::tilt::{CardRect, Pointer, Tilt, TiltProfile, TiltRegistry};

const LEAVE_EVENTS: [&str; 2] = ["mouseleave", "mouseout"];

/// Hands out one `NodeRef` per card and keeps the cards' 3D tilt in sync
/// with the pointer. Every card must carry `card_class` so pointer-leave
/// events bubbling from its children can be traced back to it.
#[hook]
pub fn use_tilt_cards(
    count: usize,
    card_class: &'static str,
    profile: TiltProfile,
) -> Rc<Vec<NodeRef>> {
    let cards = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        count,
    );
    let registry = use_mut_ref(|| TiltRegistry::<usize>::new(profile));

    {
        let cards = cards.clone();
        let registry = registry.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            let pointer = Pointer {
                client_x: f64::from(e.client_x()),
                client_y: f64::from(e.client_y()),
            };
            for (key, node) in cards.iter().enumerate() {
                let Some(card) = node.cast::<HtmlElement>() else {
                    continue;
                };
                let hovered = card.matches(":hover").unwrap_or(false);
                let tilt = registry
                    .borrow_mut()
                    .pointer_moved(&key, hovered, pointer, card_rect(&card));
                if let Some(tilt) = tilt {
                    let _ = card.style().set_property("transform", &tilt.to_css());
                }
            }
        });
    }

    {
        let cards = cards.clone();
        let registry = registry.clone();
        use_effect_with_deps(
            move |_| {
                {
                    let mut registry = registry.borrow_mut();
                    for key in 0..cards.len() {
                        registry.register(key);
                    }
                }

                let selector = format!(".{}", card_class);
                let on_leave = {
                    let registry = registry.clone();
                    Closure::<dyn Fn(Event)>::new(move |e: Event| {
                        let Some(element) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                            return;
                        };
                        let Ok(Some(card)) = element.closest(&selector) else {
                            return;
                        };
                        let card_node: &Node = &card;
                        let key = cards.iter().position(|node| {
                            node.get()
                                .map_or(false, |node| node.is_same_node(Some(card_node)))
                        });
                        if let Some(key) = key {
                            if registry.borrow_mut().pointer_left(&key) {
                                if let Some(card) = card.dyn_ref::<HtmlElement>() {
                                    let _ = card
                                        .style()
                                        .set_property("transform", &Tilt::neutral().to_css());
                                }
                            }
                        }
                    })
                };

                let document = web_sys::window().and_then(|w| w.document());
                if let Some(document) = &document {
                    for event in LEAVE_EVENTS {
                        let _ = document.add_event_listener_with_callback(
                            event,
                            on_leave.as_ref().unchecked_ref(),
                        );
                    }
                }

                move || {
                    if let Some(document) = document {
                        for event in LEAVE_EVENTS {
                            let _ = document.remove_event_listener_with_callback(
                                event,
                                on_leave.as_ref().unchecked_ref(),
                            );
                        }
                    }
                    registry.borrow_mut().clear();
                }
            },
            (),
        );
    }

    cards
}

fn card_rect(card: &HtmlElement) -> CardRect {
    let rect = card.get_bounding_client_rect();
    CardRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}
