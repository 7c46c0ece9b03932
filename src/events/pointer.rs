use super::listener::ListenerGuard;
use crate::core::{EffectMessage, Inbox, InputEvent};
use wasm_bindgen::JsCast;
use web_sys as web;

pub(crate) fn wire_mousemove(
    window: &web::Window,
    inbox: &Inbox<EffectMessage>,
) -> Option<ListenerGuard> {
    let inbox = inbox.clone();
    ListenerGuard::add(window, "mousemove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            inbox.post(EffectMessage::Input(InputEvent::PointerMove {
                x: ev.client_x() as f32,
                y: ev.client_y() as f32,
            }));
        }
    })
}

// `mouseout` bubbles from every element; only a null related target means
// the pointer actually left the window.
pub(crate) fn wire_mouseout(
    window: &web::Window,
    inbox: &Inbox<EffectMessage>,
) -> Option<ListenerGuard> {
    let inbox = inbox.clone();
    ListenerGuard::add(window, "mouseout", move |ev: web::Event| {
        let left_window = ev
            .dyn_ref::<web::MouseEvent>()
            .map(|m| m.related_target().is_none())
            .unwrap_or(true);
        if left_window {
            inbox.post(EffectMessage::Input(InputEvent::PointerLeave));
        }
    })
}

pub(crate) fn wire_touchmove(
    window: &web::Window,
    inbox: &Inbox<EffectMessage>,
) -> Option<ListenerGuard> {
    let inbox = inbox.clone();
    ListenerGuard::add(window, "touchmove", move |ev: web::Event| {
        let Some(touch) = ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|t| t.touches().get(0))
        else {
            return;
        };
        inbox.post(EffectMessage::Input(InputEvent::TouchMove {
            x: touch.page_x() as f32,
            y: touch.page_y() as f32,
        }));
    })
}

pub(crate) fn wire_touchend(
    window: &web::Window,
    inbox: &Inbox<EffectMessage>,
) -> Option<ListenerGuard> {
    let inbox = inbox.clone();
    ListenerGuard::add(window, "touchend", move |_ev: web::Event| {
        inbox.post(EffectMessage::Input(InputEvent::TouchEnd));
    })
}
