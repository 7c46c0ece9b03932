mod listener;
mod pointer;

pub use listener::ListenerGuard;

use crate::core::{EffectMessage, Inbox, InputEvent};
use crate::dom;
use web_sys as web;

/// Register every listener the effect needs on `window`.
///
/// Listeners only post into `inbox`; dropping the returned guards removes them.
pub fn wire_effect_listeners(
    window: &web::Window,
    inbox: &Inbox<EffectMessage>,
) -> Vec<ListenerGuard> {
    let guards: Vec<ListenerGuard> = [
        pointer::wire_mousemove(window, inbox),
        pointer::wire_mouseout(window, inbox),
        pointer::wire_touchmove(window, inbox),
        pointer::wire_touchend(window, inbox),
        wire_resize(window, inbox),
    ]
    .into_iter()
    .flatten()
    .collect();
    log::info!(
        "[events] {} listeners registered: {:?}",
        guards.len(),
        guards.iter().map(ListenerGuard::event).collect::<Vec<_>>()
    );
    guards
}

// The size is read here, when the event fires, not when the frame runs.
fn wire_resize(window: &web::Window, inbox: &Inbox<EffectMessage>) -> Option<ListenerGuard> {
    let inbox = inbox.clone();
    let win = window.clone();
    ListenerGuard::add(window, "resize", move |_ev: web::Event| {
        inbox.post(EffectMessage::Input(InputEvent::Resize {
            viewport: dom::window_viewport(&win),
            device_pixel_ratio: win.device_pixel_ratio(),
        }));
    })
}
