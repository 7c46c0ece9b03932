use crate::assets;
use crate::core::{
    AssetKind, CancelToken, EffectState, FrameClock, FrameLoop, Inbox, LoopState, Settings,
};
use crate::dom;
use crate::events::{self, ListenerGuard};
use crate::frame::{self, FrameContext, LoopHandle};
use crate::render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// A mounted parallax effect. Destroying (or dropping) it stops the frame
/// loop, removes every listener and releases GPU resources.
#[wasm_bindgen]
pub struct EffectHandle {
    token: CancelToken,
    listeners: Vec<ListenerGuard>,
    frame_loop: Option<LoopHandle>,
    ctx: Rc<RefCell<FrameContext>>,
}

#[wasm_bindgen]
impl EffectHandle {
    /// Tear the effect down. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.token.is_cancelled() && self.frame_loop.is_none() {
            return;
        }
        self.token.cancel();
        self.frame_loop = None;
        let removed = self.listeners.len();
        self.listeners.clear();
        let state = match self.ctx.try_borrow_mut() {
            Ok(mut ctx) => {
                ctx.frame_loop.poll();
                ctx.gpu.destroy();
                Some(ctx.frame_loop.state())
            }
            Err(_) => None,
        };
        log::info!(
            "[effect] destroyed ({} listeners removed, loop {:?})",
            removed,
            state
        );
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.ctx
            .try_borrow_mut()
            .map(|mut ctx| ctx.frame_loop.poll() == LoopState::Running)
            .unwrap_or(true)
    }
}

impl Drop for EffectHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Mount the effect on `canvas`, following the fixed setup order: renderer,
/// scene + camera, asset loads, plane, listeners, initial sizing, frame loop.
pub async fn mount_on(
    canvas: web::HtmlCanvasElement,
    settings: Settings,
) -> anyhow::Result<EffectHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let viewport = dom::window_viewport(&window);

    let mut gpu = GpuState::new(&canvas).await?;

    let state = EffectState::new(viewport, settings);
    log::info!(
        "[effect] viewport {}x{} aspect={:.3} fov_y={:.4}",
        viewport.width,
        viewport.height,
        state.construction_aspect(),
        state.fov_y()
    );

    let inbox = Inbox::new();
    for kind in [AssetKind::Depth, AssetKind::Color] {
        let path = state.settings.path_for(kind).to_string();
        assets::spawn_load(kind, path, inbox.clone());
    }

    gpu.rebuild_mesh(state.settings.threshold);

    let listeners = events::wire_effect_listeners(&window, &inbox);

    let frame_loop = FrameLoop::new(CancelToken::new());
    let token = frame_loop.token().clone();
    let ctx = Rc::new(RefCell::new(FrameContext {
        state,
        gpu,
        canvas,
        inbox,
        clock: FrameClock::new(Instant::now()),
        frame_loop,
    }));
    ctx.borrow_mut().resize();

    let frame_loop = frame::start_loop(ctx.clone());

    Ok(EffectHandle {
        token,
        listeners,
        frame_loop,
        ctx,
    })
}
