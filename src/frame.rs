use crate::core::{
    EffectAction, EffectMessage, EffectState, FrameClock, FrameLoop, Inbox, ResizePlan,
};
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback mutates. Host callbacks never touch it
/// directly; they post into `inbox`.
pub struct FrameContext {
    pub state: EffectState,
    pub gpu: render::GpuState,
    pub canvas: web::HtmlCanvasElement,
    pub inbox: Inbox<EffectMessage>,
    pub clock: FrameClock,
    pub frame_loop: FrameLoop,
}

impl FrameContext {
    /// Read the window size and apply camera, canvas, surface and plane sizing.
    pub fn resize(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let viewport = dom::window_viewport(&window);
        let plan = self.state.resize(viewport, window.device_pixel_ratio());
        self.apply_resize(&plan);
    }

    fn apply_resize(&mut self, plan: &ResizePlan) {
        dom::apply_canvas_size(&self.canvas, plan);
        self.gpu.resize(plan.backing_width, plan.backing_height);
        self.gpu.set_mesh_scale(plan.mesh_scale);
        log::debug!(
            "[frame] resize {}x{} ratio={} branch={:?} scale={:?}",
            plan.viewport.width,
            plan.viewport.height,
            plan.pixel_ratio,
            plan.branch,
            plan.mesh_scale
        );
    }

    /// Apply queued input and asset completions in arrival order.
    fn process_messages(&mut self) {
        if self.inbox.is_empty() {
            return;
        }
        log::trace!("[frame] {} queued messages", self.inbox.len());
        let actions = self.state.apply_messages(self.inbox.drain());
        for action in actions {
            match action {
                EffectAction::Upload { kind, image } => self.gpu.upload_image(kind, &image),
                EffectAction::RebuildMesh => self.gpu.rebuild_mesh(self.state.settings.threshold),
                EffectAction::Resize(plan) => self.apply_resize(&plan),
                EffectAction::AssetUnavailable { kind, error } => {
                    log::warn!("[assets] {} image unavailable: {}", kind.label(), error);
                }
            }
        }
    }

    pub fn frame(&mut self) {
        self.process_messages();

        let t = self.clock.tick(Instant::now());
        let mouse = self.state.tick(t.delta_sec);
        let mvp = self.state.model_view_projection(self.gpu.mesh_scale());
        self.gpu.write_uniforms(mvp, mouse);

        match self.gpu.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

type TickCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owner of the animation-frame callback. Dropping it (outside the callback)
/// cancels any pending frame and frees the closure.
pub struct LoopHandle {
    tick: TickCell,
    pending: Rc<Cell<Option<i32>>>,
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until its token is cancelled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> Option<LoopHandle> {
    if !frame_ctx.borrow_mut().frame_loop.start() {
        log::warn!("[frame] loop cancelled before start");
        return None;
    }
    let tick: TickCell = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        let (running, frames) = {
            let mut ctx = frame_ctx.borrow_mut();
            let running = ctx.frame_loop.begin_frame();
            if running {
                ctx.frame();
            }
            (running, ctx.frame_loop.frames())
        };
        if running {
            pending_tick.set(request_frame(&tick_clone));
        } else {
            log::info!("[frame] loop stopped after {} frames", frames);
        }
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));
    Some(LoopHandle { tick, pending })
}

fn request_frame(tick: &TickCell) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
