#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
pub mod core;
mod dom;
mod effect;
mod events;
mod frame;
mod render;

pub use effect::EffectHandle;

thread_local! {
    // Instance created by the automatic start-up mount; replacing it tears
    // the previous one down.
    static AUTO_MOUNTED: RefCell<Option<EffectHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fake3d-web starting");

    spawn_local(async move {
        if let Err(e) = auto_mount().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Mount on the page's `canvas.webgl`, if it has one.
async fn auto_mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(canvas) = dom::find_effect_canvas(&document) else {
        log::info!(
            "[effect] no {} on the page; waiting for mount()",
            constants::CANVAS_SELECTOR
        );
        return Ok(());
    };
    let settings = dom::settings_from_canvas(&canvas);
    if let Some(mut previous) = AUTO_MOUNTED.with(|slot| slot.borrow_mut().take()) {
        previous.destroy();
    }
    let handle = effect::mount_on(canvas, settings).await?;
    AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle));
    Ok(())
}

/// Mount the effect on a canvas supplied by the host page.
#[wasm_bindgen]
pub async fn mount(canvas: web::HtmlCanvasElement) -> Result<EffectHandle, JsValue> {
    let settings = dom::settings_from_canvas(&canvas);
    effect::mount_on(canvas, settings)
        .await
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}
