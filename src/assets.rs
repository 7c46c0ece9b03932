use crate::core::{decode_image, AssetError, AssetKind, DecodedImage, EffectMessage, Inbox};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fetch and decode an image. No timeout or retry.
pub async fn fetch_image(path: &str) -> Result<DecodedImage, AssetError> {
    let fetch_err = |reason: String| AssetError::Fetch {
        path: path.to_string(),
        reason,
    };
    let body_err = |reason: String| AssetError::Body {
        path: path.to_string(),
        reason,
    };

    let window = web::window().ok_or_else(|| fetch_err("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| fetch_err(format!("{:?}", e)))?
        .dyn_into::<web::Response>()
        .map_err(|e| fetch_err(format!("not a Response: {:?}", e)))?;
    if !resp.ok() {
        return Err(AssetError::Status {
            path: path.to_string(),
            status: resp.status(),
        });
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| body_err(format!("{:?}", e)))?)
        .await
        .map_err(|e| body_err(format!("{:?}", e)))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    decode_image(&bytes)
}

/// Start loading `path` in the background; the outcome arrives in `inbox`.
pub fn spawn_load(kind: AssetKind, path: String, inbox: Inbox<EffectMessage>) {
    spawn_local(async move {
        let msg = match fetch_image(&path).await {
            Ok(image) => {
                log::info!(
                    "[assets] {} image {} loaded ({}x{})",
                    kind.label(),
                    path,
                    image.width,
                    image.height
                );
                EffectMessage::AssetReady { kind, image }
            }
            Err(error) => EffectMessage::AssetFailed { kind, error },
        };
        inbox.post(msg);
    });
}
