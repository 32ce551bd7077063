use anyhow::{anyhow, bail};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch and decode one image asset. Missing or undecodable assets are
/// startup precondition failures; callers abort initialization.
pub async fn load_rgba(window: &web::Window, url: &str) -> anyhow::Result<image::RgbaImage> {
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {url}: {e:?}"))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow!("fetch {url}: unexpected response {e:?}"))?;
    if !resp.ok() {
        bail!("fetch {url}: HTTP {}", resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow!("fetch {url}: {e:?}"))?,
    )
    .await
    .map_err(|e| anyhow!("fetch {url}: {e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    let img = image::load_from_memory(&bytes)
        .map_err(|e| anyhow!("decode {url}: {e}"))?
        .to_rgba8();
    log::info!("loaded {url} ({}x{})", img.width(), img.height());
    Ok(img)
}
