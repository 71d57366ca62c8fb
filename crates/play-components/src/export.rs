//! Browser-side export: clipboard, text download, and PNG/SVG image capture
//!
//! These are the only failable paths in the editor. A failure raises a
//! blocking alert with a static message and logs a trace; nothing is
//! retried and nothing propagates back into the configuration core.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, Document, HtmlAnchorElement,
    HtmlCanvasElement, HtmlImageElement, Url, XmlSerializer,
};

/// Raster export scale factor
const PIXEL_RATIO: f64 = 2.0;

/// Blocking user-facing alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Copy text to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

/// Create a temporary anchor pointing at `href` and click it
fn click_download_link(href: &str, filename: &str) -> Result<(), JsValue> {
    let document = document()?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(href);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

/// Download `content` as a text file via a Blob object URL
pub fn download_text(filename: &str, mime: &str, content: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));

    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let result = click_download_link(&url, filename);
    Url::revoke_object_url(&url)?;
    result
}

/// Serialize the first SVG element matching `selector`
fn svg_markup(selector: &str) -> Option<String> {
    let element = document().ok()?.query_selector(selector).ok()??;
    let serializer = XmlSerializer::new().ok()?;
    serializer.serialize_to_string(&element).ok()
}

fn svg_data_url(markup: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(markup).into();
    format!("data:image/svg+xml;charset=utf-8,{encoded}")
}

/// Download the chart SVG as `{basename}.svg`
pub fn export_svg(selector: &str, basename: &str) {
    let Some(markup) = svg_markup(selector) else {
        tracing::error!(selector, "no SVG element to export");
        alert("Could not capture chart image.");
        return;
    };

    if let Err(err) = click_download_link(&svg_data_url(&markup), &format!("{basename}.svg")) {
        tracing::error!(?err, "SVG export failed");
        alert("Failed to download SVG image.");
    }
}

/// Download the chart as `{basename}.png`, rasterized through an offscreen
/// canvas at 2x pixel ratio
pub fn export_png(selector: &str, basename: &str) {
    let Some(markup) = svg_markup(selector) else {
        tracing::error!(selector, "no SVG element to export");
        alert("Could not capture chart image.");
        return;
    };

    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(err) => {
            tracing::error!(?err, "PNG export failed");
            alert("Failed to download PNG image.");
            return;
        }
    };

    let basename = basename.to_string();
    let target = image.clone();
    let onload = Closure::once_into_js(move || {
        if let Err(err) = rasterize_and_download(&target, &basename) {
            tracing::error!(?err, "PNG export failed");
            alert("Failed to download PNG image.");
        }
    });
    image.set_onload(Some(onload.unchecked_ref()));
    image.set_src(&svg_data_url(&markup));
}

fn rasterize_and_download(image: &HtmlImageElement, basename: &str) -> Result<(), JsValue> {
    let document = document()?;
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;

    let width = image.natural_width().max(1);
    let height = image.natural_height().max(1);
    canvas.set_width((width as f64 * PIXEL_RATIO) as u32);
    canvas.set_height((height as f64 * PIXEL_RATIO) as u32);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    context.scale(PIXEL_RATIO, PIXEL_RATIO)?;
    context.draw_image_with_html_image_element(image, 0.0, 0.0)?;

    let href = canvas.to_data_url_with_type("image/png")?;
    click_download_link(&href, &format!("{basename}.png"))
}
