//! Extern bindings for the two opaque export services loaded from the host
//! page: html2canvas (snapshot renderer) and jsPDF (document writer).

use cardsmith_core::EXPORT_CONFIG;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlCanvasElement};

#[wasm_bindgen]
extern "C" {
    /// `html2canvas(element, options)` — resolves to a canvas holding a
    /// raster of the element.
    #[wasm_bindgen(js_name = html2canvas, catch)]
    fn html2canvas(node: &Element, options: &JsValue) -> Result<js_sys::Promise, JsValue>;

    /// `new window.jspdf.jsPDF(options)`
    #[wasm_bindgen(js_namespace = ["window", "jspdf"], js_name = jsPDF)]
    pub type JsPdf;

    #[wasm_bindgen(constructor, js_namespace = ["window", "jspdf"], js_class = "jsPDF")]
    fn new(options: &JsValue) -> JsPdf;

    #[wasm_bindgen(method, catch, js_name = addImage)]
    fn add_image(
        this: &JsPdf,
        data_url: &str,
        format: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn save(this: &JsPdf, file_name: &str) -> Result<(), JsValue>;
}

fn set(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)?;
    Ok(())
}

/// Rasterize the card node at export resolution.
///
/// Supersampled 3x with a white background; CORS taint allowances match
/// what the hosted card assets need. May reject (e.g. cross-origin taint);
/// the caller surfaces that to the user.
pub async fn snapshot_card(node: &Element) -> Result<HtmlCanvasElement, JsValue> {
    let options = js_sys::Object::new();
    set(&options, "scale", &EXPORT_CONFIG.snapshot_scale.into())?;
    set(&options, "backgroundColor", &"#ffffff".into())?;
    set(&options, "useCORS", &true.into())?;
    set(&options, "allowTaint", &true.into())?;
    set(&options, "width", &(EXPORT_CONFIG.card_width as f64).into())?;
    set(&options, "height", &(EXPORT_CONFIG.card_height as f64).into())?;

    let raster = JsFuture::from(html2canvas(node, &options)?).await?;
    Ok(raster.unchecked_into())
}

/// Package a PNG data URL of the card into a card-sized PDF and trigger the
/// browser download.
pub fn write_card_pdf(png_data_url: &str, file_name: &str) -> Result<(), JsValue> {
    let format = js_sys::Array::new();
    format.push(&EXPORT_CONFIG.page_size_mm.0.into());
    format.push(&EXPORT_CONFIG.page_size_mm.1.into());

    let options = js_sys::Object::new();
    set(&options, "orientation", &"portrait".into())?;
    set(&options, "unit", &"mm".into())?;
    set(&options, "format", &format)?;

    let pdf = JsPdf::new(&options);
    let (x, y) = EXPORT_CONFIG.image_origin_mm;
    let (width, height) = EXPORT_CONFIG.image_size_mm;
    pdf.add_image(png_data_url, "PNG", x, y, width, height)?;
    pdf.save(file_name)?;
    Ok(())
}
