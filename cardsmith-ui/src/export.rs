//! Async card export pipeline: snapshot the card node, then either download
//! the raster as PNG or package it into a card-sized PDF.

use crate::bindings;
use cardsmith_core::export_file_name;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement};

/// Snapshot the card and download it as a PNG.
pub async fn download_card_image(card: &Element, display_name: &str) -> Result<(), JsValue> {
    let raster = bindings::snapshot_card(card).await?;
    let url = raster.to_data_url_with_type("image/png")?;
    trigger_download(&url, &export_file_name(display_name, "png"))
}

/// Snapshot the card and download it as a PDF sized to the physical card.
pub async fn download_card_pdf(card: &Element, display_name: &str) -> Result<(), JsValue> {
    let raster = bindings::snapshot_card(card).await?;
    let png = raster.to_data_url_with_type("image/png")?;
    bindings::write_card_pdf(&png, &export_file_name(display_name, "pdf"))
}

/// Start a browser download via a synthesized anchor click.
fn trigger_download(href: &str, file_name: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}
