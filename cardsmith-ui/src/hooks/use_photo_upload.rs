use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, HtmlImageElement, HtmlInputElement};

/// Pull the selected file out of a file input's change event.
pub fn file_from_input_event(ev: &web_sys::Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Read a photo file to a data URL and decode it into an image element.
///
/// Explicit asynchronous pipeline with defined completion and failure
/// continuations: `on_loaded` fires once the image is fully decoded (with
/// known intrinsic dimensions), `on_error` fires for unreadable files and
/// undecodable image data alike. Nothing can hang silently.
pub fn read_photo_file(
    file: File,
    on_loaded: Callback<HtmlImageElement>,
    on_error: Callback<String>,
) -> Result<(), JsValue> {
    let reader = FileReader::new()?;

    let reader_for_load = reader.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        let Some(data_url) = reader_for_load
            .result()
            .ok()
            .and_then(|value| value.as_string())
        else {
            on_error.call("The selected file could not be read.".to_string());
            return;
        };
        decode_photo(&data_url, on_loaded, on_error);
    }) as Box<dyn Fn(web_sys::ProgressEvent)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        log::error!("FileReader failed to read the selected file");
        on_error.call("The selected file could not be read.".to_string());
    }) as Box<dyn Fn(web_sys::ProgressEvent)>);
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    reader.read_as_data_url(&file)
}

fn decode_photo(data_url: &str, on_loaded: Callback<HtmlImageElement>, on_error: Callback<String>) {
    let Ok(image) = HtmlImageElement::new() else {
        on_error.call("The photo editor could not be initialized.".to_string());
        return;
    };

    let image_for_load = image.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
        on_loaded.call(image_for_load.clone());
    }) as Box<dyn Fn(web_sys::Event)>);
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let onerror = Closure::wrap(Box::new(move |_: web_sys::Event| {
        log::error!("image decode failed (corrupt file or unsupported format)");
        on_error.call("That photo could not be decoded. Try a different file.".to_string());
    }) as Box<dyn Fn(web_sys::Event)>);
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    image.set_src(data_url);
}
