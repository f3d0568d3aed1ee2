use crate::rendering::canvas_utils::{create_offscreen_canvas, get_2d_context};
use crate::rendering::compositor::draw_photo;
use cardsmith_core::{PhotoTransform, Viewport, EDITOR_CONFIG};
use wasm_bindgen::prelude::*;
use web_sys::HtmlImageElement;

/// Produce the final embedded photo as a JPEG data URL.
///
/// Renders the current transform onto a viewport-sized scratch canvas with
/// the same compositing routine as the live editor, then copies the
/// centered crop frame 1:1 onto a white-filled output canvas. The white
/// base layer guarantees the result is never transparent even when the
/// photo only partially covers the frame.
pub fn export_cropped_photo(
    image: &HtmlImageElement,
    transform: &PhotoTransform,
    viewport: Viewport,
) -> Result<String, JsValue> {
    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let scratch = create_offscreen_canvas(&document, viewport.width, viewport.height)?;
    let scratch_ctx = get_2d_context(&scratch)?;
    draw_photo(&scratch_ctx, viewport, Some(image), transform)?;

    let frame = viewport.crop_frame();
    let output = create_offscreen_canvas(&document, frame.width, frame.height)?;
    let output_ctx = get_2d_context(&output)?;

    output_ctx.set_fill_style_str("#ffffff");
    output_ctx.fill_rect(0.0, 0.0, frame.width as f64, frame.height as f64);

    // Source and destination rects are the same size: pure copy, no scaling.
    output_ctx.draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        &scratch,
        frame.x as f64,
        frame.y as f64,
        frame.width as f64,
        frame.height as f64,
        0.0,
        0.0,
        frame.width as f64,
        frame.height as f64,
    )?;

    output.to_data_url_with_type_and_encoder_options(
        "image/jpeg",
        &JsValue::from_f64(EDITOR_CONFIG.jpeg_quality),
    )
}

/// Confirm the edit session. With no image loaded there is nothing to crop
/// and the session produces no photo; that is not an error.
pub fn confirm_crop(
    image: Option<&HtmlImageElement>,
    transform: &PhotoTransform,
    viewport: Viewport,
) -> Result<Option<String>, JsValue> {
    match image {
        Some(image) => export_cropped_photo(image, transform, viewport).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn solid_test_image(width: u32, height: u32) -> HtmlImageElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas = create_offscreen_canvas(&document, width, height).unwrap();
        let ctx = get_2d_context(&canvas).unwrap();
        ctx.set_fill_style_str("#336699");
        ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

        let image = HtmlImageElement::new().unwrap();
        image.set_src(&canvas.to_data_url().unwrap());
        image
    }

    #[wasm_bindgen_test]
    fn export_produces_jpeg_data_url() {
        // Decode has not necessarily completed, but the draw of an
        // un-decoded image is a silent no-op and the white base layer
        // still yields a valid fixed-size JPEG.
        let image = solid_test_image(200, 200);
        let transform = PhotoTransform::new();

        let url = export_cropped_photo(&image, &transform, Viewport::default()).unwrap();
        assert!(url.starts_with("data:image/jpeg"));
    }

    #[wasm_bindgen_test]
    fn confirm_without_image_produces_nothing() {
        let transform = PhotoTransform::new();

        let result = confirm_crop(None, &transform, Viewport::default()).unwrap();
        assert!(result.is_none());
    }

    #[wasm_bindgen_test]
    fn confirm_with_image_produces_a_photo() {
        let image = solid_test_image(200, 200);
        let transform = PhotoTransform::new();

        let result = confirm_crop(Some(&image), &transform, Viewport::default()).unwrap();
        assert!(result.is_some_and(|url| url.starts_with("data:image/jpeg")));
    }

    #[wasm_bindgen_test]
    fn output_canvas_matches_crop_frame_size() {
        let frame = Viewport::default().crop_frame();
        assert_eq!((frame.width, frame.height), (120, 140));
    }
}
