use cardsmith_core::{placement, ImageSize, PhotoTransform, Viewport};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

/// Intrinsic dimensions of a decoded image element.
pub fn image_size(image: &HtmlImageElement) -> ImageSize {
    ImageSize::new(image.natural_width(), image.natural_height())
}

/// Draw the transformed photo onto a surface sized to the viewport.
///
/// Clears first; with no image the surface stays blank. The rotation is
/// applied inside a save/restore pair so the context transform never leaks
/// to later draws. Both the live editor canvas and the crop exporter's
/// scratch canvas go through here — the placement math itself lives in
/// `cardsmith_core::placement` so the two can never diverge.
pub fn draw_photo(
    ctx: &CanvasRenderingContext2d,
    viewport: Viewport,
    image: Option<&HtmlImageElement>,
    transform: &PhotoTransform,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);

    let Some(image) = image else {
        return Ok(());
    };

    let p = placement(image_size(image), transform);

    ctx.save();
    ctx.translate(p.pivot_x, p.pivot_y)?;
    ctx.rotate(p.rotation_radians)?;
    ctx.translate(-p.pivot_x, -p.pivot_y)?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        image,
        p.offset_x,
        p.offset_y,
        p.scaled_width,
        p.scaled_height,
    )?;
    ctx.restore();

    Ok(())
}

#[cfg(test)]
mod browser_tests {
    use super::*;
    use crate::rendering::canvas_utils::{create_offscreen_canvas, get_2d_context};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn draw_without_image_leaves_surface_blank() {
        let document = web_sys::window().unwrap().document().unwrap();
        let viewport = Viewport::default();
        let canvas = create_offscreen_canvas(&document, viewport.width, viewport.height).unwrap();
        let ctx = get_2d_context(&canvas).unwrap();

        // Pre-fill so a missing clear would be visible.
        ctx.set_fill_style_str("#ff0000");
        ctx.fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);

        draw_photo(&ctx, viewport, None, &PhotoTransform::new()).unwrap();

        let pixel = ctx.get_image_data(0.0, 0.0, 1.0, 1.0).unwrap().data();
        assert_eq!(pixel.to_vec(), vec![0, 0, 0, 0]);
    }
}
