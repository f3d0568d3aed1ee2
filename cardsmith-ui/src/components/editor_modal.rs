//! The photo editor modal: canvas with crop-frame overlay, zoom/rotation
//! sliders, nudge grid, and the status line.

use crate::hooks::use_photo_gestures;
use crate::rendering::{draw_photo, get_2d_context, image_size};
use cardsmith_core::{Direction, PhotoTransform, Viewport, EDITOR_CONFIG};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

#[component]
pub fn EditorModal(
    /// Whether the editor is open
    #[prop(into)]
    visible: Signal<bool>,
    /// Currently loaded source image (None = blank canvas)
    image: Signal<Option<HtmlImageElement>>,
    /// The edit session's transform state
    transform: RwSignal<PhotoTransform>,
    /// Called when the user confirms the crop
    on_confirm: Callback<()>,
    /// Called when the user closes without confirming
    on_cancel: Callback<()>,
) -> impl IntoView {
    let viewport = Viewport::default();
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();

    use_photo_gestures(canvas_ref, transform);

    // Redraw on every transform or image change.
    create_effect(move |_| {
        let current = transform.get();
        let current_image = image.get();

        let Some(canvas_el) = canvas_ref.get() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();
        let Ok(ctx) = get_2d_context(canvas) else {
            return;
        };

        if let Err(err) = draw_photo(&ctx, viewport, current_image.as_ref(), &current) {
            log::error!("compositor draw failed: {err:?}");
        }
    });

    let status = create_memo(move |_| transform.get().status_line());

    let on_zoom_input = move |ev: web_sys::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            transform.update(|t| t.set_zoom(value));
        }
    };

    let on_rotation_input = move |ev: web_sys::Event| {
        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
            transform.update(|t| t.set_rotation(value));
        }
    };

    let nudge = move |direction: Direction| {
        move |_| transform.update(|t| t.nudge(direction))
    };

    let on_center = move |_| {
        if let Some(img) = image.get_untracked() {
            transform.update(|t| t.center_on(viewport, image_size(&img)));
        }
    };

    let on_reset = move |_| {
        if let Some(img) = image.get_untracked() {
            transform.update(|t| t.reset(viewport, image_size(&img)));
        }
    };

    let frame = viewport.crop_frame();
    let overlay_style = format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        frame.x, frame.y, frame.width, frame.height
    );

    let button_class = "px-2 py-1 rounded border border-white/20 text-white text-sm \
                        hover:bg-white/10 transition-colors";

    view! {
        <Show when=move || visible.get()>
            <div class="fixed inset-0 z-[100] bg-black/50 backdrop-blur-sm flex items-center justify-center">
                <div class="bg-black/95 border border-white/10 rounded-lg p-4 mx-4 space-y-3">
                    <h3 class="text-white text-sm font-medium">"Position your photo"</h3>

                    <div class="relative touch-none">
                        <canvas
                            node_ref=canvas_ref
                            width=EDITOR_CONFIG.viewport_width
                            height=EDITOR_CONFIG.viewport_height
                            class="block bg-gray-900 cursor-move"
                        />
                        // Crop frame outline; the area outside it is discarded on confirm.
                        <div
                            class="absolute border-2 border-red-500 pointer-events-none"
                            style=overlay_style.clone()
                        />
                    </div>

                    <div class="text-gray-300 text-xs font-mono">{move || status.get()}</div>

                    <div class="flex items-center gap-2 text-white text-sm">
                        <span class="w-16">"Zoom"</span>
                        <input
                            type="range"
                            min=EDITOR_CONFIG.zoom_min
                            max=EDITOR_CONFIG.zoom_max
                            step="0.01"
                            prop:value=move || transform.get().zoom.to_string()
                            on:input=on_zoom_input
                            class="flex-1"
                        />
                        <span class="w-12 text-right">
                            {move || format!("{}%", (transform.get().zoom * 100.0).round())}
                        </span>
                    </div>

                    <div class="flex items-center gap-2 text-white text-sm">
                        <span class="w-16">"Rotation"</span>
                        <input
                            type="range"
                            min="0"
                            max="359"
                            step="1"
                            prop:value=move || transform.get().rotation.to_string()
                            on:input=on_rotation_input
                            class="flex-1"
                        />
                        <span class="w-12 text-right">
                            {move || format!("{}\u{b0}", transform.get().rotation.round())}
                        </span>
                    </div>

                    <div class="flex gap-2">
                        <button
                            class=button_class
                            on:click=move |_| transform.update(|t| t.zoom_by(EDITOR_CONFIG.zoom_step))
                        >
                            "Zoom +"
                        </button>
                        <button
                            class=button_class
                            on:click=move |_| transform.update(|t| t.zoom_by(-EDITOR_CONFIG.zoom_step))
                        >
                            "Zoom \u{2212}"
                        </button>
                        <button
                            class=button_class
                            on:click=move |_| transform.update(|t| t.rotate_by(-EDITOR_CONFIG.rotate_step_degrees))
                        >
                            "\u{21b6} 15\u{b0}"
                        </button>
                        <button
                            class=button_class
                            on:click=move |_| transform.update(|t| t.rotate_by(EDITOR_CONFIG.rotate_step_degrees))
                        >
                            "\u{21b7} 15\u{b0}"
                        </button>
                    </div>

                    // Nudge grid: 4 cardinal + 4 diagonal directions around Center.
                    <div class="grid grid-cols-3 gap-1 w-36">
                        <button class=button_class on:click=nudge(Direction::UpLeft)>"\u{2196}"</button>
                        <button class=button_class on:click=nudge(Direction::Up)>"\u{2191}"</button>
                        <button class=button_class on:click=nudge(Direction::UpRight)>"\u{2197}"</button>
                        <button class=button_class on:click=nudge(Direction::Left)>"\u{2190}"</button>
                        <button class=button_class on:click=on_center>"\u{25ce}"</button>
                        <button class=button_class on:click=nudge(Direction::Right)>"\u{2192}"</button>
                        <button class=button_class on:click=nudge(Direction::DownLeft)>"\u{2199}"</button>
                        <button class=button_class on:click=nudge(Direction::Down)>"\u{2193}"</button>
                        <button class=button_class on:click=nudge(Direction::DownRight)>"\u{2198}"</button>
                    </div>

                    <div class="flex gap-2 pt-1">
                        <button class=button_class on:click=on_reset>
                            "Reset"
                        </button>
                        <div class="flex-1" />
                        <button
                            class="px-3 py-1.5 rounded-lg border border-white/20 text-white text-sm hover:bg-white/10 transition-colors"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="px-3 py-1.5 rounded-lg bg-white/20 text-white text-sm hover:bg-white/30 transition-colors"
                            on:click=move |_| on_confirm.call(())
                        >
                            "Apply"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
