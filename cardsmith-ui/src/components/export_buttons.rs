//! Export controls. Each button disables itself while its export is in
//! flight and is re-enabled on every exit path, success or failure.

use crate::export::{download_card_image, download_card_pdf};
use cardsmith_core::CardFields;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

#[component]
pub fn ExportButtons(
    /// Card field state (for the download file name)
    fields: Signal<CardFields>,
    /// Ref to the card preview node
    card_ref: NodeRef<leptos::html::Div>,
    /// Surfaces export failures to the user
    on_error: Callback<String>,
) -> impl IntoView {
    let image_busy = create_rw_signal(false);
    let pdf_busy = create_rw_signal(false);

    let card_node = move || -> Option<Element> {
        let el = card_ref.get_untracked()?;
        Some(el.unchecked_ref::<Element>().clone())
    };

    let on_image_click = move |_| {
        if image_busy.get_untracked() {
            return;
        }
        let Some(node) = card_node() else {
            return;
        };
        let name = fields.with_untracked(|f| f.display_name().to_string());

        image_busy.set(true);
        spawn_local(async move {
            if let Err(err) = download_card_image(&node, &name).await {
                log::error!("image export failed: {err:?}");
                on_error.call("Error generating image. Please try again.".to_string());
            }
            image_busy.set(false);
        });
    };

    let on_pdf_click = move |_| {
        if pdf_busy.get_untracked() {
            return;
        }
        let Some(node) = card_node() else {
            return;
        };
        let name = fields.with_untracked(|f| f.display_name().to_string());

        pdf_busy.set(true);
        spawn_local(async move {
            if let Err(err) = download_card_pdf(&node, &name).await {
                log::error!("pdf export failed: {err:?}");
                on_error.call("Error generating PDF. Please try again.".to_string());
            }
            pdf_busy.set(false);
        });
    };

    let button_class = "px-4 py-2 rounded-lg bg-white/20 text-white text-sm \
                        hover:bg-white/30 transition-colors disabled:opacity-50 \
                        disabled:cursor-not-allowed";

    view! {
        <div class="flex gap-3">
            <button
                class=button_class
                prop:disabled=move || image_busy.get()
                on:click=on_image_click
            >
                {move || if image_busy.get() { "Generating..." } else { "Download as image" }}
            </button>
            <button
                class=button_class
                prop:disabled=move || pdf_busy.get()
                on:click=on_pdf_click
            >
                {move || if pdf_busy.get() { "Generating..." } else { "Download as PDF" }}
            </button>
        </div>
    }
}
