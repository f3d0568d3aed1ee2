//! Live card preview. The outer div is what the snapshot renderer
//! rasterizes on export, so its pixel dimensions come from the export
//! config.

use cardsmith_core::{CardFields, EDITOR_CONFIG, EXPORT_CONFIG};
use leptos::*;

#[component]
pub fn CardPreview(
    /// Card field state bound into the markup
    fields: Signal<CardFields>,
    /// Final cropped photo as a data URL, once the user has confirmed an edit
    photo: Signal<Option<String>>,
    /// Ref to the card node, handed to the snapshot renderer by the export buttons
    card_ref: NodeRef<leptos::html::Div>,
) -> impl IntoView {
    let card_style = format!(
        "width: {}px; height: {}px;",
        EXPORT_CONFIG.card_width, EXPORT_CONFIG.card_height
    );
    let photo_style = format!(
        "width: {}px; height: {}px;",
        EDITOR_CONFIG.crop_width, EDITOR_CONFIG.crop_height
    );

    let issue_date = create_memo(move |_| fields.with(|f| f.display_issue_date()));
    let valid_till = create_memo(move |_| fields.with(|f| f.display_valid_till()));

    view! {
        <div
            node_ref=card_ref
            class="bg-white text-gray-900 rounded-lg shadow-lg flex flex-col items-center p-6"
            style=card_style.clone()
        >
            <div class="text-lg font-bold tracking-wide">"FOSSIL ORIGIN"</div>
            <div class="text-xs text-gray-500 mb-4">"EMPLOYEE IDENTITY CARD"</div>

            <div
                class="border border-gray-300 bg-gray-100 flex items-center justify-center overflow-hidden mb-4"
                style=photo_style.clone()
            >
                {move || match photo.get() {
                    Some(url) => view! {
                        <img src=url alt="Employee photo" class="block w-full h-full" />
                    }.into_view(),
                    None => view! {
                        <span class="text-gray-400 text-xs">"Photo"</span>
                    }.into_view(),
                }}
            </div>

            <div class="text-base font-semibold">
                {move || fields.with(|f| f.display_name().to_string())}
            </div>
            <div class="text-sm text-gray-600 mb-2">
                {move || fields.with(|f| f.display_designation().to_string())}
            </div>
            <div class="text-sm font-mono mb-4">
                {move || fields.with(|f| f.display_id().to_string())}
            </div>

            <div class="text-xs text-gray-600 space-y-1 w-full">
                <div class="flex justify-between">
                    <span>"Issued:"</span>
                    <span>{move || issue_date.get().unwrap_or_default()}</span>
                </div>
                <div class="flex justify-between">
                    <span>"Valid till:"</span>
                    <span>{move || valid_till.get().unwrap_or_default()}</span>
                </div>
                <div class="flex justify-between">
                    <span>"Probation:"</span>
                    <span>{move || fields.with(|f| f.probation.clone())}</span>
                </div>
            </div>

            <div class="flex-1" />

            <Show when=move || fields.with(|f| f.show_email)>
                <div class="text-xs text-gray-500">"people@fossilorigin.example"</div>
            </Show>
        </div>
    }
}
