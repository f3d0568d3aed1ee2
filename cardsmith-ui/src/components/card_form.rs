//! Form fields driving the live card preview.

use cardsmith_core::CardFields;
use leptos::*;

#[component]
pub fn CardForm(
    /// Card field state, updated on every input event
    fields: RwSignal<CardFields>,
    /// Fired on photo file selection (raw change event; the app owns the
    /// read/decode pipeline)
    on_photo_selected: Callback<web_sys::Event>,
) -> impl IntoView {
    let label_class = "block text-gray-300 text-sm mb-1";
    let input_class = "w-full px-2 py-1.5 rounded border border-white/20 bg-black/40 \
                       text-white text-sm focus:outline-none focus:border-white/50";

    view! {
        <div class="space-y-3">
            <div>
                <label class=label_class>"ID number"</label>
                <input
                    type="text"
                    class=input_class
                    prop:value=move || fields.with(|f| f.id_number.clone())
                    on:input=move |ev| fields.update(|f| f.id_number = event_target_value(&ev))
                />
            </div>
            <div>
                <label class=label_class>"Name"</label>
                <input
                    type="text"
                    class=input_class
                    prop:value=move || fields.with(|f| f.name.clone())
                    on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
                />
            </div>
            <div>
                <label class=label_class>"Designation"</label>
                <input
                    type="text"
                    class=input_class
                    prop:value=move || fields.with(|f| f.designation.clone())
                    on:input=move |ev| fields.update(|f| f.designation = event_target_value(&ev))
                />
            </div>
            <div class="flex gap-3">
                <div class="flex-1">
                    <label class=label_class>"Issue date"</label>
                    <input
                        type="date"
                        class=input_class
                        prop:value=move || fields.with(|f| f.issue_date.clone())
                        on:change=move |ev| fields.update(|f| f.issue_date = event_target_value(&ev))
                    />
                </div>
                <div class="flex-1">
                    <label class=label_class>"Valid till"</label>
                    <input
                        type="date"
                        class=input_class
                        prop:value=move || fields.with(|f| f.valid_till.clone())
                        on:change=move |ev| fields.update(|f| f.valid_till = event_target_value(&ev))
                    />
                </div>
            </div>
            <div>
                <label class=label_class>"Probation"</label>
                <input
                    type="text"
                    class=input_class
                    prop:value=move || fields.with(|f| f.probation.clone())
                    on:change=move |ev| fields.update(|f| f.probation = event_target_value(&ev))
                />
            </div>
            <div class="flex items-center gap-4 text-gray-300 text-sm">
                <span>"Show company email"</span>
                <label class="flex items-center gap-1">
                    <input
                        type="radio"
                        name="show_email"
                        prop:checked=move || fields.with(|f| f.show_email)
                        on:change=move |_| fields.update(|f| f.show_email = true)
                    />
                    "Yes"
                </label>
                <label class="flex items-center gap-1">
                    <input
                        type="radio"
                        name="show_email"
                        prop:checked=move || fields.with(|f| !f.show_email)
                        on:change=move |_| fields.update(|f| f.show_email = false)
                    />
                    "No"
                </label>
            </div>
            <div>
                <label class=label_class>"Photo"</label>
                <input
                    type="file"
                    accept="image/*"
                    class="text-gray-300 text-sm"
                    on:change=move |ev| on_photo_selected.call(ev)
                />
            </div>
        </div>
    }
}
