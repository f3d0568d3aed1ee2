use crate::components::{CardForm, CardPreview, EditorModal, ExportButtons, Toast};
use crate::hooks::{file_from_input_event, read_photo_file};
use crate::rendering::{confirm_crop, image_size};
use cardsmith_core::{CardFields, PhotoTransform, Viewport};
use leptos::*;
use web_sys::HtmlImageElement;

/// Today and one month from now as ISO `YYYY-MM-DD`, the date inputs'
/// initial values. JS `Date` handles the December rollover.
fn default_dates() -> (String, String) {
    let today = js_sys::Date::new_0();
    let next_month = js_sys::Date::new_with_year_month_day(
        today.get_full_year(),
        today.get_month() as i32 + 1,
        today.get_date() as i32,
    );
    (iso_date(&today), iso_date(&next_month))
}

fn iso_date(date: &js_sys::Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}

#[component]
pub fn App() -> impl IntoView {
    let (issue_date, valid_till) = default_dates();
    let fields = create_rw_signal(CardFields {
        issue_date,
        valid_till,
        ..Default::default()
    });

    // Editor session state. The source image is replaced wholesale on each
    // upload; the transform is reset when a new image finishes decoding and
    // discarded (not persisted) when the editor closes without confirming.
    let source_image = create_rw_signal(None::<HtmlImageElement>);
    let transform = create_rw_signal(PhotoTransform::new());
    let editor_open = create_rw_signal(false);

    // Final cropped photo shown on the card, produced only on confirm.
    let final_photo = create_rw_signal(None::<String>);

    let toast_message = create_rw_signal(None::<String>);
    let show_error = Callback::new(move |message: String| {
        toast_message.set(Some(message));
    });

    let card_ref = create_node_ref::<leptos::html::Div>();

    let on_photo_loaded = Callback::new(move |image: HtmlImageElement| {
        transform.update(|t| t.reset(Viewport::default(), image_size(&image)));
        source_image.set(Some(image));
        editor_open.set(true);
    });

    let on_photo_selected = Callback::new(move |ev: web_sys::Event| {
        let Some(file) = file_from_input_event(&ev) else {
            return;
        };
        if let Err(err) = read_photo_file(file, on_photo_loaded, show_error) {
            log::error!("failed to start reading photo file: {err:?}");
            show_error.call("The selected file could not be read.".to_string());
        }
    });

    let on_confirm = Callback::new(move |_: ()| {
        let image = source_image.get_untracked();
        let current = transform.get_untracked();
        match confirm_crop(image.as_ref(), &current, Viewport::default()) {
            Ok(Some(data_url)) => {
                final_photo.set(Some(data_url));
                editor_open.set(false);
            }
            // Confirm without an image is a silent no-op.
            Ok(None) => {}
            Err(err) => {
                log::error!("crop export failed: {err:?}");
                show_error.call("The photo could not be cropped. Please try again.".to_string());
            }
        }
    });

    let on_cancel = Callback::new(move |_: ()| {
        editor_open.set(false);
    });

    view! {
        <div class="min-h-screen bg-gray-950 text-white p-6">
            <h1 class="text-xl font-semibold mb-6">"ID Card Generator"</h1>
            <div class="flex flex-wrap gap-8 items-start">
                <div class="w-80 space-y-6">
                    <CardForm fields=fields on_photo_selected=on_photo_selected />
                    <ExportButtons
                        fields=fields.into()
                        card_ref=card_ref
                        on_error=show_error
                    />
                </div>
                <CardPreview
                    fields=fields.into()
                    photo=final_photo.into()
                    card_ref=card_ref
                />
            </div>
            <EditorModal
                visible=editor_open
                image=source_image.into()
                transform=transform
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
            <Toast message=toast_message.into() />
        </div>
    }
}
