mod card_form;
mod card_preview;
mod editor_modal;
mod export_buttons;
mod toast;

pub use card_form::CardForm;
pub use card_preview::CardPreview;
pub use editor_modal::EditorModal;
pub use export_buttons::ExportButtons;
pub use toast::Toast;
