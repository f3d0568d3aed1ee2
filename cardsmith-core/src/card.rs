use serde::{Deserialize, Serialize};

/// Form fields backing the live card preview.
///
/// Fields hold raw user input; the `display_*` accessors apply the
/// placeholder fallbacks the preview shows while a field is empty.
/// Dates are ISO `YYYY-MM-DD` strings straight from the date inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFields {
    pub id_number: String,
    pub name: String,
    pub designation: String,
    pub issue_date: String,
    pub valid_till: String,
    pub probation: String,
    pub show_email: bool,
}

impl CardFields {
    pub fn display_id(&self) -> &str {
        non_empty_or(&self.id_number, "Fo_BHS_00566")
    }

    pub fn display_name(&self) -> &str {
        non_empty_or(&self.name, "Employee Name")
    }

    pub fn display_designation(&self) -> &str {
        non_empty_or(&self.designation, "Designation")
    }

    /// Issue date in long form, or None while the field is empty/invalid.
    pub fn display_issue_date(&self) -> Option<String> {
        format_long_date(&self.issue_date)
    }

    pub fn display_valid_till(&self) -> Option<String> {
        format_long_date(&self.valid_till)
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render an ISO `YYYY-MM-DD` date as en-GB long form, e.g.
/// `2026-08-25` -> `25 August 2026`.
///
/// Returns None for anything that is not a well-formed ISO date; the
/// preview keeps its previous text in that case. The day is not validated
/// against month length since the input comes from a date picker.
pub fn format_long_date(iso: &str) -> Option<String> {
    let mut parts = iso.splitn(3, '-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    Some(format!("{:02} {} {}", day, MONTH_NAMES[month - 1], year))
}

/// Build the download file name for an exported card:
/// whitespace runs in the displayed name collapse to single underscores.
pub fn export_file_name(display_name: &str, extension: &str) -> String {
    let mut base = String::with_capacity(display_name.len());
    let mut in_whitespace = false;
    for ch in display_name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                base.push('_');
                in_whitespace = true;
            }
        } else {
            base.push(ch);
            in_whitespace = false;
        }
    }
    format!("{base}_ID_Card.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_fall_back_to_placeholders() {
        let fields = CardFields::default();
        assert_eq!(fields.display_id(), "Fo_BHS_00566");
        assert_eq!(fields.display_name(), "Employee Name");
        assert_eq!(fields.display_designation(), "Designation");
    }

    #[test]
    fn filled_fields_override_placeholders() {
        let fields = CardFields {
            name: "Ada Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(fields.display_name(), "Ada Lovelace");
    }

    #[test]
    fn format_long_date_renders_en_gb_long_form() {
        assert_eq!(
            format_long_date("2026-08-25"),
            Some("25 August 2026".to_string())
        );
        assert_eq!(
            format_long_date("2025-01-07"),
            Some("07 January 2025".to_string())
        );
    }

    #[test]
    fn format_long_date_rejects_malformed_input() {
        assert_eq!(format_long_date(""), None);
        assert_eq!(format_long_date("not-a-date"), None);
        assert_eq!(format_long_date("2026-13-01"), None);
        assert_eq!(format_long_date("2026-00-01"), None);
        assert_eq!(format_long_date("2026-05-32"), None);
        assert_eq!(format_long_date("2026-05"), None);
    }

    #[test]
    fn export_file_name_replaces_whitespace_runs() {
        assert_eq!(
            export_file_name("Ada Lovelace", "png"),
            "Ada_Lovelace_ID_Card.png"
        );
        assert_eq!(
            export_file_name("Ada   Byron \t Lovelace", "pdf"),
            "Ada_Byron_Lovelace_ID_Card.pdf"
        );
    }

    #[test]
    fn export_file_name_with_placeholder_name() {
        let fields = CardFields::default();
        assert_eq!(
            export_file_name(fields.display_name(), "pdf"),
            "Employee_Name_ID_Card.pdf"
        );
    }

    #[test]
    fn card_fields_serialization_roundtrip() {
        let original = CardFields {
            id_number: "Fo_BHS_01234".to_string(),
            name: "Grace Hopper".to_string(),
            designation: "Rear Admiral".to_string(),
            issue_date: "2026-08-25".to_string(),
            valid_till: "2026-09-25".to_string(),
            probation: "No".to_string(),
            show_email: true,
        };

        let json = serde_json::to_string(&original).unwrap();
        let restored: CardFields = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, original);
    }
}
