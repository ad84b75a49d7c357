use serde::{Deserialize, Serialize};

/// One choice of a select or radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Caption for a form control; required fields get a trailing ` *`.
pub fn field_label(label: &str, required: bool) -> String {
    if required {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

/// Whether `value` names an option that can currently be picked.
///
/// A disabled field disables every option.
pub fn is_selectable(options: &[FieldOption], value: &str, field_disabled: bool) -> bool {
    !field_disabled
        && options
            .iter()
            .any(|option| option.value == value && !option.disabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn required_label_gets_marker() {
        assert_eq!(field_label("Role", true), "Role *");
        assert_eq!(field_label("Role", false), "Role");
    }

    #[test]
    fn selectable_respects_option_and_field_state() {
        let options = vec![
            FieldOption::new("Admin", "admin"),
            FieldOption::new("Owner", "owner").disabled(),
        ];
        assert!(is_selectable(&options, "admin", false));
        assert!(!is_selectable(&options, "owner", false));
        assert!(!is_selectable(&options, "ghost", false));
        assert!(!is_selectable(&options, "admin", true));
    }

    #[test]
    fn options_deserialize_without_disabled_flag() {
        let option: FieldOption =
            serde_json::from_str(r#"{"label":"Admin","value":"admin"}"#).unwrap();
        assert_eq!(option, FieldOption::new("Admin", "admin"));
    }
}
