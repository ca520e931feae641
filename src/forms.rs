//! Form Fields
//!
//! Named form fields, their raw string values, and the JSON payload built
//! from them.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

/// Raw input values keyed by field name. Checkboxes hold "true"/"false".
pub type FormValues = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Time,
    /// Sent as a JSON number when it parses
    Number,
    Checkbox { default: bool },
    /// `(value, label)` pairs; the first one is the default
    Select(&'static [(&'static str, &'static str)]),
}

impl FieldKind {
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Select(_) => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Number => "number",
            FieldKind::Checkbox { .. } => "checkbox",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: true }
    }

    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: false }
    }
}

/// First required field left blank
#[derive(Debug, Clone, PartialEq)]
pub struct MissingField {
    pub name: &'static str,
    pub label: &'static str,
}

/// Values a freshly reset form shows.
pub fn initial_values(fields: &[FormField]) -> FormValues {
    fields
        .iter()
        .map(|field| {
            let value = match field.kind {
                FieldKind::Checkbox { default } => default.to_string(),
                FieldKind::Select(options) => options.first().map(|(v, _)| v.to_string()).unwrap_or_default(),
                _ => String::new(),
            };
            (field.name.to_string(), value)
        })
        .collect()
}

/// Pre-fills a form from a listed record; fields the record lacks keep
/// their reset value.
pub fn values_from_row(fields: &[FormField], row: &Value) -> FormValues {
    let mut values = initial_values(fields);
    for field in fields {
        let raw = match (field.kind, row.get(field.name)) {
            (_, None) | (_, Some(Value::Null)) => continue,
            (FieldKind::Checkbox { .. }, Some(Value::Bool(b))) => b.to_string(),
            (FieldKind::Select(options), Some(Value::String(s))) => options
                .iter()
                .find(|(v, _)| v.eq_ignore_ascii_case(s))
                .map(|(v, _)| v.to_string())
                .unwrap_or_else(|| s.clone()),
            (_, Some(Value::String(s))) => s.clone(),
            (_, Some(other)) => other.to_string(),
        };
        values.insert(field.name.to_string(), raw);
    }
    values
}

pub fn is_checked(values: &FormValues, name: &str) -> bool {
    values.get(name).map(|v| v == "true").unwrap_or(false)
}

/// Whether `option` is the one a select bound to `name` shows. Selection is
/// driven per option because the select's own value is set before its
/// options exist.
pub fn is_selected(values: &FormValues, name: &str, option: &str) -> bool {
    values.get(name).is_some_and(|v| v == option)
}

/// Builds the JSON body for a form submission.
pub fn build_payload(fields: &[FormField], values: &FormValues) -> Result<Value, MissingField> {
    let mut payload = Map::new();
    for field in fields {
        let raw = values.get(field.name).map(|v| v.trim()).unwrap_or("");
        let value = match field.kind {
            FieldKind::Checkbox { .. } => Value::Bool(raw == "true"),
            _ if raw.is_empty() => {
                if field.required {
                    return Err(MissingField { name: field.name, label: field.label });
                }
                Value::Null
            }
            FieldKind::Number => number_or_text(raw),
            _ => Value::String(raw.to_string()),
        };
        payload.insert(field.name.to_string(), value);
    }
    Ok(Value::Object(payload))
}

fn number_or_text(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Number(n.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const OPTIONS: &[(&str, &str)] = &[("ativo", "Ativo"), ("vago", "Vago")];

    const FIELDS: &[FormField] = &[
        FormField::required("nome", "Nome", FieldKind::Text),
        FormField::optional("telefone", "Telefone", FieldKind::Tel),
        FormField::required("id_local", "Local", FieldKind::Number),
        FormField::optional("ativo", "Ativo", FieldKind::Checkbox { default: true }),
        FormField::required("status", "Status", FieldKind::Select(OPTIONS)),
    ];

    #[test]
    fn test_initial_values() {
        let values = initial_values(FIELDS);
        assert_eq!(values["nome"], "");
        assert_eq!(values["ativo"], "true");
        assert_eq!(values["status"], "ativo");
    }

    #[test]
    fn test_build_payload_types() {
        let mut values = initial_values(FIELDS);
        values.insert("nome".into(), "  Ana Souza ".into());
        values.insert("id_local".into(), "3".into());
        values.insert("ativo".into(), "false".into());

        let payload = build_payload(FIELDS, &values).unwrap();
        assert_eq!(
            payload,
            json!({"nome": "Ana Souza", "telefone": null, "id_local": 3, "ativo": false, "status": "ativo"})
        );
    }

    #[test]
    fn test_build_payload_reports_first_missing_field() {
        let mut values = initial_values(FIELDS);
        values.insert("nome".into(), "Ana".into());

        let missing = build_payload(FIELDS, &values).unwrap_err();
        assert_eq!(missing.name, "id_local");
        assert_eq!(missing.label, "Local");
    }

    #[test]
    fn test_values_from_row() {
        let row = json!({"id": 4, "nome": "Bruno", "id_local": 7, "ativo": false, "status": "Vago"});
        let values = values_from_row(FIELDS, &row);

        assert_eq!(values["nome"], "Bruno");
        assert_eq!(values["id_local"], "7");
        assert!(!is_checked(&values, "ativo"));
        assert_eq!(values["status"], "vago");
        assert_eq!(values["telefone"], "");
    }

    #[test]
    fn test_prefilled_select_marks_only_the_row_value() {
        let row = json!({"id": 4, "status": "vago"});
        let values = values_from_row(FIELDS, &row);

        let selected: Vec<_> = OPTIONS
            .iter()
            .filter(|(value, _)| is_selected(&values, "status", value))
            .map(|(value, _)| *value)
            .collect();
        assert_eq!(selected, vec!["vago"]);
        assert!(!is_selected(&values, "missing", "ativo"));
    }
}
