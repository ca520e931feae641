//! Table Rendering
//!
//! Maps JSON records to display rows. The output is plain text plus an
//! optional styling class; the table component inserts it as text nodes.

use serde_json::Value;

use crate::models::ScheduleStatus;

const EMPTY_CELL: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Field(&'static str),
    /// `start - end`
    Range(&'static str, &'static str),
    /// Boolean field shown as one of two labels, each with its own class
    Flag {
        field: &'static str,
        on: (&'static str, &'static str),
        off: (&'static str, &'static str),
    },
    /// Schedule status shown by label
    Status(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub header: &'static str,
    pub cell: Cell,
}

/// Shape of one resource table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLayout {
    pub columns: &'static [Column],
    pub id_field: &'static str,
    /// Adds a trailing action column
    pub actions: bool,
    pub empty_message: &'static str,
}

impl TableLayout {
    pub fn colspan(&self) -> usize {
        self.columns.len() + usize::from(self.actions)
    }

    pub fn placeholder(&self, message: impl Into<String>) -> TableBody {
        TableBody::Placeholder { colspan: self.colspan(), message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    pub text: String,
    pub class: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub id: Option<i64>,
    pub cells: Vec<RenderedCell>,
    /// Source record, used to pre-fill edit forms
    pub record: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Placeholder { colspan: usize, message: String },
    Rows(Vec<RenderedRow>),
}

pub fn render_rows(rows: &[Value], layout: &TableLayout) -> TableBody {
    if rows.is_empty() {
        return layout.placeholder(layout.empty_message);
    }
    TableBody::Rows(
        rows.iter()
            .map(|record| RenderedRow {
                id: record_id(record, layout.id_field),
                cells: layout.columns.iter().map(|c| render_cell(record, &c.cell)).collect(),
                record: record.clone(),
            })
            .collect(),
    )
}

/// Numeric ids may arrive as strings from older endpoints.
pub fn record_id(record: &Value, id_field: &str) -> Option<i64> {
    match record.get(id_field)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn render_cell(record: &Value, cell: &Cell) -> RenderedCell {
    match *cell {
        Cell::Field(field) => plain(text_of(record.get(field))),
        Cell::Range(start, end) => plain(format!(
            "{} - {}",
            text_of(record.get(start)),
            text_of(record.get(end))
        )),
        Cell::Flag { field, on, off } => {
            let (text, class) = if truthy(record.get(field)) { on } else { off };
            RenderedCell { text: text.to_string(), class: Some(class) }
        }
        Cell::Status(field) => {
            let raw = text_of(record.get(field));
            let text = ScheduleStatus::parse(&raw)
                .map(|s| s.label().to_string())
                .unwrap_or(raw);
            plain(text)
        }
    }
}

fn plain(text: String) -> RenderedCell {
    RenderedCell { text, class: None }
}

fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => EMPTY_CELL.to_string(),
        Some(Value::String(s)) if s.trim().is_empty() => EMPTY_CELL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "Sim".to_string(),
        Some(Value::Bool(false)) => "Não".to_string(),
        Some(other) => other.to_string(),
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|n| n != 0.0).unwrap_or(false),
        Some(Value::String(s)) => matches!(s.as_str(), "true" | "1" | "sim"),
        _ => false,
    }
}

#[cfg(test)]
impl TableBody {
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Placeholder { .. } => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLUMNS: &[Column] = &[
        Column { header: "Nome", cell: Cell::Field("nome") },
        Column { header: "Horário", cell: Cell::Range("hora_inicio", "hora_fim") },
        Column {
            header: "Situação",
            cell: Cell::Flag { field: "ativo", on: ("Ativo", "text-green"), off: ("Inativo", "text-red") },
        },
    ];

    fn layout(actions: bool) -> TableLayout {
        TableLayout { columns: COLUMNS, id_field: "id", actions, empty_message: "Nada por aqui." }
    }

    #[test]
    fn test_empty_collection_renders_one_placeholder() {
        let body = render_rows(&[], &layout(false));
        assert_eq!(body, TableBody::Placeholder { colspan: 3, message: "Nada por aqui.".into() });
        assert_eq!(body.row_count(), 1);

        // action column is part of the span
        match render_rows(&[], &layout(true)) {
            TableBody::Placeholder { colspan, .. } => assert_eq!(colspan, 4),
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_rows_follow_column_order() {
        let rows = vec![
            json!({"id": 1, "nome": "Ana", "hora_inicio": "08:00", "hora_fim": "14:00", "ativo": true}),
            json!({"id": "2", "nome": "<b>Bruno</b>", "ativo": false}),
        ];
        let TableBody::Rows(rendered) = render_rows(&rows, &layout(true)) else {
            panic!("expected rows");
        };

        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].id, Some(1));
        let texts: Vec<_> = rendered[0].cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Ana", "08:00 - 14:00", "Ativo"]);
        assert_eq!(rendered[0].cells[2].class, Some("text-green"));

        assert_eq!(rendered[1].id, Some(2));
        // markup stays literal text
        assert_eq!(rendered[1].cells[0].text, "<b>Bruno</b>");
        assert_eq!(rendered[1].cells[1].text, "— - —");
        assert_eq!(rendered[1].cells[2].text, "Inativo");
    }

    #[test]
    fn test_status_cell_uses_label() {
        const STATUS: &[Column] = &[Column { header: "Status", cell: Cell::Status("status") }];
        let layout = TableLayout { columns: STATUS, id_field: "id", actions: false, empty_message: "" };
        let body = render_rows(&[json!({"status": "substituto"}), json!({"status": "pendente"})], &layout);

        let TableBody::Rows(rows) = body else { panic!("expected rows") };
        assert_eq!(rows[0].cells[0].text, "Substituto");
        assert_eq!(rows[1].cells[0].text, "pendente");
    }
}
