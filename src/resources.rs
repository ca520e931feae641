//! Resource Descriptors
//!
//! One descriptor per REST resource: endpoint, form fields, table columns,
//! capabilities and user-facing messages. The generic binder is driven
//! entirely by these.

use crate::forms::{FieldKind, FormField};
use crate::models::ScheduleStatus;
use crate::render::{Cell, Column, TableLayout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Messages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub load_failed: &'static str,
    pub confirm_delete: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resource {
    pub title: &'static str,
    /// Collection endpoint; items live under `{endpoint}/{id}`
    pub endpoint: &'static str,
    pub fields: &'static [FormField],
    /// Fields of the inline edit surface; `None` disables updates
    pub editor: Option<&'static [FormField]>,
    pub table: TableLayout,
    pub can_delete: bool,
    pub messages: Messages,
}

impl Resource {
    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    pub fn can_update(&self) -> bool {
        self.editor.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Professionals,
    Shifts,
    Schedules,
    Employees,
}

impl ResourceKind {
    pub fn resource(self) -> &'static Resource {
        match self {
            ResourceKind::Professionals => &PROFESSIONALS,
            ResourceKind::Shifts => &SHIFTS,
            ResourceKind::Schedules => &SCHEDULES,
            ResourceKind::Employees => &EMPLOYEES,
        }
    }
}

const ACTIVE_FLAG: Cell = Cell::Flag {
    field: "ativo",
    on: ("Ativo", "text-green-600"),
    off: ("Inativo", "text-red-600"),
};

const STATUS_OPTIONS: &[(&str, &str)] = &[
    (ScheduleStatus::Active.wire(), ScheduleStatus::Active.label()),
    (ScheduleStatus::Substitute.wire(), ScheduleStatus::Substitute.label()),
    (ScheduleStatus::Vacant.wire(), ScheduleStatus::Vacant.label()),
];

// ========================
// Professionals
// ========================

pub static PROFESSIONALS: Resource = Resource {
    title: "Profissionais",
    endpoint: "/profissionais/api",
    fields: &[
        FormField::required("nome", "Nome", FieldKind::Text),
        FormField::optional("cargo", "Cargo", FieldKind::Text),
        FormField::required("email", "E-mail", FieldKind::Email),
        FormField::optional("telefone", "Telefone", FieldKind::Tel),
        FormField::optional("ativo", "Ativo", FieldKind::Checkbox { default: true }),
    ],
    editor: None,
    table: TableLayout {
        columns: &[
            Column { header: "Nome", cell: Cell::Field("nome") },
            Column { header: "Cargo", cell: Cell::Field("cargo") },
            Column { header: "E-mail", cell: Cell::Field("email") },
            Column { header: "Telefone", cell: Cell::Field("telefone") },
            Column { header: "Situação", cell: ACTIVE_FLAG },
        ],
        id_field: "id",
        actions: true,
        empty_message: "Nenhum profissional cadastrado.",
    },
    can_delete: true,
    messages: Messages {
        created: "✅ Profissional cadastrado!",
        updated: "✏️ Profissional atualizado!",
        deleted: "🗑️ Profissional excluído!",
        load_failed: "⚠️ Falha ao carregar profissionais.",
        confirm_delete: "Deseja excluir este profissional?",
    },
};

// ========================
// Shifts (plantões)
// ========================

pub static SHIFTS: Resource = Resource {
    title: "Plantões",
    endpoint: "/plantoes/api",
    fields: &[
        FormField::required("data", "Data", FieldKind::Date),
        FormField::required("hora_inicio", "Início", FieldKind::Time),
        FormField::required("hora_fim", "Fim", FieldKind::Time),
        FormField::required("id_funcao", "Função", FieldKind::Number),
        FormField::required("id_local", "Local", FieldKind::Number),
    ],
    editor: None,
    table: TableLayout {
        columns: &[
            Column { header: "Data", cell: Cell::Field("data") },
            Column { header: "Horário", cell: Cell::Range("hora_inicio", "hora_fim") },
            Column { header: "Função", cell: Cell::Field("id_funcao") },
            Column { header: "Local", cell: Cell::Field("id_local") },
        ],
        id_field: "id",
        actions: true,
        empty_message: "Nenhum plantão cadastrado.",
    },
    can_delete: true,
    messages: Messages {
        created: "✅ Plantão cadastrado!",
        updated: "✏️ Plantão atualizado!",
        deleted: "🗑️ Plantão excluído!",
        load_failed: "⚠️ Falha ao carregar plantões.",
        confirm_delete: "Deseja excluir este plantão?",
    },
};

// ========================
// Schedules (escalas)
// ========================

pub static SCHEDULES: Resource = Resource {
    title: "Escalas",
    endpoint: "/escalas/api",
    fields: &[
        FormField::required("id_profissional", "Profissional (ID)", FieldKind::Number),
        FormField::required("id_plantao", "Plantão (ID)", FieldKind::Number),
        FormField::required("status", "Status", FieldKind::Select(STATUS_OPTIONS)),
    ],
    editor: Some(&[
        FormField::required("data", "Data", FieldKind::Date),
        FormField::required("status", "Status", FieldKind::Select(STATUS_OPTIONS)),
    ]),
    table: TableLayout {
        columns: &[
            Column { header: "Profissional", cell: Cell::Field("funcionario") },
            Column { header: "Cargo", cell: Cell::Field("cargo") },
            Column { header: "Data", cell: Cell::Field("data") },
            Column { header: "Turno", cell: Cell::Field("turno") },
            Column { header: "Status", cell: Cell::Status("status") },
        ],
        id_field: "id",
        actions: true,
        empty_message: "Nenhuma escala cadastrada.",
    },
    can_delete: true,
    messages: Messages {
        created: "✅ Escala cadastrada!",
        updated: "✏️ Escala atualizada!",
        deleted: "🗑️ Escala excluída!",
        load_failed: "⚠️ Falha ao carregar escalas.",
        confirm_delete: "Deseja excluir esta escala?",
    },
};

// ========================
// Employees (funcionários)
// ========================

pub static EMPLOYEES: Resource = Resource {
    title: "Funcionários",
    endpoint: "/usuarios/api",
    fields: &[
        FormField::required("nome", "Nome", FieldKind::Text),
        FormField::optional("cargo", "Cargo", FieldKind::Text),
        FormField::required("email", "E-mail", FieldKind::Email),
        FormField::optional("ativo", "Ativo", FieldKind::Checkbox { default: true }),
    ],
    editor: None,
    table: TableLayout {
        columns: &[
            Column { header: "Nome", cell: Cell::Field("nome") },
            Column { header: "Cargo", cell: Cell::Field("cargo") },
            Column { header: "E-mail", cell: Cell::Field("email") },
            Column { header: "Situação", cell: ACTIVE_FLAG },
        ],
        id_field: "id",
        actions: true,
        empty_message: "Nenhum funcionário cadastrado.",
    },
    can_delete: true,
    messages: Messages {
        created: "✅ Funcionário cadastrado!",
        updated: "✏️ Funcionário atualizado!",
        deleted: "🗑️ Funcionário excluído!",
        load_failed: "⚠️ Falha ao carregar funcionários.",
        confirm_delete: "Deseja excluir este funcionário?",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ResourceKind; 4] = [
        ResourceKind::Professionals,
        ResourceKind::Shifts,
        ResourceKind::Schedules,
        ResourceKind::Employees,
    ];

    #[test]
    fn test_endpoints() {
        let endpoints: Vec<_> = ALL.iter().map(|k| k.resource().endpoint).collect();
        assert_eq!(endpoints, vec!["/profissionais/api", "/plantoes/api", "/escalas/api", "/usuarios/api"]);
        assert_eq!(SHIFTS.item_path(7), "/plantoes/api/7");
    }

    #[test]
    fn test_only_schedules_update() {
        for kind in ALL {
            assert_eq!(kind.resource().can_update(), kind == ResourceKind::Schedules);
        }
    }

    #[test]
    fn test_action_column_matches_capabilities() {
        for kind in ALL {
            let r = kind.resource();
            assert_eq!(r.table.actions, r.can_delete || r.can_update());
        }
    }

    #[test]
    fn test_professional_table_lists_phone() {
        let headers: Vec<_> = PROFESSIONALS.table.columns.iter().map(|c| c.header).collect();
        assert_eq!(headers, vec!["Nome", "Cargo", "E-mail", "Telefone", "Situação"]);
        assert!(PROFESSIONALS.fields.iter().any(|f| f.name == "telefone"));
    }
}
