//! Statement templates for the free-form operations.
//!
//! These builders echo user fragments into fixed SQL templates. Nothing is
//! validated or escaped; a blank fragment produces a blank slot in the
//! output.

use std::fmt;

use compact_str::CompactString;
use indexmap::IndexMap;

/// Operation offered by the interactive menu, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
    CreateTable,
    DropTable,
    AlterTable,
    CreateView,
    DropView
}

impl Operation {
    /// All operations in the order they are listed in the menu
    pub const ALL: [Operation; 9] = [
        Operation::Select,
        Operation::Insert,
        Operation::Update,
        Operation::Delete,
        Operation::CreateTable,
        Operation::DropTable,
        Operation::AlterTable,
        Operation::CreateView,
        Operation::DropView
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::CreateTable => "create_table",
            Self::DropTable => "drop_table",
            Self::AlterTable => "alter_table",
            Self::CreateView => "create_view",
            Self::DropView => "drop_view"
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fragments of a SELECT statement
#[derive(Debug, Clone)]
pub struct SelectParams {
    pub columns:   String,
    pub condition: String,
    pub limit:     String,
    pub offset:    String
}

impl Default for SelectParams {
    fn default() -> Self {
        Self {
            columns:   String::from("*"),
            condition: String::new(),
            limit:     String::from(DEFAULT_LIMIT),
            offset:    String::from(DEFAULT_OFFSET)
        }
    }
}

/// LIMIT used when the user leaves it blank
pub const DEFAULT_LIMIT: &str = "10";

/// OFFSET used when the user leaves it blank
pub const DEFAULT_OFFSET: &str = "0";

/// Build `SELECT <cols> FROM <table> WHERE <cond> LIMIT <n> OFFSET <m>;`.
///
/// The column fragment is split on commas and re-joined with `", "`; pieces
/// are not trimmed.
///
/// # Example
///
/// ```
/// use sql_query_generator::statement::{SelectParams, build_select};
///
/// let sql = build_select("t", &SelectParams::default());
/// assert_eq!(sql, "SELECT * FROM t WHERE  LIMIT 10 OFFSET 0;");
/// ```
pub fn build_select(table: &str, params: &SelectParams) -> String {
    let columns: Vec<&str> = params.columns.split(',').collect();
    format!(
        "SELECT {} FROM {} WHERE {} LIMIT {} OFFSET {};",
        columns.join(", "),
        table,
        params.condition,
        params.limit,
        params.offset
    )
}

pub fn build_delete(table: &str, condition: &str) -> String {
    format!("DELETE FROM {} WHERE {};", table, condition)
}

pub fn build_drop_table(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {};", table)
}

pub fn build_alter_table(table: &str, clause: &str) -> String {
    format!("ALTER TABLE {} {};", table, clause)
}

pub fn build_create_view(view: &str, select: &str) -> String {
    format!("CREATE VIEW {} AS {};", view, select)
}

pub fn build_drop_view(view: &str) -> String {
    format!("DROP VIEW IF EXISTS {};", view)
}

/// Column definition collected for CREATE TABLE
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDef {
    pub data_type: String,
    pub key:       String,
    pub default:   String
}

impl ColumnDef {
    /// Render `<name> <type> <key> DEFAULT <default>`, skipping blank parts
    pub fn render(&self, name: &str) -> String {
        let default = if self.default.trim().is_empty() {
            String::new()
        } else {
            format!("DEFAULT {}", self.default)
        };
        [name, self.data_type.trim(), self.key.trim(), default.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Ordered column definitions keyed by column name.
///
/// Re-inserting a name replaces its definition but keeps its position.
pub type ColumnDefs = IndexMap<CompactString, ColumnDef>;

/// Build `CREATE TABLE <table> (<col defs>);`
///
/// # Example
///
/// ```
/// use sql_query_generator::statement::{ColumnDef, ColumnDefs, build_create_table};
///
/// let mut columns = ColumnDefs::new();
/// columns.insert(
///     "id".into(),
///     ColumnDef {
///         data_type: "INT".into(),
///         key:       "PRIMARY KEY".into(),
///         default:   String::new()
///     }
/// );
/// assert_eq!(
///     build_create_table("users", &columns),
///     "CREATE TABLE users (id INT PRIMARY KEY);"
/// );
/// ```
pub fn build_create_table(table: &str, columns: &ColumnDefs) -> String {
    let defs: Vec<String> = columns
        .iter()
        .map(|(name, def)| def.render(name))
        .collect();
    format!("CREATE TABLE {} ({});", table, defs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_menu_order() {
        let names: Vec<_> = Operation::ALL.iter().map(Operation::as_str).collect();
        assert_eq!(
            names,
            [
                "select",
                "insert",
                "update",
                "delete",
                "create_table",
                "drop_table",
                "alter_table",
                "create_view",
                "drop_view"
            ]
        );
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::CreateTable.to_string(), "create_table");
    }

    #[test]
    fn test_select_columns_rejoined() {
        let params = SelectParams {
            columns:   "id,name".to_string(),
            condition: "id > 3".to_string(),
            limit:     "5".to_string(),
            offset:    "20".to_string()
        };
        assert_eq!(
            build_select("users", &params),
            "SELECT id, name FROM users WHERE id > 3 LIMIT 5 OFFSET 20;"
        );
    }

    #[test]
    fn test_select_column_pieces_not_trimmed() {
        let params = SelectParams {
            columns: "a, b".to_string(),
            ..Default::default()
        };
        assert!(build_select("t", &params).starts_with("SELECT a,  b FROM t"));
    }

    #[test]
    fn test_simple_templates() {
        assert_eq!(build_delete("t", "id=10"), "DELETE FROM t WHERE id=10;");
        assert_eq!(build_drop_table("t"), "DROP TABLE IF EXISTS t;");
        assert_eq!(
            build_alter_table("t", "ADD COLUMN age INT"),
            "ALTER TABLE t ADD COLUMN age INT;"
        );
        assert_eq!(
            build_create_view("v", "SELECT id FROM t"),
            "CREATE VIEW v AS SELECT id FROM t;"
        );
        assert_eq!(build_drop_view("v"), "DROP VIEW IF EXISTS v;");
    }

    #[test]
    fn test_column_def_render_skips_blanks() {
        let def = ColumnDef {
            data_type: "TEXT".to_string(),
            key:       String::new(),
            default:   "'n/a'".to_string()
        };
        assert_eq!(def.render("note"), "note TEXT DEFAULT 'n/a'");
    }

    #[test]
    fn test_create_table_redefined_column_keeps_position() {
        let mut columns = ColumnDefs::new();
        columns.insert("id".into(), ColumnDef {
            data_type: "INT".to_string(),
            ..Default::default()
        });
        columns.insert("name".into(), ColumnDef {
            data_type: "TEXT".to_string(),
            ..Default::default()
        });
        columns.insert("id".into(), ColumnDef {
            data_type: "BIGINT".to_string(),
            key: "UNIQUE".to_string(),
            ..Default::default()
        });
        assert_eq!(
            build_create_table("t", &columns),
            "CREATE TABLE t (id BIGINT UNIQUE, name TEXT);"
        );
    }

    #[test]
    fn test_create_table_without_columns() {
        assert_eq!(build_create_table("t", &ColumnDefs::new()), "CREATE TABLE t ();");
    }
}
