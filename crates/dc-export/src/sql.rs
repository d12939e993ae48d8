//! SQL script exporter: `CREATE TABLE` plus one `INSERT` per row.

use dc_core::errors::{Error, Result};
use dc_dimension::{Cell, Column, ColumnKind, DateDimension, COLUMNS};

use crate::options::is_identifier;

fn quote_identifier(name: &str) -> String {
    if name.contains(' ') {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}

fn sql_type(column: &Column) -> &'static str {
    match column.kind {
        ColumnKind::Date => "DATE",
        ColumnKind::Integer => "INT",
        ColumnKind::Boolean => "BOOLEAN",
        ColumnKind::Text if column.nullable => "VARCHAR(255)",
        ColumnKind::Text => "VARCHAR(20)",
    }
}

fn literal(cell: Cell<'_>) -> String {
    match cell {
        Cell::Date(d) => format!("'{d}'"),
        Cell::Int(n) => n.to_string(),
        Cell::Text(s) => format!("'{}'", s.replace('\'', "''")),
        Cell::Bool(true) => "TRUE".to_string(),
        Cell::Bool(false) => "FALSE".to_string(),
        Cell::Null => "NULL".to_string(),
    }
}

/// Encode `table` as a SQL script targeting `table_name`.
///
/// `table_name` must be a plain identifier, `[A-Za-z_][A-Za-z0-9_]*`.
pub fn to_sql(table: &DateDimension, table_name: &str) -> Result<Vec<u8>> {
    if !is_identifier(table_name) {
        return Err(Error::InvalidArgument(format!(
            "table name must match [A-Za-z_][A-Za-z0-9_]*, got {table_name:?}"
        )));
    }
    let mut out = String::new();

    out.push_str(&format!("CREATE TABLE {table_name} (\n"));
    let defs: Vec<String> = COLUMNS
        .iter()
        .map(|c| format!("    {} {}", quote_identifier(c.name), sql_type(c)))
        .collect();
    out.push_str(&defs.join(",\n"));
    out.push_str("\n);\n\n");

    let names: Vec<String> = COLUMNS.iter().map(|c| quote_identifier(c.name)).collect();
    let names = names.join(", ");
    for row in table {
        let values: Vec<String> = row.cells().into_iter().map(literal).collect();
        out.push_str(&format!(
            "INSERT INTO {table_name} ({names}) VALUES ({});\n",
            values.join(", ")
        ));
    }

    Ok(out.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dc_dimension::DateDimensionBuilder;
    use dc_time::Date;

    #[test]
    fn literals() {
        assert_eq!(literal(Cell::Text("Dia d'Água")), "'Dia d''Água'");
        assert_eq!(literal(Cell::Null), "NULL");
        assert_eq!(literal(Cell::Bool(true)), "TRUE");
        assert_eq!(literal(Cell::Int(-3)), "-3");
    }

    #[test]
    fn script_shape() {
        let d = Date::from_ymd(2024, 7, 9).unwrap();
        let table = DateDimensionBuilder::new(d, d)
            .regions(&["SP"])
            .build()
            .unwrap();
        let script = String::from_utf8(to_sql(&table, "dim_data").unwrap()).unwrap();
        assert!(script.starts_with("CREATE TABLE dim_data (\n    Data DATE,\n"));
        assert!(script.contains("    \"Feriado Estadual\" VARCHAR(255),\n"));
        assert!(script.contains("    EhFeriado BOOLEAN\n);\n\n"));
        let insert = script.lines().last().unwrap();
        assert!(insert.starts_with("INSERT INTO dim_data (Data, Ano, "));
        assert!(insert.contains("\"Feriado Estadual\", Estado, EhFeriado) VALUES ('2024-07-09', 2024, "));
        assert!(insert.ends_with("NULL, 'Revolução Constitucionalista', 'São Paulo', TRUE);"));
        assert_eq!(script.matches("INSERT INTO").count(), 1);
        assert!(script.ends_with("TRUE);\n"));
    }

    #[test]
    fn one_terminated_insert_per_row() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let table = DateDimensionBuilder::new(start, start + 2).build().unwrap();
        let script = String::from_utf8(to_sql(&table, "d").unwrap()).unwrap();
        let inserts: Vec<&str> = script.lines().filter(|l| l.starts_with("INSERT INTO d ")).collect();
        assert_eq!(inserts.len(), 3);
        assert!(inserts.iter().all(|l| l.ends_with(");")));
        assert_eq!(script.lines().count(), 1 + COLUMNS.len() + 1 + 1 + 3);
    }

    #[test]
    fn rejects_unsafe_table_name() {
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        let table = DateDimensionBuilder::new(d, d).build().unwrap();
        assert!(matches!(
            to_sql(&table, "x; DROP TABLE y"),
            Err(Error::InvalidArgument(_))
        ));
    }
}
