// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_query_generator::{
    render::{render_insert, render_set_clause, render_update, render_values_tuple},
    table::Table
};

fn users() -> Table {
    Table::from_rows(
        vec!["id".to_string(), "name".to_string()],
        vec![
            vec![Some("1".to_string()), Some("Alice".to_string())],
            vec![Some("2".to_string()), Some("-".to_string())],
        ]
    )
}

fn wide(rows: usize, columns: usize) -> Table {
    Table::from_rows(
        (0..columns).map(|c| format!("c{}", c)).collect(),
        (0..rows)
            .map(|r| {
                (0..columns)
                    .map(|c| if (r + c) % 3 == 0 { None } else { Some(format!("{}", r * c)) })
                    .collect()
            })
            .collect()
    )
}

#[test]
fn test_insert_users_scenario() {
    assert_eq!(
        render_insert(&users(), "users"),
        "INSERT INTO users (id, name) VALUES ('1', 'Alice'), ('2', NULL);"
    );
}

#[test]
fn test_update_users_scenario() {
    assert_eq!(
        render_update(&users(), "users", "id = 1"),
        "UPDATE users SET id = '1', name = 'Alice' WHERE id = 1;\nUPDATE users SET id = '2' WHERE id = 1;"
    );
}

#[test]
fn test_insert_tuple_count_and_width() {
    let table = wide(7, 4);
    let sql = render_insert(&table, "w");
    let values = sql.split(" VALUES ").nth(1).unwrap();
    let tuples: Vec<_> = values.trim_end_matches(';').split("), (").collect();
    assert_eq!(tuples.len(), 7);
    for tuple in tuples {
        let inner = tuple.trim_start_matches('(').trim_end_matches(')');
        assert_eq!(inner.split(", ").count(), 4);
    }
}

#[test]
fn test_update_statement_count() {
    let table = wide(5, 3);
    let condition = "tenant_id = 'acme' AND  active";
    let sql = render_update(&table, "w", condition);
    let statements: Vec<_> = sql.split('\n').collect();
    assert_eq!(statements.len(), 5);
    for statement in statements {
        assert!(statement.ends_with(&format!("WHERE {};", condition)));
    }
}

#[test]
fn test_row_helpers() {
    let table = users();
    let second = table.rows().nth(1).unwrap();
    assert_eq!(render_values_tuple(&second), "('2', NULL)");
    assert_eq!(render_set_clause(&second), "id = '2'");
}

#[test]
fn test_insert_keeps_raw_text() {
    let table = Table::from_rows(
        vec!["note".to_string()],
        vec![vec![Some(" it's ".to_string())], vec![Some("NULL ".to_string())]]
    );
    assert_eq!(
        render_insert(&table, "notes"),
        "INSERT INTO notes (note) VALUES (' it's '), (NULL);"
    );
}
