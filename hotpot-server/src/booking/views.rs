//! Table view builder
//!
//! Joins reservations under their tables in a single grouping pass.
//! Pure calculation: no store access, no input mutation.

use std::collections::HashMap;

use shared::models::{Reservation, Table, TableView};

/// Build the per-table reservation views.
///
/// One pass over `reservations` builds a `table_id` index, one pass
/// over `tables` drains it — O(tables + reservations) at any volume.
/// Reservations whose `table_id` matches no table are dropped from
/// every view; the store has no referential integrity, so a dangling
/// reference is normal data, not an error. The relative order of each
/// table's reservations follows the input order.
pub fn build_table_views(tables: &[Table], reservations: &[Reservation]) -> Vec<TableView> {
    let mut by_table: HashMap<&str, Vec<Reservation>> = HashMap::new();
    for reservation in reservations {
        by_table
            .entry(reservation.table_id.as_str())
            .or_default()
            .push(reservation.clone());
    }

    tables
        .iter()
        .map(|table| {
            let matched = by_table.remove(table.id.as_str()).unwrap_or_default();
            TableView {
                id: table.id.clone(),
                name: table.name.clone(),
                capacity: table.capacity,
                reservation_count: matched.len(),
                reservations: matched,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: &str, name: &str) -> Table {
        Table {
            id: id.into(),
            name: name.into(),
            capacity: 4,
        }
    }

    fn reservation(id: &str, table_id: &str) -> Reservation {
        Reservation {
            id: id.into(),
            table_id: table_id.into(),
            customer_name: "Anh".into(),
            phone: "0912345678".into(),
            guest_count: 2,
            reservation_time: 1_900_000_000_000,
            note: None,
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn groups_reservations_under_their_tables() {
        let tables = vec![table("t1", "Table 1"), table("t2", "Table 2")];
        let reservations = vec![
            reservation("r1", "t1"),
            reservation("r2", "t2"),
            reservation("r3", "t1"),
        ];

        let views = build_table_views(&tables, &reservations);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].reservation_count, 2);
        assert_eq!(views[0].reservations[0].id, "r1");
        assert_eq!(views[0].reservations[1].id, "r3");
        assert_eq!(views[1].reservation_count, 1);
        assert_eq!(views[1].reservations[0].id, "r2");
    }

    #[test]
    fn dangling_table_id_is_silently_excluded() {
        let tables = vec![table("t1", "Table 1")];
        let reservations = vec![reservation("r1", "t1"), reservation("r2", "ghost")];

        let views = build_table_views(&tables, &reservations);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].reservation_count, 1);
        assert_eq!(views[0].reservations[0].id, "r1");
    }

    #[test]
    fn permuting_reservations_keeps_counts_and_membership() {
        let tables = vec![table("t1", "Table 1"), table("t2", "Table 2")];
        let mut reservations = vec![
            reservation("r1", "t1"),
            reservation("r2", "t2"),
            reservation("r3", "t1"),
            reservation("r4", "t2"),
        ];

        let original = build_table_views(&tables, &reservations);
        reservations.reverse();
        let permuted = build_table_views(&tables, &reservations);

        for (a, b) in original.iter().zip(permuted.iter()) {
            assert_eq!(a.reservation_count, b.reservation_count);
            let mut ids_a: Vec<_> = a.reservations.iter().map(|r| r.id.as_str()).collect();
            let mut ids_b: Vec<_> = b.reservations.iter().map(|r| r.id.as_str()).collect();
            ids_a.sort_unstable();
            ids_b.sort_unstable();
            assert_eq!(ids_a, ids_b);
        }
    }

    #[test]
    fn empty_inputs_produce_empty_views() {
        assert!(build_table_views(&[], &[]).is_empty());

        let tables = vec![table("t1", "Table 1")];
        let views = build_table_views(&tables, &[]);
        assert_eq!(views[0].reservation_count, 0);
        assert!(views[0].reservations.is_empty());
    }
}
