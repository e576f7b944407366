use crate::db::Database;
use crate::repository::contract;

fn db() -> Database {
    Database::open_in_memory().unwrap()
}

#[test]
fn test_insert_and_get() {
    contract::insert_and_get(db());
}

#[test]
fn test_insert_resets_rank() {
    contract::insert_resets_rank(db());
}

#[test]
fn test_duplicate_insert_rejected() {
    contract::duplicate_insert_rejected(db());
}

#[test]
fn test_delete_known_and_unknown() {
    contract::delete_known_and_unknown(db());
}

#[test]
fn test_find_by_id_or_name() {
    contract::find_by_id_or_name(db());
}

#[test]
fn test_list_sorted_by() {
    contract::list_sorted_by(db());
}

#[test]
fn test_update_rank() {
    contract::update_rank(db());
}

#[test]
fn test_apply_ranks_missing_id_writes_nothing() {
    contract::apply_ranks_missing_id_writes_nothing(db());
}

#[test]
fn test_filters_and_aggregate() {
    contract::filters_and_aggregate(db());
}

#[test]
fn test_empty_collection() {
    contract::empty_collection(db());
}

#[test]
fn test_unit_rollback_and_commit() {
    contract::unit_rollback_and_commit(db());
}
