#![forbid(unsafe_code)]

mod brackets;
mod core;
mod elims;
mod indexes;
mod pragmas;
mod squads;

pub(super) fn full_schema_sql() -> String {
    let mut sql = String::new();
    sql.push_str(pragmas::SQL);
    sql.push_str(core::SQL);
    sql.push_str(squads::SQL);
    sql.push_str(brackets::SQL);
    sql.push_str(elims::SQL);
    sql.push_str(indexes::SQL);
    sql
}
