#![forbid(unsafe_code)]

mod schema;
mod time;

pub(super) use schema::{SCHEMA_VERSION, migrate_sqlite_schema};
pub(super) use time::now_ms;
