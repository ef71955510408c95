#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS meta (
          key TEXT PRIMARY KEY,
          value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tmnts (
          id TEXT PRIMARY KEY,
          tmnt_name TEXT NOT NULL,
          start_date TEXT NOT NULL,
          end_date TEXT NOT NULL,
          bowl_id TEXT NOT NULL,
          user_id TEXT NOT NULL,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER NOT NULL,
          CHECK(end_date >= start_date)
        );

        CREATE TABLE IF NOT EXISTS events (
          id TEXT PRIMARY KEY,
          tmnt_id TEXT NOT NULL,
          event_name TEXT NOT NULL,
          team_size INTEGER NOT NULL,
          games INTEGER NOT NULL,
          entry_fee REAL NOT NULL,
          lineage REAL NOT NULL,
          prize_fund REAL NOT NULL,
          other REAL NOT NULL,
          expenses REAL NOT NULL,
          added_money REAL NOT NULL,
          sort_order INTEGER NOT NULL,
          UNIQUE(tmnt_id, event_name),
          FOREIGN KEY(tmnt_id) REFERENCES tmnts(id) DEFERRABLE INITIALLY DEFERRED
        );

        CREATE TABLE IF NOT EXISTS divs (
          id TEXT PRIMARY KEY,
          tmnt_id TEXT NOT NULL,
          div_name TEXT NOT NULL,
          hdcp_per REAL NOT NULL,
          hdcp_from INTEGER NOT NULL,
          int_hdcp INTEGER NOT NULL,
          hdcp_for TEXT NOT NULL,
          sort_order INTEGER NOT NULL,
          UNIQUE(tmnt_id, div_name),
          FOREIGN KEY(tmnt_id) REFERENCES tmnts(id) DEFERRABLE INITIALLY DEFERRED
        );
"#;
