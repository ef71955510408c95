#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS squads (
          id TEXT PRIMARY KEY,
          event_id TEXT NOT NULL,
          squad_name TEXT NOT NULL,
          games INTEGER NOT NULL,
          lane_count INTEGER NOT NULL,
          starting_lane INTEGER NOT NULL,
          squad_date TEXT NOT NULL,
          squad_time TEXT,
          sort_order INTEGER NOT NULL,
          UNIQUE(event_id, squad_name),
          FOREIGN KEY(event_id) REFERENCES events(id) DEFERRABLE INITIALLY DEFERRED
        );

        CREATE TABLE IF NOT EXISTS lanes (
          id TEXT PRIMARY KEY,
          squad_id TEXT NOT NULL,
          lane_number INTEGER NOT NULL,
          in_use INTEGER NOT NULL,
          UNIQUE(squad_id, lane_number),
          FOREIGN KEY(squad_id) REFERENCES squads(id) DEFERRABLE INITIALLY DEFERRED
        );

        CREATE TABLE IF NOT EXISTS players (
          id TEXT PRIMARY KEY,
          squad_id TEXT NOT NULL,
          first_name TEXT NOT NULL,
          last_name TEXT NOT NULL,
          average INTEGER NOT NULL,
          lane INTEGER,
          position TEXT,
          FOREIGN KEY(squad_id) REFERENCES squads(id) DEFERRABLE INITIALLY DEFERRED
        );

        CREATE TABLE IF NOT EXISTS pots (
          id TEXT PRIMARY KEY,
          squad_id TEXT NOT NULL,
          div_id TEXT NOT NULL,
          sort_order INTEGER NOT NULL,
          fee REAL NOT NULL,
          pot_type TEXT NOT NULL,
          UNIQUE(squad_id, div_id, pot_type),
          FOREIGN KEY(squad_id) REFERENCES squads(id) DEFERRABLE INITIALLY DEFERRED,
          FOREIGN KEY(div_id) REFERENCES divs(id) DEFERRABLE INITIALLY DEFERRED
        );
"#;
