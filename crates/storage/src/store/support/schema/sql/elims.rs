#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS elims (
          id TEXT PRIMARY KEY,
          squad_id TEXT NOT NULL,
          div_id TEXT NOT NULL,
          sort_order INTEGER NOT NULL,
          start INTEGER NOT NULL,
          games INTEGER NOT NULL,
          fee REAL NOT NULL,
          UNIQUE(squad_id, div_id, start, games),
          FOREIGN KEY(squad_id) REFERENCES squads(id) DEFERRABLE INITIALLY DEFERRED,
          FOREIGN KEY(div_id) REFERENCES divs(id) DEFERRABLE INITIALLY DEFERRED
        );

        CREATE TABLE IF NOT EXISTS elim_entries (
          id TEXT PRIMARY KEY,
          elim_id TEXT NOT NULL,
          player_id TEXT NOT NULL,
          fee REAL NOT NULL,
          UNIQUE(elim_id, player_id),
          FOREIGN KEY(elim_id) REFERENCES elims(id) DEFERRABLE INITIALLY DEFERRED,
          FOREIGN KEY(player_id) REFERENCES players(id) DEFERRABLE INITIALLY DEFERRED
        );
"#;
