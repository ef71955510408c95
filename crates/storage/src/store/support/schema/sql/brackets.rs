#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE TABLE IF NOT EXISTS brkts (
          id TEXT PRIMARY KEY,
          squad_id TEXT NOT NULL,
          div_id TEXT NOT NULL,
          sort_order INTEGER NOT NULL,
          start INTEGER NOT NULL,
          games INTEGER NOT NULL,
          players INTEGER NOT NULL,
          fee REAL NOT NULL,
          first REAL NOT NULL,
          second REAL NOT NULL,
          admin REAL NOT NULL,
          fsa REAL NOT NULL,
          UNIQUE(squad_id, div_id, start),
          FOREIGN KEY(squad_id) REFERENCES squads(id) DEFERRABLE INITIALLY DEFERRED,
          FOREIGN KEY(div_id) REFERENCES divs(id) DEFERRABLE INITIALLY DEFERRED
        );

        CREATE TABLE IF NOT EXISTS one_brkts (
          id TEXT PRIMARY KEY,
          brkt_id TEXT NOT NULL,
          bindex INTEGER NOT NULL,
          UNIQUE(brkt_id, bindex),
          FOREIGN KEY(brkt_id) REFERENCES brkts(id) DEFERRABLE INITIALLY DEFERRED
        );

        CREATE TABLE IF NOT EXISTS brkt_seeds (
          one_brkt_id TEXT NOT NULL,
          seed INTEGER NOT NULL,
          player_id TEXT NOT NULL,
          PRIMARY KEY(one_brkt_id, seed),
          UNIQUE(one_brkt_id, player_id),
          FOREIGN KEY(one_brkt_id) REFERENCES one_brkts(id) DEFERRABLE INITIALLY DEFERRED,
          FOREIGN KEY(player_id) REFERENCES players(id) DEFERRABLE INITIALLY DEFERRED
        );

        CREATE TABLE IF NOT EXISTS brkt_entries (
          id TEXT PRIMARY KEY,
          brkt_id TEXT NOT NULL,
          player_id TEXT NOT NULL,
          num_brackets INTEGER NOT NULL CHECK(num_brackets >= 0),
          time_stamp INTEGER NOT NULL,
          UNIQUE(brkt_id, player_id),
          FOREIGN KEY(brkt_id) REFERENCES brkts(id) DEFERRABLE INITIALLY DEFERRED,
          FOREIGN KEY(player_id) REFERENCES players(id) DEFERRABLE INITIALLY DEFERRED
        );
"#;
