#![forbid(unsafe_code)]

pub(super) const SQL: &str = r#"

        CREATE INDEX IF NOT EXISTS idx_events_tmnt ON events(tmnt_id, sort_order);
        CREATE INDEX IF NOT EXISTS idx_divs_tmnt ON divs(tmnt_id, sort_order);
        CREATE INDEX IF NOT EXISTS idx_squads_event ON squads(event_id, sort_order);
        CREATE INDEX IF NOT EXISTS idx_players_squad ON players(squad_id);
        CREATE INDEX IF NOT EXISTS idx_pots_div ON pots(div_id);
        CREATE INDEX IF NOT EXISTS idx_brkts_div ON brkts(div_id);
        CREATE INDEX IF NOT EXISTS idx_brkt_seeds_player ON brkt_seeds(player_id);
        CREATE INDEX IF NOT EXISTS idx_brkt_entries_player ON brkt_entries(player_id);
        CREATE INDEX IF NOT EXISTS idx_elims_div ON elims(div_id);
        CREATE INDEX IF NOT EXISTS idx_elim_entries_player ON elim_entries(player_id);
"#;
