pub mod play;
pub mod simulate;

pub use play::play;
pub use simulate::{show_roster, simulate};

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Table};
use giftswap_core::{DrawSession, GameConfig, History, ParticipantId, Roster};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Args, Debug, Clone, Default)]
pub struct SetupArgs {
    /// Number of seats in the class (overrides the config file)
    #[arg(short, long)]
    pub roster_size: Option<u32>,

    /// Seats sitting this exchange out, e.g. --exclude 3,17
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<u32>,
}

impl SetupArgs {
    pub fn game_config(&self, config: &CliConfig) -> GameConfig {
        let mut game = config.game.clone();
        if let Some(size) = self.roster_size {
            game.roster_size = size;
        }
        game
    }

    /// A fresh session in setup with the excluded seats opted out.
    pub fn build_session(&self, config: &CliConfig) -> Result<DrawSession> {
        let mut session = DrawSession::new(self.game_config(config))?;
        for &seat in &self.exclude {
            session.set_eligibility(ParticipantId::Seat(seat), false)?;
        }
        Ok(session)
    }
}

pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn history_table(history: &History) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Drawer", "Gift", "Time"]);

    let total = history.len();
    for (i, item) in history.recent().enumerate() {
        table.add_row(vec![
            (total - i).to_string(),
            item.drawer_name.clone(),
            item.gift_id.to_string(),
            item.timestamp
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S")
                .to_string(),
        ]);
    }

    table
}

/// Gifts still on the board, with the one just drawn in brackets.
pub fn gift_board(session: &DrawSession) -> String {
    let last = session.last_gift();
    let mut gifts: Vec<_> = session
        .gifts()
        .iter()
        .filter(|g| !g.is_taken() || Some(g.id()) == last)
        .map(|g| g.id())
        .collect();
    gifts.sort_unstable();

    let cells: Vec<String> = gifts
        .into_iter()
        .map(|id| {
            if Some(id) == last {
                format!("[{:02}]", id)
            } else {
                format!("{:02}", id)
            }
        })
        .collect();

    format!("Gifts: {}", cells.join(" "))
}

/// Shown when the exchange is stopped before every gift is drawn.
pub fn stop_report(session: &DrawSession) -> String {
    format!(
        "Stopped with {} gifts left.\n{}",
        session.available_gifts().len(),
        history_table(session.history())
    )
}

pub fn roster_table(roster: &Roster) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Seat", "Name", "Opted In", "Gift"]);

    for p in roster.participants() {
        table.add_row(vec![
            p.id().to_string(),
            p.name().to_string(),
            if p.is_eligible() { "yes" } else { "no" }.to_string(),
            p.gift_received()
                .map(|g| g.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_session_applies_overrides() {
        let args = SetupArgs {
            roster_size: Some(12),
            exclude: vec![2, 7],
        };
        let session = args.build_session(&CliConfig::default()).unwrap();

        assert_eq!(session.roster().roster_size(), 12);
        assert_eq!(session.eligible_count(), 11);
    }

    #[test]
    fn test_gift_board_marks_last_gift() {
        let args = SetupArgs {
            roster_size: Some(4),
            exclude: vec![],
        };
        let mut session = args.build_session(&CliConfig::default()).unwrap();
        session.start().unwrap();
        assert_eq!(gift_board(&session), "Gifts: 01 02 03 04 11");

        session.apply_draw(11).unwrap();
        assert_eq!(gift_board(&session), "Gifts: 01 02 03 04 [11]");

        session.apply_draw(2).unwrap();
        assert_eq!(gift_board(&session), "Gifts: 01 [02] 03 04");
    }

    #[test]
    fn test_stop_report_lists_draws_so_far() {
        let args = SetupArgs {
            roster_size: Some(4),
            exclude: vec![],
        };
        let mut session = args.build_session(&CliConfig::default()).unwrap();
        session.start().unwrap();
        session.apply_draw(11).unwrap();
        session.apply_draw(1).unwrap();

        let report = stop_report(&session);
        assert!(report.starts_with("Stopped with 3 gifts left."));
        assert!(report.contains("Teacher"));
        assert!(report.contains("No. 3"));
    }

    #[test]
    fn test_build_session_rejects_oversized_roster() {
        let args = SetupArgs {
            roster_size: Some(4_000_000_000),
            exclude: vec![],
        };
        assert!(args.build_session(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_build_session_rejects_unknown_seat() {
        let args = SetupArgs {
            roster_size: Some(5),
            exclude: vec![9],
        };
        assert!(args.build_session(&CliConfig::default()).is_err());
    }
}
