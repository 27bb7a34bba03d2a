use crate::core::STANDARD_WIDTH;
use crate::game::{ForfeitPolicy, MatchOptions};
use crate::player::Strategy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "tournament_config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    pub name: String,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub board_width: usize,
    /// 1組あたりの対局数 (先後を交互に入れ替える)
    pub games_per_pairing: usize,
    pub move_time_limit_ms: Option<u64>,
    pub forfeit_policy: ForfeitPolicy,
    pub parallel: bool,
    pub verbose: bool,
    pub entries: Vec<EntryConfig>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            board_width: STANDARD_WIDTH,
            games_per_pairing: 2,
            move_time_limit_ms: None,
            forfeit_policy: ForfeitPolicy::Match,
            parallel: true,
            verbose: false,
            entries: vec![
                EntryConfig {
                    name: "Random".to_string(),
                    strategy: Strategy::Random,
                },
                EntryConfig {
                    name: "Greedy".to_string(),
                    strategy: Strategy::Greedy,
                },
                EntryConfig {
                    name: "Minimax-3".to_string(),
                    strategy: Strategy::Minimax { depth: 3 },
                },
            ],
        }
    }
}

impl TournamentConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: TournamentConfig = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_PATH).unwrap_or_else(|_| Self::default())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.board_width >= 4 && self.board_width % 2 == 0,
            "board_width must be even and at least 4, got {}",
            self.board_width
        );
        anyhow::ensure!(
            self.entries.len() >= 2,
            "a tournament needs at least two entries"
        );
        anyhow::ensure!(self.games_per_pairing > 0, "games_per_pairing must be positive");
        let mut names: Vec<&str> = self.entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        if let Some(dup) = names.windows(2).find(|w| w[0] == w[1]) {
            anyhow::bail!("duplicate entry name {:?}", dup[0]);
        }
        Ok(())
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            board_width: self.board_width,
            move_time_limit: self.move_time_limit_ms.map(Duration::from_millis),
            forfeit_policy: self.forfeit_policy,
        }
    }
}
