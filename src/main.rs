//! Phonics Wordle - CLI
//!
//! Play in the terminal, build and decode challenge links, and audit the
//! word data.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use log::info;
use phonics_wordle::{
    challenge::{LinkParams, daily_seed},
    commands::{PlayOptions, create_challenge, inspect_challenge, run_audit, run_play},
    config::{GameConfig, GameRules, GameSettings},
    game::{EmojiPalette, Session},
    output::{print_audit_report, print_challenge_report},
    rules::Difficulty,
    selection::{PHONICS_STAGES, Tier},
    wordlists::{
        DICTIONARY, TARGETS,
        loader::{entries_from_slice, load_from_file},
    },
};
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_BASE_URL: &str = "https://phonics-wordle.example/";

#[derive(Parser)]
#[command(
    name = "phonics_wordle",
    about = "Wordle for early readers, graded by phonics stage",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    play: PlayArgs,

    /// Ordered target list with `*` section markers (default: built in)
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    /// Extra words accepted as guesses (default: built in)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Page that share links point at
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play(PlayArgs),

    /// Make a challenge link for a word
    Link {
        /// Word the other player has to find
        word: String,

        /// Tier the challenge is played at
        #[arg(
            short,
            long,
            default_value = "14",
            value_parser = clap::value_parser!(u8).range(1..=14)
        )]
        tier: u8,
    },

    /// Decode a challenge token or link
    Decode {
        /// Token, or a whole link with `?challenge=`
        token: String,
    },

    /// Check the tier tables and word lists
    Audit,
}

#[derive(Args)]
struct PlayArgs {
    /// Word length
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=5))]
    length: Option<u8>,

    /// Difficulty tier, 1 (SATPIN) to 14 (every letter)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=14))]
    tier: Option<u8>,

    /// Seed for a reproducible sequence of words
    #[arg(short, long, conflicts_with = "daily")]
    seed: Option<String>,

    /// Play today's puzzle (seeded by the date)
    #[arg(long)]
    daily: bool,

    /// Game number within the seed's sequence
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=1000))]
    game: Option<u32>,

    /// Start from a share or challenge link
    #[arg(long, conflicts_with_all = ["seed", "daily"])]
    url: Option<String>,

    /// Revealed letters must be reused
    #[arg(long)]
    hard: bool,

    /// Hard, plus yellow letters must move and grey ones stay out
    #[arg(long, conflicts_with = "hard")]
    ultra_hard: bool,

    /// Blue and orange instead of yellow and green in shared results
    #[arg(long)]
    color_blind: bool,

    /// Allow typing letters the tier doesn't teach yet
    #[arg(long)]
    any_letters: bool,

    /// Guesses before the game is lost
    #[arg(long, default_value = "6", value_parser = clap::value_parser!(u8).range(1..=20))]
    max_guesses: u8,
}

impl PlayArgs {
    fn rules(&self) -> GameRules {
        let difficulty = if self.ultra_hard {
            Difficulty::UltraHard
        } else if self.hard {
            Difficulty::Hard
        } else {
            Difficulty::Normal
        };
        GameRules {
            difficulty,
            max_guesses: usize::from(self.max_guesses),
            restrict_keyboard: !self.any_letters,
        }
    }

    fn settings(&self) -> GameSettings {
        if let Some(url) = &self.url {
            return GameSettings {
                rules: self.rules(),
                ..GameSettings::from_link(&LinkParams::parse(url))
            };
        }

        let defaults = GameSettings::default();
        let seed = if self.daily {
            Some(daily_seed())
        } else {
            self.seed.clone()
        };
        GameSettings {
            length: self.length.map_or(defaults.length, usize::from),
            tier: self.tier.and_then(Tier::new).unwrap_or(defaults.tier),
            seed,
            game_number: self.game.unwrap_or(defaults.game_number),
            challenge: None,
            rules: self.rules(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.targets.as_deref(), cli.dictionary.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play(cli.play));

    match command {
        Commands::Play(args) => run_play_command(&config, &args, &cli.base_url),
        Commands::Link { word, tier } => run_link_command(&config, &word, tier, &cli.base_url),
        Commands::Decode { token } => run_decode_command(&config, &token, &cli.base_url),
        Commands::Audit => run_audit_command(&config),
    }
}

/// Build the game config from the built-in lists or files given on the command line
fn load_config(targets: Option<&Path>, dictionary: Option<&Path>) -> Result<GameConfig> {
    if targets.is_none() && dictionary.is_none() {
        return Ok(GameConfig::embedded()?);
    }

    let read = |path: &Path| {
        load_from_file(path).with_context(|| format!("Failed to read {}", path.display()))
    };
    let targets = match targets {
        Some(path) => read(path)?,
        None => entries_from_slice(TARGETS),
    };
    let dictionary = match dictionary {
        Some(path) => read(path)?,
        None => entries_from_slice(DICTIONARY),
    };
    info!(
        "Loaded {} target entries and {} dictionary words",
        targets.len(),
        dictionary.len()
    );

    GameConfig::new(&targets, &dictionary, &PHONICS_STAGES)
        .context("Word lists don't fit the phonics tiers")
}

fn run_play_command(config: &GameConfig, args: &PlayArgs, base_url: &str) -> Result<()> {
    let mut session = Session::start(config, args.settings())?;
    let options = PlayOptions {
        base_url: base_url.to_string(),
        palette: if args.color_blind {
            EmojiPalette::ColorBlind
        } else {
            EmojiPalette::Standard
        },
    };
    run_play(&mut session, &options, io::stdin().lock(), io::stdout().lock())
        .map_err(|e| anyhow!(e))
}

fn run_link_command(config: &GameConfig, word: &str, tier: u8, base_url: &str) -> Result<()> {
    let tier = Tier::new(tier).ok_or_else(|| anyhow!("Tier must be between 1 and 14"))?;
    let report = create_challenge(config, word, tier, base_url)?;
    print_challenge_report(&report);
    Ok(())
}

fn run_decode_command(config: &GameConfig, token: &str, base_url: &str) -> Result<()> {
    let report = inspect_challenge(config, token, base_url)?;
    print_challenge_report(&report);
    Ok(())
}

fn run_audit_command(config: &GameConfig) -> Result<()> {
    let report = run_audit(config);
    print_audit_report(&report);
    if !report.is_healthy() {
        bail!("Word data audit failed");
    }
    Ok(())
}
