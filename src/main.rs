//! Season match report CLI
//!
//! Loads a season of football match results and prints the aggregate report.

use clap::{Parser, Subcommand};
use matchday::{Config, Result};

#[derive(Parser)]
#[command(name = "matchday")]
#[command(about = "Aggregate analytics over a season of match results", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the season and print the full aggregate report
    Report {
        /// Results file, overriding the configured path
        #[arg(long)]
        csv: Option<String>,
    },
    /// Print every parsed match record
    Games {
        /// Results file, overriding the configured path
        #[arg(long)]
        csv: Option<String>,
    },
    /// Initialize a new project with default config
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Run command
    let result = match cli.command {
        Commands::Report { csv } => commands::report(&config, csv),
        Commands::Games { csv } => commands::games(&config, csv),
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use matchday::data::loader;
    use matchday::stats::queries;
    use matchday::Outcome;

    pub fn report(config: &Config, csv: Option<String>) -> Result<()> {
        let path = csv.unwrap_or_else(|| config.data.csv_path.clone());
        let games = loader::load_matches(&path)?;
        let season = &config.season;

        for game in &games {
            println!("{}", game);
        }
        println!();

        let competition_games = queries::count_competition_games(&games, &season.competition);
        println!(
            "There were {} {} games",
            competition_games, season.competition
        );
        println!();

        let split = queries::split_home_away(&games, &season.focus_team);
        println!("*** HOME ***");
        for game in &split.home {
            println!("{}", game);
        }
        println!("*** AWAY ***");
        for game in &split.away {
            println!("{}", game);
        }
        println!();

        let groups = queries::group_by_outcome(&games);
        for outcome in [Outcome::Won, Outcome::Draw, Outcome::Lost] {
            println!("*** {} ***", outcome);
            for game in groups.records(outcome) {
                println!("{}", game);
            }
        }
        println!();

        if games.is_empty() {
            println!("Average goals per game: undefined (no games)");
        } else {
            println!(
                "Average goals per game: {:.2}",
                queries::average_goals_by_total(&games)
            );
            println!(
                "Average goals per game: {:.2}",
                queries::mean_goals_per_game(&games)
            );
        }
        println!();

        println!(
            "{} won {} games at home",
            season.focus_team,
            queries::home_wins_for(&games, &season.focus_team)
        );
        println!();

        match queries::fewest_goals_by_sort(&games) {
            Some(game) => println!("Game with the least number of goals: {}", game),
            None => println!("Game with the least number of goals: none"),
        }
        match queries::fewest_goals_by_min(&games) {
            Some(game) => println!("Game with least number of goals: {}", game),
            None => println!("Game with least number of goals: none"),
        }
        println!();

        println!(
            "Distinct starting times: {}",
            queries::distinct_kickoff_times(&games)
        );
        println!();

        let routed = queries::has_away_rout(&games, &season.focus_team);
        println!(
            "{} won away game with at least 2 goals difference: {}",
            season.focus_team,
            if routed { "yes" } else { "no" }
        );
        println!();

        for game in queries::season_games_by_home_team(&games, &season.year) {
            println!("{}", game);
        }

        Ok(())
    }

    pub fn games(config: &Config, csv: Option<String>) -> Result<()> {
        let path = csv.unwrap_or_else(|| config.data.csv_path.clone());
        for game in loader::load_matches(&path)? {
            println!("{}", game);
        }
        Ok(())
    }

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        std::fs::create_dir_all("data")?;
        println!("Created data/ directory");

        println!("\nNext steps:");
        println!("  1. Edit {} to customize settings", config_path);
        println!("  2. Put the season results at {}", config.data.csv_path);
        println!("  3. Run 'matchday report'");
        Ok(())
    }
}
