// src/bin/poker_hand_cli.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use poker_hand::api::{handle_query, HandViewDto, Query, QueryResponse};
use poker_hand::eval::Winner;

#[derive(Parser, Debug, Clone)]
#[command(name = "poker_hand_cli", version, about = "Five-card poker hand evaluator", long_about = None)]
struct Cli {
    /// Печатать JSON вместо текста
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Уровень логирования
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Оценить руку, например "2H 2D 5S 5C KD"
    Describe { hand: String },
    /// Сравнить две руки
    Compare { left: String, right: String },
    /// Найти победителей среди нескольких рук
    Showdown {
        #[arg(required = true)]
        hands: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logging(level: LogLevel) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level.into(),
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("init logger")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level)?;

    let query = match cli.command {
        Commands::Describe { hand } => Query::Describe { hand },
        Commands::Compare { left, right } => Query::Compare { left, right },
        Commands::Showdown { hands } => Query::Showdown { hands },
    };

    let response = handle_query(&query)?;
    log::info!("query handled");

    if cli.json {
        let out = serde_json::to_string_pretty(&response).context("serialize response")?;
        println!("{out}");
        return Ok(());
    }

    match response {
        QueryResponse::Hand(view) => print_hand("Hand", &view),
        QueryResponse::Comparison(cmp) => {
            print_hand("Hand 1", &cmp.left);
            print_hand("Hand 2", &cmp.right);
            match cmp.winner {
                Winner::Left => println!("Result: Hand 1 wins"),
                Winner::Right => println!("Result: Hand 2 wins"),
                Winner::Tie => println!("Result: Tie"),
            }
        }
        QueryResponse::Showdown(sd) => {
            for (i, view) in sd.hands.iter().enumerate() {
                print_hand(&format!("Hand {}", i + 1), view);
            }
            let names: Vec<String> = sd.winners.iter().map(|i| format!("Hand {}", i + 1)).collect();
            println!("Winners: {}", names.join(", "));
        }
    }

    Ok(())
}

fn print_hand(title: &str, view: &HandViewDto) {
    println!("{title}: {} ({})", view.hand, view.category_name);
}
