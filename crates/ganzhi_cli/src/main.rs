use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ganzhi_base::{
    MonthStemRule, Pillar, day_pillar, hour_pillar, month_pillar_with_rule,
    traditional_month_index, year_pillar,
};
use ganzhi_chart::{
    ChartConfig, ChartReading, ChartRecord, calculate_bazi_chart_with, day_master_display,
    four_pillars_display, strategic_context, technical_summary, transit_pillar, zodiac_display,
};
use ganzhi_time::{CivilDate, ClockTime};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ganzhi", about = "Four Pillars (Bazi) calculator")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart with technical summary
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:mm), optional
        #[arg(long)]
        time: Option<String>,
        /// Read the transit as of this date instead of the local clock
        #[arg(long)]
        today: Option<String>,
        /// Print the persistable record as JSON
        #[arg(long)]
        json: bool,
        /// TOML file with balance weights and month-stem rule
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Long-form strategic context for a chart
    Context {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:mm), optional
        #[arg(long)]
        time: Option<String>,
        /// Read the transit as of this date instead of the local clock
        #[arg(long)]
        today: Option<String>,
        /// TOML file with balance weights and month-stem rule
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Year pillar for a date (Lichun boundary)
    Year {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Month pillar for a date
    Month {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Month-stem rule: offset (default) or classical
        #[arg(long, default_value = "offset")]
        rule: String,
    },
    /// Day pillar for a date
    Day {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Hour pillar for a date and clock time
    Hour {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Clock time (HH:mm)
        #[arg(long)]
        time: String,
    },
    /// Year transit for today or a given date
    Transit {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(s: &str) -> CivilDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn parse_time(s: &str) -> ClockTime {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid time: {e}");
        std::process::exit(1);
    })
}

fn parse_rule(s: &str) -> MonthStemRule {
    match s.to_ascii_lowercase().as_str() {
        "offset" => MonthStemRule::Offset,
        "classical" => MonthStemRule::Classical,
        _ => {
            eprintln!("Invalid month-stem rule: {s}");
            eprintln!("Valid: offset (default), classical");
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&Path>) -> ChartConfig {
    let Some(path) = path else {
        return ChartConfig::default();
    };
    let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read config {}: {e}", path.display());
        std::process::exit(1);
    });
    let config = ChartConfig::from_toml_str(&text).unwrap_or_else(|e| {
        eprintln!("Invalid config {}: {e}", path.display());
        std::process::exit(1);
    });
    debug!(path = %path.display(), ?config, "loaded config");
    config
}

fn build_reading(
    date: &str,
    time: Option<&str>,
    today: Option<&str>,
    config: Option<&Path>,
) -> ChartReading {
    let config = load_config(config);
    let today = today.map_or_else(CivilDate::today, parse_date);
    calculate_bazi_chart_with(date, time, today, &config).unwrap_or_else(|e| {
        eprintln!("Chart failed: {e}");
        std::process::exit(1);
    })
}

fn print_pillar(kind: &str, p: Pillar) {
    println!("{kind} pillar: {p} ({})", p.english());
    let (stem, branch) = (p.stem(), p.branch());
    println!(
        "  Stem:   {} {} ({} {})",
        stem.hanzi(),
        stem.pinyin(),
        p.stem_element().name(),
        p.polarity().name()
    );
    println!(
        "  Branch: {} {} ({})",
        branch.hanzi(),
        branch.pinyin(),
        p.branch_element().name()
    );
    if let Some(n) = p.sexagenary_index() {
        println!("  Cycle:  {}/60", n + 1);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Chart {
            date,
            time,
            today,
            json,
            config,
        } => {
            let reading =
                build_reading(&date, time.as_deref(), today.as_deref(), config.as_deref());
            if json {
                let record = ChartRecord::from(&reading.chart);
                match serde_json::to_string_pretty(&record) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Failed to serialize chart: {e}");
                        std::process::exit(1);
                    }
                }
                return;
            }
            let c = &reading.chart;
            match c.birth_time {
                Some(t) => println!("Birth:        {} {t}", c.birth_date),
                None => println!("Birth:        {}", c.birth_date),
            }
            println!("Four Pillars: {}", four_pillars_display(c));
            println!("Day Master:   {}", day_master_display(c));
            println!("Zodiac:       {}", zodiac_display(c));
            println!();
            println!("{}", technical_summary(&reading));
        }
        Commands::Context {
            date,
            time,
            today,
            config,
        } => {
            let reading =
                build_reading(&date, time.as_deref(), today.as_deref(), config.as_deref());
            print!("{}", strategic_context(&reading));
        }
        Commands::Year { date } => {
            let d = parse_date(&date);
            let p = year_pillar(d.year(), d.month(), d.day());
            print_pillar("Year", p);
            let animal = p.branch().animal();
            println!("  Zodiac: {} {}", animal.hanzi(), animal.name());
        }
        Commands::Month { date, rule } => {
            let d = parse_date(&date);
            let rule = parse_rule(&rule);
            let idx = traditional_month_index(d.month(), d.day());
            print_pillar("Month", month_pillar_with_rule(d.year(), d.month(), d.day(), rule));
            println!("  Month:  {} of 12", idx + 1);
        }
        Commands::Day { date } => {
            let d = parse_date(&date);
            print_pillar("Day", day_pillar(d.year(), d.month(), d.day()));
            println!("  JDN:    {}", d.jdn());
        }
        Commands::Hour { date, time } => {
            let d = parse_date(&date);
            let t = parse_time(&time);
            let day = day_pillar(d.year(), d.month(), d.day());
            print_pillar("Hour", hour_pillar(day.stem_index(), t.hour()));
        }
        Commands::Transit { date } => {
            let d = date.as_deref().map_or_else(CivilDate::today, parse_date);
            let p = transit_pillar(d);
            println!("Transit as of {d}:");
            print_pillar("Year", p);
        }
    }
}
