use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dispatch_clock::display::{parse_display_timezone, system_timezone};
use dispatch_clock::{
    BusinessTimeConfig, ConfigStore, DeliveryQuote, Instant, format_countdown, format_for_display,
};

const CONFIG_ENV: &str = "DISPATCH_CLOCK_CONFIG";

#[derive(Debug, Clone, Parser)]
#[command(about = "Next order cutoff and estimated delivery date")]
struct Args {
    /// Business time config (YAML). Falls back to $DISPATCH_CLOCK_CONFIG, then built-in defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Instant to quote for, RFC 3339. Defaults to now.
    #[arg(long, value_parser = parse_instant)]
    pub at: Option<Instant>,

    /// IANA zone to render dates in. Defaults to the host zone.
    #[arg(long)]
    pub display_tz: Option<String>,

    #[arg(long)]
    pub json: bool,
}

fn parse_instant(raw: &str) -> Result<Instant> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("invalid RFC 3339 instant: {raw}"))?;

    Ok(parsed.with_timezone(&Utc))
}

fn load_config(args: &Args) -> Result<BusinessTimeConfig> {
    let path = args
        .config
        .clone()
        .or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from));

    match path {
        Some(path) => {
            info!(path = %path.display(), "loading business time config");
            BusinessTimeConfig::from_file(&path)
        }
        None => {
            info!("no config given; using built-in business time defaults");
            Ok(BusinessTimeConfig::default())
        }
    }
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("dispatch_clock=info".parse()?)
                .add_directive("dispatch_clock::calendar=warn".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = ConfigStore::new(load_config(&args).context("business time config is invalid")?);

    let display_tz = match &args.display_tz {
        Some(name) => parse_display_timezone(name)?,
        None => system_timezone(),
    };

    let now = args.at.unwrap_or_else(Utc::now);
    let quote = store.quote(now);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    print_quote(&quote, &store.snapshot(), display_tz);

    Ok(())
}

fn print_quote(quote: &DeliveryQuote, config: &BusinessTimeConfig, display_tz: chrono_tz::Tz) {
    let delivery = format_for_display(quote.delivery, display_tz);

    if quote.long_window {
        println!("Order now, estimated delivery by {delivery}");
    } else {
        println!(
            "Order within {} to get it by {delivery}",
            format_countdown(quote.until_cutoff)
        );
    }

    let business_tz = config.timezone();
    println!(
        "cutoff:   {} ({})",
        quote.cutoff.with_timezone(&business_tz).format("%a %Y-%m-%d %H:%M %Z"),
        business_tz.name()
    );
    println!(
        "delivery: {} ({})",
        quote.delivery.with_timezone(&business_tz).format("%a %Y-%m-%d %H:%M %Z"),
        business_tz.name()
    );
}
