use anyhow::Context;
use clap::Parser;
use log::info;
use std::io::Write;
use std::path::PathBuf;
use storefront::{Catalog, Clock, FixedClock, RenderConfig, SystemClock, TextSnapshot};

/// Render the Transaction App storefront page as HTML.
#[derive(Parser, Debug)]
#[command(name = "storefront", version, about)]
struct Cli {
    /// JSON catalog (array of items, or {"items": [...]}); defaults to the built-in product
    #[arg(long, value_name = "PATH", conflicts_with = "empty")]
    catalog: Option<PathBuf>,

    /// Render the page with no cards
    #[arg(long)]
    empty: bool,

    /// Write output here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Application name shown in header and footer
    #[arg(long, default_value = "Transaction App")]
    app_name: String,

    /// Document language
    #[arg(long, default_value = "en")]
    lang: String,

    /// Document title (defaults to the application name)
    #[arg(long)]
    title: Option<String>,

    /// Stylesheet href to link from the document head
    #[arg(long, value_name = "HREF")]
    stylesheet: Option<String>,

    /// Pin the footer year instead of reading the system clock
    #[arg(long)]
    year: Option<i32>,

    /// Emit only the layout shell, without <html>/<head>
    #[arg(long, conflicts_with = "text")]
    fragment: bool,

    /// Emit a plain-text snapshot instead of HTML
    #[arg(long)]
    text: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

impl Cli {
    fn config(&self) -> RenderConfig {
        RenderConfig {
            app_name: self.app_name.clone(),
            lang: self.lang.clone(),
            title: self.title.clone(),
            stylesheet: self.stylesheet.clone(),
        }
    }

    fn catalog(&self) -> anyhow::Result<Catalog> {
        Ok(match (&self.catalog, self.empty) {
            (Some(path), _) => Catalog::load(path)
                .with_context(|| format!("loading catalog {}", path.display()))?,
            (None, true) => Catalog::empty(),
            (None, false) => Catalog::builtin(),
        })
    }

    fn clock(&self) -> Box<dyn Clock> {
        match self.year {
            Some(year) => Box::new(FixedClock(year)),
            None => Box::new(SystemClock::new()),
        }
    }
}

/// Everything the CLI would print, given its arguments.
fn render_output(cli: &Cli) -> anyhow::Result<String> {
    let config = cli.config();
    config.validate()?;
    let catalog = cli.catalog()?;
    let clock = cli.clock();

    if cli.fragment {
        return Ok(storefront::render_page(&config, &catalog, clock.as_ref()).into_string());
    }
    let html = storefront::render_document(&config, &catalog, clock.as_ref());
    if cli.text {
        Ok(TextSnapshot::from_html(&html)?.to_string())
    } else {
        Ok(html)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let output = render_output(cli)?;

    match &cli.out {
        Some(path) => {
            std::fs::write(path, output.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {} bytes to {}", output.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{}", output)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(&cli) {
        eprintln!("storefront: {:#}", e);
        std::process::exit(1);
    }
}
