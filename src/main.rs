use anyhow::{Context, Result};
use calcpad::calculator::{CalculatorState, DisplayState, copy_display};
use calcpad::config::{Config, OutputFormat};
use calcpad::keypad::{self, KEYPAD_LAYOUT};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "calcpad")]
#[command(about = "Four-function keypad calculator", version)]
struct Cli {
    /// Key scripts to apply in order, e.g. "10-4=*2="
    scripts: Vec<String>,

    /// Read key scripts from stdin, one per line
    #[arg(short, long)]
    interactive: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the display after every key
    #[arg(short, long)]
    trace: bool,

    /// Copy the final display to the clipboard
    #[arg(long)]
    copy: bool,

    /// Config file (default: <config dir>/calcpad/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the keypad layout and exit
    #[arg(long)]
    keypad: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "calcpad=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.trace |= cli.trace;
    config.copy_result |= cli.copy;

    if cli.keypad {
        for row in KEYPAD_LAYOUT {
            println!("{}", row.join(" "));
        }
        return Ok(());
    }

    let mut out = io::stdout().lock();
    let mut session = Session::new(config);

    if cli.interactive || cli.scripts.is_empty() {
        info!("reading key scripts from stdin");
        session.run_lines(io::stdin().lock(), &mut out)?;
    } else {
        session.run_scripts(&cli.scripts, &mut out)?;
    }

    if session.config.copy_result {
        copy_display(session.state.display()).context("Failed to copy result")?;
    }

    Ok(())
}

/// One calculator session driven by key scripts.
struct Session {
    config: Config,
    state: CalculatorState,
}

impl Session {
    fn new(config: Config) -> Self {
        Self {
            config,
            state: CalculatorState::new(),
        }
    }

    /// Apply every script, then print the final display.
    fn run_scripts(&mut self, scripts: &[String], out: &mut impl Write) -> Result<()> {
        for script in scripts {
            self.run_script(script, out)?;
        }
        if !self.config.trace {
            self.print(out)?;
        }
        Ok(())
    }

    /// Apply one script per input line, printing the display after each.
    fn run_lines(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read stdin")?;
            match self.run_script(&line, out) {
                Ok(()) if !self.config.trace => self.print(out)?,
                Ok(()) => {}
                // A typo on one line should not end the session.
                Err(e) => warn!("{:#}", e),
            }
        }
        Ok(())
    }

    fn run_script(&mut self, script: &str, out: &mut impl Write) -> Result<()> {
        let events = keypad::tokenize(script)
            .with_context(|| format!("Invalid key script {:?}", script))?;

        for event in &events {
            self.state = self.state.apply(event);
            if self.config.trace {
                self.print(out)?;
            }
        }
        Ok(())
    }

    fn print(&self, out: &mut impl Write) -> Result<()> {
        render(self.state.display(), self.config.format, out)
    }
}

fn render(display: &DisplayState, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            if !display.full_expression.is_empty() {
                writeln!(out, "{}", display.full_expression)?;
            }
            writeln!(out, "{}", display.current_input)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, display).context("Failed to encode display")?;
            writeln!(out)?;
        }
    }
    Ok(())
}
