//! whatif - download what-if articles and convert them to Markdown.
//!
//! Writes `{num}-{title}-{timestamp}.html` and `.md` files for the requested
//! article (the newest one by default), or for every article with `--all`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use rs_whatif::writer::{now_at_offset, save_article, DEFAULT_UTC_OFFSET_HOURS};
use rs_whatif::{convert_archive, fetch_and_convert, ArticleOutput, Error, HttpFetcher, Options};

#[derive(Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "whatif")]
#[command(version)]
#[command(about = "Download what-if articles and convert them to Markdown", long_about = None)]
struct Cli {
    /// Article number (the newest article when omitted)
    number: Option<u32>,

    /// Convert every article, from the newest down to #1
    #[arg(long, conflicts_with = "number")]
    all: bool,

    /// Log progress information
    #[arg(short, long)]
    verbose: bool,

    /// Use the platform line ending instead of LF in written files
    #[arg(long)]
    native_newline: bool,

    /// Do not download referenced pages; use a placeholder title instead
    #[arg(long)]
    no_titles: bool,

    /// Indent multi-paragraph footnotes with four spaces instead of the '<-->' token
    #[arg(long)]
    spaces: bool,

    /// Timeout for every network request, in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Directory the output files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the conversion result as JSON on stdout instead of writing files
    #[arg(long)]
    json: bool,

    /// Offset from UTC of the timestamp in file names, in hours
    #[arg(long, default_value_t = DEFAULT_UTC_OFFSET_HOURS, allow_hyphen_values = true)]
    utc_offset: i32,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            use_indent_workaround_token: !self.spaces,
            skip_reference_title_lookup: self.no_titles,
            timeout_secs: self.timeout,
            ..Options::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("whatif: {err}");
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    let config = ConfigBuilder::new()
        .add_filter_ignore_str("html5ever")
        .add_filter_ignore_str("selectors")
        .build();
    if let Err(err) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("whatif: cannot initialize logging: {err}");
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = cli.options();
    let fetcher = HttpFetcher::new(Duration::from_secs(options.timeout_secs))?;

    if cli.all {
        let count = convert_archive(&options, &fetcher, |output| emit(cli, &output))?;
        info!("Converted {count} articles");
        Ok(())
    } else {
        let output = fetch_and_convert(cli.number, &options, &fetcher)?;
        emit(cli, &output)
    }
}

fn emit(cli: &Cli, output: &ArticleOutput) -> Result<(), Error> {
    for warning in &output.warnings {
        info!("#{}: {warning}", output.number);
    }

    if cli.json {
        let json = serde_json::to_string_pretty(output).map_err(std::io::Error::from)?;
        println!("{json}");
        return Ok(());
    }

    let files = save_article(
        &cli.out_dir,
        output,
        &now_at_offset(cli.utc_offset),
        cli.native_newline,
    )?;
    println!("{}", files.markdown.display());
    Ok(())
}
