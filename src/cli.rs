use crate::board::{DEFAULT_BOARD_ID, list_board_variants, validate_catalog};
use crate::config::{Config, load_alias_file, load_config};
use crate::export::{ExportFormat, export_file_name, export_svg};
use crate::layout_dump::write_layout_dump;
use crate::legend::{format_legend, legend_entries};
use crate::pin_list::format_table;
use crate::render::write_output_svg;
use crate::session::Session;
use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "xiaopin",
    version,
    about = "Pinout diagrams for Seeed XIAO nRF52840 boards with custom pin aliases"
)]
pub struct Args {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available board variants
    Boards,
    /// Print pin categories and their colors
    Legend,
    /// Print the pin table of a board with its aliases
    Pins(AliasArgs),
    /// Render a board's pinout diagram
    Render(RenderArgs),
}

#[derive(ClapArgs, Debug)]
pub struct AliasArgs {
    /// Board id (see `xiaopin boards`)
    #[arg(short, long, default_value = DEFAULT_BOARD_ID)]
    pub board: String,

    /// Alias assignment, e.g. --alias p0_02="Sensor IN" (repeatable)
    #[arg(short, long = "alias", value_name = "PIN=TEXT")]
    pub aliases: Vec<String>,

    /// JSON/JSON5 file mapping pin ids to aliases
    #[arg(long = "aliases", value_name = "FILE")]
    pub alias_file: Option<PathBuf>,

    /// Discard all aliases applied so far before --alias assignments
    #[arg(long)]
    pub reset: bool,
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub aliases: AliasArgs,

    /// Output file. Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output", conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Directory to export into, using the standard export file name
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, themeVariables, render)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Also write the computed layout as JSON
    #[arg(long = "layout-json", value_name = "FILE")]
    pub layout_json: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Svg => ExportFormat::Svg,
            OutputFormat::Png => ExportFormat::Png,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    validate_catalog()?;

    match args.command {
        Command::Boards => {
            for board in list_board_variants() {
                println!(
                    "{:<14} {:<20} {} ({} pins)",
                    board.id, board.label, board.description, board.pin_count
                );
            }
        }
        Command::Legend => {
            print!("{}", format_legend(&legend_entries()));
        }
        Command::Pins(alias_args) => {
            let session = build_session(&alias_args)?;
            print!("{}", format_table(&session.rows()?));
        }
        Command::Render(render_args) => render(render_args)?,
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    // A second init in the same process (tests) is harmless.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn build_session(args: &AliasArgs) -> Result<Session> {
    let mut session = Session::with_board(&args.board)?;
    if let Some(path) = args.alias_file.as_deref() {
        for (pin, text) in load_alias_file(path)? {
            session
                .edit_alias(&pin, text)
                .with_context(|| format!("in alias file {}", path.display()))?;
        }
    }
    if args.reset {
        session.reset_aliases()?;
    }
    for assignment in &args.aliases {
        let (pin, text) = parse_assignment(assignment)?;
        session.edit_alias(pin, text)?;
    }
    debug!(board = session.active_board().id, "session ready");
    Ok(session)
}

fn parse_assignment(input: &str) -> Result<(&str, &str)> {
    let (pin, text) = input
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected PIN=TEXT, got `{input}`"))?;
    let pin = pin.trim();
    if pin.is_empty() {
        return Err(anyhow::anyhow!("missing pin id in `{input}`"));
    }
    Ok((pin, text))
}

fn render(args: RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let session = build_session(&args.aliases)?;
    let board_id = session.active_board().id;

    if let Some(path) = args.layout_json.as_deref() {
        write_layout_dump(path, board_id, &session.layout()?)?;
    }

    let svg = session.render(&config)?;
    let output = resolve_output(&args, &config, board_id);
    match args.output_format {
        OutputFormat::Svg => match (&args.out_dir, &output) {
            (Some(dir), _) => {
                let file = export_svg(&config.render.file_prefix, board_id, Some(&svg))
                    .ok_or_else(|| anyhow::anyhow!("nothing rendered"))?;
                file.write_into(dir)?;
            }
            (None, output) => {
                write_output_svg(&svg, output.as_deref())?;
                if let Some(path) = output {
                    info!(path = %path.display(), "wrote svg");
                }
            }
        },
        OutputFormat::Png => {
            let output = output
                .ok_or_else(|| anyhow::anyhow!("Output path required for png output"))?;
            write_png(&svg, &output, &config)?;
            info!(path = %output.display(), "wrote png");
        }
    }
    Ok(())
}

fn resolve_output(args: &RenderArgs, config: &Config, board_id: &str) -> Option<PathBuf> {
    if let Some(dir) = args.out_dir.as_deref() {
        return Some(dir.join(export_file_name(
            &config.render.file_prefix,
            board_id,
            args.output_format.into(),
        )));
    }
    args.output.clone()
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: &Path, config: &Config) -> Result<()> {
    crate::render::write_output_png(svg, output, &config.render)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &Path, _config: &Config) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}
