use std::{
    collections::BTreeSet,
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "routefx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a navigation script and print one JSON line per sampled instant.
    Preview(PreviewArgs),
    /// Print the effective overlay configuration as JSON.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Navigation as `PATH@MILLIS` (repeatable), e.g. `--nav /@0 --nav /about@50`.
    #[arg(long = "nav", value_parser = parse_nav, required = true)]
    navs: Vec<(String, u64)>,

    /// Stop sampling at this instant (ms).
    #[arg(long, default_value_t = 1000)]
    until: u64,

    /// Sampling interval (ms).
    #[arg(long, default_value_t = 50)]
    step: u64,

    /// Overlay configuration JSON (defaults are used for missing keys).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Wipe style override (split_panels, diagonal_cut, radial_burst).
    #[arg(long)]
    style: Option<String>,

    /// Seed for particle fields.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Emit full layer trees instead of per-instant summaries.
    #[arg(long)]
    full: bool,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Overlay configuration JSON to validate and print.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Preview(args) => cmd_preview(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn parse_nav(s: &str) -> Result<(String, u64), String> {
    let (path, at) = s
        .rsplit_once('@')
        .ok_or_else(|| format!("expected PATH@MILLIS, got '{s}'"))?;
    let at = at
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("bad millis in '{s}': {e}"))?;
    Ok((path.to_string(), at))
}

fn read_config(path: Option<&Path>) -> anyhow::Result<routefx::OverlayConfig> {
    let Some(path) = path else {
        return Ok(routefx::OverlayConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    routefx::OverlayConfig::from_json_str(&s)
        .with_context(|| format!("parse config '{}'", path.display()))
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    if args.step == 0 {
        anyhow::bail!("--step must be > 0");
    }
    let mut cfg = read_config(args.config.as_deref())?;
    if let Some(style) = &args.style {
        cfg.style = routefx::parse_wipe_style(style)?;
    }

    let mut orch =
        routefx::Orchestrator::with_seed(cfg, routefx::VirtualTimers::new(), args.seed)?;

    let mut navs = args.navs.clone();
    navs.sort_by_key(|(_, at)| *at);
    let samples: BTreeSet<u64> = (0..=args.until).step_by(args.step as usize).collect();
    let instants: BTreeSet<u64> = samples
        .iter()
        .copied()
        .chain(navs.iter().map(|(_, at)| *at))
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut next_nav = 0;
    for t in instants {
        let now = routefx::Millis(t);
        orch.advance_to(now);
        while let Some((path, at)) = navs.get(next_nav) {
            if *at != t {
                break;
            }
            orch.observe_path(path, now);
            next_nav += 1;
        }
        if !samples.contains(&t) {
            continue;
        }

        let frame = orch.frame(now);
        let line = if args.full {
            serde_json::to_string(&frame)?
        } else {
            serde_json::json!({
                "t": t,
                "session": frame.session,
                "phase": frame.phase,
                "layers": frame.layers.len(),
                "covers_viewport": frame.covers_viewport(),
                "content": orch.content_motion(now),
            })
            .to_string()
        };
        writeln!(out, "{line}").context("write preview line")?;
    }
    Ok(())
}
