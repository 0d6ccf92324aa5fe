// SPDX-License-Identifier: MIT
//
// swatch — preview tool for the design-system color scales.
//
// Sits on top of swatch-palette (named colors, lightness levels, ramps,
// resolver), which in turn does its color math through swatch-color.
//
// Each requested color is resolved through one Resolver (so every scale is
// built once) and printed either as a row of truecolor swatches or as a
// JSON token map:
//
//   args → Cli → PaletteConfig → Resolver → rows / JSON → stdout
//
// A bare name prints the whole scale; a reference with a level
// (`primary.700`, `error/50`) prints that single step.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::warn;
use swatch_palette::{
    ColorReference, ConfigError, InvalidInputError, Lightness, NamedColor, PaletteConfig,
    ResolvedColor, Resolver, Revision, Scale,
};

// ─── Options ────────────────────────────────────────────────────────────────

/// Preview the design-system color scales.
#[derive(Debug, Parser)]
#[command(name = "swatch", version, about, long_about = None)]
struct Cli {
    /// Scale revision (`current` or `legacy`); overrides the config file.
    #[arg(long, value_name = "NAME", value_parser = Revision::from_str)]
    revision: Option<Revision>,

    /// Palette config (TOML) with base color overrides.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a JSON token map instead of swatches.
    #[arg(long)]
    json: bool,

    /// Colors to preview: `primary`, `error.50`, `white`, … (default: all).
    #[arg(value_name = "COLOR")]
    colors: Vec<String>,
}

// ─── Resolver setup ─────────────────────────────────────────────────────────

/// Load the config (if any) and let `--revision` take precedence over it.
fn build_resolver(cli: &Cli) -> Result<Resolver, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => PaletteConfig::load(path)?,
        None => PaletteConfig::default(),
    };
    if let Some(revision) = cli.revision {
        config.revision = revision;
    }
    config.to_resolver()
}

// ─── Requests ───────────────────────────────────────────────────────────────

/// One thing to print: a whole scale, or a single resolved reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Scale(NamedColor),
    Single(ColorReference),
}

impl Request {
    fn parse(arg: &str) -> Result<Self, InvalidInputError> {
        match arg.parse::<ColorReference>()? {
            ColorReference::Named {
                color,
                lightness: None,
            } => Ok(Self::Scale(color)),
            reference => Ok(Self::Single(reference)),
        }
    }
}

fn requests(colors: &[String]) -> Result<Vec<Request>, InvalidInputError> {
    if colors.is_empty() {
        return Ok(NamedColor::all().iter().map(|&c| Request::Scale(c)).collect());
    }
    colors
        .iter()
        .map(|arg| {
            Request::parse(arg).inspect_err(|e| warn!("cannot preview `{arg}`: {e}"))
        })
        .collect()
}

// ─── Output ─────────────────────────────────────────────────────────────────

/// A truecolor swatch cell: `reference` as background, readable text on top.
fn swatch_cell(resolver: &Resolver, reference: ColorReference, label: &str) -> String {
    let (r, g, b) = resolver.resolve(reference).channels();
    let (tr, tg, tb) = resolver.readable_text(reference).channels();
    format!("\x1b[48;2;{r};{g};{b}m\x1b[38;2;{tr};{tg};{tb}m {label:^9} \x1b[0m")
}

fn table_row(resolver: &Resolver, request: Request) -> String {
    match request {
        Request::Scale(color) => {
            let cells: String = resolver
                .scale(color)
                .iter()
                .map(|(level, resolved)| {
                    swatch_cell(resolver, ColorReference::at(color, level), &resolved.to_hex())
                })
                .collect();
            format!("{:<12}{cells}", color.name())
        }
        Request::Single(reference) => {
            let cell = swatch_cell(resolver, reference, &resolver.resolve(reference).to_hex());
            format!("{:<12}{cell}", reference.to_string())
        }
    }
}

/// Header line with the level numbers, then one row per request.
fn render_table(resolver: &Resolver, requests: &[Request]) -> String {
    let levels: String = Lightness::ALL
        .iter()
        .map(|level| format!(" {:^9} ", level.value()))
        .collect();
    let mut out = format!("{:<12}{levels}\n", resolver.palette().revision().name());
    for &request in requests {
        out.push_str(&table_row(resolver, request));
        out.push('\n');
    }
    out
}

/// `{ "primary": { "50": "#…", … }, "error.50": "#…" }`
#[derive(serde::Serialize)]
#[serde(untagged)]
enum Token {
    Scale(Scale),
    Single(ResolvedColor),
}

fn render_json(resolver: &Resolver, requests: &[Request]) -> serde_json::Result<String> {
    let tokens: BTreeMap<String, Token> = requests
        .iter()
        .map(|request| match *request {
            Request::Scale(color) => (color.name().to_string(), Token::Scale(resolver.scale(color))),
            Request::Single(reference) => {
                (reference.to_string(), Token::Single(resolver.resolve(reference)))
            }
        })
        .collect();
    serde_json::to_string_pretty(&tokens)
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("swatch: {message}");
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let resolver = build_resolver(&cli).unwrap_or_else(|e| fail(e));
    let requests = requests(&cli.colors).unwrap_or_else(|e| fail(e));

    let output = if cli.json {
        render_json(&resolver, &requests).unwrap_or_else(|e| fail(e))
    } else {
        render_table(&resolver, &requests)
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", output.trim_end()).and_then(|()| stdout.flush()) {
        fail(e);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
