use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use argmap::logging::init_tracing;
use argmap::{ArgContext, ArgMap};

/// Parse an argument vector and query flags from it.
#[derive(Parser, Debug)]
#[command(name = "argmap", version)]
struct Cli {
    /// Read FLAG as a boolean (DEFAULT: true, false, 1 or 0)
    #[arg(long = "bool", value_name = "FLAG[=DEFAULT]", allow_hyphen_values = true)]
    bools: Vec<String>,

    /// Read FLAG as a string
    #[arg(long = "string", value_name = "FLAG[=DEFAULT]", allow_hyphen_values = true)]
    strings: Vec<String>,

    /// Read FLAG as an integer
    #[arg(long = "int", value_name = "FLAG[=DEFAULT]", allow_hyphen_values = true)]
    ints: Vec<String>,

    /// Print the parsed argument map
    #[arg(long)]
    dump: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Fail on integer flags that are missing or not numbers
    #[arg(long)]
    strict: bool,

    /// Arguments to parse; the program name is prepended
    #[arg(last = true, value_name = "ARGS")]
    argv: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
struct Report {
    #[serde(rename = "bool", skip_serializing_if = "BTreeMap::is_empty")]
    bools: BTreeMap<String, bool>,
    #[serde(rename = "string", skip_serializing_if = "BTreeMap::is_empty")]
    strings: BTreeMap<String, String>,
    #[serde(rename = "int", skip_serializing_if = "BTreeMap::is_empty")]
    ints: BTreeMap<String, i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    args: Option<ArgMap>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let ctx = context_for(&cli.argv);
    let report = evaluate(&cli, &ctx)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

/// Parse `argv` as if it followed our own program name.
fn context_for(argv: &[String]) -> ArgContext {
    ArgContext::from_argv(std::iter::once("argmap").chain(argv.iter().map(String::as_str)))
}

/// Split a `FLAG[=DEFAULT]` query.
fn split_query(query: &str) -> (&str, Option<&str>) {
    match query.split_once('=') {
        Some((flag, default)) => (flag, Some(default)),
        None => (query, None),
    }
}

fn parse_bool_default(raw: &str) -> Result<bool> {
    match raw {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => bail!("Invalid boolean default '{}' (expected true, false, 1 or 0)", other),
    }
}

fn evaluate(cli: &Cli, ctx: &ArgContext) -> Result<Report> {
    let mut report = Report::default();

    for query in &cli.bools {
        let (flag, default) = split_query(query);
        let default = default.map(parse_bool_default).transpose()?.unwrap_or(false);
        report.bools.insert(flag.to_string(), ctx.get_bool_arg(flag, default));
    }

    for query in &cli.strings {
        let (flag, default) = split_query(query);
        report
            .strings
            .insert(flag.to_string(), ctx.get_arg(flag, default.unwrap_or("")));
    }

    for query in &cli.ints {
        let (flag, default) = split_query(query);
        let value = if cli.strict {
            ctx.snapshot().try_get_int_arg(flag)?
        } else {
            let default = default
                .map(|d| d.parse::<i64>())
                .transpose()
                .with_context(|| format!("Invalid integer default in '{}'", query))?
                .unwrap_or(0);
            ctx.get_int_arg(flag, default)
        };
        report.ints.insert(flag.to_string(), value);
    }

    if cli.dump {
        report.args = Some(ctx.snapshot());
    }

    Ok(report)
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for (flag, value) in &report.bools {
        out.push_str(&format!("{}={}\n", flag, value));
    }
    for (flag, value) in &report.strings {
        out.push_str(&format!("{}={}\n", flag, value));
    }
    for (flag, value) in &report.ints {
        out.push_str(&format!("{}={}\n", flag, value));
    }
    if let Some(args) = &report.args {
        for (key, value) in args.iter() {
            out.push_str(&format!("arg {}={:?}\n", key, value));
        }
    }
    out
}
