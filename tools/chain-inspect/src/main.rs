//! chain-inspect: build a secured chain from the command line, optionally
//! tamper with it out-of-band, and print the integrity report as JSON.
//!
//! ```text
//! chain-inspect --digest sha256 --tamper 1=evil alpha beta gamma
//! ```
//!
//! Exit status is 0 for a valid chain and 2 when tampering is detected.

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use secured_list::{
    Blake3Digest, DigestFunction, ListConfig, SecuredList, Sha256Digest, SipDigest,
};

/// Build, tamper with, and verify a secured chain
#[derive(Parser, Debug)]
#[command(name = "chain-inspect")]
#[command(about = "Build a tamper-evident chain and report its integrity")]
struct Args {
    /// Digest function used for every node
    #[arg(short, long, value_enum, default_value_t = DigestKind::Blake3)]
    digest: DigestKind,

    /// Out-of-band value overwrite applied after building, as INDEX=VALUE
    #[arg(short, long = "tamper", value_name = "INDEX=VALUE")]
    tampers: Vec<Tamper>,

    /// Log level when RUST_LOG / SC_LOG_LEVEL are unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Values, head first
    values: Vec<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DigestKind {
    Blake3,
    Sha256,
    /// Non-cryptographic placeholder
    Sip,
}

impl DigestKind {
    fn build(self) -> Box<dyn DigestFunction> {
        match self {
            DigestKind::Blake3 => Box::new(Blake3Digest::new()),
            DigestKind::Sha256 => Box::new(Sha256Digest),
            DigestKind::Sip => Box::new(SipDigest),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Tamper {
    index: usize,
    value: String,
}

impl FromStr for Tamper {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((index, value)) = s.split_once('=') else {
            bail!("expected INDEX=VALUE, got '{}'", s);
        };
        let index = index
            .trim()
            .parse()
            .with_context(|| format!("invalid tamper index '{}'", index))?;
        Ok(Self {
            index,
            value: value.to_string(),
        })
    }
}

fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("SC_LOG_LEVEL"))
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn build_chain(args: &Args, config: ListConfig) -> Result<SecuredList<Box<dyn DigestFunction>>> {
    let mut list = SecuredList::with_config(args.digest.build(), config);
    for value in args.values.iter().rev() {
        list.add(value.as_str());
    }
    info!("Built chain of {} nodes with {:?}", list.len(), args.digest);

    for tamper in &args.tampers {
        let Some(node) = list.get_mut(tamper.index) else {
            bail!(
                "tamper index {} is past the end of a {}-node chain",
                tamper.index,
                args.values.len()
            );
        };
        *node.raw_value_mut() = tamper.value.clone().into_bytes();
        info!("Overwrote node {} out-of-band", tamper.index);
    }

    Ok(list)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let config = ListConfig::from_env()?;
    let list = build_chain(&args, config)?;
    let report = list.verify();

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if report.chain_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
