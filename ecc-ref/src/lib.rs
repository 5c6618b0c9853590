#![deny(clippy::dbg_macro)]
#![deny(clippy::all)]

pub mod command;
pub mod config;

use command::{strip_debug_flag, Command, Opt};
use config::Settings;
use ecc_ref_core::parse::{OutputMode, ParseError};
use ecc_ref_core::signer::{SchnorrSigner, SignError};

use log::debug;
use structopt::clap::{self, ErrorKind};
use structopt::StructOpt;
use thiserror::Error;

use std::ffi::OsString;
use std::io::Write;

#[derive(Error, Debug)]
pub enum Error {
    /// Usage errors (missing arguments, unknown subcommands) and help display.
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Sign(#[from] SignError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Help and version output travel through the error path but are not
    /// failures in themselves.
    pub fn is_help_request(&self) -> bool {
        matches!(
            self,
            Self::Usage(err)
                if err.kind == ErrorKind::HelpDisplayed || err.kind == ErrorKind::VersionDisplayed
        )
    }
}

/// Parses `args` (including the binary name), runs the selected operation
/// and writes its result to `out`.
pub fn run<I, T, W>(
    args: I,
    settings: &Settings,
    signer: &dyn SchnorrSigner,
    out: &mut W,
) -> Result<(), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let (args, debug) = strip_debug_flag(args);
    let opt = Opt::from_iter_safe(args)?;
    let mode = OutputMode::from_debug(debug || settings.debug);
    debug!("running {:?} with {:?} output", opt.command, mode);

    let output = match &opt.command {
        Command::Secp256k1(cmd) => Some(cmd.operation.execute(mode)?),
        Command::Schnorr(cmd) => cmd.operation.execute(signer, mode)?,
    };

    if let Some(output) = output {
        writeln!(out, "{}", output)?;
    }
    Ok(())
}
