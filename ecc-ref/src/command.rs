use ecc_ref_core::parse::{
    encode_point, encode_signature, parse_decimal, parse_hex, parse_points, OutputMode,
};
use ecc_ref_core::signer::SchnorrSigner;
use ecc_ref_core::{sum_points, AffinePoint, Scalar, Secp256k1};

use log::debug;
use structopt::clap::AppSettings;
use structopt::StructOpt;

use crate::Error;

use std::ffi::{OsStr, OsString};

pub const DEBUG_FLAG: &str = "--debug";

#[derive(StructOpt, Debug)]
#[structopt(
    name = "ecc-ref",
    about = "Elliptic curve cryptography reference implementation for secp256k1",
    after_help = "Results are printed as concatenated 64-character hex words. Passing --debug \
                  anywhere on the command line (or ECC_REF_DEBUG=true) prints labeled decimal \
                  values instead."
)]
pub struct Opt {
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(StructOpt, Debug)]
pub enum Command {
    /// Elliptic curve operations on the secp256k1 curve
    #[structopt(name = "secp256k1")]
    Secp256k1(Secp256k1Command),
    /// Schnorr signature operations
    #[structopt(name = "schnorr")]
    Schnorr(SchnorrCommand),
}

#[derive(StructOpt, Debug)]
pub struct Secp256k1Command {
    #[structopt(subcommand)]
    pub operation: CurveOperation,
}

#[derive(StructOpt, Debug)]
pub enum CurveOperation {
    /// Computes [scalar]G
    #[structopt(name = "scalarMultiplication", setting = AppSettings::AllowLeadingHyphen)]
    ScalarMultiplication {
        /// Scalar in base 10
        #[structopt(allow_hyphen_values = true)]
        scalar: String,
    },
    /// Sums a list of points given as x0 y0 x1 y1 ...
    #[structopt(name = "pointAddition", setting = AppSettings::AllowLeadingHyphen)]
    PointAddition {
        /// Point coordinates in base 10
        #[structopt(required = true, allow_hyphen_values = true)]
        coordinates: Vec<String>,
    },
}

#[derive(StructOpt, Debug)]
pub struct SchnorrCommand {
    #[structopt(subcommand)]
    pub operation: SchnorrOperation,
}

#[derive(StructOpt, Debug)]
pub enum SchnorrOperation {
    /// Signs a message hash
    #[structopt(name = "sign")]
    Sign {
        /// Private key in base 10
        private_key: String,
        /// Message hash in base 16, optionally 0x-prefixed
        message_hash: String,
    },
    /// Not implemented, does nothing
    #[structopt(name = "verify", setting = AppSettings::AllowLeadingHyphen)]
    Verify {
        #[structopt(hidden = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Not implemented, does nothing
    #[structopt(name = "recoverSigner", setting = AppSettings::AllowLeadingHyphen)]
    RecoverSigner {
        #[structopt(hidden = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

/// Removes every `--debug` argument and reports whether there was one.
///
/// The flag may appear anywhere, including between values that are allowed
/// to start with a hyphen, so it is taken out before clap sees the list.
pub fn strip_debug_flag<I, T>(args: I) -> (Vec<OsString>, bool)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let (flags, rest): (Vec<OsString>, Vec<OsString>) = args
        .into_iter()
        .map(Into::into)
        .partition(|arg| arg.as_os_str() == OsStr::new(DEBUG_FLAG));
    (rest, !flags.is_empty())
}

impl CurveOperation {
    /// Returns the encoded result, ready to be printed.
    pub fn execute(&self, mode: OutputMode) -> Result<String, Error> {
        match self {
            Self::ScalarMultiplication { scalar } => {
                let scalar = Scalar::new(parse_decimal(scalar)?);
                debug!("computing [{}]G", scalar);
                let point = AffinePoint::<Secp256k1>::mul_generator(&scalar);
                Ok(encode_point(&point, mode))
            }
            Self::PointAddition { coordinates } => {
                let points = parse_points::<Secp256k1, _>(coordinates.as_slice())?;
                let sum = sum_points(&points);
                debug!(
                    "summed {} points with {} additions",
                    points.len(),
                    sum.additions
                );
                Ok(encode_point(&sum.point, mode))
            }
        }
    }
}

impl SchnorrOperation {
    /// Returns the encoded result, or `None` for the operations that do not
    /// produce output.
    pub fn execute(
        &self,
        signer: &dyn SchnorrSigner,
        mode: OutputMode,
    ) -> Result<Option<String>, Error> {
        match self {
            Self::Sign {
                private_key,
                message_hash,
            } => {
                let private_key = parse_decimal(private_key)?;
                let message_hash = parse_hex(message_hash)?;
                let signature = signer.sign(&private_key, &message_hash)?;
                Ok(Some(encode_signature(&signature, mode)))
            }
            Self::Verify { .. } => {
                debug!("schnorr verify is not implemented");
                Ok(None)
            }
            Self::RecoverSigner { .. } => {
                debug!("schnorr recoverSigner is not implemented");
                Ok(None)
            }
        }
    }
}
