use ecc_ref::config::get_config;
use ecc_ref::{run, Error};
use ecc_ref_core::signer::Bip340Signer;

use std::process::exit;

fn main() {
    let _ = env_logger::try_init();

    let settings = match get_config() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}", Error::from(err));
            exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(std::env::args_os(), &settings, &Bip340Signer, &mut out) {
        if err.is_help_request() {
            println!("{}", err);
        } else {
            eprintln!("{}", err);
        }
        exit(1);
    }
}
