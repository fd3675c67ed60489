//! Toggle a WeMo switch
//!
//! ```bash
//! cargo run --example toggle -- 192.168.1.42:49153
//! ```
//!
//! Falls back to the `WEMO_HOST` environment variable when no address is
//! given. Exit codes: 1 configuration error, 2 device unreachable, 3 device
//! replied unexpectedly.

use std::env;
use std::process;

use wemo_sdk::{ApiError, SdkError, Switch};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let switch = match env::args().nth(1) {
        Some(host) => Switch::new(host),
        None => match Switch::from_env() {
            Ok(switch) => switch,
            Err(e) => {
                eprintln!("{}", e);
                eprintln!("Supply a device address or set WEMO_HOST.");
                process::exit(1);
            }
        },
    };

    println!("Toggling device at {}", switch.host());

    match switch.toggle() {
        Ok(state) => println!("Device {} is now {}", switch.host(), state),
        Err(e) => exit_with(e),
    }
}

fn exit_with(error: SdkError) -> ! {
    eprintln!("{}", error);
    let code = match error {
        SdkError::MissingHost => 1,
        SdkError::Api(ApiError::Transport(_)) => 2,
        SdkError::Api(ApiError::UnexpectedResponse(_)) => 3,
    };
    process::exit(code);
}
