//! Builds a `wallet_sendCalls` request carrying the `dataCallback` capability
//! and prints it as JSON, ready to hand to a wallet provider.

use clap::Parser;
use data_callback_types::{
    build_data_callback, build_send_calls, default_callback_url, Call, DataField, FieldSelection,
};

#[derive(Parser, Debug)]
#[command(name = "data-callback-request", about = "Build a dataCallback wallet_sendCalls request")]
struct Args {
    /// Field to request (email, phoneNumber, physicalAddress, name, onchainAddress).
    #[arg(long = "field", value_name = "FIELD")]
    fields: Vec<DataField>,

    /// Field the user may decline. Implies `--field`.
    #[arg(long = "optional", value_name = "FIELD")]
    optional: Vec<DataField>,

    /// Include a callbackURL so the wallet validates data with our server.
    #[arg(long)]
    callback: bool,

    /// Origin the callback server is reachable on.
    #[arg(long, default_value = "http://localhost:3040")]
    origin: String,

    #[arg(long, default_value = "0x14a34")]
    chain_id: String,

    /// `wallet_sendCalls` version.
    #[arg(long = "calls-version", default_value = "1.0")]
    calls_version: String,

    #[arg(long, default_value = "0x0000000000000000000000000000000000000000")]
    to: String,

    #[arg(long, default_value = "0x")]
    data: String,
}

fn selection(args: &Args) -> Vec<FieldSelection> {
    DataField::ALL
        .into_iter()
        .map(|field| {
            let optional = args.optional.contains(&field);
            FieldSelection {
                field,
                selected: optional || args.fields.contains(&field),
                optional,
            }
        })
        .collect()
}

fn run(args: &Args) -> Result<serde_json::Value, data_callback_types::CallbackError> {
    let callback_url = if args.callback {
        Some(default_callback_url(&args.origin)?)
    } else {
        None
    };
    let capability = build_data_callback(&selection(args), callback_url)?;
    let calls = [Call {
        to: args.to.clone(),
        data: args.data.clone(),
        value: None,
    }];
    Ok(build_send_calls(
        &calls,
        &args.chain_id,
        &args.calls_version,
        &capability,
    ))
}

fn main() {
    let args = Args::parse();
    let request = run(&args).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    match serde_json::to_string_pretty(&request) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("failed to encode request: {e}");
            std::process::exit(1);
        }
    }
}
