#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Error;
use balance_gate::{config::Config, Gate};
use env_logger::{Builder, Env};
use log::{error, info};
use std::io;
use structopt::StructOpt;

mod api;
mod connectivity;
mod console;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Balance gate params",
    about = "Ethereum and Solana balance lookups over HTTP or the console."
)]
struct Opt {
    /// Set logging level
    #[structopt(short, long, default_value = "warn")]
    log: String,

    /// Set IP address
    #[structopt(long, short, default_value = "127.0.0.1")]
    ip: String,

    /// Set port number
    #[structopt(long, short, default_value = "8080")]
    port: u16,

    #[structopt(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Look up a single balance interactively
    Cli,
    /// Check that the Ethereum node answers
    Ping,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let opt = Opt::from_args();

    Builder::from_env(Env::default().default_filter_or(&opt.log)).init();

    if let Err(e) = try_main(opt).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn try_main(opt: Opt) -> Result<(), Error> {
    // A missing endpoint stops the process before anything is served.
    let config = Config::from_env()?;
    info!("WEB3_PROVIDER_URL: {}", config.web3_provider_url);
    info!("SOLANA_PROVIDER_URL: {}", config.solana_provider_url);

    let gate = Gate::connect(&config)?;

    match opt.cmd.unwrap_or(Command::Serve) {
        Command::Serve => serve(gate, &opt.ip, opt.port).await,
        Command::Cli => {
            let stdin = io::stdin();

            console::run(&gate, &mut stdin.lock(), &mut io::stdout())
                .await
                .map_err(Error::msg)
        }
        Command::Ping => {
            if connectivity::ping(&gate, &mut io::stdout()).await? {
                Ok(())
            } else {
                Err(Error::msg("Ethereum node is not reachable"))
            }
        }
    }
}

async fn serve(gate: Gate, ip: &str, port: u16) -> Result<(), Error> {
    connectivity::check(&gate, &mut io::stdout()).await?;

    let gate = web::Data::new(gate);

    info!("Listening on http://{}:{}", ip, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(gate.clone())
            .configure(api::router::configure)
    })
    .bind((ip, port))
    .map_err(Error::msg)?
    .run()
    .await
    .map_err(Error::msg)
}
