#[macro_use]
extern crate log;
#[macro_use]
extern crate clap;
extern crate env_logger;

use std::io;
use std::net::TcpStream;
use std::process;

use chrono::Utc;
use failure::Error;

mod args;
mod chart;
mod cohort;
mod engine;
mod http_handler;
mod percentile;
mod reference;
mod render;
mod result;
mod units;

use crate::render::Renderer;

fn run(args: &args::GrowthProjectionArgs) -> Result<result::ProjectionResult, Error> {
    let rows = reference::open(&args.reference_file)?;
    let index = cohort::CohortIndex::from_rows(&rows)?;

    info!(
        "Reference data {} covers {} ages: {:?}",
        args.reference_file,
        index.len(),
        index.known_ages()
    );

    Ok(engine::project(&index, &args.query, args.chart))
}

fn render_result(args: &args::GrowthProjectionArgs, result: &result::ProjectionResult) {
    if !args.quiet {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        render::terminal::TerminalRenderer::new(&mut handle).render(result);
    }

    if let Some(ref graphite_server) = args.graphite_server {
        let port = args.graphite_port.unwrap_or(2003);

        match TcpStream::connect((graphite_server.as_str(), port)) {
            Ok(mut stream) => {
                render::graphite::GraphiteRenderer::new(
                    Utc::now(),
                    args.graphite_prefix.clone(),
                    &mut stream,
                ).render(result);
            }
            Err(err) => error!(
                "Could not connect to Graphite at {}:{}: {}",
                graphite_server, port, err
            ),
        }
    }

    if let Some(ref influxdb_write_url) = args.influxdb_write_url {
        render::influxdb::InfluxDbRenderer::new(
            influxdb_write_url.clone(),
            args.influxdb_tags.clone(),
        ).render(result);
    }
}

fn main() {
    env_logger::init();

    let args = match args::parse_args(std::env::args()) {
        Ok(args) => args,
        Err(err) => {
            if let Some(clap_error) = err.downcast_ref::<clap::Error>() {
                clap_error.exit();
            }
            error!("{}", err);
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if let Some(ref binding_address) = args.prometheus_listen {
        if let Err(err) = http_handler::listen_http(args.clone(), run, binding_address) {
            error!("{}", err);
            process::exit(1);
        }
        return;
    }

    match run(&args) {
        Ok(result) => render_result(&args, &result),
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
