use std::path::Path;

use clap::{App, Arg, ArgMatches};
use failure::{err_msg, Error};

use crate::engine;
use crate::reference::Sex;
use crate::units;

const MIN_AGE: u32 = 0;
const MAX_AGE: u32 = 18;
const MIN_HEIGHT_CM: f64 = 30.0;
const MAX_HEIGHT_CM: f64 = 200.0;

#[derive(PartialEq, Debug, Clone)]
pub struct GrowthProjectionArgs {
    pub reference_file: String,
    pub query: engine::ProjectionQuery,
    pub chart: bool,
    pub graphite_server: Option<String>,
    pub graphite_port: Option<u16>,
    pub graphite_prefix: Option<String>,
    pub prometheus_listen: Option<String>,
    pub influxdb_write_url: Option<String>,
    pub influxdb_tags: Option<String>,
    pub quiet: bool,
}

pub fn parse_args<T>(args: T) -> Result<GrowthProjectionArgs, Error>
where
    T: IntoIterator<Item = String>,
{
    let app = App::new("Growth Projection")
        .author(crate_authors!())
        .version(crate_version!())
        .after_help(crate_description!())
        .arg(
            Arg::with_name("sex")
                .value_name("SEX")
                .short("s")
                .long("sex")
                .help("Selects the reference dataset")
                .possible_values(&["male", "female"])
                .takes_value(true)
                .default_value("male"),
        )
        .arg(
            Arg::with_name("age")
                .value_name("YEARS")
                .short("a")
                .long("age")
                .help("Current age in whole years (0-18)")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("target-age")
                .value_name("YEARS")
                .short("t")
                .long("target-age")
                .help("Age to project the height to, in whole years (0-18)")
                .takes_value(true)
                .default_value("15"),
        )
        .arg(
            Arg::with_name("height")
                .value_name("CM")
                .long("height")
                .help("Current height in centimeters (30-200)")
                .takes_value(true)
                .conflicts_with("feet"),
        )
        .arg(
            Arg::with_name("feet")
                .value_name("FEET")
                .long("feet")
                .help("Current height, feet part (1-8)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("inches")
                .value_name("INCHES")
                .long("inches")
                .help("Current height, inches part (0-11.9)")
                .takes_value(true)
                .requires("feet"),
        )
        .arg(
            Arg::with_name("reference-dir")
                .value_name("DIR")
                .long("reference-dir")
                .help("Directory containing growthmale.csv and growthfemale.csv")
                .takes_value(true)
                .default_value("data"),
        )
        .arg(
            Arg::with_name("reference")
                .value_name("FILE")
                .long("reference")
                .help("Reference data file (CSV with Age and Height columns, may be gzipped)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("chart")
                .long("chart")
                .help("Also output the 5th, 50th and 95th percentile for every age"),
        )
        .arg(
            Arg::with_name("graphite-server")
                .value_name("GRAPHITE_SERVER")
                .long("graphite-server")
                .help("Send values to this Graphite server")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("graphite-port")
                .value_name("GRAPHITE_PORT")
                .long("graphite-port")
                .takes_value(true)
                .default_value("2003"),
        )
        .arg(
            Arg::with_name("graphite-prefix")
                .value_name("GRAPHITE_PREFIX")
                .long("graphite-prefix")
                .help("Prefix for Graphite key, e.g. 'clinics.north'")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("prometheus-listen")
                .value_name("BINDING_ADDRESS")
                .long("prometheus-listen")
                .help(
                    "Address and port to bind Prometheus HTTP server to, e.g. 'localhost:9898'",
                )
                .takes_value(true),
        )
        .arg(
            Arg::with_name("influxdb-write-url")
                .value_name("INFLUXDB_WRITE_URL")
                .long("influxdb-write-url")
                .help(
                    "base URL of InfluxDB to send values to, e.g. \
                   'http://localhost:8086/write?db=mydb'",
                )
                .takes_value(true),
        )
        .arg(
            Arg::with_name("influxdb-tags")
                .value_name("INFLUXDB_TAGS")
                .long("influxdb-tags")
                .help("tags for the submitted measurement, e.g. 'clinic=north'")
                .takes_value(true),
        )
        .arg(Arg::with_name("quiet").short("q").long("quiet").help(
            "Don't output results to stdout",
        ))
        .get_matches_from_safe(args)?;

    let sex: Sex = match app.value_of("sex").unwrap_or("male").parse() {
        Ok(sex) => sex,
        Err(err) => return Err(err_msg(format!("--sex: {}", err))),
    };

    let current_age = parse_age(&app, "age")?;
    let target_age = parse_age(&app, "target-age")?;
    let current_height = parse_height(&app)?;

    let reference_file = match app.value_of("reference") {
        Some(file) => String::from(file),
        None => Path::new(app.value_of("reference-dir").unwrap_or("data"))
            .join(sex.dataset_filename())
            .to_string_lossy()
            .into_owned(),
    };

    let graphite_port: Option<u16> = match app.value_of("graphite-port") {
        Some(value) => match value.parse() {
            Ok(value) => Some(value),
            Err(err) => {
                return Err(err_msg(format!(
                    "--graphite-port must be numeric ({})",
                    err
                )))
            }
        },
        None => None,
    };

    Ok(GrowthProjectionArgs {
        reference_file,
        query: engine::ProjectionQuery {
            sex,
            current_age,
            current_height,
            target_age,
        },
        chart: app.is_present("chart"),
        graphite_server: app.value_of("graphite-server").map(String::from),
        graphite_port,
        graphite_prefix: app.value_of("graphite-prefix").map(String::from),
        prometheus_listen: app.value_of("prometheus-listen").map(String::from),
        influxdb_write_url: app.value_of("influxdb-write-url").map(String::from),
        influxdb_tags: app.value_of("influxdb-tags").map(String::from),
        quiet: app.is_present("quiet"),
    })
}

fn parse_age(app: &ArgMatches, name: &str) -> Result<u32, Error> {
    let value = app.value_of(name).unwrap_or("");

    match value.parse::<u32>() {
        Ok(age) if age <= MAX_AGE => Ok(age),
        _ => Err(err_msg(format!(
            "--{} must be a whole number of years between {} and {} (got '{}')",
            name, MIN_AGE, MAX_AGE, value
        ))),
    }
}

fn parse_height(app: &ArgMatches) -> Result<f64, Error> {
    let height = match app.value_of("feet") {
        Some(feet) => {
            let feet: u32 = match feet.parse() {
                Ok(feet) if feet >= 1 && feet <= 8 => feet,
                _ => {
                    return Err(err_msg(format!(
                        "--feet must be a whole number between 1 and 8 (got '{}')",
                        feet
                    )))
                }
            };

            let inches_value = app.value_of("inches").unwrap_or("0");
            let inches: f64 = match inches_value.parse::<f64>() {
                Ok(inches) if inches >= 0.0 && inches <= 11.9 => inches,
                _ => {
                    return Err(err_msg(format!(
                        "--inches must be between 0 and 11.9 (got '{}')",
                        inches_value
                    )))
                }
            };

            let height = units::feet_inches_to_cm(feet, inches);
            info!("Converted {} ft {} in to {} cm", feet, inches, height);
            height
        }
        None => {
            let value = app.value_of("height").unwrap_or("140.0");
            match value.parse::<f64>() {
                Ok(height) if height.is_finite() => height,
                _ => {
                    return Err(err_msg(format!(
                        "--height must be numeric (got '{}')",
                        value
                    )))
                }
            }
        }
    };

    if height < MIN_HEIGHT_CM || height > MAX_HEIGHT_CM {
        return Err(err_msg(format!(
            "height must be between {} and {} cm (got {})",
            MIN_HEIGHT_CM, MAX_HEIGHT_CM, height
        )));
    }

    Ok(height)
}
