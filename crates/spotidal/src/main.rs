use clap::Parser;
use spotidal_config::{load_config_or_default, resolve_lookup_config};
use spotidal_core::{ConversionResult, LookupOutcome, MSG_SERVICE_UNAVAILABLE};
use spotidal_lookup::TidalConverter;
use tracing::{debug, error, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Every argument, flag-shaped or not, is collected so the arity check below
// sees exactly what was passed.
#[derive(Debug, Parser)]
#[command(name = "spotidal")]
#[command(
    version,
    about = "Convert a Spotify track URL to its Tidal equivalent",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Spotify track URL, e.g. https://open.spotify.com/track/4Km5HrUvYTaSUfiSGPJeQR
    #[arg(value_name = "SPOTIFY_URL", allow_hyphen_values = true, trailing_var_arg = true)]
    urls: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            debug!("argument parsing failed: {err}");
            report(&ConversionResult::missing_url())
        }
    };

    let [spotify_url] = cli.urls.as_slice() else {
        debug!(count = cli.urls.len(), "expected exactly one argument");
        report(&ConversionResult::missing_url())
    };

    let lookup = resolve_lookup_config(&load_config_or_default());
    let result = match TidalConverter::new(&lookup) {
        Ok(converter) => converter.convert(spotify_url).await,
        Err(err) => {
            warn!("{err}");
            TidalConverter::rejected(spotify_url).unwrap_or_else(|| {
                ConversionResult::from_outcome(
                    spotify_url.as_str(),
                    LookupOutcome::error(MSG_SERVICE_UNAVAILABLE),
                )
            })
        }
    };

    report(&result)
}

// stdout is reserved for the result line.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "error".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn report(result: &ConversionResult) -> ! {
    match serde_json::to_string(result) {
        Ok(line) => println!("{line}"),
        Err(err) => error!("failed to serialize result: {err}"),
    }
    std::process::exit(result.exit_code())
}
