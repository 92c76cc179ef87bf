//! Predictor binary entry point

use std::time::Duration;

use clap::Parser;

use titanic_predictor::logging::init_tracing;
use titanic_predictor::services::{RealConfidenceEstimator, RealRemoteModel, DEFAULT_ENDPOINT};
use titanic_predictor::{PassengerRecord, Predictor};

#[derive(Parser)]
#[command(name = "titanic-predictor")]
#[command(about = "Survival prediction for a hypothetical Titanic passenger")]
struct Args {
    /// Passenger class (1, 2 or 3)
    #[arg(long, default_value_t = 3)]
    pclass: u8,

    /// Gender: male or female
    #[arg(long, default_value = "")]
    sex: String,

    /// Age in years
    #[arg(long, default_value_t = 25.0)]
    age: f64,

    /// Siblings/spouses aboard
    #[arg(long, default_value_t = 0)]
    sibsp: u32,

    /// Parents/children aboard
    #[arg(long, default_value_t = 0)]
    parch: u32,

    /// Ticket fare in dollars
    #[arg(long, default_value_t = 50.0)]
    fare: f64,

    /// Port of embarkation: C, Q or S
    #[arg(long, default_value = "")]
    embarked: String,

    /// Traveling alone (true/false)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    alone: bool,

    /// Inference endpoint (overrides PREDICT_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Remote request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(args.log_level.as_deref());

    let endpoint = args
        .endpoint
        .or_else(|| std::env::var("PREDICT_ENDPOINT").ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let record = PassengerRecord {
        pclass: args.pclass,
        sex: args.sex,
        age: args.age,
        sibsp: args.sibsp,
        parch: args.parch,
        fare: args.fare,
        embarked: args.embarked,
        alone: args.alone,
    };

    let predictor = Predictor::new(
        RealRemoteModel::new(endpoint, Duration::from_secs(args.timeout_secs)),
        RealConfidenceEstimator::new(),
    );

    match predictor.predict(&record).await {
        Ok(Some(prediction)) => {
            println!("{}", serde_json::to_string_pretty(&prediction)?);
        }
        // A single CLI submission has no newer attempt to supersede it
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
