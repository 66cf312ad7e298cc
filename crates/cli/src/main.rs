//! Heart disease screening CLI.
//!
//! Collects the thirteen clinical inputs with bounded flags, posts them to
//! the remote prediction service, and prints the verdict with a comparison
//! chart. Collection-time bounds live in the flag parsers, so an in-domain
//! form is guaranteed by construction before anything touches the network.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heartcheck_client::PredictionClient;
use heartcheck_core::{
    encode, present, ClientConfig, ExerciseAngina, FastingBloodSugar, FieldDomain, FormState,
    RestingEcg, Sex, StSlope, Thalassemia, FIELD_SCHEMAS,
};

mod chart;

#[derive(Parser)]
#[command(name = "heartcheck")]
#[command(about = "Heart disease prediction front-end")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit patient information for a risk prediction
    Predict {
        /// Age in years
        #[arg(long, value_parser = clap::value_parser!(u32).range(10..=80))]
        age: u32,
        /// Sex: Female or Male
        #[arg(long)]
        sex: Sex,
        /// Resting blood pressure in mm Hg
        #[arg(long, value_parser = clap::value_parser!(u32).range(80..=200))]
        resting_bp: u32,
        /// Cholesterol level in mg/dl
        #[arg(long, value_parser = clap::value_parser!(u32).range(100..=400))]
        cholesterol: u32,
        /// Fasting blood sugar > 120 mg/dl: False or True
        #[arg(long)]
        fasting_bs: FastingBloodSugar,
        /// Resting ECG: Normal, "ST-T Wave Abnormality" or "Left Ventricular Hypertrophy"
        #[arg(long)]
        resting_ecg: RestingEcg,
        /// Maximum heart rate achieved
        #[arg(long, value_parser = clap::value_parser!(u32).range(60..=220))]
        max_heart_rate: u32,
        /// Exercise-induced angina: False or True
        #[arg(long)]
        exercise_angina: ExerciseAngina,
        /// ST depression induced by exercise (0.0 to 6.0, one decimal)
        #[arg(long, value_parser = parse_oldpeak)]
        oldpeak: f64,
        /// Slope of the peak exercise ST segment: Upsloping, Flat or Downsloping
        #[arg(long)]
        slope: StSlope,
        /// Number of major vessels coloured by fluoroscopy (0 to 4)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=4))]
        major_vessels: u8,
        /// Thalassemia: Normal, "Fixed Defect" or "Reversible Defect"
        #[arg(long)]
        thalassemia: Thalassemia,
        /// Chest pain type code (0=Asymptomatic, 1=Atypical Angina, etc.)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
        chest_pain_type: u8,
        /// Prediction endpoint URL (overrides HEARTCHECK_ENDPOINT_URL)
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// List the input fields and their domains
    Schema,
}

/// Parses the oldpeak flag: bounded 0.0 to 6.0, snapped to the 0.1 step the
/// original number input collects.
fn parse_oldpeak(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !(0.0..=6.0).contains(&value) {
        return Err(format!("{} is not in 0.0..=6.0", value));
    }
    Ok((value * 10.0).round() / 10.0)
}

fn describe_domain(domain: &FieldDomain) -> String {
    match domain {
        FieldDomain::Numeric { min, max, step } => format!("{}..={} step {}", min, max, step),
        FieldDomain::Categorical { labels } => labels.join(" | "),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("heartcheck=info".parse()?)
                .add_directive("heartcheck_core=info".parse()?)
                .add_directive("heartcheck_client=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            age,
            sex,
            resting_bp,
            cholesterol,
            fasting_bs,
            resting_ecg,
            max_heart_rate,
            exercise_angina,
            oldpeak,
            slope,
            major_vessels,
            thalassemia,
            chest_pain_type,
            endpoint,
        } => {
            let form = FormState {
                age,
                sex,
                resting_bp,
                cholesterol,
                fasting_bs,
                resting_ecg,
                max_heart_rate,
                exercise_angina,
                oldpeak,
                slope,
                major_vessels,
                thalassemia,
                chest_pain_type,
            };
            form.validate()?;

            let config = ClientConfig::from_env_value(
                endpoint.or_else(|| std::env::var("HEARTCHECK_ENDPOINT_URL").ok()),
            )?;
            let client = PredictionClient::new(config)?;
            let request = encode(&form);

            match client.predict(&request) {
                Ok(response) => {
                    let model = present(&response.result, &form);
                    println!("{}", model.verdict);
                    println!();
                    print!("{}", chart::render(&model));
                }
                Err(e) => {
                    tracing::error!("prediction failed: {}", e);
                    eprintln!("Error: Unable to process the prediction.");
                    std::process::exit(1);
                }
            }
        }
        Commands::Schema => {
            for schema in FIELD_SCHEMAS {
                println!(
                    "{:<16} {:<52} {}",
                    schema.name,
                    schema.label,
                    describe_domain(&schema.domain)
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_oldpeak_in_range() {
        assert_eq!(parse_oldpeak("3.4").unwrap(), 3.4);
        assert_eq!(parse_oldpeak("0").unwrap(), 0.0);
        assert_eq!(parse_oldpeak("6.0").unwrap(), 6.0);
    }

    #[test]
    fn test_parse_oldpeak_snaps_to_step() {
        assert_eq!(parse_oldpeak("1.25").unwrap(), 1.3);
    }

    #[test]
    fn test_parse_oldpeak_out_of_range() {
        assert!(parse_oldpeak("6.1").is_err());
        assert!(parse_oldpeak("-0.1").is_err());
        assert!(parse_oldpeak("high").is_err());
    }

    #[test]
    fn test_describe_domain() {
        let numeric = FieldDomain::Numeric {
            min: 0.0,
            max: 6.0,
            step: 0.1,
        };
        assert_eq!(describe_domain(&numeric), "0..=6 step 0.1");

        let categorical = FieldDomain::Categorical {
            labels: &["Female", "Male"],
        };
        assert_eq!(describe_domain(&categorical), "Female | Male");
    }

    #[test]
    fn test_cli_parses_full_predict_command() {
        let cli = Cli::try_parse_from([
            "heartcheck",
            "predict",
            "--age",
            "54",
            "--sex",
            "Male",
            "--resting-bp",
            "130",
            "--cholesterol",
            "246",
            "--fasting-bs",
            "False",
            "--resting-ecg",
            "Left Ventricular Hypertrophy",
            "--max-heart-rate",
            "150",
            "--exercise-angina",
            "False",
            "--oldpeak",
            "3.4",
            "--slope",
            "Flat",
            "--major-vessels",
            "0",
            "--thalassemia",
            "Normal",
            "--chest-pain-type",
            "0",
        ])
        .unwrap();

        match cli.command {
            Commands::Predict {
                age,
                sex,
                resting_ecg,
                oldpeak,
                endpoint,
                ..
            } => {
                assert_eq!(age, 54);
                assert_eq!(sex, Sex::Male);
                assert_eq!(resting_ecg, RestingEcg::LeftVentricularHypertrophy);
                assert_eq!(oldpeak, 3.4);
                assert!(endpoint.is_none());
            }
            _ => panic!("expected predict command"),
        }
    }

    #[test]
    fn test_cli_rejects_out_of_range_age() {
        let result = Cli::try_parse_from([
            "heartcheck",
            "predict",
            "--age",
            "9",
            "--sex",
            "Male",
            "--resting-bp",
            "130",
            "--cholesterol",
            "246",
            "--fasting-bs",
            "False",
            "--resting-ecg",
            "Normal",
            "--max-heart-rate",
            "150",
            "--exercise-angina",
            "False",
            "--oldpeak",
            "1.0",
            "--slope",
            "Flat",
            "--major-vessels",
            "0",
            "--thalassemia",
            "Normal",
            "--chest-pain-type",
            "0",
        ]);
        assert!(result.is_err());
    }
}
