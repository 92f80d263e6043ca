use preprocess_pipeline::Pipeline;
use redprep_core::{ErrorExt, PreprocessError};

#[tokio::main]
async fn main() -> Result<(), PreprocessError> {
    tracing_subscriber::fmt()
        .with_env_filter("redprep=debug,preprocess_pipeline=debug,dataset_loader=debug")
        .init();

    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: redprep <dataset.(json|csv)> [output.(json|csv)]");
            std::process::exit(2);
        }
    };
    let output = args.next();

    tracing::info!("Starting Redprep - Reddit dataset preprocessing");

    let pipeline = Pipeline::new();
    let result = match &output {
        Some(path) => pipeline.run_to_file(&input, path).await,
        None => pipeline.run(&input).await,
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            e.log_error();
            eprintln!("{}", e.user_friendly_message());
            return Err(e);
        }
    };

    println!("{}", serde_json::to_string_pretty(&outcome.stats)?);
    Ok(())
}
