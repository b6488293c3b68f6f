use clap::Parser;
use qa_crawler::error::AppError;
use qa_crawler::i18n::Locale;
use qa_crawler::{cli, launch, utils};
use std::process::ExitCode;
use tracing::error;

const BANNER: &str = r#"
  ____ _           _    ____ ____ _____    ____                    _
 / ___| |__   __ _| |_ / ___|  _ \_   _|  / ___|_ __ __ ___      _| | ___ _ __
| |   | '_ \ / _` | __| |  _| |_) || |   | |   | '__/ _` \ \ /\ / / |/ _ \ '__|
| |___| | | | (_| | |_| |_| |  __/ | |   | |___| | | (_| |\ V  V /| |  __/ |
 \____|_| |_|\__,_|\__|\____|_|    |_|    \____|_|  \__,_| \_/\_/ |_|\___|_|
"#;

#[tokio::main]
async fn main() -> ExitCode {
    utils::logging::init();

    println!("{}", BANNER);
    let args = cli::Args::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => return report_failure(AppError::from(e), &Locale::default()),
    };
    let locale = config.language.clone();

    tokio::select! {
        result = launch(&config, &args.file, &args.output) => match result {
            Ok(()) => {
                println!("{}", locale.success());
                ExitCode::SUCCESS
            }
            Err(e) => report_failure(e, &locale),
        },
        () = utils::signal::ctrl_c() => {
            eprintln!("{}", locale.interrupted());
            ExitCode::FAILURE
        }
    }
}

fn report_failure(err: AppError, locale: &Locale) -> ExitCode {
    error!("run failed: {:?}", err);
    eprintln!("{}", err.localized_message(locale));
    ExitCode::FAILURE
}
