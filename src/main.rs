use {
    pay_bridge::{config::Config, services::checkout::checkout},
    std::process::ExitCode,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let processor = pay_bridge::build_processor(&config);
    match checkout(&*processor, config.checkout_total) {
        Ok(confirmation) => {
            println!("{confirmation}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "checkout failed");
            ExitCode::FAILURE
        }
    }
}
