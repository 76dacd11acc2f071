use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let presenter_factory = tick_tock::PixelsPresenterFactory::new();
    let command = tick_tock::RunGuiCommand::new(presenter_factory, tick_tock::DemoConfig::default());

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "timer demo exited with an error");
            ExitCode::FAILURE
        }
    }
}
