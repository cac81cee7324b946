use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use employee_directory::{
    api::HttpEmployeeApi,
    cli::{self, Line},
    config::Config,
    directory::{Directory, Outcome},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (dev convenience)
    let _ = dotenvy::dotenv();

    // Tracing goes to stderr; stdout carries the rendered view
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cfg = Config::from_env()?;
    let api = HttpEmployeeApi::from_config(&cfg);
    tracing::info!("Using employees API at {}", api.base_url());

    let mut directory = Directory::new();
    directory.mount(&api).await;
    println!("{}", directory.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match cli::parse_line(&line) {
            Ok(Line::Empty) => continue,
            Ok(Line::Quit) => break,
            Ok(Line::Help) => {
                println!("{}", cli::HELP);
                continue;
            }
            Ok(Line::Dispatch(command)) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match directory.dispatch(command, &api).await {
            Outcome::Alert(text) => println!("! {}", text),
            Outcome::Saved(receipt) if !receipt.message.is_empty() => {
                println!("{}", receipt.message)
            }
            _ => {}
        }
        println!("{}", directory.render());
    }

    Ok(())
}
