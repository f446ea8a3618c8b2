use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::info;

mod app;
mod handler;
mod tui;
mod ui;

use app::App;
use poehali_studio::landing::Section;
use poehali_studio::{logging, Config, GenerationController, GeneratorClient, Toast};
use tui::EventHandler;

#[derive(Parser)]
#[command(name = "poehali")]
#[command(version)]
#[command(about = "POEHALI.DEV studio landing with an AI website generator")]
struct Cli {
    /// Generator endpoint (overrides POEHALI_GENERATOR_URL and the config file)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive landing (default)
    Ui {
        /// Section to open at: home, team, services, portfolio, blog or contact
        #[arg(long)]
        section: Option<String>,
    },
    /// Generate a site structure from a description and print the preview
    Generate {
        /// What kind of site to create
        description: String,
    },
    /// Store the generator endpoint in the config file
    SetEndpoint {
        /// Endpoint URL
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config = Config::load_or_default();
    let endpoint = cli.endpoint.unwrap_or_else(|| config.generator_endpoint());
    let client = GeneratorClient::new(&endpoint);
    info!(endpoint = client.endpoint(), "starting");

    match cli.command {
        Some(Commands::Generate { description }) => generate_once(&client, &description).await,
        Some(Commands::Ui { section }) => {
            let section = section.as_deref().map(parse_section).transpose()?;
            run_tui(client, section).await
        }
        Some(Commands::SetEndpoint { url }) => save_endpoint(config, &url),
        None => run_tui(client, None).await,
    }
}

fn save_endpoint(mut config: Config, url: &str) -> Result<()> {
    let url = url.trim();
    config.generator_url = Some(url.to_string());
    config.save()?;
    println!("Generator endpoint saved: {}", url);
    Ok(())
}

fn parse_section(anchor: &str) -> Result<Section> {
    Section::from_anchor(anchor).ok_or_else(|| {
        let known: Vec<&str> = Section::all().iter().map(Section::anchor).collect();
        anyhow!("Unknown section '{}', expected one of: {}", anchor, known.join(", "))
    })
}

async fn generate_once(client: &GeneratorClient, description: &str) -> Result<()> {
    let mut controller = GenerationController::new();
    let mut toasts: Vec<Toast> = Vec::new();

    controller.open();
    controller.set_description(description);
    let outcome = controller.generate(client, &mut toasts).await;

    if let Some(preview) = controller.preview() {
        for line in preview {
            println!("{}", line);
        }
    }
    for toast in &toasts {
        eprintln!("[{}] {}", toast.title, toast.description);
    }

    if outcome.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

async fn run_tui(client: GeneratorClient, section: Option<Section>) -> Result<()> {
    tui::install_panic_hook();
    let mut terminal = tui::init()?;

    let mut app = App::new(client);
    if let Some(section) = section {
        app.jump_to(section);
    }
    let mut events = EventHandler::new();
    let tx = events.sender();

    // Main loop
    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if let Some(event) = events.next().await {
            handler::handle_event(&mut app, event, &tx)?;
        }
    }

    tui::restore()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section() {
        assert_eq!(parse_section("portfolio").unwrap(), Section::Portfolio);
        assert_eq!(parse_section("Contact").unwrap(), Section::Contact);

        let err = parse_section("pricing").unwrap_err().to_string();
        assert!(err.contains("home, team, services, portfolio, blog, contact"));
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::parse_from([
            "poehali",
            "--endpoint",
            "http://localhost:8080",
            "ui",
            "--section",
            "blog",
        ]);
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:8080"));
        assert!(matches!(
            cli.command,
            Some(Commands::Ui { section: Some(ref s) }) if s == "blog"
        ));

        let cli = Cli::parse_from(["poehali", "set-endpoint", "http://localhost:9000"]);
        assert!(matches!(
            cli.command,
            Some(Commands::SetEndpoint { ref url }) if url == "http://localhost:9000"
        ));
    }
}
