//! Career Coach - Main Entry Point
//!
//! Starts the web API server, or answers a single question from the
//! command line.

use anyhow::Result;
use career_coach::api::run_server;
use career_coach::config::ServerConfig;
use career_coach::render::ask_text;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "career-coach")]
#[command(about = "Career Path Q&A Coach - answers inspired by sample career stories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the JSON API server
    Serve {
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Ask the coach one question and print the answer
    Ask {
        /// What you would like to ask the coach
        question: String,
        /// Which best describes you right now
        #[arg(short, long, default_value = "College")]
        stage: String,
        /// What you are most curious about (repeatable)
        #[arg(short, long = "interest")]
        interests: Vec<String>,
    },
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ask {
            question,
            stage,
            interests,
        }) => run_ask(question, stage, interests),
        Some(Commands::Serve { host, port }) => serve(host, port).await,
        None => serve(None, None).await,
    }
}

async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    println!("╔════════════════════════════════════════════════╗");
    println!("║   Career Path Q&A Coach                        ║");
    println!("║   Stage → Interests → Question                 ║");
    println!("╚════════════════════════════════════════════════╝");
    println!();

    let config = ServerConfig::from_env().with_overrides(host, port);
    run_server(&config).await?;
    Ok(())
}

fn run_ask(question: String, stage: String, interests: Vec<String>) -> Result<()> {
    print!("{}", ask_text(&question, &stage, &interests)?);
    Ok(())
}
