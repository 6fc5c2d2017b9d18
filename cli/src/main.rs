mod seed;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cookbook_client::Client;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(about = "CookBook CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ping the server
    Ping {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// List all recipes
    List {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Show one recipe with its comments
    Show {
        /// Recipe ID
        id: String,
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
    /// Post the sample recipes to the server
    Seed {
        /// Server URL (default: http://localhost:3000)
        #[arg(long, default_value = "http://localhost:3000")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Ping { server } => ping(&server).await?,
        Commands::List { server } => list(&server).await?,
        Commands::Show { id, server } => show(&server, &id).await?,
        Commands::Seed { server } => seed::seed(&server).await?,
    }

    Ok(())
}

async fn ping(server: &str) -> Result<()> {
    let client = Client::new(server);
    let message = client.ping().await?;
    println!("{}", message);
    Ok(())
}

async fn list(server: &str) -> Result<()> {
    let client = Client::new(server);
    for recipe in client.list_recipes().await? {
        println!("{}  {}", recipe.id, recipe.title);
    }
    Ok(())
}

async fn show(server: &str, id: &str) -> Result<()> {
    let client = Client::new(server);
    let recipe = client.get_recipe(id).await?;

    println!("{}", recipe.title);
    println!("{}", recipe.description);
    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    println!();
    println!("Instructions:");
    for (index, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", index + 1, step);
    }

    let comments = client.list_comments(id).await?;
    if !comments.is_empty() {
        println!();
        println!("Comments:");
        for comment in comments {
            println!("  {}", comment.content);
        }
    }

    Ok(())
}
