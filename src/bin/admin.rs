//! CLI administration tool for order-service.
//!
//! Provides commands for managing the product catalog, inspecting customers,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Add a product (prompts for missing values)
//! cargo run --bin admin -- product add --name "Keyboard" --price 29.99 --quantity 10
//!
//! # List products and customers
//! cargo run --bin admin -- product list
//! cargo run --bin admin -- customer list
//!
//! # Show counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! `DATABASE_URL` or the `DB_*` components, as for the server.

use order_service::config::Config;
use order_service::domain::entities::NewProduct;
use order_service::domain::repositories::{
    CustomerRepository, OrderRepository, ProductRepository,
};
use order_service::infrastructure::persistence::{
    PgCustomerRepository, PgOrderRepository, PgProductRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;

const LIST_LIMIT: i64 = 100;

/// CLI tool for managing order-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage the product catalog
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Inspect customers
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Show customer, product and order counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Product catalog subcommands.
#[derive(Subcommand)]
enum ProductAction {
    /// Add a product
    Add {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Unit price, e.g. 29.99
        #[arg(short, long)]
        price: Option<Decimal>,

        /// Initial stock
        #[arg(short, long)]
        quantity: Option<i32>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List products
    List,
}

/// Customer subcommands.
#[derive(Subcommand)]
enum CustomerAction {
    /// List customers
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Product { action } => handle_product_action(action, pool).await?,
        Commands::Customer { action } => handle_customer_action(action, pool).await?,
        Commands::Stats => handle_stats(pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_product_action(action: ProductAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = PgProductRepository::new(pool);

    match action {
        ProductAction::Add {
            name,
            description,
            price,
            quantity,
            yes,
        } => add_product(&repo, name, description, price, quantity, yes).await,
        ProductAction::List => list_products(&repo).await,
    }
}

/// Adds a product, prompting for every value not given on the command line.
async fn add_product(
    repo: &PgProductRepository,
    name: Option<String>,
    description: Option<String>,
    price: Option<Decimal>,
    quantity: Option<i32>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📦 Add Product".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let description = match description {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?,
    };

    let price = match price {
        Some(p) => p,
        None => Input::<Decimal>::new()
            .with_prompt("Price")
            .validate_with(|p: &Decimal| {
                if p.is_sign_positive() && !p.is_zero() {
                    Ok(())
                } else {
                    Err("Price must be positive")
                }
            })
            .interact_text()?,
    };

    let quantity = match quantity {
        Some(q) => q,
        None => Input::<i32>::new()
            .with_prompt("Available quantity")
            .default(0)
            .interact_text()?,
    };

    if price <= Decimal::ZERO {
        anyhow::bail!("Price must be positive, got {price}");
    }
    if quantity < 0 {
        anyhow::bail!("Available quantity cannot be negative, got {quantity}");
    }

    println!();
    println!("{}", "Product details:".bright_white().bold());
    println!("  Name:     {}", name.cyan());
    println!("  Price:    {}", price.to_string().bright_yellow());
    println!("  Quantity: {}", quantity.to_string().bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Add this product?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let product = repo
        .create(NewProduct {
            name,
            description,
            available_quantity: quantity,
            price,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add product: {}", e))?;

    println!(
        "{} (id {})",
        "✅ Product added".green().bold(),
        product.id.to_string().bright_white()
    );
    println!();

    Ok(())
}

async fn list_products(repo: &PgProductRepository) -> Result<()> {
    println!("{}", "📋 Products".bright_blue().bold());
    println!();

    let products = repo
        .list(0, LIST_LIMIT)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list products: {}", e))?;

    if products.is_empty() {
        println!("{}", "  No products found".yellow());
        println!();
        println!(
            "  Add one with: {} admin product add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<6} {:<30} {:>10} {:>8}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Price".bright_white().bold(),
        "Stock".bright_white().bold()
    );
    println!("  {}", "─".repeat(58).bright_black());

    for product in &products {
        let stock = if product.available_quantity == 0 {
            product.available_quantity.to_string().red()
        } else {
            product.available_quantity.to_string().green()
        };

        println!(
            "  {:<6} {:<30} {:>10} {:>8}",
            product.id.to_string().bright_black(),
            product.name.cyan(),
            product.price.to_string(),
            stock
        );
    }

    let total = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count products: {}", e))?;

    println!();
    println!("  Total: {}", total.to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn handle_customer_action(action: CustomerAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = PgCustomerRepository::new(pool);

    match action {
        CustomerAction::List => {
            println!("{}", "👥 Customers".bright_blue().bold());
            println!();

            let customers = repo
                .list(0, LIST_LIMIT)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list customers: {}", e))?;

            if customers.is_empty() {
                println!("{}", "  No customers found".yellow());
                return Ok(());
            }

            println!(
                "  {:<6} {:<30} {:<35} {:<20}",
                "ID".bright_white().bold(),
                "Name".bright_white().bold(),
                "Email".bright_white().bold(),
                "Registered".bright_white().bold()
            );
            println!("  {}", "─".repeat(91).bright_black());

            for customer in &customers {
                println!(
                    "  {:<6} {:<30} {:<35} {}",
                    customer.id.to_string().bright_black(),
                    format!("{} {}", customer.firstname, customer.lastname).cyan(),
                    customer.email,
                    customer
                        .created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black()
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Displays customer, product and order counts.
async fn handle_stats(pool: Arc<PgPool>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let customers = PgCustomerRepository::new(pool.clone())
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;
    let products = PgProductRepository::new(pool.clone())
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;
    let orders = PgOrderRepository::new(pool)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Customers: {}",
        customers.to_string().bright_green().bold()
    );
    println!("  Products:  {}", products.to_string().bright_green().bold());
    println!("  Orders:    {}", orders.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
