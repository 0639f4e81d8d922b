//! Fresca CLI
//!
//! Exercises the storefront services end to end against the in-memory
//! stores: seed a sample catalog, walk a session cart through checkout and
//! print the WhatsApp handoff plus the dashboard read models.

use std::process;

use clap::{Parser, Subcommand};
use fresca::{
    config::AppConfig,
    context::AppContext,
    domain::{
        carts::{CartsService, models::SessionUuid},
        company::CompanyService,
        dashboard::{DashboardService, models::SalesGranularity},
        orders::{OrdersService, models::CheckoutRequest},
        products::{ProductsService, models::ProductForm},
    },
    money::format_amount,
};
use jiff::{Timestamp, Zoned};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fresca", about = "Fresca storefront CLI", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Seed a sample catalog and print the public menu.
    Seed,
    /// Run a full order: seed, fill a cart, checkout and show the dashboard.
    Demo,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let context = AppContext::in_memory(&cli.config).map_err(|error| error.to_string())?;

    match cli.command {
        Commands::Seed => seed_and_print_menu(&context).await,
        Commands::Demo => demo_order(&context).await,
    }
}

async fn seed_catalog(context: &AppContext) -> Result<(), String> {
    let forms = [
        ProductForm {
            name: "Agua de Jamaica".to_string(),
            description: "Flor de jamaica natural".to_string(),
            category: "aguas".to_string(),
            sizes: json!({
                "sizes": [
                    { "label": "1/2 Litro", "price": 25 },
                    { "label": "1 Litro", "price": 35 },
                ]
            }),
            ..ProductForm::default()
        },
        ProductForm {
            name: "Agua de Horchata".to_string(),
            description: "Con canela".to_string(),
            category: "aguas".to_string(),
            sizes: json!({
                "sizeLabels": ["1/2 Litro", "1 Litro"],
                "sizePrices": ["25", "35"],
            }),
            ..ProductForm::default()
        },
        ProductForm {
            name: "Chicharrones preparados".to_string(),
            category: "botanas".to_string(),
            price: json!("45"),
            ..ProductForm::default()
        },
        ProductForm {
            name: "Tostilocos".to_string(),
            category: "antojitos".to_string(),
            price: json!(55),
            ..ProductForm::default()
        },
    ];

    for form in forms {
        context
            .products
            .create_product(form)
            .await
            .map_err(|error| error.to_string())?;
    }

    Ok(())
}

async fn seed_and_print_menu(context: &AppContext) -> Result<(), String> {
    seed_catalog(context).await?;

    let menu = context
        .products
        .menu()
        .await
        .map_err(|error| error.to_string())?;

    for group in menu.groups {
        println!("{}", group.category);

        for product in group.products {
            if product.sizes.is_empty() {
                println!("  {} - ${}", product.name, format_amount(product.price));
            } else {
                let sizes = product
                    .sizes
                    .iter()
                    .map(|s| format!("{} ${}", s.label, format_amount(s.price)))
                    .collect::<Vec<_>>()
                    .join(", ");

                println!("  {} - {sizes}", product.name);
            }
        }
    }

    Ok(())
}

async fn demo_order(context: &AppContext) -> Result<(), String> {
    let info = context
        .company
        .company_info()
        .await
        .map_err(|error| error.to_string())?;

    println!("{}: {}", info.name, info.slogan);
    println!();

    seed_catalog(context).await?;

    let session = SessionUuid::new();
    context
        .carts
        .ensure(session)
        .await
        .map_err(|error| error.to_string())?;

    let menu = context
        .products
        .menu()
        .await
        .map_err(|error| error.to_string())?;

    for product in menu.groups.iter().flat_map(|g| g.products.iter()) {
        let size = product.sizes.first().map(|s| s.label.clone());

        context
            .carts
            .add_item(session, product.uuid, size)
            .await
            .map_err(|error| error.to_string())?;
    }

    let outcome = context
        .orders
        .checkout(
            session,
            CheckoutRequest {
                customer_name: "Ana".to_string(),
                customer_phone: "5551234567".to_string(),
                delivery_method: "domicilio".to_string(),
                address_text: "Calle 5 #12, Col. Centro".to_string(),
                ..CheckoutRequest::default()
            },
        )
        .await
        .map_err(|error| error.to_string())?;

    println!("{}", outcome.message);
    println!();
    println!("Abrir: {}", outcome.wa_url);
    println!();

    let now = Timestamp::now().to_zoned(context.time_zone.clone());

    let summary = context
        .dashboard
        .summary(now.clone())
        .await
        .map_err(|error| error.to_string())?;

    println!(
        "Pedidos: {} total, {} nuevos, ventas de hoy ${}",
        summary.cards.total_orders,
        summary.cards.new_orders_count,
        format_amount(summary.cards.today_sales),
    );

    print_sales(context, now).await
}

async fn print_sales(context: &AppContext, now: Zoned) -> Result<(), String> {
    let report = context
        .dashboard
        .sales(SalesGranularity::Month, now)
        .await
        .map_err(|error| error.to_string())?;

    for bucket in report.buckets {
        println!(
            "  {}: ${} ({} pedidos)",
            bucket.label,
            format_amount(bucket.total),
            bucket.orders,
        );
    }

    Ok(())
}
