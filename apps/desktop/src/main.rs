use anyhow::Result;
use clap::Parser;
use client_core::{HttpItemStore, SyncController};
use shared::domain::{Item, ItemId};
use tokio::io::{AsyncBufReadExt, BufReader};

mod config;

#[derive(Parser, Debug)]
#[command(about = "Terminal front end for the shopping list backend")]
struct Args {
    /// Backend base URL; overrides shopping.toml and BACKEND_URL.
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(url) = args.backend_url {
        settings.backend_url = url;
    }
    tracing::info!(backend_url = %settings.backend_url, "starting shopping client");

    let mut controller = SyncController::new(HttpItemStore::new(settings.backend_url));
    controller.initialize().await;
    render(&mut controller);

    print_help();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if !handle_command(&mut controller, &line).await {
            break;
        }
        render(&mut controller);
    }

    Ok(())
}

/// Returns false when the user asked to quit.
async fn handle_command(controller: &mut SyncController<HttpItemStore>, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("list") => controller.reload().await,
        Some("add") => {
            let rest: Vec<&str> = parts.collect();
            let (name, price) = split_name_and_price(&rest);
            controller.add_form_mut().name = name;
            controller.add_form_mut().price = price;
            controller.submit_add().await;
        }
        Some("edit") => {
            let rest: Vec<&str> = parts.collect();
            let Some((id, fields)) = rest.split_first() else {
                println!("usage: edit <id> <name> <price>");
                return true;
            };
            let Some(item) = find_item(controller, id) else {
                println!("no item with id {id}");
                return true;
            };
            let (name, price) = split_name_and_price(fields);
            controller.open_edit(item);
            if let Some(session) = controller.edit_session_mut() {
                session.name = name;
                session.price = price;
            }
            controller.submit_edit().await;
        }
        Some("delete") => {
            let Some(id) = parts.next() else {
                println!("usage: delete <id>");
                return true;
            };
            let Some(item) = find_item(controller, id) else {
                println!("no item with id {id}");
                return true;
            };
            controller.open_delete(item);
            controller.confirm_delete().await;
        }
        Some("total") => println!("Total: ${:.2}", controller.state().total()),
        Some("help") => print_help(),
        Some("quit") | Some("exit") => return false,
        Some(other) => println!("unknown command: {other} (try 'help')"),
        None => {}
    }
    true
}

/// Last token is the price, everything before it is the (possibly
/// multi-word) item name.
fn split_name_and_price(fields: &[&str]) -> (String, String) {
    match fields.split_last() {
        Some((price, name)) => (name.join(" "), price.to_string()),
        None => (String::new(), String::new()),
    }
}

fn find_item(controller: &SyncController<HttpItemStore>, raw_id: &str) -> Option<Item> {
    let id: i64 = raw_id.parse().ok()?;
    controller
        .state()
        .items
        .iter()
        .find(|item| item.id == Some(ItemId(id)))
        .cloned()
}

fn render(controller: &mut SyncController<HttpItemStore>) {
    let state = controller.state();
    if let Some(error) = &state.error {
        println!("error: {error}");
    }
    if let Some(success) = &state.success {
        println!("{success}");
    }
    if state.loading {
        println!("(loading...)");
    }
    if state.items.is_empty() {
        println!("No items yet");
    } else {
        for item in &state.items {
            let id = item
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("{id:>4}  {:<24} ${:.2}", item.name, item.price);
        }
        println!("      {:<24} ${:.2}", "Total", state.total());
    }
    // Messages are one-shot in this front end; clearing twice is harmless.
    controller.dismiss_error();
    controller.dismiss_success();
}

fn print_help() {
    println!("commands:");
    println!("  list                       refresh the item list");
    println!("  add <name> <price>         create an item");
    println!("  edit <id> <name> <price>   update an item");
    println!("  delete <id>                delete an item");
    println!("  total                      show the list total");
    println!("  quit                       exit");
}
