use anyhow::{Context, Result};
use clap::Parser;
use ioa_discovery::catalog::registration::{self, Registration};
use ioa_discovery::cli::{Cli, Commands};
use ioa_discovery::storage::filesystem::FileSystemStorage;
use ioa_discovery::topology::TopologyGraph;
use ioa_discovery::{
    utils, AgentCatalog, AgentKind, AgentStatus, DiscoveryApp, DiscoveryEntry, RelevanceEngine,
    SeededRandom, Settings,
};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::io::{self, AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut settings = Settings::new().context("Failed to load settings")?;
    ioa_discovery::init_tracing(&settings);

    let cli = Cli::parse();
    if let Some(dir) = cli.staging_dir {
        settings.storage.staging_dir = PathBuf::from(dir);
    }

    let storage = FileSystemStorage::new(settings.storage.staging_dir.clone()).await?;

    match cli.command {
        Commands::Search {
            query,
            kind,
            status,
            any_status,
            deterministic,
            seed,
        } => {
            let engine = if deterministic {
                RelevanceEngine::deterministic(settings.relevance.clone())
            } else if let Some(seed) = seed {
                RelevanceEngine::new(settings.relevance.clone()).with_random_source(SeededRandom::new(seed))
            } else {
                RelevanceEngine::new(settings.relevance.clone())
            };
            let mut app = DiscoveryApp::new(AgentCatalog::with_seed(), engine);
            app.load_staged(&storage, &settings.storage.staging_key).await?;

            app.set_type_filter(kind);
            app.set_status_filter(status_filter(status, any_status));
            let results = app.set_query(query.clone());

            utils::print_header(&format!("Discovery: \"{}\"", query));
            print_entries(&app, &results);
        }
        Commands::List {
            kind,
            status,
            any_status,
        } => {
            let mut app = DiscoveryApp::from_settings(&settings);
            app.load_staged(&storage, &settings.storage.staging_key).await?;

            app.set_type_filter(kind);
            let results = app.set_status_filter(status_filter(status, any_status));

            utils::print_header("Discovery");
            print_entries(&app, &results);
        }
        Commands::Register {
            name,
            kind,
            layer,
            description,
            capabilities,
            cpu,
            memory,
            endpoint,
        } => {
            let form = Registration {
                name,
                kind,
                layer,
                description,
                capabilities,
                cpu,
                memory,
                endpoint,
            };
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .context("System clock is before the Unix epoch")?
                .as_millis();

            match form.into_record(now) {
                Ok(record) => {
                    let pending =
                        registration::stage(&storage, &settings.storage.staging_key, &record).await?;
                    utils::print_success(&format!(
                        "Agent '{}' registered as {} ({} pending)",
                        record.name, record.id, pending
                    ));
                }
                Err(e) => utils::print_error(&e.to_string()),
            }
        }
        Commands::Chat => {
            let mut app = DiscoveryApp::from_settings(&settings);
            report_merge(&mut app, &storage, &settings).await?;
            handle_chat(&mut app, settings.assistant.reply_delay_ms).await?;
        }
        Commands::Stats => {
            let mut app = DiscoveryApp::from_settings(&settings);
            app.load_staged(&storage, &settings.storage.staging_key).await?;
            print_stats(&app);
        }
        Commands::Topology => {
            let mut app = DiscoveryApp::from_settings(&settings);
            app.load_staged(&storage, &settings.storage.staging_key).await?;
            print_topology(&app.topology());
        }
    }

    Ok(())
}

fn status_filter(status: AgentStatus, any_status: bool) -> Option<AgentStatus> {
    if any_status {
        None
    } else {
        Some(status)
    }
}

async fn report_merge(app: &mut DiscoveryApp, storage: &FileSystemStorage, settings: &Settings) -> Result<()> {
    let report = app.load_staged(storage, &settings.storage.staging_key).await?;
    if !report.merged.is_empty() {
        utils::print_success(&format!("Loaded {} newly registered agents", report.merged.len()));
    }
    for reason in &report.rejected {
        utils::print_error(&format!("Skipped staged agent: {}", reason));
    }
    Ok(())
}

fn print_entries(app: &DiscoveryApp, entries: &[DiscoveryEntry]) {
    if entries.is_empty() {
        utils::print_info("No matching agents");
        return;
    }
    for entry in entries {
        utils::print_entry(entry, app.selection().contains(&entry.record().id));
    }
}

fn print_stats(app: &DiscoveryApp) {
    let stats = app.stats();
    let series = app.catalog().resource_series();

    utils::print_header("Network");
    println!("  Total nodes: {}", stats.total);
    for kind in AgentKind::ALL {
        println!("  {:<8} {}", kind.to_string(), stats.count(kind));
    }

    utils::print_header("Resources");
    for ((name, cpu), memory) in series.names.iter().zip(&series.cpu).zip(&series.memory) {
        println!(
            "  {:<20} cpu {:>3}% {}  mem {:>3}% {}",
            name,
            cpu,
            utils::relevance_bar(*cpu as u32),
            memory,
            utils::relevance_bar(*memory as u32)
        );
    }
    println!(
        "  Average: cpu {}%, memory {}%",
        series.average_cpu(),
        series.average_memory()
    );
}

fn print_topology(graph: &TopologyGraph) {
    utils::print_header("Topology");
    for node in &graph.nodes {
        println!(
            "  {:<20} {:<8} {:<9} ({:>6.1}, {:>6.1}) size {}",
            node.label,
            node.kind.to_string(),
            node.layer.to_string(),
            node.x,
            node.y,
            node.size
        );
    }
    println!();
    for edge in &graph.edges {
        println!("  {} -> {}", edge.from, edge.to);
    }
}

async fn handle_chat(app: &mut DiscoveryApp, reply_delay_ms: u64) -> Result<()> {
    utils::print_header("IOA Orchestrator");
    utils::print_info(ioa_discovery::assistant::WELCOME);
    utils::print_info("Type /help for commands (Ctrl+C to exit)\n");

    let results = app.visible();
    print_entries(app, &results);

    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin);

    loop {
        utils::print_prompt("\nYou: ");
        let mut input = String::new();
        if reader.read_line(&mut input).await? == 0 {
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix('/') {
            if !handle_chat_command(app, command) {
                break;
            }
            continue;
        }

        // Simulated thinking pause before the canned reply
        tokio::time::sleep(tokio::time::Duration::from_millis(reply_delay_ms)).await;

        if let Some(turn) = app.submit_chat(input) {
            println!("\n{}\n", turn.reply);
            print_entries(app, &turn.results);
        }
    }

    Ok(())
}

/// Returns `false` when the session should end
fn handle_chat_command(app: &mut DiscoveryApp, command: &str) -> bool {
    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("quit"), _, _) | (Some("exit"), _, _) => return false,
        (Some("select"), Some(id), _) => match app.toggle_selection(id, true) {
            Ok(_) => utils::print_success(&format!("Selected {}", id)),
            Err(e) => utils::print_error(&e.to_string()),
        },
        (Some("unselect"), Some(id), _) => {
            if app.remove_selection(id) {
                utils::print_success(&format!("Removed {}", id));
            }
        }
        (Some("selected"), _, _) => {
            let names: Vec<&str> = app.selected_records().iter().map(|r| r.name.as_str()).collect();
            if names.is_empty() {
                utils::print_info("No agents selected");
            } else {
                utils::print_info(&names.join(", "));
            }
        }
        (Some("filter"), Some("type"), value) => {
            let kind = match value {
                None | Some("none") => None,
                Some(v) => match v.parse::<AgentKind>() {
                    Ok(k) => Some(k),
                    Err(e) => {
                        utils::print_error(&e);
                        return true;
                    }
                },
            };
            let results = app.set_type_filter(kind);
            print_entries(app, &results);
        }
        (Some("filter"), Some("status"), value) => {
            let status = match value {
                None | Some("none") => None,
                Some(v) => Some(AgentStatus::from(v.to_string())),
            };
            let results = app.set_status_filter(status);
            print_entries(app, &results);
        }
        (Some("clear"), _, _) => {
            let results = app.set_query("");
            print_entries(app, &results);
        }
        (Some("stats"), _, _) => print_stats(app),
        _ => {
            println!("Commands:");
            println!("  /select <id>           - Select an agent");
            println!("  /unselect <id>         - Remove an agent from the selection");
            println!("  /selected              - Show selected agents");
            println!("  /filter type <kind>    - agent, llm, tool, compute or none");
            println!("  /filter status <s>     - active, inactive or none");
            println!("  /clear                 - Drop the current query");
            println!("  /stats                 - Node counts and resource usage");
            println!("  /quit                  - Exit");
        }
    }
    true
}
