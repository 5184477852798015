use anyhow::{anyhow, bail, Result};
use search_console::client::service::SearchServiceClient;
use search_console::client::sink::StdoutSink;
use search_console::client::types::IndexOutcome;
use search_console::config::ConsoleConfig;
use search_console::form::port::{FormPort, MemoryForm};
use search_console::form::types::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Index,
    Search,
}

impl Command {
    fn parse(name: &str) -> Result<Self> {
        match name {
            "index" => Ok(Command::Index),
            "search" => Ok(Command::Search),
            _ => bail!("Unknown command: {}", name),
        }
    }

    fn accepts(&self, field: Field) -> bool {
        match self {
            Command::Index => Field::INDEX_FIELDS.contains(&field),
            Command::Search => field == Field::QueryStrings,
        }
    }
}

struct Invocation {
    command: Command,
    form: MemoryForm,
    service_override: Option<String>,
}

fn flag_field(flag: &str) -> Option<Field> {
    match flag {
        "--string" => Some(Field::ContentString),
        "--object" => Some(Field::ContentObject),
        "--indexes" => Some(Field::ObjectIndexes),
        "--stop-words" => Some(Field::StopWords),
        "--query" => Some(Field::QueryStrings),
        _ => None,
    }
}

/// Parses `<command> [--flag value]...`. Flags belonging to the other
/// command are rejected rather than ignored.
fn parse_args(args: &[String]) -> Result<Invocation> {
    let name = args.get(1).ok_or_else(|| anyhow!("Missing command"))?;
    let command = Command::parse(name)?;
    let form = MemoryForm::new();
    let mut service_override = None;

    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args
            .get(i + 1)
            .ok_or_else(|| anyhow!("Missing value for {}", flag))?;

        if flag == "--service" {
            service_override = Some(value.clone());
        } else {
            let field = flag_field(flag).ok_or_else(|| anyhow!("Unknown argument: {}", flag))?;
            if !command.accepts(field) {
                bail!("{} is not valid for the {} command", flag, name);
            }
            form.write(field, value);
        }
        i += 2;
    }

    Ok(Invocation {
        command,
        form,
        service_override,
    })
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} index [--string <text>] [--object <json>] [--indexes <a,b>] [--stop-words <a,b>] [--service <url>]",
        program
    );
    eprintln!("       {} search --query <q1,q2> [--service <url>]", program);
    eprintln!("Example: {} index --string \"hello world\" --stop-words the,a", program);
    eprintln!(
        "Example: {} index --object '{{\"title\":\"Dune\"}}' --indexes title",
        program
    );
    eprintln!("Example: {} search --query \"dune, arrakis\"", program);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("search-console");

    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("{}", err);
            print_usage(program);
            std::process::exit(1);
        }
    };

    let config = ConsoleConfig::from_env()?
        .with_service_override(invocation.service_override.as_deref());
    tracing::info!("Using search service at {}", config.service_url);

    let client = SearchServiceClient::new(&config.service_url);
    let form = &invocation.form;

    match invocation.command {
        Command::Index => {
            if let IndexOutcome::Invalid(result) = client.submit_index(form, &StdoutSink).await {
                for field in Field::INDEX_FIELDS {
                    if let Some(message) = result.error(field) {
                        eprintln!("{}: {}", field, message);
                    }
                }
                std::process::exit(1);
            }
        }
        Command::Search => {
            client
                .submit_search(&form.read(Field::QueryStrings), &StdoutSink)
                .await;
        }
    }

    Ok(())
}
