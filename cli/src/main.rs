//! `catalog-cli`: command-line access to the catalog backend.
//!
//! Talks to the same REST routes as the web UI. Output is pretty-printed JSON.


use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use catalog::{
    Book, BookInput, DEFAULT_API_BASE_URL, Endpoint, Genre, Method, NameInput, PageRequest, Publisher,
    Resource, name_for,
};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status { endpoint: String, status: u16, body: String },
    #[error("unknown {label} id {id}")]
    UnknownReference { label: &'static str, id: i64 },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "catalog-cli", about = "Book catalog backend CLI")]
struct Cli {
    #[arg(long, env = "CATALOG_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Book(BookCommand),
    Genre(NameCommand),
    Publisher(NameCommand),
}

#[derive(Args, Debug)]
struct BookCommand {
    #[command(subcommand)]
    command: BookSubcommand,
}

#[derive(Subcommand, Debug)]
enum BookSubcommand {
    List(PageArgs),
    All,
    Create(BookArgs),
    Update {
        id: i64,
        #[command(flatten)]
        fields: BookArgs,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct BookArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    author: String,
    #[arg(long)]
    genre_id: i64,
    #[arg(long, help = "Omit or pass 0 for no publisher")]
    publisher_id: Option<i64>,
}

#[derive(Args, Debug)]
struct NameCommand {
    #[command(subcommand)]
    command: NameSubcommand,
}

#[derive(Subcommand, Debug)]
enum NameSubcommand {
    List(PageArgs),
    All,
    Create {
        #[arg(long)]
        name: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: String,
    },
    Delete {
        id: i64,
    },
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
struct PageArgs {
    #[arg(long, default_value_t = 0)]
    page: u32,
    #[arg(long, default_value_t = 5)]
    size: u32,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = CatalogClient::new(cli.base_url);

    let json = match cli.command {
        Command::Book(book) => run_book(&client, book.command).await?,
        Command::Genre(genre) => run_named::<Genre>(&client, genre.command).await?,
        Command::Publisher(publisher) => run_named::<Publisher>(&client, publisher.command).await?,
    };
    print_json(&json)
}

/// Line printed to stderr when a command fails.
fn error_line(err: &CliError) -> String {
    format!("error: {err}")
}

struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    fn new(base_url: String) -> Self {
        Self { http: reqwest::Client::new(), base_url }
    }

    async fn send(&self, endpoint: &Endpoint, body: Option<Value>) -> Result<Value, CliError> {
        let method = match endpoint.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        };
        let url = endpoint.url(&self.base_url);
        let request = self.http.request(method, &url);
        let request = if let Some(json) = body { request.json(&json) } else { request };

        let response = request.send().await?;
        let status = response.status();
        let value = parse_body(response.text().await?);

        if !status.is_success() {
            return Err(CliError::Status {
                endpoint: format!("{} {url}", endpoint.method.as_str()),
                status: status.as_u16(),
                body: value.to_string(),
            });
        }
        Ok(value)
    }

    async fn all<R: Resource>(&self) -> Result<Vec<R>, CliError> {
        let value = self.send(&Endpoint::all::<R>(), None).await?;
        Ok(serde_json::from_value(value)?)
    }
}

async fn run_named<R>(client: &CatalogClient, command: NameSubcommand) -> Result<Value, CliError>
where
    R: Resource<Input = NameInput>,
{
    match command {
        NameSubcommand::List(args) => client.send(&list_endpoint::<R>(args), None).await,
        NameSubcommand::All => client.send(&Endpoint::all::<R>(), None).await,
        NameSubcommand::Create { name } => {
            let body = serde_json::to_value(NameInput { id: None, name })?;
            client.send(&Endpoint::store::<R>(), Some(body)).await
        }
        NameSubcommand::Update { id, name } => {
            let body = serde_json::to_value(NameInput { id: Some(id), name })?;
            client.send(&Endpoint::update::<R>(id), Some(body)).await
        }
        NameSubcommand::Delete { id } => client.send(&Endpoint::delete::<R>(id), None).await,
    }
}

async fn run_book(client: &CatalogClient, command: BookSubcommand) -> Result<Value, CliError> {
    match command {
        BookSubcommand::List(args) => client.send(&list_endpoint::<Book>(args), None).await,
        BookSubcommand::All => client.send(&Endpoint::all::<Book>(), None).await,
        BookSubcommand::Create(fields) => {
            let input = resolve_book(client, None, fields).await?;
            client.send(&Endpoint::store::<Book>(), Some(serde_json::to_value(input)?)).await
        }
        BookSubcommand::Update { id, fields } => {
            let input = resolve_book(client, Some(id), fields).await?;
            client.send(&Endpoint::update::<Book>(id), Some(serde_json::to_value(input)?)).await
        }
        BookSubcommand::Delete { id } => client.send(&Endpoint::delete::<Book>(id), None).await,
    }
}

fn list_endpoint<R: Resource>(args: PageArgs) -> Endpoint {
    Endpoint::list::<R>(PageRequest::new(args.page, args.size))
}

async fn resolve_book(client: &CatalogClient, id: Option<i64>, fields: BookArgs) -> Result<BookInput, CliError> {
    let genres = client.all::<Genre>().await?;
    let publishers = match fields.publisher_id {
        Some(publisher_id) if publisher_id != 0 => client.all::<Publisher>().await?,
        _ => Vec::new(),
    };
    book_input(id, fields, &genres, &publishers)
}

/// Fill in the denormalized genre/publisher names the backend expects.
fn book_input(
    id: Option<i64>,
    fields: BookArgs,
    genres: &[Genre],
    publishers: &[Publisher],
) -> Result<BookInput, CliError> {
    if !genres.iter().any(|genre| genre.id == fields.genre_id) {
        return Err(CliError::UnknownReference { label: "genre", id: fields.genre_id });
    }
    let genre_name = name_for(genres.iter().map(|g| (g.id, g.name.as_str())), fields.genre_id);

    let publisher_id = fields.publisher_id.unwrap_or(0);
    let publisher_name = if publisher_id == 0 {
        String::new()
    } else if publishers.iter().any(|p| p.id == publisher_id) {
        name_for(publishers.iter().map(|p| (p.id, p.name.as_str())), publisher_id)
    } else {
        return Err(CliError::UnknownReference { label: "publisher", id: publisher_id });
    };

    Ok(BookInput {
        id,
        title: fields.title,
        author: fields.author,
        genre_id: fields.genre_id,
        genre_name,
        publisher_id,
        publisher_name,
    })
}

/// Decode a response body; empty bodies become `null` and non-JSON text is kept as a string.
fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
