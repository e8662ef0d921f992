use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use session::config::{ConfigError, parse_base_url, positive_secs};
use session::{HttpTransport, SessionClient, SessionConfig, SessionError, SignInRequest, SignUpRequest};
use tracing_subscriber::EnvFilter;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "gptree-cli", about = "GPTree session API CLI")]
struct Cli {
    /// Overrides `GPTREE_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    /// `Cookie` header value sent with every request, as printed by `login`.
    #[arg(long, env = "GPTREE_SESSION_COOKIE")]
    session_cookie: Option<String>,

    /// Overrides `GPTREE_REQUEST_TIMEOUT_SECS`.
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// Overrides `GPTREE_CONNECT_TIMEOUT_SECS`.
    #[arg(long)]
    connect_timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Show the current session (`GET /me`).
    Me,
    /// Sign in (`POST /auth/login`).
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GPTREE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account (`POST /auth/signup`).
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GPTREE_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        display_name: String,
    },
    /// End the session (`POST /auth/logout`).
    Logout,
    /// Show account info (`GET /account`).
    Account,
}

impl Cli {
    /// Apply command-line overrides on top of the environment config.
    fn session_config(&self, base: SessionConfig) -> Result<SessionConfig, ConfigError> {
        let mut config = base;
        if let Some(raw) = &self.base_url {
            config.base_url = parse_base_url("--base-url", raw)?;
        }
        if let Some(secs) = self.request_timeout_secs {
            config.timeouts.request_secs = positive_secs("--request-timeout-secs", secs)?;
        }
        if let Some(secs) = self.connect_timeout_secs {
            config.timeouts.connect_secs = positive_secs("--connect-timeout-secs", secs)?;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.session_config(SessionConfig::from_env()?)?;
    tracing::debug!(base_url = %config.base_url, timeouts = ?config.timeouts, "session config");

    let transport = HttpTransport::new(&config, cli.session_cookie.as_deref())?;
    let client = SessionClient::new(transport);
    run(&client, cli.command).await
}

async fn run(client: &SessionClient<HttpTransport>, command: Command) -> Result<(), CliError> {
    match command {
        Command::Me => print_json(&client.fetch_session().await?),
        Command::Login { email, password } => {
            let session = client.sign_in(&SignInRequest { email, password }).await?;
            print_json(&with_cookie(&session, client.transport().last_set_cookie())?)
        }
        Command::Signup { email, password, display_name } => {
            let session = client
                .sign_up(&SignUpRequest { email, password, display_name })
                .await?;
            print_json(&with_cookie(&session, client.transport().last_set_cookie())?)
        }
        Command::Logout => {
            client.sign_out().await?;
            println!("ok");
            Ok(())
        }
        Command::Account => print_json(&client.fetch_account().await?),
    }
}

/// Attach the session cookie issued by the server so it can be reused via
/// `--session-cookie` on later invocations.
fn with_cookie<T: Serialize>(value: &T, cookie: Option<String>) -> Result<Value, CliError> {
    let mut json = serde_json::to_value(value)?;
    if let (Some(cookie), Some(map)) = (cookie, json.as_object_mut()) {
        map.insert("sessionCookie".to_owned(), Value::String(cookie));
    }
    Ok(json)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
