use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};
use wardenboard::api::{
    ApiClient, ApiError, AuthApi, ListQuery, behaviour_records, prisons, users, visitors, visits, work_records,
};
use wardenboard::auth::{
    Action, AuthError, Credentials, GuardDecision, LOGIN_PATH, Resource, RouteGuard, SessionStore,
};
use wardenboard::config::{ConfigError, DashboardConfig};
use wardenboard::shell::{self, Page, ScopeError};
use wardenboard::storage::FileTokenStore;

const LOGOUT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("api request failed: {0}")]
    Api(#[from] ApiError),
    #[error("sign-in failed: {0}")]
    Auth(#[from] AuthError),
    #[error("not signed in; run `wardenboard login` first")]
    NotSignedIn,
    #[error("permission denied: {0} requires {1}")]
    PermissionDenied(&'static str, String),
    #[error("{0} cannot be displayed")]
    Unrenderable(String),
    #[error(transparent)]
    Scope(#[from] ScopeError),
    #[error("status updates are only available for users and visits")]
    StatusUnsupported,
    #[error("unknown user status '{0}' (expected active or inactive)")]
    InvalidStatus(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "wardenboard", about = "Prison back-office dashboard shell")]
struct Cli {
    /// API root, e.g. `https://corrections.example/api`.
    #[arg(long)]
    base_url: Option<String>,

    /// Where the session token is kept between runs.
    #[arg(long)]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "WARDEN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Whoami,
    Dashboard,
    /// Print the route guard's decision for a path.
    Open {
        path: String,
    },
    Prisons(ResourceArgs),
    Users(ResourceArgs),
    Visitors(ResourceArgs),
    Visits(ResourceArgs),
    WorkRecords(ResourceArgs),
    BehaviourRecords(ResourceArgs),
}

#[derive(Args, Debug)]
struct ResourceArgs {
    #[command(subcommand)]
    command: ResourceCommand,
}

#[derive(Subcommand, Debug)]
enum ResourceCommand {
    List(ListArgs),
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: String,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: String,
    },
    /// Users: `active`/`inactive`. Visits: any workflow status.
    Status {
        id: String,
        value: String,
    },
}

impl ResourceCommand {
    fn action(&self) -> Action {
        match self {
            Self::List(_) | Self::Get { .. } => Action::Read,
            Self::Create { .. } => Action::Create,
            Self::Update { .. } | Self::Status { .. } => Action::Update,
            Self::Delete { .. } => Action::Delete,
        }
    }
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long)]
    page: Option<u32>,
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    prison_id: Option<String>,
    #[arg(long)]
    status: Option<String>,
}

// =============================================================================
// SHELL
// =============================================================================

type Store = SessionStore<AuthApi, FileTokenStore>;

struct Shell {
    client: ApiClient,
    store: Store,
}

impl Shell {
    async fn start(config: &DashboardConfig) -> Result<Self, CliError> {
        let client = ApiClient::from_config(config)?;
        let store = SessionStore::new(
            Arc::new(AuthApi::new(client.clone())),
            FileTokenStore::new(config.token_file.clone()),
        );
        store.initialize().await;
        Ok(Self { client, store })
    }

    fn guard(&self, path: &str) -> RouteGuard {
        RouteGuard::new(self.store.subscribe(), path)
    }

    /// Run the guard for `page`; only a `Render` decision lets the page open.
    fn enter(&self, page: Page) -> Result<(), CliError> {
        match self.guard(page.path()).evaluate() {
            GuardDecision::Render => Ok(()),
            GuardDecision::Redirect(LOGIN_PATH) => Err(CliError::NotSignedIn),
            other => {
                tracing::debug!(path = page.path(), decision = ?other, "page not rendered");
                Err(CliError::Unrenderable(page.path().to_owned()))
            }
        }
    }

    fn require(&self, page: Page, action: Action) -> Result<(), CliError> {
        let perms = self.store.permissions();
        if page.allows(&perms, action) {
            return Ok(());
        }
        let required = page
            .required_permission(action)
            .map_or_else(|| "a signed-in session".to_owned(), |p| p.to_string());
        Err(CliError::PermissionDenied(page.title(), required))
    }

    /// Expire the session when the API rejects the token.
    fn check<T>(&self, result: Result<T, ApiError>) -> Result<T, CliError> {
        result.map_err(|error| {
            if error.is_unauthorized() {
                self.store.expire();
            }
            CliError::Api(error)
        })
    }

    fn dashboard(&self) -> Value {
        let perms = self.store.permissions();
        json!({
            "user": perms.user(),
            "menu": shell::visible_pages(&perms),
        })
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run(Cli::parse()).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = DashboardConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    if let Some(token_file) = cli.token_file {
        config = config.with_token_file(token_file);
    }
    tracing::debug!(base_url = %config.api_base_url, token_file = %config.token_file.display(), "configuration loaded");

    let shell = Shell::start(&config).await?;

    match cli.command {
        Command::Login { username, password } => run_login(&shell, Credentials::new(username, password)).await,
        Command::Logout => run_logout(&shell).await,
        Command::Whoami => {
            shell.enter(Page::Dashboard)?;
            print_json(&json!(shell.store.permissions().user()))
        }
        Command::Dashboard => {
            shell.enter(Page::Dashboard)?;
            print_json(&shell.dashboard())
        }
        Command::Open { path } => run_open(&shell, &path),
        Command::Prisons(args) => run_resource(&shell, Page::Prisons, args.command).await,
        Command::Users(args) => run_resource(&shell, Page::Users, args.command).await,
        Command::Visitors(args) => run_resource(&shell, Page::Visitors, args.command).await,
        Command::Visits(args) => run_resource(&shell, Page::Visits, args.command).await,
        Command::WorkRecords(args) => run_resource(&shell, Page::WorkRecords, args.command).await,
        Command::BehaviourRecords(args) => run_resource(&shell, Page::BehaviourRecords, args.command).await,
    }
}

async fn run_login(shell: &Shell, credentials: Credentials) -> Result<(), CliError> {
    let mut guard = shell.guard(LOGIN_PATH);
    if guard.evaluate() == GuardDecision::Render {
        shell.store.login(&credentials).await?;
    }
    // Signed in now (or already was), so the login page redirects to the landing page.
    match guard.settle() {
        GuardDecision::Render => print_json(&shell.dashboard()),
        other => Err(CliError::Unrenderable(format!("{} ({other:?})", guard.path()))),
    }
}

async fn run_logout(shell: &Shell) -> Result<(), CliError> {
    if let Some(notify) = shell.store.logout() {
        if tokio::time::timeout(LOGOUT_NOTIFY_TIMEOUT, notify).await.is_err() {
            tracing::debug!("server logout notification still pending; exiting anyway");
        }
    }
    print_json(&json!({ "signedOut": true }))
}

fn run_open(shell: &Shell, path: &str) -> Result<(), CliError> {
    let guard = shell.guard(path);
    let decision = guard.evaluate();
    let (kind, target) = match decision {
        GuardDecision::Placeholder => ("placeholder", None),
        GuardDecision::Redirect(target) => ("redirect", Some(target)),
        GuardDecision::Render => ("render", None),
        GuardDecision::Blank => ("blank", None),
    };
    let allowed = decision.renders_content()
        && Page::from_path(path).is_some_and(|page| page.allows(&shell.store.permissions(), Action::Read));
    print_json(&json!({
        "path": path,
        "decision": kind,
        "redirectTo": target,
        "allowed": allowed,
    }))
}

async fn run_resource(shell: &Shell, page: Page, command: ResourceCommand) -> Result<(), CliError> {
    shell.enter(page)?;
    shell.require(page, command.action())?;
    let Some(resource) = page.resource() else {
        return Err(CliError::Unrenderable(page.path().to_owned()));
    };
    let client = &shell.client;

    let result = match command {
        ResourceCommand::List(args) => {
            let query = list_query(shell, resource, args)?;
            match resource {
                Resource::Prisons => prisons::list_prisons(client, &query).await,
                Resource::Users => users::list_users(client, &query).await,
                Resource::Visitors => visitors::list_visitors(client, &query).await,
                Resource::Visits => visits::list_visits(client, &query).await,
                Resource::WorkRecords => work_records::list_work_records(client, &query).await,
                Resource::BehaviourRecords => behaviour_records::list_behaviour_records(client, &query).await,
            }
        }
        ResourceCommand::Get { id } => match resource {
            Resource::Prisons => prisons::get_prison(client, &id).await,
            Resource::Users => users::get_user(client, &id).await,
            Resource::Visitors => visitors::get_visitor(client, &id).await,
            Resource::Visits => visits::get_visit(client, &id).await,
            Resource::WorkRecords => work_records::get_work_record(client, &id).await,
            Resource::BehaviourRecords => behaviour_records::get_behaviour_record(client, &id).await,
        },
        ResourceCommand::Create { data } => {
            let body = serde_json::from_str::<Value>(&data)?;
            match resource {
                Resource::Prisons => prisons::create_prison(client, &body).await,
                Resource::Users => users::create_user(client, &body).await,
                Resource::Visitors => visitors::create_visitor(client, &body).await,
                Resource::Visits => visits::create_visit(client, &body).await,
                Resource::WorkRecords => work_records::create_work_record(client, &body).await,
                Resource::BehaviourRecords => behaviour_records::create_behaviour_record(client, &body).await,
            }
        }
        ResourceCommand::Update { id, data } => {
            let body = serde_json::from_str::<Value>(&data)?;
            match resource {
                Resource::Prisons => prisons::update_prison(client, &id, &body).await,
                Resource::Users => users::update_user(client, &id, &body).await,
                Resource::Visitors => visitors::update_visitor(client, &id, &body).await,
                Resource::Visits => visits::update_visit(client, &id, &body).await,
                Resource::WorkRecords => work_records::update_work_record(client, &id, &body).await,
                Resource::BehaviourRecords => behaviour_records::update_behaviour_record(client, &id, &body).await,
            }
        }
        ResourceCommand::Delete { id } => match resource {
            Resource::Prisons => prisons::delete_prison(client, &id).await,
            Resource::Users => users::delete_user(client, &id).await,
            Resource::Visitors => visitors::delete_visitor(client, &id).await,
            Resource::Visits => visits::delete_visit(client, &id).await,
            Resource::WorkRecords => work_records::delete_work_record(client, &id).await,
            Resource::BehaviourRecords => behaviour_records::delete_behaviour_record(client, &id).await,
        },
        ResourceCommand::Status { id, value } => match resource {
            Resource::Users => users::set_user_active(client, &id, parse_active(&value)?).await,
            Resource::Visits => visits::update_visit_status(client, &id, &value).await,
            _ => return Err(CliError::StatusUnsupported),
        },
    };

    let json = shell.check(result)?;
    print_json(&json)
}

fn list_query(shell: &Shell, resource: Resource, args: ListArgs) -> Result<ListQuery, CliError> {
    let perms = shell.store.permissions();
    // Prison records are not scoped by prison; everything else is.
    let prison_id = if resource == Resource::Prisons {
        args.prison_id
    } else {
        shell::prison_scope(&perms, args.prison_id.as_deref())?
    };
    Ok(ListQuery { page: args.page, limit: args.limit, search: args.search, prison_id, status: args.status })
}

fn parse_active(raw: &str) -> Result<bool, CliError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "active" | "true" | "1" | "on" => Ok(true),
        "inactive" | "false" | "0" | "off" => Ok(false),
        _ => Err(CliError::InvalidStatus(raw.to_owned())),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
