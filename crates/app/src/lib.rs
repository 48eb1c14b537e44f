//! Tukija - wiring and command handlers.
//!
//! The binary parses the command line and hands over to [`run`]; the
//! integration tests drive [`authenticate`] and [`execute`] directly with
//! their own adapters.

pub mod cli;
pub mod error;

use std::sync::Arc;

use tracing::{debug, info, warn};
use tukija_application::ports::{Authorizer, PromptError, TokenCache, UserPrompt};
use tukija_application::{
    AppContext, Authenticate, AuthenticateInput, CancellationReceiver, CancellationToken, SignOut,
    TokenOrigin,
};
use tukija_infrastructure::{
    FileSecretLoader, FileTokenCache, MembersCsvExporter, OAuth2Authorizer, Settings,
    TerminalPrompt, YouTubeClient, YouTubeClientBuilder,
};

pub use cli::{Cli, Command};
pub use error::AppError;

/// Context handed to command handlers.
pub type Context = AppContext<YouTubeClient>;

/// Runs one command with the adapters configured by `settings`.
///
/// Ctrl-C stops the run at any point and yields an interrupted error.
///
/// # Errors
/// Returns `AppError` if settings, authorization or the command fail.
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    if let Some(path) = cli.client_secret {
        settings.client_secret_path = path;
    }
    settings.open_browser |= cli.open_browser;

    let prompt = Arc::new(
        TerminalPrompt::stdio()
            .map_err(PromptError::Io)?
            .with_browser(settings.open_browser),
    );
    let cache: Arc<dyn TokenCache> = Arc::new(FileTokenCache::new(
        &settings.credentials_dir,
        &settings.token_file_name,
    ));
    let command = cli.command.unwrap_or_default();

    let cancel = CancellationToken::new();
    let interrupt = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        })
    };

    let result = run_command(&settings, cache, &command, prompt, &cancel).await;
    interrupt.abort();
    result
}

async fn run_command<P>(
    settings: &Settings,
    cache: Arc<dyn TokenCache>,
    command: &Command,
    prompt: Arc<P>,
    cancel: &CancellationToken,
) -> Result<(), AppError>
where
    P: UserPrompt + ?Sized + 'static,
{
    let mut context = if *command == Command::Signout {
        Context::unauthenticated()
    } else {
        let authorizer: Arc<dyn Authorizer> = Arc::new(OAuth2Authorizer::new()?);
        authenticate(
            settings,
            Arc::clone(&cache),
            authorizer,
            Arc::clone(&prompt),
            cancel.receiver(),
        )
        .await?
    };

    let mut interrupted = cancel.receiver();
    tokio::select! {
        result = execute(&mut context, command, cache, prompt.as_ref()) => result,
        () = interrupted.cancelled() => Err(AppError::Interrupted),
    }
}

/// Obtains an authenticated YouTube client.
///
/// Failures are shown to the user through `prompt` before being returned.
///
/// # Errors
/// Returns `AppError::Authenticate` if any step of the flow fails.
pub async fn authenticate<P>(
    settings: &Settings,
    cache: Arc<dyn TokenCache>,
    authorizer: Arc<dyn Authorizer>,
    prompt: Arc<P>,
    cancel: CancellationReceiver,
) -> Result<Context, AppError>
where
    P: UserPrompt + ?Sized + 'static,
{
    let builder = YouTubeClientBuilder::new(Arc::clone(&authorizer))
        .with_cache(Arc::clone(&cache))
        .with_base_url(settings.api_base_url.clone());
    let use_case = Authenticate::new(
        FileSecretLoader::new(),
        cache,
        authorizer,
        Arc::clone(&prompt),
        builder,
    );
    let input = AuthenticateInput {
        secret_path: settings.client_secret_path.clone(),
        scopes: settings.scopes.clone(),
    };

    let mut states = use_case.subscribe();
    let progress = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            debug!(state = state.message(), "Authorization state changed");
        }
    });

    let result = use_case.execute_with_cancellation(&input, cancel).await;
    drop(use_case);
    if let Err(e) = progress.await {
        warn!(error = %e, "Authorization state logger stopped");
    }

    match result {
        Ok(output) => {
            info!(origin = ?output.origin, path = %output.cache_path.display(), "Authorized");
            Ok(Context::authenticated(output.service, output.origin))
        }
        Err(e) => {
            if let Err(shown) = prompt.display_message(&format!("Error: {e}")).await {
                warn!(error = %shown, "Unable to show error");
            }
            Err(e.into())
        }
    }
}

/// Runs `command`, writing results to `out`.
///
/// `Signout` works on any context; every other command needs an
/// authenticated one.
///
/// # Errors
/// Returns `AppError` if the context is unauthenticated or the command fails.
pub async fn execute<P>(
    context: &mut Context,
    command: &Command,
    cache: Arc<dyn TokenCache>,
    out: &P,
) -> Result<(), AppError>
where
    P: UserPrompt + ?Sized,
{
    match command {
        Command::Auth => {
            context.service()?;
            let source = match context.token_origin() {
                Some(TokenOrigin::Web) => "new authorization",
                _ => "cached credentials",
            };
            out.display_message(&format!("Authorized using {source}"))
                .await?;
        }
        Command::Channel => {
            let id = context.service()?.my_channel_id().await?;
            out.display_message(&id).await?;
        }
        Command::Levels => {
            for level in context.service()?.membership_levels().await? {
                out.display_message(&format!(
                    "{}\t{}",
                    level.id, level.snippet.level_details.display_name
                ))
                .await?;
            }
        }
        Command::Members { level, output } => {
            let members = context.service()?.members(level.as_deref()).await?;
            info!(count = members.len(), "Listed members");

            if let Some(path) = output {
                MembersCsvExporter::write(path, &members).await?;
                out.display_message(&format!(
                    "Saved {} members to {}",
                    members.len(),
                    path.display()
                ))
                .await?;
                return Ok(());
            }

            for member in &members {
                let details = &member.snippet.member_details;
                let highest = member
                    .snippet
                    .memberships_details
                    .as_ref()
                    .and_then(|m| m.highest_accessible_level_display_name.as_deref())
                    .unwrap_or("-");
                out.display_message(&format!(
                    "{}\t{}\t{highest}",
                    details.channel_id, details.display_name
                ))
                .await?;
            }
        }
        Command::Signout => {
            SignOut::new(cache).execute(context).await?;
            out.display_message("Signed out").await?;
        }
    }

    Ok(())
}
