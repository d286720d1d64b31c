//! Generate command handler

use std::fs;
use std::path::Path;

use tracing::info;

use crate::ai::CompletionClient;
use crate::cli::commands::GenerateArgs;
use crate::core::config::Config;
use crate::core::credentials::CredentialStore;
use crate::error::{PrDraftError, Result};
use crate::prompt::{build_prompt_at, PreparedPrompt};

/// Handle the generate command
pub async fn handle_generate(args: GenerateArgs) -> Result<()> {
    let config = Config::load()?;

    // An empty template reaches the renderer, which reports it as missing
    let template = match &args.template_file {
        Some(path) => fs::read_to_string(path)?,
        None => config.template().unwrap_or_default().to_string(),
    };

    let prepared = prepare_in_background(args.path.clone(), template).await?;
    eprintln!(
        "{} → {} ({} commits, ticket: {})",
        prepared.branches.current, prepared.branches.base, prepared.commit_count, prepared.ticket
    );

    if args.prompt_only {
        return emit(&prepared.prompt, args.output.as_deref());
    }

    let api_key = CredentialStore::require_api_key()?;
    let client = CompletionClient::new(&config, api_key);
    eprintln!("Generating PR description with {}...", client.model_name());

    let description = client.generate_pr_description(&prepared.prompt).await?;
    emit(&description, args.output.as_deref())
}

/// Run the git pipeline on a blocking thread; each run opens its own repository
async fn prepare_in_background(
    path: std::path::PathBuf,
    template: String,
) -> Result<PreparedPrompt> {
    tokio::task::spawn_blocking(move || build_prompt_at(path, &template))
        .await
        .map_err(|e| PrDraftError::Task(e.to_string()))?
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, format!("{}\n", text))?;
            info!(path = %path.display(), "wrote output");
            eprintln!("✓ Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
