//! Template CLI command handlers

use std::fs;
use std::io::Write;
use std::process::Command;

use tracing::debug;

use crate::ai::prompts::STARTER_TEMPLATE;
use crate::cli::commands::TemplateCommand;
use crate::core::config::Config;
use crate::error::{PrDraftError, Result};

/// Handle template commands
pub fn handle_template(command: TemplateCommand) -> Result<()> {
    match command {
        TemplateCommand::Show => handle_show(),
        TemplateCommand::Edit => handle_edit(),
        TemplateCommand::Set { file } => handle_set(&fs::read_to_string(file)?),
        TemplateCommand::Clear => handle_clear(),
    }
}

fn handle_show() -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.require_template()?);
    Ok(())
}

fn handle_edit() -> Result<()> {
    let mut config = Config::load()?;
    let initial = config.template().unwrap_or(STARTER_TEMPLATE).to_string();

    let mut scratch = tempfile::Builder::new()
        .prefix("prdraft-template-")
        .suffix(".md")
        .tempfile()?;
    scratch.write_all(initial.as_bytes())?;
    scratch.flush()?;

    let (program, args) = editor_command(
        std::env::var("VISUAL").ok(),
        std::env::var("EDITOR").ok(),
    );
    debug!(%program, "opening template in editor");

    let status = Command::new(&program)
        .args(&args)
        .arg(scratch.path())
        .status()
        .map_err(|e| PrDraftError::InvalidInput(format!("Cannot start editor '{}': {}", program, e)))?;
    if !status.success() {
        return Err(PrDraftError::InvalidInput(format!(
            "Editor '{}' exited with {}",
            program, status
        )));
    }

    let edited = fs::read_to_string(scratch.path())?;
    if edited.trim().is_empty() {
        return Err(PrDraftError::Cancelled);
    }

    config.set_template(edited);
    config.save()?;
    println!("✓ PR template saved.");
    Ok(())
}

fn handle_set(contents: &str) -> Result<()> {
    if contents.trim().is_empty() {
        return Err(PrDraftError::InvalidInput("Template file is empty".to_string()));
    }

    let mut config = Config::load()?;
    config.set_template(contents.to_string());
    config.save()?;
    println!("✓ PR template saved.");
    Ok(())
}

fn handle_clear() -> Result<()> {
    let mut config = Config::load()?;
    config.template = None;
    config.save()?;
    println!("PR template has been removed.");
    Ok(())
}

/// Split the preferred editor into program and arguments (`code --wait`)
fn editor_command(visual: Option<String>, editor: Option<String>) -> (String, Vec<String>) {
    let line = visual
        .into_iter()
        .chain(editor)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "vi".to_string());

    let mut parts = line.split_whitespace().map(str::to_string);
    let program = parts.next().unwrap_or_else(|| "vi".to_string());
    (program, parts.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_prefers_visual() {
        let (program, args) =
            editor_command(Some("code --wait".to_string()), Some("nano".to_string()));
        assert_eq!(program, "code");
        assert_eq!(args, vec!["--wait"]);
    }

    #[test]
    fn test_editor_falls_back() {
        assert_eq!(
            editor_command(Some("  ".to_string()), Some("nano".to_string())).0,
            "nano"
        );
        assert_eq!(editor_command(None, None), ("vi".to_string(), Vec::new()));
    }

    #[test]
    fn test_set_rejects_blank_template() {
        assert!(matches!(
            handle_set("\n\n"),
            Err(PrDraftError::InvalidInput(_))
        ));
    }
}
