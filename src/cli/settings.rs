//! Analysis settings subcommands: model selection and API credential.
//!
//! Both settings live in the keyed store (`model_config` and `user_api_key`)
//! so they travel with backup/restore.

use crate::analysis::{find_model, AVAILABLE_MODELS, DEFAULT_MODEL};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::storage::{ModelConfig, QuotaGuard, StoredApiKey, MODEL_CONFIG_KEY, USER_API_KEY};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::Path;

/// Select the analysis model.
#[derive(Parser, Debug)]
pub struct ModelCommand {
    #[command(subcommand)]
    pub action: ModelAction,
}

/// Model selection actions.
#[derive(Subcommand, Debug)]
pub enum ModelAction {
    /// Show the currently selected model
    Show,

    /// List the selectable model catalog
    List,

    /// Select a model by ID
    Set {
        /// Model ID from the catalog
        id: String,
    },
}

impl ModelCommand {
    /// Execute the model command.
    pub fn execute(&self, store_dir: Option<&Path>, quiet: bool) -> CliResult<()> {
        let mut repo = super::open_archive(store_dir)?;

        match &self.action {
            ModelAction::Show => {
                let selected = repo
                    .store()
                    .get::<ModelConfig>(MODEL_CONFIG_KEY)
                    .map(|c| c.model)
                    .unwrap_or_else(|| DEFAULT_MODEL.to_string());
                println!("{}", selected);
                Ok(())
            }
            ModelAction::List => {
                for model in AVAILABLE_MODELS {
                    println!(
                        "{:<24} {:<6} {}",
                        model.id,
                        model.tier.to_string(),
                        model.description
                    );
                }
                Ok(())
            }
            ModelAction::Set { id } => {
                let model = find_model(id).ok_or_else(|| {
                    CliError::Other(format!(
                        "unknown model '{}' (see 'linksnap model list')",
                        id
                    ))
                })?;

                QuotaGuard::new(repo.store_mut()).set(
                    MODEL_CONFIG_KEY,
                    &ModelConfig {
                        model: model.id.to_string(),
                    },
                )?;

                if !quiet {
                    output::print_success(&format!("Model set to {}", model.name));
                }
                Ok(())
            }
        }
    }
}

/// Manage the analysis API credential.
#[derive(Parser, Debug)]
pub struct KeyCommand {
    #[command(subcommand)]
    pub action: KeyAction,
}

/// Credential actions.
#[derive(Subcommand, Debug)]
pub enum KeyAction {
    /// Store a credential
    Set {
        /// The API key (or set LINKSNAP_API_KEY)
        #[arg(env = "LINKSNAP_API_KEY")]
        key: String,
    },

    /// Remove the stored credential
    Clear,

    /// Report whether a credential is stored
    Status,
}

impl KeyCommand {
    /// Execute the key command.
    pub fn execute(&self, store_dir: Option<&Path>, quiet: bool) -> CliResult<()> {
        let mut repo = super::open_archive(store_dir)?;

        match &self.action {
            KeyAction::Set { key } => {
                if !valid_key_format(key) {
                    return Err(CliError::Other(
                        "invalid API key format (too short)".to_string(),
                    ));
                }

                QuotaGuard::new(repo.store_mut()).set(
                    USER_API_KEY,
                    &StoredApiKey {
                        key: key.clone(),
                        timestamp: Utc::now().timestamp_millis(),
                    },
                )?;

                if !quiet {
                    output::print_success("API key stored");
                }
                Ok(())
            }
            KeyAction::Clear => {
                repo.store_mut().remove(USER_API_KEY)?;
                if !quiet {
                    output::print_success("API key cleared");
                }
                Ok(())
            }
            KeyAction::Status => {
                let stored = repo.store().get::<StoredApiKey>(USER_API_KEY);
                match stored {
                    Some(_) => println!("A credential is stored."),
                    None => println!("No credential stored."),
                }
                Ok(())
            }
        }
    }
}

/// Basic credential format check before storing.
fn valid_key_format(key: &str) -> bool {
    key.len() > 20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        assert!(!valid_key_format("short"));
        assert!(valid_key_format("AIzaSyD-LongEnoughKey12345"));
    }
}
