//! Add subcommand implementation.
//!
//! Handles `linksnap add`, which archives one analyzed resource. The
//! analysis itself happens out of process: either a completed backend
//! response document is fed in with `--from-json`, or the metadata fields
//! are supplied directly.

use crate::analysis::{self, AnalysisRequest, Analyzer, FileAnalyzer, DEFAULT_MODEL};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::storage::{
    ModelConfig, QuotaGuard, StoredApiKey, MODEL_CONFIG_KEY, ONBOARDED_KEY, USER_API_KEY,
};
use crate::types::ScanResult;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Archive an analyzed resource.
#[derive(Parser, Debug)]
pub struct AddCommand {
    /// Path to a completed analysis response document (JSON)
    #[arg(long = "from-json", value_name = "PATH")]
    pub from_json: Option<PathBuf>,

    /// Resource address (bare domains are fine)
    #[arg(long)]
    pub url: Option<String>,

    /// Primary category label
    #[arg(long)]
    pub category: Option<String>,

    /// Finer-grained label
    #[arg(long = "sub-category", default_value = "General")]
    pub sub_category: String,

    /// Short description
    #[arg(long)]
    pub description: Option<String>,

    /// Pricing note (e.g. "Freemium")
    #[arg(long)]
    pub pricing: Option<String>,

    /// Host platform note
    #[arg(long)]
    pub platform: Option<String>,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(&self, store_dir: Option<&Path>, quiet: bool) -> CliResult<()> {
        let mut repo = super::open_archive(store_dir)?;

        let record = if let Some(path) = &self.from_json {
            let model = repo
                .store()
                .get::<ModelConfig>(MODEL_CONFIG_KEY)
                .map(|c| c.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string());
            let api_key = repo
                .store()
                .get::<StoredApiKey>(USER_API_KEY)
                .map(|k| k.key);

            let request = AnalysisRequest {
                base64_data: None,
                url: self.url.clone(),
                model,
                api_key,
            };

            // a failed analysis never creates a partial archive entry
            let response = FileAnalyzer::new(path).analyze(&request)?;
            ScanResult::from_analysis(response, None)
        } else {
            self.manual_record()?
        };

        let generic_platform = analysis::is_generic_platform(&record.url);
        let summary = output::format_entry_detail(&record);

        repo.insert(record)?;

        // first successful capture completes onboarding
        if repo.store().get::<bool>(ONBOARDED_KEY) != Some(true) {
            QuotaGuard::new(repo.store_mut()).set(ONBOARDED_KEY, &true)?;
        }

        if !quiet {
            output::print_success("Archived.");
            print!("{}", summary);

            if generic_platform {
                output::print_warning(
                    "The analysis identified the host platform. A closer crop of the featured content usually gives a better result.",
                );
            }
        }

        Ok(())
    }

    /// Build a record from directly supplied fields.
    fn manual_record(&self) -> CliResult<ScanResult> {
        let url = self
            .url
            .clone()
            .ok_or_else(|| CliError::Other("--url is required without --from-json".to_string()))?;
        let category = self.category.clone().ok_or_else(|| {
            CliError::Other("--category is required without --from-json".to_string())
        })?;
        let description = self.description.clone().ok_or_else(|| {
            CliError::Other("--description is required without --from-json".to_string())
        })?;

        let response = crate::analysis::AnalysisResponse {
            url,
            category,
            sub_category: self.sub_category.clone(),
            description,
            suggested_categories: None,
            pricing: self.pricing.clone(),
            platform: self.platform.clone(),
            image_data: None,
            sources: None,
        };

        Ok(ScanResult::from_analysis(response, None))
    }
}
