use std::path::{Path, PathBuf};

use anyhow::Context;
use molar_config::MolarConfig;
use molar_core::reference::ReferenceData;
use molar_functions::{FunctionError, FunctionsClient, RemoteFields};
use molar_notes::{NoteAssistant, NotePipeline, Offline, PipelineOptions};

use crate::cli::subcommands::PipelineArgs;

/// Shared resources for one invocation.
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: MolarConfig,
}

impl AppContext {
    pub const fn new(project_root: PathBuf, config: MolarConfig) -> Self {
        Self {
            project_root,
            config,
        }
    }

    /// Load reference data from `explicit`, else from `notes.reference_path`
    /// resolved against the project root.
    pub fn reference(&self, explicit: Option<&Path>) -> anyhow::Result<ReferenceData> {
        let path = explicit.map_or_else(
            || self.project_root.join(&self.config.notes.reference_path),
            Path::to_path_buf,
        );
        ReferenceData::load(&path).with_context(|| {
            format!(
                "failed to load reference data from {} (pass --reference or set notes.reference_path)",
                path.display()
            )
        })
    }

    /// Build the note pipeline. Remote steps are on only when both the config
    /// and the per-run flags allow them, and the functions client is usable.
    pub fn pipeline(&self, args: PipelineArgs, offline: bool) -> NotePipeline<Assistant> {
        let options = PipelineOptions {
            correct: self.config.notes.ai_correction && !args.no_correct,
            remote_extract: self.config.notes.ai_extraction && !args.no_remote_extract,
        };
        NotePipeline::new(self.assistant(offline), options)
    }

    fn assistant(&self, offline: bool) -> Assistant {
        if offline || !self.config.functions.is_configured() {
            tracing::debug!(offline, "hosted functions disabled; using local matcher");
            return Assistant::Offline(Offline);
        }
        match FunctionsClient::new(&self.config.functions) {
            Ok(client) => Assistant::Remote(client),
            Err(error) => {
                tracing::warn!(%error, "failed to build functions client; using local matcher");
                Assistant::Offline(Offline)
            }
        }
    }
}

/// Either the hosted functions or nothing.
pub enum Assistant {
    Remote(FunctionsClient),
    Offline(Offline),
}

impl NoteAssistant for Assistant {
    async fn correct(&self, text: &str) -> Result<String, FunctionError> {
        match self {
            Self::Remote(client) => client.correct(text).await,
            Self::Offline(offline) => offline.correct(text).await,
        }
    }

    async fn extract(
        &self,
        text: &str,
        reference: &ReferenceData,
    ) -> Result<RemoteFields, FunctionError> {
        match self {
            Self::Remote(client) => NoteAssistant::extract(client, text, reference).await,
            Self::Offline(offline) => NoteAssistant::extract(offline, text, reference).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use molar_config::FunctionsConfig;

    use super::*;

    fn ctx(config: MolarConfig) -> AppContext {
        AppContext::new(PathBuf::from("."), config)
    }

    const fn args(no_correct: bool, no_remote_extract: bool) -> PipelineArgs {
        PipelineArgs {
            no_correct,
            no_remote_extract,
        }
    }

    #[test]
    fn unconfigured_functions_run_offline() {
        let pipeline = ctx(MolarConfig::default()).pipeline(args(false, false), false);
        assert!(matches!(pipeline.assistant(), Assistant::Offline(_)));
    }

    #[test]
    fn offline_flag_beats_configured_functions() {
        let config = MolarConfig {
            functions: FunctionsConfig {
                url: "https://abc.supabase.co".into(),
                anon_key: "anon".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let context = ctx(config);
        assert!(matches!(
            context.pipeline(args(false, false), true).assistant(),
            Assistant::Offline(_)
        ));
        assert!(matches!(
            context.pipeline(args(false, false), false).assistant(),
            Assistant::Remote(_)
        ));
    }

    #[test]
    fn flags_and_config_both_gate_remote_steps() {
        let mut config = MolarConfig::default();
        config.notes.ai_extraction = false;
        let options = ctx(config).pipeline(args(true, false), false).options();
        assert_eq!(
            options,
            PipelineOptions {
                correct: false,
                remote_extract: false,
            }
        );
    }

    #[test]
    fn missing_reference_file_names_the_path() {
        let temp = tempfile::TempDir::new().expect("tempdir should create");
        let context = AppContext::new(temp.path().to_path_buf(), MolarConfig::default());
        let error = context.reference(None).expect_err("no reference file");
        assert!(format!("{error:#}").contains("reference.json"));
    }
}
