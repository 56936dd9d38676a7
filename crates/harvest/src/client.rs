//! Main Harvest struct and public API.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::bridge::{script, RBridge, RscriptBridge};
use crate::error::Result;
use crate::host::Table;
use crate::marshal::marshal;
use crate::survey::{self, SurveyDescriptor};

/// Configuration for survey retrieval.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// SurveyMonkey OAuth token handed to the R session.
    pub oauth_token: Option<String>,
    /// Maximum surveys to list.
    pub survey_limit: usize,
    /// Keep only responses with `response_status == "completed"`.
    pub completed_only: bool,
    /// `Rscript` executable (default: from `PATH`).
    pub rscript: Option<std::path::PathBuf>,
    /// `R_HOME` for spawned R processes.
    pub r_home: Option<std::path::PathBuf>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            oauth_token: None,
            survey_limit: 200,
            completed_only: true,
            rscript: None,
            r_home: None,
        }
    }
}

/// The survey retrieval client.
///
/// Listing and download calls are evaluated through the configured
/// [`RBridge`]; each resulting frame is marshaled into a host [`Table`]
/// before it is returned, so callers never see a foreign sentinel.
pub struct Harvest {
    config: HarvestConfig,
    bridge: Arc<dyn RBridge>,
}

impl Harvest {
    /// Create a client with default configuration and an `Rscript`
    /// bridge.
    pub fn new() -> Self {
        Self::with_config(HarvestConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: HarvestConfig) -> Self {
        let mut bridge = RscriptBridge::new();
        if let Some(token) = &config.oauth_token {
            bridge = bridge.with_token(token.clone());
        }
        if let Some(rscript) = &config.rscript {
            bridge = bridge.with_rscript(rscript.clone());
        }
        if let Some(r_home) = &config.r_home {
            bridge = bridge.with_r_home(r_home.clone());
        }

        Self {
            config,
            bridge: Arc::new(bridge),
        }
    }

    /// Replace the bridge (mocks in tests, preconfigured bridges
    /// otherwise).
    pub fn with_bridge(mut self, bridge: impl RBridge + 'static) -> Self {
        self.bridge = Arc::new(bridge);
        self
    }

    /// Name of the active bridge.
    pub fn bridge_name(&self) -> &str {
        self.bridge.name()
    }

    /// List available surveys.
    pub fn surveys(&self) -> Result<Vec<SurveyDescriptor>> {
        let fragment = script::browse_surveys(self.config.survey_limit);
        let frame = self.bridge.eval_frame(&fragment)?;
        let table = marshal(&frame)?;
        survey::descriptors_from_table(&table)
    }

    /// List surveys whose title matches `pattern`.
    pub fn filter_surveys(&self, pattern: &str) -> Result<Vec<SurveyDescriptor>> {
        let all = self.surveys()?;
        survey::filter_by_title(&all, pattern)
    }

    /// Download and marshal one survey's responses.
    pub fn download(&self, survey_id: u64) -> Result<Table> {
        let fragment = script::fetch_survey(survey_id, self.config.completed_only);
        let frame = self.bridge.eval_frame(&fragment)?;
        marshal(&frame)
    }

    /// Download several surveys, keeping per-survey outcomes.
    ///
    /// A failed download never aborts the batch and is never replaced by
    /// a placeholder table; callers get the error for that id.
    pub fn download_many(&self, survey_ids: &[u64]) -> IndexMap<u64, Result<Table>> {
        survey_ids
            .iter()
            .map(|&id| (id, self.download(id)))
            .collect()
    }
}

impl Default for Harvest {
    fn default() -> Self {
        Self::new()
    }
}
