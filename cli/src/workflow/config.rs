use anyhow::Context;
use hscore::ExecutionMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModeName {
    #[default]
    Sequential,
    Parallel,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub mode: ModeName,
    pub threads: Option<usize>,
    pub pretty: bool,
}

impl RunConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading run config {}", path_ref.display()))?;
        let config: RunConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing run config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Command-line flags win over the file; asking for threads implies parallel mode.
    pub fn with_overrides(mut self, parallel: bool, threads: Option<usize>, pretty: bool) -> Self {
        if parallel || threads.is_some() {
            self.mode = ModeName::Parallel;
        }
        if threads.is_some() {
            self.threads = threads;
        }
        self.pretty |= pretty;
        self
    }

    pub fn to_execution_mode(&self) -> ExecutionMode {
        match self.mode {
            ModeName::Sequential => ExecutionMode::Sequential,
            ModeName::Parallel => ExecutionMode::Parallel {
                threads: self.threads,
            },
        }
    }
}
