use crate::core::selector::latest_version;
use crate::core::{ConfigProvider, Pipeline, SelectionResult, Storage};
use crate::domain::model::{ProjectListing, ProjectVersion};
use crate::utils::error::{Result, VersionError};
use reqwest::Client;

/// Projects the container build consumes, with the shell variable each one
/// feeds. The order here is the line order of the output file.
const REQUIRED_PROJECTS: &[(&str, &str)] = &[
    ("libvirt", "LIBVIRT"),
    ("qemu", "QEMU"),
    ("seabios", "SEABIOS"),
];

pub const OUTPUT_FILENAME: &str = "container_versions";

pub struct VersionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> VersionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for VersionPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        let response = self.client.get(self.config.api_endpoint()).send().await?;

        tracing::debug!("API response status: {}", response.status());
        // 任何非 2xx 狀態都視為致命錯誤，不寫出任何檔案
        let body = response.error_for_status()?.bytes().await?;

        let listing: ProjectListing = serde_json::from_slice(&body)?;
        Ok(listing.into_names())
    }

    async fn transform(&self, catalog: Vec<String>) -> Result<SelectionResult> {
        let mut versions = Vec::with_capacity(REQUIRED_PROJECTS.len());
        let mut env_output = String::new();

        for (project, var_name) in REQUIRED_PROJECTS {
            let version =
                latest_version(&catalog, project).ok_or_else(|| VersionError::NoMatchingVersion {
                    project: project.to_string(),
                })?;

            tracing::debug!("Latest {} build: {}", project, version);
            env_output.push_str(&format!("export {}_VERSION=\"{}\"\n", var_name, version));
            versions.push(ProjectVersion {
                project: project.to_string(),
                var_name: var_name.to_string(),
                version,
            });
        }

        Ok(SelectionResult {
            versions,
            env_output,
        })
    }

    async fn load(&self, result: SelectionResult) -> Result<String> {
        let output_path = format!("{}/{}", self.config.output_path(), OUTPUT_FILENAME);

        println!("Generated:\n{}", result.env_output);

        tracing::debug!(
            "Writing version exports ({} bytes) to storage",
            result.env_output.len()
        );
        self.storage
            .write_file(OUTPUT_FILENAME, result.env_output.as_bytes())
            .await?;

        println!("Wrote to '{}'", OUTPUT_FILENAME);
        Ok(output_path)
    }
}
