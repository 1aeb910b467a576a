use serde::Deserialize;

/// Wire shape of the Copr `api_2/projects` listing. Only the project names
/// are consumed; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectListing {
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    pub project: CoprProject,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoprProject {
    pub name: String,
}

impl ProjectListing {
    /// 攤平成專案名稱列表 (name-version-release)
    pub fn into_names(self) -> Vec<String> {
        self.projects.into_iter().map(|e| e.project.name).collect()
    }
}

/// One selected build: the package we asked for, the shell variable it feeds,
/// and the version-release suffix picked from the catalog.
#[derive(Debug, Clone)]
pub struct ProjectVersion {
    pub project: String,
    pub var_name: String,
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct SelectionResult {
    pub versions: Vec<ProjectVersion>,
    pub env_output: String,
}
