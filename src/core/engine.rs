use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct VersionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> VersionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Fetching published project list...");
        let catalog = self.pipeline.extract().await?;
        println!("Fetched {} project names", catalog.len());

        println!("Selecting latest versions...");
        let selection = self.pipeline.transform(catalog).await?;
        println!("Selected {} versions", selection.versions.len());

        println!("Writing version exports...");
        let output_path = self.pipeline.load(selection).await?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
