use crate::common::*;

#[doc = "A rendered chart on disk. Created by the chart service and handed to the notifier as-is."]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ReportArtifact {
    file_path: PathBuf,
    generated_at: DateTime<Local>,
}

impl ReportArtifact {
    pub fn file_name(&self) -> String {
        self.file_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "chart.png".to_string())
    }
}
