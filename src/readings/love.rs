use super::{CompatibilityOutcome, ReadingError, Readings, prompts, require_input};
use crate::generation::StreamEvent;
use crate::history::ReadingKind;
use crate::scoring;
use tokio::sync::mpsc;

fn love_title(name1: &str, name2: &str) -> String {
    format!("{name1} ♥ {name2}")
}

impl Readings {
    /// Romantic compatibility. Same analysis prompt as the names mode of
    /// the compatibility feature, but scored on the wider 50–100 band and
    /// cached under its own title.
    pub async fn love_compatibility(
        &self,
        name1: &str,
        name2: &str,
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<CompatibilityOutcome, ReadingError> {
        require_input(name1, "Both names are required")?;
        require_input(name2, "Both names are required")?;

        let (name1, name2) = (name1.trim(), name2.trim());
        let language = self.profile().language().await;
        let title = love_title(name1, name2);
        let percentage = scoring::love_compatibility(name1, name2);

        let outcome = self
            .cached_or_generate(ReadingKind::Compatibility, title, |_| true, || async {
                let prompt = prompts::love_analysis(name1, name2, percentage, language);
                Ok(self.generator().generate_stream(&prompt, tx.clone()).await?)
            })
            .await?;

        Ok(CompatibilityOutcome { percentage, outcome })
    }
}
