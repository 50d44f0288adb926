use super::{ReadingError, ReadingOutcome, Readings, prompts, require_input};
use crate::cards::find_sign;
use crate::generation::StreamEvent;
use crate::history::ReadingKind;
use crate::scoring;
use tokio::sync::mpsc;

pub struct CompatibilityOutcome {
    pub percentage: u8,
    pub outcome: ReadingOutcome,
}

fn pair_title(a: &str, b: &str) -> String {
    format!("{a} & {b}")
}

impl Readings {
    /// Zodiac-pair compatibility: no score, just a streamed analysis of
    /// the two signs.
    pub async fn zodiac_compatibility(
        &self,
        sign1_value: &str,
        sign2_value: &str,
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<ReadingOutcome, ReadingError> {
        let sign1 = find_sign(sign1_value).ok_or_else(|| {
            ReadingError::Validation(format!("Unknown zodiac sign: {sign1_value}"))
        })?;
        let sign2 = find_sign(sign2_value).ok_or_else(|| {
            ReadingError::Validation(format!("Unknown zodiac sign: {sign2_value}"))
        })?;

        let language = self.profile().language().await;
        let title = pair_title(sign1.label(language), sign2.label(language));

        self.cached_or_generate(ReadingKind::Compatibility, title, |_| true, || async {
            let prompt =
                prompts::zodiac_analysis(sign1.label(language), sign2.label(language), language);
            Ok(self.generator().generate_stream(&prompt, tx.clone()).await?)
        })
        .await
    }

    /// Name-pair compatibility: the deterministic percentage plus a
    /// streamed analysis built around it.
    pub async fn name_compatibility(
        &self,
        name1: &str,
        name2: &str,
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<CompatibilityOutcome, ReadingError> {
        require_input(name1, "Both names are required")?;
        require_input(name2, "Both names are required")?;

        let (name1, name2) = (name1.trim(), name2.trim());
        let language = self.profile().language().await;
        let title = pair_title(name1, name2);
        let percentage = scoring::name_compatibility(name1, name2);

        let outcome = self
            .cached_or_generate(ReadingKind::Compatibility, title, |_| true, || async {
                let prompt = prompts::love_analysis(name1, name2, percentage, language);
                Ok(self.generator().generate_stream(&prompt, tx.clone()).await?)
            })
            .await?;

        Ok(CompatibilityOutcome { percentage, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Language;
    use crate::readings::testing::{ScriptedBackend, fixture, sink};

    #[tokio::test]
    async fn zodiac_pair_is_cached_under_its_localized_title() {
        let backend = ScriptedBackend::ok(vec!["fire and air"]);
        let fx = fixture(backend.clone()).await;
        fx.profile.set_language(Language::English).await.unwrap();

        let outcome = fx
            .readings
            .zodiac_compatibility("leo", "gemini", sink())
            .await
            .unwrap();
        assert_eq!(outcome.title, "Leo & Gemini");
        assert!(!outcome.from_cache);

        let again = fx
            .readings
            .zodiac_compatibility("leo", "gemini", sink())
            .await
            .unwrap();
        assert!(again.from_cache);
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn name_pair_carries_the_deterministic_percentage() {
        let backend = ScriptedBackend::ok(vec!["a good match"]);
        let fx = fixture(backend).await;

        let result = fx
            .readings
            .name_compatibility("Sara", "Omar", sink())
            .await
            .unwrap();
        assert_eq!(result.percentage, scoring::name_compatibility("Sara", "Omar"));
        assert!((60..=100).contains(&result.percentage));
        assert_eq!(result.outcome.content, "a good match");
    }

    #[tokio::test]
    async fn blank_names_never_reach_the_backend() {
        let backend = ScriptedBackend::ok(vec!["text"]);
        let fx = fixture(backend.clone()).await;
        assert!(fx.readings.name_compatibility("  ", "Omar", sink()).await.is_err());
        assert!(fx.readings.name_compatibility("Sara", "", sink()).await.is_err());
        assert_eq!(backend.call_count(), 0);
        assert!(fx.history.is_empty().await);
    }
}
