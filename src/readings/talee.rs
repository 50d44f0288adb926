use super::{ReadingError, ReadingOutcome, Readings, prompts, require_input};
use crate::generation::StreamEvent;
use crate::history::ReadingKind;
use crate::profile::Language;
use tokio::sync::mpsc;

fn talee_title(name: &str, mothers_name: &str, language: Language) -> String {
    match language {
        Language::Arabic => format!("كشف الطالع: {name} ({mothers_name})"),
        Language::English => format!("Tale'e: {name} ({mothers_name})"),
        Language::French => format!("Tale'e : {name} ({mothers_name})"),
    }
}

impl Readings {
    /// Destiny reading in the Moroccan seer tradition, keyed by the
    /// seeker's name and their mother's name.
    pub async fn talee(
        &self,
        name: &str,
        mothers_name: &str,
        gender: &str,
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<ReadingOutcome, ReadingError> {
        require_input(name, "Name is required")?;
        require_input(mothers_name, "Mother's name is required")?;
        require_input(gender, "Gender is required")?;

        let (name, mothers_name, gender) = (name.trim(), mothers_name.trim(), gender.trim());
        let language = self.profile().language().await;
        let title = talee_title(name, mothers_name, language);

        self.cached_or_generate(ReadingKind::Talee, title, |_| true, || async {
            let prompt = prompts::talee_reading(name, mothers_name, gender, language);
            Ok(self.generator().generate_stream(&prompt, tx.clone()).await?)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::testing::{ScriptedBackend, fixture, sink};

    #[tokio::test]
    async fn title_pairs_seeker_with_mother() {
        let backend = ScriptedBackend::ok(vec!["الطالع زين"]);
        let fx = fixture(backend).await;
        fx.profile.set_language(Language::English).await.unwrap();

        let outcome = fx
            .readings
            .talee("Sara", "Fatima", "female", sink())
            .await
            .unwrap();
        assert_eq!(outcome.title, "Tale'e: Sara (Fatima)");
        assert_eq!(outcome.content, "الطالع زين");
    }

    #[tokio::test]
    async fn same_seeker_same_day_is_a_cache_hit() {
        let backend = ScriptedBackend::ok(vec!["reading"]);
        let fx = fixture(backend.clone()).await;

        fx.readings.talee("Sara", "Fatima", "female", sink()).await.unwrap();
        let again = fx
            .readings
            .talee("Sara", "Fatima", "female", sink())
            .await
            .unwrap();
        assert!(again.from_cache);
        assert_eq!(backend.call_count(), 1);

        // A different mother's name is a different title.
        let other = fx
            .readings
            .talee("Sara", "Aicha", "female", sink())
            .await
            .unwrap();
        assert!(!other.from_cache);
    }

    #[tokio::test]
    async fn all_three_inputs_are_required() {
        let backend = ScriptedBackend::ok(vec!["reading"]);
        let fx = fixture(backend.clone()).await;
        for (name, mother, gender) in [("", "Fatima", "female"), ("Sara", " ", "female"), ("Sara", "Fatima", "")] {
            let err = fx.readings.talee(name, mother, gender, sink()).await.unwrap_err();
            assert!(matches!(err, ReadingError::Validation(_)));
        }
        assert_eq!(backend.call_count(), 0);
        assert!(fx.history.is_empty().await);
    }
}
