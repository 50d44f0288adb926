use super::{ReadingError, ReadingOutcome, Readings, prompts, require_input};
use crate::generation::StreamEvent;
use crate::history::ReadingKind;
use crate::profile::Language;
use crate::scoring::gematria_value;
use chrono::NaiveDate;
use tokio::sync::mpsc;

fn numerology_title(name: &str, dob: &str, language: Language) -> String {
    match language {
        Language::Arabic => format!("تحليل الأرقام: {name} ({dob})"),
        Language::English => format!("Numerology: {name} ({dob})"),
        Language::French => format!("Numérologie : {name} ({dob})"),
    }
}

impl Readings {
    /// Personality report from name and date of birth; the name's abjad
    /// value is computed locally and handed to the prompt.
    pub async fn numerology(
        &self,
        name: &str,
        dob: &str,
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<ReadingOutcome, ReadingError> {
        require_input(name, "Name is required")?;
        if NaiveDate::parse_from_str(dob, "%Y-%m-%d").is_err() {
            return Err(ReadingError::Validation(format!(
                "Date of birth must be YYYY-MM-DD, got: {dob}"
            )));
        }

        let name = name.trim();
        let language = self.profile().language().await;
        let title = numerology_title(name, dob, language);
        let value = gematria_value(name);

        self.cached_or_generate(ReadingKind::Numerology, title, |_| true, || async {
            let prompt = prompts::numerology_report(name, dob, value, language);
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
    async fn invalid_dob_is_rejected_locally() {
        let backend = ScriptedBackend::ok(vec!["report"]);
        let fx = fixture(backend.clone()).await;
        for dob in ["12-04-1990", "1990/04/12", "not-a-date", ""] {
            let err = fx
                .readings
                .numerology("Sara", dob, sink())
                .await
                .unwrap_err();
            assert!(matches!(err, ReadingError::Validation(_)), "accepted {dob}");
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn report_is_streamed_and_cached_per_name_and_dob() {
        let backend = ScriptedBackend::ok(vec!["your path ", "is bright"]);
        let fx = fixture(backend.clone()).await;
        fx.profile.set_language(Language::English).await.unwrap();

        let fresh = fx
            .readings
            .numerology("Sara", "1990-04-12", sink())
            .await
            .unwrap();
        assert_eq!(fresh.content, "your path is bright");
        assert_eq!(fresh.title, "Numerology: Sara (1990-04-12)");

        let again = fx
            .readings
            .numerology("Sara", "1990-04-12", sink())
            .await
            .unwrap();
        assert!(again.from_cache);
        assert_eq!(backend.call_count(), 1);

        // A different birth date is a different reading.
        let other = fx
            .readings
            .numerology("Sara", "1991-01-01", sink())
            .await
            .unwrap();
        assert!(!other.from_cache);
    }
}
