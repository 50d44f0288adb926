use super::{ReadingError, ReadingOutcome, Readings, prompts, require_input};
use crate::generation::StreamEvent;
use crate::history::ReadingKind;
use crate::profile::Language;
use crate::scoring::gematria_value;
use tokio::sync::mpsc;

pub struct GematriaOutcome {
    /// Abjad value of the name, computed locally.
    pub value: u32,
    pub outcome: ReadingOutcome,
}

fn gematria_title(name: &str, language: Language) -> String {
    match language {
        Language::Arabic => format!("حساب الجُمَّل: {name}"),
        Language::English => format!("Gematria: {name}"),
        Language::French => format!("Gématrie : {name}"),
    }
}

fn value_label(language: Language) -> &'static str {
    match language {
        Language::Arabic => "قيمتك الرقمية هي",
        Language::English => "Your Gematria value is",
        Language::French => "Votre valeur Gematria est",
    }
}

/// The record keeps the value line in front of the generated message so a
/// cached reading can be shown without recomputing anything.
fn compose_record(value: u32, message: &str, language: Language) -> String {
    format!("**{} {value}**\n\n{message}", value_label(language))
}

impl Readings {
    /// Message of the day from the abjad value of the name.
    pub async fn gematria(
        &self,
        name: &str,
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<GematriaOutcome, ReadingError> {
        require_input(name, "Name is required")?;

        let name = name.trim();
        let language = self.profile().language().await;
        let title = gematria_title(name, language);
        let value = gematria_value(name);

        let outcome = self
            .cached_or_generate(ReadingKind::Gematria, title, |_| true, || async {
                let prompt = prompts::gematria_message(name, value, language);
                let message = self.generator().generate_stream(&prompt, tx.clone()).await?;
                if message.is_empty() {
                    return Ok(String::new());
                }
                Ok(compose_record(value, &message, language))
            })
            .await?;

        Ok(GematriaOutcome { value, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readings::testing::{ScriptedBackend, fixture, sink};

    #[tokio::test]
    async fn record_leads_with_the_value_line() {
        let backend = ScriptedBackend::ok(vec!["a bright message"]);
        let fx = fixture(backend).await;
        fx.profile.set_language(Language::English).await.unwrap();

        let result = fx.readings.gematria("اب", sink()).await.unwrap();
        assert_eq!(result.value, 3);
        assert_eq!(
            result.outcome.content,
            "**Your Gematria value is 3**\n\na bright message"
        );
        assert_eq!(result.outcome.title, "Gematria: اب");
    }

    #[tokio::test]
    async fn cached_reading_keeps_the_stored_value_line() {
        let backend = ScriptedBackend::ok(vec!["message"]);
        let fx = fixture(backend.clone()).await;

        let first = fx.readings.gematria("Sara", sink()).await.unwrap();
        let again = fx.readings.gematria("Sara", sink()).await.unwrap();
        assert!(again.outcome.from_cache);
        assert_eq!(again.outcome.content, first.outcome.content);
        assert_eq!(again.value, first.value);
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_generation_records_nothing() {
        let backend = ScriptedBackend::ok(vec![]);
        let fx = fixture(backend).await;
        let result = fx.readings.gematria("Sara", sink()).await.unwrap();
        assert!(result.outcome.content.is_empty());
        assert!(fx.history.is_empty().await);
    }

    #[test]
    fn titles_localize() {
        assert_eq!(gematria_title("Sara", Language::Arabic), "حساب الجُمَّل: Sara");
        assert_eq!(gematria_title("Sara", Language::French), "Gématrie : Sara");
    }
}
