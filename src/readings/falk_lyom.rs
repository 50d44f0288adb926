use super::{
    CardReading, DrawnMoroccanCard, ReadingError, ReadingOutcome, Readings, require_input,
};
use crate::cards::{FalkCategory, MOROCCAN_CARDS};
use crate::falk_lyom::interpretations;
use crate::generation::StreamEvent;
use crate::history::ReadingKind;
use crate::profile::Language;
use rand::Rng;
use tokio::sync::mpsc;

#[derive(Debug)]
pub struct FalkLyomOutcome {
    pub card: DrawnMoroccanCard,
    pub interpretation: String,
    pub outcome: ReadingOutcome,
}

fn falk_title(category: FalkCategory, language: Language) -> String {
    let label = category.label(language);
    match language {
        Language::Arabic => format!("فال اليوم - {label}"),
        _ => format!("Falk Lyom - {label}"),
    }
}

impl Readings {
    /// The one fully offline feature: a random Moroccan card and a random
    /// pre-written interpretation from the local table. The caching
    /// protocol still applies, so one reading per category per day.
    pub async fn falk_lyom(
        &self,
        gender: &str,
        skin_tone: &str,
        category: FalkCategory,
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<FalkLyomOutcome, ReadingError> {
        require_input(gender, "Gender is required")?;
        require_input(skin_tone, "Skin tone is required")?;

        let language = self.profile().language().await;
        let title = falk_title(category, language);

        let outcome = self
            .cached_or_generate(ReadingKind::FalkLyom, title, |_| true, || async {
                let (card, entries, pick) = {
                    let mut rng = rand::rng();
                    let card = &MOROCCAN_CARDS[rng.random_range(0..MOROCCAN_CARDS.len())];
                    let entries = interpretations(language, card.key, category);
                    (card, entries, rng.random_range(0..3))
                };
                let entries = entries.ok_or_else(|| {
                    ReadingError::Validation(format!("No interpretations for card {}", card.key))
                })?;
                let interpretation = entries[pick].to_string();
                let _ = tx.send(StreamEvent::TextDelta(interpretation.clone())).await;
                let _ = tx.send(StreamEvent::Done).await;
                let reading = CardReading {
                    card: DrawnMoroccanCard::from(card),
                    interpretation,
                };
                serde_json::to_string(&reading).map_err(|e| ReadingError::Storage(e.into()))
            })
            .await?;

        let reading: CardReading<DrawnMoroccanCard> =
            serde_json::from_str(&outcome.content).map_err(|e| ReadingError::Storage(e.into()))?;
        Ok(FalkLyomOutcome {
            card: reading.card,
            interpretation: reading.interpretation,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::find_moroccan_card;
    use crate::readings::testing::{ScriptedBackend, fixture, sink};

    #[tokio::test]
    async fn reads_from_the_local_table_without_the_backend() {
        let backend = ScriptedBackend::ok(vec!["never used"]);
        let fx = fixture(backend.clone()).await;

        let result = fx
            .readings
            .falk_lyom("female", "fair", FalkCategory::Love, sink())
            .await
            .unwrap();
        assert_eq!(backend.call_count(), 0);

        let card = find_moroccan_card(&result.card.key).expect("a real deck card");
        let entries = interpretations(Language::Arabic, card.key, FalkCategory::Love).unwrap();
        assert!(entries.contains(&result.interpretation.as_str()));
        assert_eq!(fx.history.len().await, 1);
    }

    #[tokio::test]
    async fn same_category_same_day_reuses_the_record() {
        let fx = fixture(ScriptedBackend::ok(vec![])).await;
        let first = fx
            .readings
            .falk_lyom("female", "fair", FalkCategory::Luck, sink())
            .await
            .unwrap();
        let second = fx
            .readings
            .falk_lyom("female", "fair", FalkCategory::Luck, sink())
            .await
            .unwrap();
        assert!(second.outcome.from_cache);
        assert_eq!(second.card, first.card);
        assert_eq!(second.interpretation, first.interpretation);
        assert_eq!(fx.history.len().await, 1);

        // A different category is its own cache key.
        let other = fx
            .readings
            .falk_lyom("female", "fair", FalkCategory::Work, sink())
            .await
            .unwrap();
        assert!(!other.outcome.from_cache);
    }

    #[tokio::test]
    async fn missing_inputs_are_rejected() {
        let fx = fixture(ScriptedBackend::ok(vec![])).await;
        let err = fx
            .readings
            .falk_lyom("", "fair", FalkCategory::Love, sink())
            .await
            .unwrap_err();
        assert!(matches!(err, ReadingError::Validation(_)));
        assert!(fx.history.is_empty().await);
    }

    #[test]
    fn titles_localize_the_category() {
        assert_eq!(falk_title(FalkCategory::Love, Language::Arabic), "فال اليوم - الحب");
        assert_eq!(falk_title(FalkCategory::Work, Language::English), "Falk Lyom - Work");
    }
}
