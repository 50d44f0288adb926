use super::{CardReading, DrawnTarotCard, ReadingError, ReadingOutcome, Readings, prompts};
use crate::cards::TAROT_CARDS;
use crate::generation::StreamEvent;
use crate::history::ReadingKind;
use crate::profile::Language;
use rand::Rng;
use tokio::sync::mpsc;

pub struct TarotOutcome {
    pub card: DrawnTarotCard,
    pub interpretation: String,
    pub outcome: ReadingOutcome,
}

fn tarot_title(language: Language) -> &'static str {
    match language {
        Language::Arabic => "قراءة التاروت",
        Language::English => "Tarot Reading",
        Language::French => "Lecture de Tarot",
    }
}

impl Readings {
    /// Draws one major-arcana card and streams its interpretation. The
    /// recorded content is the drawn card and interpretation serialized
    /// together, so a cached hit restores both.
    pub async fn tarot(&self, tx: mpsc::Sender<StreamEvent>) -> Result<TarotOutcome, ReadingError> {
        let language = self.profile().language().await;
        let title = tarot_title(language).to_string();
        let card = {
            let idx = rand::rng().random_range(0..TAROT_CARDS.len());
            &TAROT_CARDS[idx]
        };

        let outcome = self
            .cached_or_generate(ReadingKind::Tarot, title, |_| true, || async {
                let prompt = prompts::tarot_interpretation(card.english, language);
                let interpretation = self.generator().generate_stream(&prompt, tx.clone()).await?;
                if interpretation.is_empty() {
                    return Ok(String::new());
                }
                let reading = CardReading {
                    card: DrawnTarotCard::from(card),
                    interpretation,
                };
                serde_json::to_string(&reading)
                    .map_err(|e| ReadingError::Storage(e.into()))
            })
            .await?;

        if outcome.content.is_empty() {
            return Ok(TarotOutcome {
                card: DrawnTarotCard::from(card),
                interpretation: String::new(),
                outcome,
            });
        }
        let reading: CardReading<DrawnTarotCard> =
            serde_json::from_str(&outcome.content).map_err(|e| ReadingError::Storage(e.into()))?;
        Ok(TarotOutcome {
            card: reading.card,
            interpretation: reading.interpretation,
            outcome,
        })
    }
}
