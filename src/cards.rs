use crate::profile::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacSign {
    /// Stable identifier used in prompts, CLI args and the upstream API.
    pub value: &'static str,
    pub icon: &'static str,
    labels: [&'static str; 3], // ar, en, fr
}

impl ZodiacSign {
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Arabic => self.labels[0],
            Language::English => self.labels[1],
            Language::French => self.labels[2],
        }
    }
}

pub static ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign { value: "aries", icon: "♈", labels: ["الحمل", "Aries", "Bélier"] },
    ZodiacSign { value: "taurus", icon: "♉", labels: ["الثور", "Taurus", "Taureau"] },
    ZodiacSign { value: "gemini", icon: "♊", labels: ["الجوزاء", "Gemini", "Gémeaux"] },
    ZodiacSign { value: "cancer", icon: "♋", labels: ["السرطان", "Cancer", "Cancer"] },
    ZodiacSign { value: "leo", icon: "♌", labels: ["الأسد", "Leo", "Lion"] },
    ZodiacSign { value: "virgo", icon: "♍", labels: ["العذراء", "Virgo", "Vierge"] },
    ZodiacSign { value: "libra", icon: "♎", labels: ["الميزان", "Libra", "Balance"] },
    ZodiacSign { value: "scorpio", icon: "♏", labels: ["العقرب", "Scorpio", "Scorpion"] },
    ZodiacSign { value: "sagittarius", icon: "♐", labels: ["القوس", "Sagittarius", "Sagittaire"] },
    ZodiacSign { value: "capricorn", icon: "♑", labels: ["الجدي", "Capricorn", "Capricorne"] },
    ZodiacSign { value: "aquarius", icon: "♒", labels: ["الدلو", "Aquarius", "Verseau"] },
    ZodiacSign { value: "pisces", icon: "♓", labels: ["الحوت", "Pisces", "Poissons"] },
];

pub fn find_sign(value: &str) -> Option<&'static ZodiacSign> {
    ZODIAC_SIGNS.iter().find(|s| s.value.eq_ignore_ascii_case(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Daily, Language::Arabic) => "اليومي",
            (Self::Daily, Language::English) => "daily",
            (Self::Daily, Language::French) => "quotidien",
            (Self::Weekly, Language::Arabic) => "الأسبوعي",
            (Self::Weekly, Language::English) => "weekly",
            (Self::Weekly, Language::French) => "hebdomadaire",
            (Self::Monthly, Language::Arabic) => "الشهري",
            (Self::Monthly, Language::English) => "monthly",
            (Self::Monthly, Language::French) => "mensuel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TarotCard {
    pub english: &'static str,
    pub arabic: &'static str,
}

impl TarotCard {
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Arabic => self.arabic,
            _ => self.english,
        }
    }
}

/// The 22 major arcana.
pub static TAROT_CARDS: [TarotCard; 22] = [
    TarotCard { english: "The Fool", arabic: "الأحمق" },
    TarotCard { english: "The Magician", arabic: "الساحر" },
    TarotCard { english: "The High Priestess", arabic: "الكاهنة العليا" },
    TarotCard { english: "The Empress", arabic: "الإمبراطورة" },
    TarotCard { english: "The Emperor", arabic: "الإمبراطور" },
    TarotCard { english: "The Hierophant", arabic: "الكاهن" },
    TarotCard { english: "The Lovers", arabic: "العشاق" },
    TarotCard { english: "The Chariot", arabic: "العربة" },
    TarotCard { english: "Strength", arabic: "القوة" },
    TarotCard { english: "The Hermit", arabic: "الناسك" },
    TarotCard { english: "Wheel of Fortune", arabic: "عجلة الحظ" },
    TarotCard { english: "Justice", arabic: "العدالة" },
    TarotCard { english: "The Hanged Man", arabic: "الرجل المشنوق" },
    TarotCard { english: "Death", arabic: "الموت" },
    TarotCard { english: "Temperance", arabic: "الاعتدال" },
    TarotCard { english: "The Devil", arabic: "الشيطان" },
    TarotCard { english: "The Tower", arabic: "البرج" },
    TarotCard { english: "The Star", arabic: "النجمة" },
    TarotCard { english: "The Moon", arabic: "القمر" },
    TarotCard { english: "The Sun", arabic: "الشمس" },
    TarotCard { english: "Judgement", arabic: "الحكم" },
    TarotCard { english: "The World", arabic: "العالم" },
];

/// Moroccan card deck for the Falk Lyom feature. Card names are part of
/// the tradition and stay in Arabic in every language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoroccanCard {
    pub name: &'static str,
    pub key: &'static str,
}

pub static MOROCCAN_CARDS: [MoroccanCard; 12] = [
    MoroccanCard { name: "الصاحبة البيضة", key: "sahiba_bayda" },
    MoroccanCard { name: "الحنطية", key: "hantiya" },
    MoroccanCard { name: "السمرا", key: "samra" },
    MoroccanCard { name: "الفقيه", key: "fqih" },
    MoroccanCard { name: "الفلوس", key: "flouss" },
    MoroccanCard { name: "البحر", key: "bahr" },
    MoroccanCard { name: "الطريق", key: "triq" },
    MoroccanCard { name: "الدار", key: "dar" },
    MoroccanCard { name: "العدو", key: "adou" },
    MoroccanCard { name: "العتبة", key: "atba" },
    MoroccanCard { name: "سيد الرجال", key: "sid_rjal" },
    MoroccanCard { name: "لالة عايشة", key: "lalla_aicha" },
];

pub fn find_moroccan_card(key: &str) -> Option<&'static MoroccanCard> {
    MOROCCAN_CARDS.iter().find(|c| c.key == key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FalkCategory {
    Love,
    Work,
    Luck,
}

impl FalkCategory {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "love" => Some(Self::Love),
            "work" => Some(Self::Work),
            "luck" => Some(Self::Luck),
            _ => None,
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Love, Language::Arabic) => "الحب",
            (Self::Love, Language::English) => "Love",
            (Self::Love, Language::French) => "Amour",
            (Self::Work, Language::Arabic) => "العمل",
            (Self::Work, Language::English) => "Work",
            (Self::Work, Language::French) => "Travail",
            (Self::Luck, Language::Arabic) => "الحظ",
            (Self::Luck, Language::English) => "Luck",
            (Self::Luck, Language::French) => "Chance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_lookup_is_case_insensitive() {
        assert_eq!(find_sign("Leo").unwrap().label(Language::English), "Leo");
        assert_eq!(find_sign("leo").unwrap().label(Language::Arabic), "الأسد");
        assert!(find_sign("ophiuchus").is_none());
    }

    #[test]
    fn tarot_labels_fall_back_to_english_for_french() {
        let card = TAROT_CARDS[0];
        assert_eq!(card.label(Language::French), "The Fool");
        assert_eq!(card.label(Language::Arabic), "الأحمق");
    }

    #[test]
    fn moroccan_card_keys_are_unique() {
        let mut keys: Vec<_> = MOROCCAN_CARDS.iter().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), MOROCCAN_CARDS.len());
    }
}
