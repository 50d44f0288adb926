//! Prompt builders for the generation backend. One function per feature,
//! language-switched; pure string construction so every prompt is
//! testable without touching the network.

use crate::cards::Period;
use crate::profile::Language;

pub fn translate_horoscope(text: &str, period: Period, target: Language) -> String {
    let period_word = match period {
        Period::Daily => "daily",
        Period::Weekly => "weekly",
        Period::Monthly => "monthly",
    };
    let language_name = match target {
        Language::Arabic => "Arabic",
        Language::French => "French",
        Language::English => "English",
    };
    format!(
        "Translate the following {period_word} horoscope into eloquent, mystical {language_name}. \
         Preserve the astrological tone. Do not add any introductory phrases. \
         Just provide the translated text directly.\n\n\
         Horoscope: \"{text}\"\n\n{language_name} Translation:"
    )
}

pub fn generated_horoscope(sign_label: &str, period: Period, language: Language) -> String {
    match language {
        Language::Arabic => format!(
            "أنت عالم فلك خبير. اكتب طالعًا {} غامضًا وثاقبًا لبرج {sign_label}. \
             يجب أن تكون النبرة مشجعة ومتوافقة مع علم التنجيم التقليدي. \
             لا تستخدم أي مقدمات. يجب أن تكون الإجابة باللغة العربية.",
            period.label(Language::Arabic)
        ),
        Language::French => format!(
            "Agissez en tant qu'astrologue expert. Rédigez un horoscope {} mystique et \
             perspicace pour le signe du zodiaque {sign_label}. Le ton doit être encourageant \
             et aligné sur l'astrologie traditionnelle. N'ajoutez aucune phrase d'introduction. \
             La réponse doit être entièrement en français.",
            period.label(Language::French)
        ),
        Language::English => format!(
            "Act as an expert astrologer. Write a mystical and insightful {} horoscope for \
             the zodiac sign {sign_label}. The tone should be encouraging and aligned with \
             traditional astrology. Do not add any introductory phrases. \
             The response must be in English.",
            period.label(Language::English)
        ),
    }
}

pub fn tarot_interpretation(card_name: &str, language: Language) -> String {
    match language {
        Language::Arabic => format!(
            "Act as a wise and intuitive tarot reader. Provide a mystical and insightful \
             interpretation in Arabic for the Tarot card: \"{card_name}\".\n\
             Explain its core meaning, its upright significance, and what message it might \
             hold for someone who has drawn it today. The tone should be supportive and empowering."
        ),
        Language::French => format!(
            "Agissez en tant que lecteur de tarot sage et intuitif. Fournissez une \
             interprétation mystique et perspicace en français pour la carte de Tarot : \
             \"{card_name}\".\n\
             Expliquez sa signification principale, sa signification droite, et quel message \
             elle pourrait contenir pour quelqu'un qui l'a tirée aujourd'hui. Le ton doit être \
             encourageant et responsabilisant."
        ),
        Language::English => format!(
            "Act as a wise and intuitive tarot reader. Provide a mystical and insightful \
             interpretation in English for the Tarot card: \"{card_name}\".\n\
             Explain its core meaning, its upright significance, and what message it might \
             hold for someone who has drawn it today. The tone should be supportive and empowering."
        ),
    }
}

pub fn numerology_report(name: &str, dob: &str, gematria_value: u32, language: Language) -> String {
    match language {
        Language::Arabic => format!(
            "Provide a mystical and insightful personality analysis in Arabic based on \
             Numerology and Gematria (حساب الجُمَّل).\n\
             Name: \"{name}\" (Gematria Value: {gematria_value})\n\
             Date of Birth: {dob}\n\
             Calculate their Life Path Number from the date of birth and combine it with the \
             Gematria analysis of the name to create a complete, insightful, and positive \
             spiritual profile. The tone should be spiritual and encouraging. \
             The response must be in Arabic."
        ),
        Language::French => format!(
            "Agissez en tant que numérologue mystique. Fournissez une analyse de personnalité \
             perspicace en français basée sur la numérologie et la gématrie (حساب الجُمَّل).\n\
             Nom : \"{name}\" (Valeur Gematria : {gematria_value})\n\
             Date de naissance : {dob}\n\
             Calculez leur numéro de chemin de vie à partir de la date de naissance et \
             combinez-le avec l'analyse gématrique du nom pour créer un profil spirituel \
             complet, perspicace et positif. Le ton doit être spirituel et encourageant. \
             La réponse doit être entièrement en français."
        ),
        Language::English => format!(
            "Provide a mystical and insightful personality analysis in English based on \
             Numerology and Gematria (حساب الجُمَّل).\n\
             Name: \"{name}\" (Gematria Value: {gematria_value})\n\
             Date of Birth: {dob}\n\
             Calculate their Life Path Number from the date of birth and combine it with the \
             Gematria analysis of the name to create a complete, insightful, and positive \
             spiritual profile. The tone should be spiritual and encouraging. \
             The response must be in English."
        ),
    }
}

pub fn love_analysis(name1: &str, name2: &str, percentage: u8, language: Language) -> String {
    match language {
        Language::Arabic => format!(
            "Provide a romantic compatibility analysis for two people, {name1} and {name2}.\n\
             Their calculated compatibility score is {percentage}%.\n\
             Write a warm, insightful, and encouraging analysis in Arabic. Discuss their \
             potential strengths as a couple and areas for growth. The tone should be positive \
             and suitable for a love compatibility reading."
        ),
        Language::French => format!(
            "Agissez en tant que conseiller en relations. Fournissez une analyse de \
             compatibilité amoureuse pour {name1} et {name2}.\n\
             Leur score de compatibilité calculé est de {percentage}%.\n\
             Rédigez une analyse chaleureuse, perspicace et encourageante en français. \
             Discutez de leurs forces potentielles en tant que couple et des domaines de \
             croissance. Le ton doit être positif et adapté à une lecture de compatibilité \
             amoureuse."
        ),
        Language::English => format!(
            "Provide a romantic compatibility analysis for two people, {name1} and {name2}.\n\
             Their calculated compatibility score is {percentage}%.\n\
             Write a warm, insightful, and encouraging analysis in English. Discuss their \
             potential strengths as a couple and areas for growth. The tone should be positive \
             and suitable for a love compatibility reading."
        ),
    }
}

pub fn zodiac_analysis(sign1_label: &str, sign2_label: &str, language: Language) -> String {
    match language {
        Language::Arabic => format!(
            "Provide a detailed zodiac compatibility analysis in Arabic between {sign1_label} \
             and {sign2_label}.\n\
             Discuss their potential for friendship, love, and partnership. Highlight both the \
             harmonious aspects and potential challenges in their relationship. The tone \
             should be that of an experienced astrologer."
        ),
        Language::French => format!(
            "Agissez en tant qu'astrologue expérimenté. Fournissez une analyse détaillée de la \
             compatibilité zodiacale en français entre {sign1_label} et {sign2_label}.\n\
             Discutez de leur potentiel d'amitié, d'amour et de partenariat. Mettez en évidence \
             à la fois les aspects harmonieux et les défis potentiels de leur relation. \
             La réponse doit être entièrement en français."
        ),
        Language::English => format!(
            "Provide a detailed zodiac compatibility analysis in English between {sign1_label} \
             and {sign2_label}.\n\
             Discuss their potential for friendship, love, and partnership. Highlight both the \
             harmonious aspects and potential challenges in their relationship. The tone \
             should be that of an experienced astrologer."
        ),
    }
}

pub fn talee_reading(name: &str, mothers_name: &str, gender: &str, language: Language) -> String {
    match language {
        Language::Arabic => format!(
            "أنتِ \"شوافة\" مغربية حكيمة وخبيرة في كشف الطالع. طالب الكشف هو ({gender}) \
             واسمه \"{name}\"، وأمه هي السيدة \"{mothers_name}\". يطلب منك أن تكشفي له طالعه.\n\
             مهم جداً: يجب أن تكون القراءة موجهة بشكل كامل لجنس طالب الكشف ({gender})، \
             باستخدام الضمائر والتعبيرات المؤنثة أو المذكرة بشكل صحيح.\n\
             قدمي له/لها قراءة روحانية مفصلة ومبشرة بالخير باللهجة المغربية (الدارجة). يجب أن \
             تكون القراءة غامضة، مليئة بالأمل، وتغطي جوانب حياته المهمة مثل الحب، العمل، \
             والصحة. ابدئي القراءة مباشرة بأسلوب تقليدي وجذاب."
        ),
        Language::French => format!(
            "Agis en tant que voyante marocaine (\"Chouwafa\") sage et experte. Une personne de \
             sexe \"{gender}\" nommée \"{name}\", dont la mère est \"{mothers_name}\", demande \
             une lecture de son destin (الطالع).\n\
             Très important : la lecture doit être entièrement genrée pour correspondre au sexe \
             de la personne ({gender}), en utilisant les pronoms et adjectifs corrects.\n\
             Fournis une lecture spirituelle détaillée et optimiste en français, mais en \
             conservant un ton et un style mystique marocain authentique. La lecture doit \
             couvrir des aspects importants de sa vie comme l'amour, le travail et la santé. \
             Commence la réponse directement dans un style traditionnel et captivant."
        ),
        Language::English => format!(
            "Act as a wise and expert Moroccan seer (\"Chouwafa\"). A person, who is {gender}, \
             named \"{name}\", whose mother is \"{mothers_name}\", asks for a destiny reading \
             (الطالع).\n\
             Very important: The reading must be fully gendered to match the person's gender \
             ({gender}), using correct pronouns and adjectives.\n\
             Provide a detailed and hopeful spiritual reading in English, but maintain an \
             authentic mystical Moroccan tone and style. The reading should cover important \
             aspects of their life such as love, work, and health. Start the reading directly \
             in a traditional and engaging manner."
        ),
    }
}

pub fn gematria_message(name: &str, gematria_value: u32, language: Language) -> String {
    match language {
        Language::Arabic => format!(
            "أنت خبير روحاني في \"حساب الجُمَّل\". اسم الشخص هو \"{name}\" وقيمته الرقمية هي \
             {gematria_value}.\n\
             قدم له رسالة اليوم بناءً على هذا الرقم. يجب أن تكون الرسالة عميقة، إيجابية، \
             وملهمة بأسلوب روحاني ومشجع. يجب أن تكون الإجابة باللغة العربية."
        ),
        Language::French => format!(
            "Agissez en tant qu'expert mystique en Gématrie arabe (\"حساب الجُمَّل\"). Le nom \
             de la personne est \"{name}\" et sa valeur numérique est {gematria_value}.\n\
             Fournissez un \"message du jour\" basé sur ce nombre. Le message doit être \
             perspicace, positif et inspirant dans un style spirituel et encourageant. \
             La réponse doit être entièrement en français."
        ),
        Language::English => format!(
            "Act as a mystical expert in Arabic Gematria (\"حساب الجُمَّل\"). The person's \
             name is \"{name}\" and its numerical value is {gematria_value}.\n\
             Provide a \"message for the day\" based on this number. The message should be \
             insightful, positive, and inspiring in a spiritual and encouraging tone. \
             The response must be in English."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_embed_their_inputs() {
        let p = numerology_report("Sara", "1990-04-12", 266, Language::English);
        assert!(p.contains("\"Sara\""));
        assert!(p.contains("1990-04-12"));
        assert!(p.contains("266"));

        let p = love_analysis("Omar", "Lina", 87, Language::French);
        assert!(p.contains("Omar") && p.contains("Lina") && p.contains("87%"));
    }

    #[test]
    fn translation_prompt_names_period_and_target() {
        let p = translate_horoscope("stars align", Period::Weekly, Language::Arabic);
        assert!(p.contains("weekly"));
        assert!(p.contains("Arabic Translation:"));
        assert!(p.contains("\"stars align\""));
    }

    #[test]
    fn language_selects_the_instruction_text() {
        let ar = generated_horoscope("الأسد", Period::Monthly, Language::Arabic);
        assert!(ar.contains("الشهري"));
        let fr = generated_horoscope("Lion", Period::Monthly, Language::French);
        assert!(fr.contains("mensuel"));
    }
}
