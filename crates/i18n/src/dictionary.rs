//! Static translation tables.
//!
//! Both tables carry the same key set; elements tagged `data-i18n="<key>"`
//! take their text from here.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::Language;

const ITALIAN: &[(&str, &str)] = &[
    ("dark_toggle_title", "Attiva/Disattiva tema scuro"),
    ("lang_toggle_title", "Cambia lingua"),
    ("lang_toggle_label", "EN"),
    ("scroll_top_title", "Torna su"),
    ("detail_subtitle", "Scorri verticalmente per i dettagli"),
    ("projects_subtitle", "Tieni premuto e trascina →"),
    ("projects_title_left", "Pro"),
    ("projects_title_right", "getti"),
    ("topic_accessibility_title", "Accessibilità"),
    ("topic_accessibility_meta", "Analisi accessibilità di un sito web"),
    ("topic_wireframe1_title", "Wireframing Parte 1"),
    ("topic_wireframe1_meta", "Progettazione di 5 wireframing desktop"),
    ("topic_wireframe2_title", "Wireframing Parte 2"),
    ("topic_wireframe2_meta", "5 wireframing mobile"),
    ("topic_discovery_title", "Discovery UX"),
    ("topic_discovery_meta", "Case study e user journey map di un sito web"),
    ("topic_graphics_title", "Grafica"),
    ("topic_graphics_meta", "Brand identity per app di meditazione"),
    ("topic_htmlcss_title", "HTML & CSS"),
    ("topic_htmlcss_meta", "Sviluppo di un sito web personale con HTML e CSS"),
    ("topic_copywriting_title", "Copywriting"),
    ("topic_copywriting_meta", "Stesura di un articolo, sviluppo del tema e persona di riferimento, analisi del target"),
    ("social_instagram", "Instagram"),
    ("social_linkedin", "LinkedIn"),
    ("social_behance", "Behance"),
    ("topic_frontend_title", "Front end"),
    ("topic_frontend_meta", "HTML, CSS, JavaScript, performance"),
    ("topic_ui_title", "UI Design"),
    ("topic_ui_meta", "Design system, componenti, tipografia"),
    ("topic_prototype_title", "Prototyping"),
    ("topic_prototype_meta", "Figma, micro‑interazioni, user flow"),
    ("topic_brand_title", "Branding"),
    ("topic_brand_meta", "Logo, palette, composizione"),
    ("footer_eyebrow", "Non essere timido,"),
    ("footer_title", "Scrivimi"),
    ("footer_cta", "CONTATTAMI"),
    ("download_title", "Scarica il progetto (PDF)"),
    ("download_sub", "Versione completa dell’audit di accessibilità con evidenze e remediation plan."),
    ("download_btn", "Scarica PDF"),
    ("download_title_attr", "Scarica il progetto in PDF"),
    ("download_image", "Scarica allegato"),
    ("about_title_left", "Ab"),
    ("about_title_right", "out"),
    ("about_intro_lead", "Sono Giuseppe, italiano. Da 6+ anni curo UX/UI: creo interfacce chiare, accessibili e curate nei dettagli."),
    ("about_caption_aria", "Informazioni personali"),
    ("about_hello", "Ciao! Il mio nome è Giuseppe"),
    ("about_role", "UX/UI Designer & Web Designer"),
    ("about_p1", "Gioco con colori e idee da quando ero bambino, poi a 16 anni ho deciso di prenderla sul serio e mi sono buttato nel mondo del design. Da allora non ho più smesso di smanettare con web e UX/UI."),
    ("about_p2", "Amo il cinema e i videogiochi (spoiler: li analizzo come fossero progetti di design). Nei miei lavori cerco sempre di unire creatività e un pizzico di attenzione nerd ai dettagli."),
    ("about_p3", "Strumenti preferiti? Illustrator, Figma, Photoshop... ma anche HTML, CSS e JavaScript, perché le cose belle devono pure funzionare."),
    ("about_stat_projects", "progetti individuali"),
    ("about_stat_collab", "collaborazioni"),
    ("about_stat_years", "anni di esperienza"),
    ("about_intro_title", "Web Design Frontend, Graphic Design, Prototyping, UI/UX Design, User test, Copywriting."),
    ("about_direction_title", "Direzione"),
    ("about_direction_text", "Per me tutto parte dall’ascolto. Capire davvero il brief e le persone mi aiuta a definire obiettivi chiari, priorità e confini. Faccio ricerca, confronto competitor e pubblico e metto in ordine le idee per scegliere colori, tipografia e composizione con buon senso e coerenza."),
    ("about_design_title", "Design"),
    ("about_design_text", "Quando la direzione è chiara, passo al fare: esploro varianti, prototipo e semplifico finché l’interfaccia non è pulita, accessibile e piacevole da usare. Cerco soluzioni pratiche, dettagli curati e un tocco di personalità."),
    ("about_quote", "“Facciamo tutti delle scelte nella vita, ma alla fine sono le nostre scelte a fare noi.”"),
    ("about_quote_author", "— Andrew Ryan, BioShock"),
];

const ENGLISH: &[(&str, &str)] = &[
    ("dark_toggle_title", "Toggle Dark Mode"),
    ("lang_toggle_title", "Switch language"),
    ("lang_toggle_label", "IT"),
    ("scroll_top_title", "Scroll to Top"),
    ("detail_subtitle", "Scroll vertically for details"),
    ("projects_subtitle", "Hold and drag →"),
    ("projects_title_left", "Pro"),
    ("projects_title_right", "jects"),
    ("topic_accessibility_title", "Accessibility"),
    ("topic_accessibility_meta", "Accessibility analysis of a website"),
    ("topic_wireframe1_title", "Wireframing Part 1"),
    ("topic_wireframe1_meta", "Design of 5 desktop wireframes"),
    ("topic_wireframe2_title", "Wireframing Part 2"),
    ("topic_wireframe2_meta", "5 mobile wireframes"),
    ("topic_discovery_title", "UX Discovery"),
    ("topic_discovery_meta", "Case study and user journey map of a website"),
    ("topic_graphics_title", "Graphics"),
    ("topic_graphics_meta", "Brand identity for a meditation app"),
    ("topic_htmlcss_title", "HTML & CSS"),
    ("topic_htmlcss_meta", "Building a personal website with HTML and CSS"),
    ("topic_copywriting_title", "Copywriting"),
    ("topic_copywriting_meta", "Article writing, theme and persona definition, target analysis"),
    ("social_instagram", "Instagram"),
    ("social_linkedin", "LinkedIn"),
    ("social_behance", "Behance"),
    ("topic_frontend_title", "Front end"),
    ("topic_frontend_meta", "HTML, CSS, JavaScript, performance"),
    ("topic_ui_title", "UI Design"),
    ("topic_ui_meta", "Design system, components, typography"),
    ("topic_prototype_title", "Prototyping"),
    ("topic_prototype_meta", "Figma, micro‑interactions, user flow"),
    ("topic_brand_title", "Branding"),
    ("topic_brand_meta", "Logo, palette, composition"),
    ("footer_eyebrow", "Don't be shy,"),
    ("footer_title", "Say Hello"),
    ("footer_cta", "GET IN TOUCH"),
    ("download_title", "Download the project (PDF)"),
    ("download_sub", "Full accessibility audit with findings and remediation plan."),
    ("download_btn", "Download PDF"),
    ("download_title_attr", "Download the project PDF"),
    ("download_image", "Download attachment"),
    ("about_title_left", "Ab"),
    ("about_title_right", "out"),
    ("about_intro_lead", "I’m Giuseppe, from Italy. For 6+ years I’ve crafted UX/UI: clear, accessible, detail‑oriented interfaces."),
    ("about_caption_aria", "Personal information"),
    ("about_hello", "Hi! My name is Giuseppe"),
    ("about_role", "UX/UI Designer & Web Designer"),
    ("about_p1", "I’ve been playing with colors and ideas since I was a kid; at 16 I took it seriously and jumped into design. Since then I haven’t stopped exploring web and UX/UI."),
    ("about_p2", "I love cinema and video games (spoiler: I analyze them like design projects). In my work I blend creativity with a bit of nerdy attention to detail."),
    ("about_p3", "Favorite tools? Illustrator, Figma, Photoshop… and also HTML, CSS and JavaScript, because beautiful things should work too."),
    ("about_stat_projects", "individual projects"),
    ("about_stat_collab", "collaborations"),
    ("about_stat_years", "years of experience"),
    ("about_intro_title", "Frontend Web Design, Graphic Design, Prototyping, UI/UX Design, User testing, Copywriting."),
    ("about_direction_title", "Direction"),
    ("about_direction_text", "Everything starts with listening. Truly understanding the brief and the people helps me set clear goals, priorities and boundaries. I research, compare competitors and audience, and organize ideas to pick color, type and composition with common sense and consistency."),
    ("about_design_title", "Design"),
    ("about_design_text", "Once the direction is set, I get hands‑on: explore variants, prototype and simplify until the interface is clean, accessible and enjoyable to use. I aim for practical solutions, neat details and a touch of personality."),
    ("about_quote", "“We all make choices in life, but in the end our choices make us.”"),
    ("about_quote_author", "— Andrew Ryan, BioShock"),
];

fn entries(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::It => ITALIAN,
        Language::En => ENGLISH,
    }
}

fn table(lang: Language) -> &'static BTreeMap<&'static str, &'static str> {
    static IT: OnceLock<BTreeMap<&'static str, &'static str>> = OnceLock::new();
    static EN: OnceLock<BTreeMap<&'static str, &'static str>> = OnceLock::new();
    let cell = match lang {
        Language::It => &IT,
        Language::En => &EN,
    };
    cell.get_or_init(|| entries(lang).iter().copied().collect())
}

/// Translation lookup for one language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Dictionary {
    lang: Language,
}

impl Dictionary {
    pub fn for_language(lang: Language) -> Self {
        Self { lang }
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        table(self.lang).get(key).copied().filter(|v| !v.is_empty())
    }

    /// Dictionary text for `key`, else the element's inline per-language
    /// fallback (`data-i18n-<lang>`), else nothing.
    pub fn translate(&self, key: Option<&str>, inline: Option<String>) -> Option<String> {
        key.and_then(|k| self.get(k))
            .map(str::to_string)
            .or_else(|| inline.filter(|s| !s.is_empty()))
    }

    /// Label shown on the toggle: the language a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        self.get("lang_toggle_label")
            .unwrap_or(self.lang.toggled().code())
    }
}

/// Attribute holding the per-element inline fallback for `lang`.
pub fn inline_text_attribute(lang: Language) -> String {
    format!("data-i18n-{}", lang.code())
}

/// Attribute holding the inline fallback for a translated attribute.
pub fn inline_attr_attribute(attr: &str, lang: Language) -> String {
    format!("data-i18n-attr-{attr}-{}", lang.code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tables_share_keys() {
        let it: Vec<&str> = table(Language::It).keys().copied().collect();
        let en: Vec<&str> = table(Language::En).keys().copied().collect();
        assert_eq!(it, en);
        assert_eq!(it.len(), ITALIAN.len());
    }

    #[test]
    fn lookups_differ_by_language() {
        let it = Dictionary::for_language(Language::It);
        let en = Dictionary::for_language(Language::En);
        assert_eq!(it.get("footer_cta"), Some("CONTATTAMI"));
        assert_eq!(en.get("footer_cta"), Some("GET IN TOUCH"));
        assert_eq!(en.get("no_such_key"), None);
    }

    #[test]
    fn toggle_label_names_the_other_language() {
        assert_eq!(Dictionary::for_language(Language::It).toggle_label(), "EN");
        assert_eq!(Dictionary::for_language(Language::En).toggle_label(), "IT");
    }

    #[test]
    fn inline_fallback_applies_only_when_key_misses() {
        let en = Dictionary::for_language(Language::En);
        assert_eq!(
            en.translate(Some("footer_title"), Some("ignored".into())),
            Some("Say Hello".to_string())
        );
        assert_eq!(
            en.translate(Some("missing"), Some("Inline".into())),
            Some("Inline".to_string())
        );
        assert_eq!(en.translate(None, Some(String::new())), None);
        assert_eq!(en.translate(None, None), None);
    }

    #[test]
    fn fallback_attribute_names() {
        assert_eq!(inline_text_attribute(Language::En), "data-i18n-en");
        assert_eq!(
            inline_attr_attribute("aria-label", Language::It),
            "data-i18n-attr-aria-label-it"
        );
    }
}
