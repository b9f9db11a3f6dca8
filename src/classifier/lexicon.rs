//! Static Spanish lexicons for the keyword sentiment path and the
//! free-text crisis patterns. Matching is lowercased substring matching,
//! not token-boundary matching (see DESIGN.md).

use super::types::SignalSeverity;

// ═══════════════════════════════════════════
// Sentiment keyword sets
// ═══════════════════════════════════════════

pub const POSITIVE_WORDS: &[&str] = &[
    "feliz",
    "alegre",
    "contento",
    "contenta",
    "genial",
    "tranquilo",
    "tranquila",
    "agradecido",
    "agradecida",
    "motivado",
    "motivada",
    "esperanza",
    "ilusión",
    "orgulloso",
    "orgullosa",
    "relajado",
    "relajada",
    "disfruté",
    "encantó",
    "sonreír",
    "optimista",
    "bien",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "triste",
    "deprimido",
    "deprimida",
    "ansioso",
    "ansiosa",
    "ansiedad",
    "angustia",
    "estresado",
    "estresada",
    "agotado",
    "agotada",
    "cansado",
    "cansada",
    "miedo",
    "enojado",
    "enojada",
    "frustrado",
    "frustrada",
    "preocupado",
    "preocupada",
    "llorar",
    "lloré",
    "vacío",
    "fatal",
    "horrible",
    "mal",
];

pub const NEUTRAL_WORDS: &[&str] = &[
    "normal",
    "regular",
    "igual",
    "rutina",
    "trabajo",
    "clase",
    "tarea",
    "comida",
    "calmado",
    "tranquilidad",
];

// ═══════════════════════════════════════════
// Crisis text patterns
// ═══════════════════════════════════════════

/// A named free-text crisis pattern: its keyword list and fixed severity.
pub struct CrisisPattern {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub severity: SignalSeverity,
}

pub const CRISIS_PATTERNS: &[CrisisPattern] = &[
    CrisisPattern {
        name: "suicidal_ideation",
        keywords: &[
            "no quiero vivir",
            "no quiero seguir",
            "quitarme la vida",
            "acabar con todo",
            "mejor muerto",
            "mejor muerta",
            "desaparecer para siempre",
            "suicid",
        ],
        severity: SignalSeverity::Critical,
    },
    CrisisPattern {
        name: "self_harm",
        keywords: &[
            "hacerme daño",
            "cortarme",
            "lastimarme",
            "herirme",
            "autolesi",
            "golpearme",
        ],
        severity: SignalSeverity::Critical,
    },
    CrisisPattern {
        name: "panic_attack",
        keywords: &[
            "ataque de pánico",
            "no puedo respirar",
            "corazón acelerado",
            "me falta el aire",
            "voy a morir",
            "pánico",
        ],
        severity: SignalSeverity::High,
    },
    CrisisPattern {
        name: "depression_spiral",
        keywords: &[
            "nada tiene sentido",
            "no sirvo para nada",
            "todo está perdido",
            "no puedo más",
            "sin salida",
            "nadie me entiende",
        ],
        severity: SignalSeverity::High,
    },
    CrisisPattern {
        name: "substance_abuse",
        keywords: &[
            "beber para olvidar",
            "tomé demasiado",
            "drogas",
            "emborracharme",
            "pastillas de más",
        ],
        severity: SignalSeverity::Medium,
    },
];

// ═══════════════════════════════════════════
// Social isolation markers
// ═══════════════════════════════════════════

pub const ISOLATION_MARKERS: &[&str] = &[
    "solo",
    "sola",
    "aislado",
    "aislada",
    "abandonado",
    "abandonada",
    "nadie",
    "sin amigos",
    "encerrado",
    "encerrada",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_sets_are_lowercase() {
        for word in POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .chain(NEUTRAL_WORDS)
            .chain(ISOLATION_MARKERS)
        {
            assert_eq!(*word, word.to_lowercase(), "{word} must be lowercase");
        }
    }

    #[test]
    fn keyword_sets_are_disjoint() {
        for word in POSITIVE_WORDS {
            assert!(!NEGATIVE_WORDS.contains(word));
            assert!(!NEUTRAL_WORDS.contains(word));
        }
        for word in NEGATIVE_WORDS {
            assert!(!NEUTRAL_WORDS.contains(word));
        }
    }

    #[test]
    fn five_named_patterns() {
        assert_eq!(CRISIS_PATTERNS.len(), 5);
        let names: Vec<_> = CRISIS_PATTERNS.iter().map(|p| p.name).collect();
        assert!(names.contains(&"suicidal_ideation"));
        assert!(names.contains(&"self_harm"));
        assert!(names.contains(&"panic_attack"));
        assert!(names.contains(&"depression_spiral"));
        assert!(names.contains(&"substance_abuse"));
    }

    #[test]
    fn suicidal_ideation_is_critical() {
        let pattern = CRISIS_PATTERNS
            .iter()
            .find(|p| p.name == "suicidal_ideation")
            .unwrap();
        assert_eq!(pattern.severity, SignalSeverity::Critical);
        assert!(!pattern.keywords.is_empty());
    }
}
