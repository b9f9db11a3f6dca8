//! Fallback question pool and numeric answer handling for the mood flow.

use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

/// Static pool of guided prompts. Each asks for a 1..5 number so answers
/// can be averaged into a mood.
pub const FALLBACK_QUESTIONS: &[&str] = &[
    "Del 1 al 5, ¿cómo calificarías tu estado de ánimo en este momento?",
    "Del 1 al 5, ¿cuánta energía sentiste hoy?",
    "Del 1 al 5, ¿qué tan tranquilo o tranquila te sentiste durante el día?",
    "Del 1 al 5, ¿cuánto disfrutaste de las cosas que hiciste hoy?",
    "Del 1 al 5, ¿qué tan conectado o conectada te sentiste con otras personas?",
    "Del 1 al 5, ¿con cuántas ganas esperas el día de mañana?",
];

/// How many questions an entry receives (bounded by the pool size).
pub const QUESTIONS_PER_ENTRY: usize = 3;

/// Draw the question subset for one entry: uniform shuffle without
/// replacement, then take the first `min(3, pool)`.
pub fn draw_questions(rng: &mut impl Rng) -> Vec<String> {
    let mut pool: Vec<&str> = FALLBACK_QUESTIONS.to_vec();
    pool.shuffle(rng);
    pool.into_iter()
        .take(QUESTIONS_PER_ENTRY.min(FALLBACK_QUESTIONS.len()))
        .map(String::from)
        .collect()
}

static RE_FIRST_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// First embedded integer in a free-text answer, if any.
/// "4 de 5" parses as 4; "no sé" parses as nothing.
pub fn parse_numeric_answer(answer: &str) -> Option<u32> {
    RE_FIRST_INT
        .find(answer)
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Average the parseable numeric answers into a 1..5 mood.
/// Unparseable answers are dropped; returns `None` when nothing parsed.
pub fn average_mood(answers: &[String]) -> Option<u8> {
    let parsed: Vec<u32> = answers
        .iter()
        .filter_map(|a| parse_numeric_answer(a))
        .collect();
    if parsed.is_empty() {
        return None;
    }
    let mean = parsed.iter().sum::<u32>() as f64 / parsed.len() as f64;
    Some((mean.round() as i64).clamp(1, 5) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draws_three_distinct_pool_questions() {
        let mut rng = StdRng::seed_from_u64(7);
        let drawn = draw_questions(&mut rng);
        assert_eq!(drawn.len(), 3);
        for q in &drawn {
            assert!(FALLBACK_QUESTIONS.contains(&q.as_str()));
        }
        assert_ne!(drawn[0], drawn[1]);
        assert_ne!(drawn[1], drawn[2]);
        assert_ne!(drawn[0], drawn[2]);
    }

    #[test]
    fn same_seed_draws_same_questions() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(draw_questions(&mut a), draw_questions(&mut b));
    }

    #[test]
    fn parses_first_embedded_integer() {
        assert_eq!(parse_numeric_answer("4 de 5"), Some(4));
        assert_eq!(parse_numeric_answer("diría que un 3"), Some(3));
        assert_eq!(parse_numeric_answer("2"), Some(2));
        assert_eq!(parse_numeric_answer("no sé"), None);
        assert_eq!(parse_numeric_answer(""), None);
    }

    #[test]
    fn averages_and_drops_unparseable() {
        let answers = vec!["4 de 5".to_string(), "no sé".to_string(), "2".to_string()];
        assert_eq!(average_mood(&answers), Some(3));
    }

    #[test]
    fn no_numeric_answers_yields_none() {
        let answers = vec!["no sé".to_string(), "regular".to_string()];
        assert_eq!(average_mood(&answers), None);
    }

    #[test]
    fn average_clamps_into_mood_range() {
        let answers = vec!["10".to_string(), "9".to_string()];
        assert_eq!(average_mood(&answers), Some(5));
    }

    #[test]
    fn rounds_half_up() {
        let answers = vec!["3".to_string(), "4".to_string()];
        // mean 3.5 rounds away from zero
        assert_eq!(average_mood(&answers), Some(4));
    }
}
