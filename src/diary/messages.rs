use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::enums::Sentiment;

/// Shown when the user rejects the classifier's verdict. Purely cosmetic,
/// no state impact.
pub const ENCOURAGEMENTS: &[&str] = &[
    "Gracias por tomarte el tiempo de escucharte",
    "Está bien no tener claro cómo te sientes",
    "Cada registro cuenta, aunque el día haya sido confuso",
    "Vamos paso a paso, sin prisa",
    "Conocerte mejor también lleva su tiempo",
];

/// One encouragement message, selected uniformly at random.
pub fn pick_encouragement(rng: &mut impl Rng) -> &'static str {
    ENCOURAGEMENTS
        .choose(rng)
        .copied()
        .unwrap_or(ENCOURAGEMENTS[0])
}

/// Emotion label and sentiment for a finalized 1..5 mood, used when the
/// entry completed without a classifier verdict (explicit pick or guided
/// questions). Mirrors the classifier's own mood derivation.
pub fn describe_mood(mood: u8) -> (&'static str, Sentiment) {
    match mood {
        5 => ("Felicidad", Sentiment::Positive),
        4 => ("Tranquilidad", Sentiment::Positive),
        3 => ("Calma", Sentiment::Neutral),
        2 => ("Ansiedad", Sentiment::Negative),
        _ => ("Tristeza", Sentiment::Negative),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn encouragement_comes_from_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let msg = pick_encouragement(&mut rng);
            assert!(ENCOURAGEMENTS.contains(&msg));
        }
    }

    #[test]
    fn same_seed_same_message() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        assert_eq!(pick_encouragement(&mut a), pick_encouragement(&mut b));
    }

    #[test]
    fn describe_mood_matches_classifier_mapping() {
        assert_eq!(describe_mood(5), ("Felicidad", Sentiment::Positive));
        assert_eq!(describe_mood(4), ("Tranquilidad", Sentiment::Positive));
        assert_eq!(describe_mood(3), ("Calma", Sentiment::Neutral));
        assert_eq!(describe_mood(2), ("Ansiedad", Sentiment::Negative));
        assert_eq!(describe_mood(1), ("Tristeza", Sentiment::Negative));
    }
}
