use super::types::RiskLevel;

/// Canned support guidance keyed on the overall risk level.
/// Lists are fixed per level, not generated per-signal, so the guidance a
/// user sees is stable and reviewable.
pub struct SupportProtocol;

impl SupportProtocol {
    const LOW_RECOMMENDATIONS: &'static [&'static str] = &[
        "Mantén tu rutina de registro diario",
        "Dedica un momento del día a algo que disfrutes",
        "Cuida tus horas de sueño",
    ];

    const MEDIUM_RECOMMENDATIONS: &'static [&'static str] = &[
        "Habla con alguien de confianza sobre cómo te sientes",
        "Practica una técnica de relajación o respiración",
        "Reduce las exigencias de esta semana si puedes",
        "Sal a caminar o haz algo de ejercicio suave",
    ];

    const HIGH_RECOMMENDATIONS: &'static [&'static str] = &[
        "Considera agendar una sesión con tu psicólogo",
        "Comparte cómo te sientes con una persona cercana hoy",
        "Evita tomar decisiones importantes en este momento",
        "Prioriza descanso y actividades que te calmen",
    ];

    const CRITICAL_RECOMMENDATIONS: &'static [&'static str] = &[
        "Busca apoyo profesional lo antes posible",
        "No pases por esto en soledad: avisa a alguien de confianza",
        "Mantén a mano los contactos de ayuda de tu región",
    ];

    const HIGH_ACTIONS: &'static [&'static str] = &[
        "Contacta hoy con tu psicólogo o profesional de referencia",
        "Cuéntale a alguien cercano cómo te encuentras",
    ];

    const CRITICAL_ACTIONS: &'static [&'static str] = &[
        "Comunícate ahora con tu línea local de prevención de crisis",
        "Si estás en peligro inmediato, llama a los servicios de emergencia",
        "No te quedes a solas: busca compañía de confianza",
    ];

    /// Recommendations shown alongside an assessment.
    pub fn recommendations_for(risk: &RiskLevel) -> Vec<String> {
        let list = match risk {
            RiskLevel::Low => Self::LOW_RECOMMENDATIONS,
            RiskLevel::Medium => Self::MEDIUM_RECOMMENDATIONS,
            RiskLevel::High => Self::HIGH_RECOMMENDATIONS,
            RiskLevel::Critical => Self::CRITICAL_RECOMMENDATIONS,
        };
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Actions that need surfacing right away. Empty below `High`.
    pub fn immediate_actions_for(risk: &RiskLevel) -> Vec<String> {
        let list: &[&str] = match risk {
            RiskLevel::Low | RiskLevel::Medium => &[],
            RiskLevel::High => Self::HIGH_ACTIONS,
            RiskLevel::Critical => Self::CRITICAL_ACTIONS,
        };
        list.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_recommendations() {
        for risk in [
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Critical,
        ] {
            assert!(!SupportProtocol::recommendations_for(&risk).is_empty());
        }
    }

    #[test]
    fn immediate_actions_only_from_high() {
        assert!(SupportProtocol::immediate_actions_for(&RiskLevel::Low).is_empty());
        assert!(SupportProtocol::immediate_actions_for(&RiskLevel::Medium).is_empty());
        assert!(!SupportProtocol::immediate_actions_for(&RiskLevel::High).is_empty());
        assert!(!SupportProtocol::immediate_actions_for(&RiskLevel::Critical).is_empty());
    }

    #[test]
    fn critical_mentions_emergency_help() {
        let actions = SupportProtocol::immediate_actions_for(&RiskLevel::Critical);
        assert!(actions.iter().any(|a| a.contains("emergencia")));
    }
}
