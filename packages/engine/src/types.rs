//! Core domain types for the Vade Mecum engine

use serde::{Deserialize, Serialize};

/// Rating of a single judicial circumstance (art. 59 CP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Assessment {
    /// Weighs against the defendant
    Desfavoravel,
    /// No weight either way
    Neutra,
    /// Weighs in favour of the defendant
    Favoravel,
}

impl Default for Assessment {
    fn default() -> Self {
        Assessment::Neutra
    }
}

/// The eight judicial circumstances of art. 59 CP.
///
/// The order of [`JudicialFactor::ALL`] is the order in which the statute
/// lists the circumstances and the order used in generated narratives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudicialFactor {
    Culpabilidade,
    Antecedentes,
    CondutaSocial,
    Personalidade,
    Motivos,
    Circunstancias,
    Consequencias,
    ComportamentoVitima,
}

impl JudicialFactor {
    /// All eight factors, in statutory display order.
    pub const ALL: [JudicialFactor; 8] = [
        JudicialFactor::Culpabilidade,
        JudicialFactor::Antecedentes,
        JudicialFactor::CondutaSocial,
        JudicialFactor::Personalidade,
        JudicialFactor::Motivos,
        JudicialFactor::Circunstancias,
        JudicialFactor::Consequencias,
        JudicialFactor::ComportamentoVitima,
    ];

    /// Display phrase used in the sentencing narrative.
    pub fn descricao(&self) -> &'static str {
        match self {
            JudicialFactor::Culpabilidade => "a culpabilidade do agente",
            JudicialFactor::Antecedentes => "os antecedentes criminais",
            JudicialFactor::CondutaSocial => "a conduta social",
            JudicialFactor::Personalidade => "a personalidade do agente",
            JudicialFactor::Motivos => "os motivos do crime",
            JudicialFactor::Circunstancias => "as circunstâncias do crime",
            JudicialFactor::Consequencias => "as consequências do crime",
            JudicialFactor::ComportamentoVitima => "o comportamento da vítima",
        }
    }
}

/// Direction of a special adjustment cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CauseKind {
    /// Increase (causa de aumento)
    Aumento,
    /// Decrease (causa de diminuição)
    Diminuicao,
}

/// A special increase/decrease cause applied after the base penalty.
///
/// Causes are applied sequentially in input order, each multiplying the
/// running penalty by `1 + factor` (increase) or `1 - factor` (decrease).
/// A factor of `0.3333` represents the statutory "one third".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentCause {
    /// Increase or decrease
    pub kind: CauseKind,
    /// Multiplicative factor, conventionally in `[0, 1]`; non-positive
    /// factors are skipped during application
    pub factor: f64,
    /// Free-text rationale (e.g. "tentativa", "concurso de pessoas")
    pub description: String,
}

impl AdjustmentCause {
    /// Create a new adjustment cause.
    pub fn new(kind: CauseKind, factor: f64, description: impl Into<String>) -> Self {
        Self {
            kind,
            factor,
            description: description.into(),
        }
    }
}
