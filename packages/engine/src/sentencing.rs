//! Simplified sentencing dosimetry (art. 59 CP)
//!
//! Deterministic numeric pipeline over a statutory penalty range:
//!
//! 1. [`base_penalty`] interpolates the base penalty from the eight
//!    judicial circumstances;
//! 2. [`apply_causes`] applies special increase/decrease causes
//!    sequentially, in input order;
//! 3. [`format_years`] decomposes a year figure into whole years plus a
//!    rounded month remainder;
//! 4. [`explain`] assembles the narrative draft for display.
//!
//! All functions are pure; nothing here performs I/O or holds state.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::types::{AdjustmentCause, Assessment, CauseKind, JudicialFactor};

/// Statutory penalty range in years, `min <= max`, both non-negative.
///
/// The constructor is the only range validation in the engine: the
/// calculation functions below trust their inputs and do not re-check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentencingRange {
    min: f64,
    max: f64,
}

impl SentencingRange {
    /// Create a validated range.
    ///
    /// # Returns
    /// * `Err(EngineError::NegativeBound)` when `min` is negative
    /// * `Err(EngineError::InvalidRange)` when `max < min`
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min < 0.0 {
            return Err(EngineError::NegativeBound(min));
        }
        if max < min {
            return Err(EngineError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Minimum abstract penalty in years.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Maximum abstract penalty in years.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of the range in years.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// One [`Assessment`] per judicial factor, iterable in statutory order.
///
/// Defaults to all-neutral, which leaves the base penalty at the legal
/// minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorAssessment {
    pub culpabilidade: Assessment,
    pub antecedentes: Assessment,
    pub conduta_social: Assessment,
    pub personalidade: Assessment,
    pub motivos: Assessment,
    pub circunstancias: Assessment,
    pub consequencias: Assessment,
    pub comportamento_vitima: Assessment,
}

impl FactorAssessment {
    /// Every factor rated the same way.
    pub fn uniform(rating: Assessment) -> Self {
        Self {
            culpabilidade: rating,
            antecedentes: rating,
            conduta_social: rating,
            personalidade: rating,
            motivos: rating,
            circunstancias: rating,
            consequencias: rating,
            comportamento_vitima: rating,
        }
    }

    /// The rating for one factor.
    pub fn get(&self, factor: JudicialFactor) -> Assessment {
        match factor {
            JudicialFactor::Culpabilidade => self.culpabilidade,
            JudicialFactor::Antecedentes => self.antecedentes,
            JudicialFactor::CondutaSocial => self.conduta_social,
            JudicialFactor::Personalidade => self.personalidade,
            JudicialFactor::Motivos => self.motivos,
            JudicialFactor::Circunstancias => self.circunstancias,
            JudicialFactor::Consequencias => self.consequencias,
            JudicialFactor::ComportamentoVitima => self.comportamento_vitima,
        }
    }

    /// Factor/rating pairs in statutory display order.
    pub fn entries(&self) -> [(JudicialFactor, Assessment); 8] {
        JudicialFactor::ALL.map(|factor| (factor, self.get(factor)))
    }

    /// How many factors carry the given rating.
    pub fn count(&self, rating: Assessment) -> usize {
        self.entries()
            .iter()
            .filter(|(_, r)| *r == rating)
            .count()
    }
}

/// Whole years plus rounded month remainder of a year figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearsMonths {
    pub years: i64,
    pub months: i64,
}

/// Interpolate the base penalty from the judicial circumstances.
///
/// `base = min + (unfavorable - favorable) * (span / 8)`, clamped to the
/// range. Dividing the span by the factor count bounds the unclamped
/// adjustment to exactly one span even when all eight factors lean the
/// same way; the clamp guards the remaining floating-point drift.
pub fn base_penalty(range: &SentencingRange, factors: &FactorAssessment) -> f64 {
    let desfavoraveis = factors.count(Assessment::Desfavoravel) as f64;
    let favoraveis = factors.count(Assessment::Favoravel) as f64;

    let ajuste = (desfavoraveis - favoraveis) * (range.span() / 8.0);
    let base = range.min() + ajuste;
    base.max(range.min()).min(range.max())
}

/// Apply special causes to the base penalty, sequentially in input order.
///
/// Non-positive factors are skipped. There is no clamp afterwards: a
/// decrease factor of 1 or more drives the result to zero or below, which
/// is accepted simplified behavior.
pub fn apply_causes(base: f64, causes: &[AdjustmentCause]) -> f64 {
    let mut pena = base;
    for cause in causes {
        if cause.factor <= 0.0 {
            continue;
        }
        match cause.kind {
            CauseKind::Aumento => pena *= 1.0 + cause.factor,
            CauseKind::Diminuicao => pena *= 1.0 - cause.factor,
        }
    }
    pena
}

/// Decompose a year figure into whole years and rounded months.
///
/// Months use round-half-to-even, so a remainder of exactly 11.988 months
/// stays within the same year: `format_years(2.999)` is `(2, 12)`, not
/// `(3, 0)`.
pub fn format_years(value: f64) -> YearsMonths {
    let years = value.trunc();
    let months = ((value - years) * 12.0).round_ties_even();
    YearsMonths {
        years: years as i64,
        months: months as i64,
    }
}

/// Assemble the narrative draft for one dosimetry run.
///
/// Structure: penalty range, per-factor commentary in statutory order
/// (neutral factors omitted; all-neutral gets its own sentence), the base
/// penalty, per-cause commentary in input order (or the no-causes
/// sentence), the final penalty, and the educational disclaimer.
pub fn explain(
    range: &SentencingRange,
    factors: &FactorAssessment,
    base: f64,
    causes: &[AdjustmentCause],
    final_penalty: f64,
) -> String {
    let mut texto: Vec<String> = Vec::new();

    texto.push("**1ª Fase – Pena-base (art. 59 do CP)**\n".to_string());
    texto.push(format!(
        "Considerando os limites abstratos da pena, fixados entre **{:.2}** e **{:.2}** \
         anos, passa-se à análise das circunstâncias judiciais.",
        range.min(),
        range.max()
    ));

    let mut descricoes = Vec::new();
    for (factor, rating) in factors.entries() {
        match rating {
            Assessment::Neutra => continue,
            Assessment::Desfavoravel => descricoes.push(format!(
                "- {} mostra-se **desfavorável** ao réu;",
                factor.descricao()
            )),
            Assessment::Favoravel => descricoes.push(format!(
                "- {} revela-se **favorável** ao réu;",
                factor.descricao()
            )),
        }
    }

    if descricoes.is_empty() {
        texto.push(
            "\nTodas as circunstâncias judiciais foram avaliadas como **neutras**, razão \
             pela qual a pena-base é fixada próxima ao **mínimo legal**."
                .to_string(),
        );
    } else {
        texto.push("\nNa forma do art. 59 do Código Penal, avaliam-se:\n".to_string());
        texto.extend(descricoes);
    }

    texto.push(format!(
        "\nDiante desse conjunto, a pena-base é fixada em **{base:.2} anos**."
    ));

    if causes.is_empty() {
        texto.push(
            "\n\nNão foram consideradas, neste modelo didático, causas especiais de aumento \
             ou diminuição, de modo que a pena provisória coincide com a pena-base."
                .to_string(),
        );
    } else {
        texto.push(
            "\n\n**2ª/3ª Fases – Causas de aumento e diminuição (modelo simplificado)**\n"
                .to_string(),
        );
        for cause in causes {
            let sinal = match cause.kind {
                CauseKind::Aumento => "aumento",
                CauseKind::Diminuicao => "diminuição",
            };
            let descricao = if cause.description.is_empty() {
                "sem descrição detalhada"
            } else {
                cause.description.as_str()
            };
            texto.push(format!(
                "- Aplica-se uma causa de **{sinal}** de aproximadamente **{:.1}%** ({descricao}).",
                cause.factor * 100.0
            ));
        }
        texto.push(format!(
            "\nApós a incidência dessas causas, a pena definitiva resulta em \
             **{final_penalty:.2} anos**."
        ));
    }

    texto.push(
        "\n\n⚠️ **Aviso importante:** Esta dosimetria é **meramente ilustrativa**, baseada \
         em regras numéricas simplificadas para fins de estudo. Na prática, a fixação da \
         pena depende da prova, da fundamentação qualitativa e da jurisprudência aplicável."
            .to_string(),
    );

    texto.join("\n")
}
