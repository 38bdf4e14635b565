//! Pretrial diversion screening (ANPP, art. 28-A CPP)
//!
//! A deliberately simplified checklist over six boolean factors. Every
//! rule is evaluated — the check never short-circuits — so the verdict
//! carries the complete list of disqualifying reasons in rule order.
//! [`opinion`] turns a verdict into the display narrative, markdown that
//! the presentation layer renders as-is.
//!
//! The rules are a study aid, not legal advice; both narrative branches
//! end with a fixed educational disclaimer saying so.

use serde::{Deserialize, Serialize};

/// The six screening factors, supplied fresh per evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityFactors {
    /// Offense committed without violence or grave threat
    pub sem_violencia: bool,
    /// Minimum abstract penalty below 4 years
    pub pena_minima_inferior_4_anos: bool,
    /// Formal, detailed confession on record
    pub confissao: bool,
    /// Prior conviction for an intentional offense
    pub reincidente_doloso: bool,
    /// Domestic/gender-based violence context
    pub crime_domestico: bool,
    /// Already benefited from an equivalent prior agreement
    pub ja_teve_anpp: bool,
}

/// Outcome of a screening: eligible iff no disqualifying reason applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    /// Whether every requirement was met
    pub eligible: bool,
    /// Disqualifying reasons in rule order; empty iff eligible
    pub reasons: Vec<String>,
}

/// Evaluate the six screening rules.
///
/// All applicable failing conditions are recorded, in fixed rule order.
pub fn evaluate(factors: &EligibilityFactors) -> EligibilityVerdict {
    let mut reasons = Vec::new();

    if !factors.sem_violencia {
        reasons.push("O fato envolve violência ou grave ameaça à pessoa.".to_string());
    }
    if !factors.pena_minima_inferior_4_anos {
        reasons.push("A pena mínima em abstrato não é inferior a 4 anos.".to_string());
    }
    if !factors.confissao {
        reasons.push("Não há confissão formal e circunstanciada do investigado.".to_string());
    }
    if factors.reincidente_doloso {
        reasons.push("O investigado é reincidente em crime doloso.".to_string());
    }
    if factors.crime_domestico {
        reasons.push(
            "O fato guarda relação com violência doméstica/familiar ou contra a mulher por \
             razões do sexo feminino."
                .to_string(),
        );
    }
    if factors.ja_teve_anpp {
        reasons.push(
            "O investigado já foi beneficiado por ANPP anterior em situação semelhante \
             (regra simplificada)."
                .to_string(),
        );
    }

    tracing::debug!(reasons = reasons.len(), "Diversion screening evaluated");

    EligibilityVerdict {
        eligible: reasons.is_empty(),
        reasons,
    }
}

/// Produce the display narrative for a verdict.
///
/// Eligible: an affirmative statement enumerating the satisfied
/// requirements. Ineligible: every recorded reason, bulleted, in rule
/// order. Both end with the educational disclaimer.
pub fn opinion(verdict: &EligibilityVerdict) -> String {
    if verdict.eligible {
        return "À luz dos parâmetros **simplificados** adotados nesta ferramenta, o caso é, \
                em tese, **potencialmente elegível** ao Acordo de Não Persecução Penal \
                (art. 28-A do CPP). Os requisitos considerados foram atendidos:\n\n\
                - Fato sem violência ou grave ameaça;\n\
                - Pena mínima inferior a 4 (quatro) anos;\n\
                - Confissão formal e circunstanciada do investigado;\n\
                - Ausência de reincidência dolosa relevante ou contexto impeditivo.\n\n\
                ⚠️ **Atenção:** Esta análise é apenas **didática**. A aplicação concreta do \
                ANPP depende da interpretação do Ministério Público, da análise do caso \
                concreto e da jurisprudência atual."
            .to_string();
    }

    let mut texto = String::from(
        "Neste modelo simplificado, o caso foi considerado **não elegível** ao ANPP pelos \
         seguintes motivos:\n\n",
    );
    for reason in &verdict.reasons {
        texto.push_str("- ");
        texto.push_str(reason);
        texto.push('\n');
    }
    texto.push_str(
        "\n⚠️ **Importante:** Trata-se de um checklist educacional. A avaliação real deve ser \
         feita pelo Ministério Público e pelos profissionais do Direito, com base no caso \
         concreto.",
    );
    texto
}
