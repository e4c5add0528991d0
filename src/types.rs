//! Tipos semânticos de feedback háptico

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FeedbackError, FeedbackResult};

/// Categoria semântica de evento de feedback.
///
/// Enumeração fechada: o ponto de chamada descreve *o que aconteceu* e o
/// mapeamento para o gerador da plataforma fica em [`Kind::effect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Acesso a área segura ou recurso principal (menu aberto, app desbloqueado)
    Entry,
    /// Saída de área segura ou recurso principal (fechar modal ou menu)
    Exit,
    /// Conclusão bem-sucedida de uma ação (senha gerada, QR encontrado)
    Success,
    /// Falha de autenticação ou divergência (senha errada)
    Deny,
    /// Falha operacional (erro durante execução)
    Failure,
    /// Extração de dados (cópia para a área de transferência)
    Extract,
}

impl Kind {
    /// Todos os variantes, na ordem de declaração
    pub const ALL: [Kind; 6] = [
        Kind::Entry,
        Kind::Exit,
        Kind::Success,
        Kind::Deny,
        Kind::Failure,
        Kind::Extract,
    ];

    /// Nome canônico (minúsculo), o mesmo usado por serde e [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Entry => "entry",
            Kind::Exit => "exit",
            Kind::Success => "success",
            Kind::Deny => "deny",
            Kind::Failure => "failure",
            Kind::Extract => "extract",
        }
    }

    /// Resolve a chamada de gerador da plataforma para este `Kind`.
    ///
    /// Mapeamento total, sem braço default.
    pub fn effect(&self) -> Effect {
        match self {
            Kind::Entry => Effect::Impact,
            Kind::Extract => Effect::Selection,
            Kind::Success => Effect::Notification(Outcome::Success),
            Kind::Deny => Effect::Notification(Outcome::Warning),
            Kind::Failure => Effect::Notification(Outcome::Error),
            Kind::Exit => Effect::Notification(Outcome::Warning),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = FeedbackError;

    fn from_str(s: &str) -> FeedbackResult<Self> {
        match s {
            "entry" => Ok(Kind::Entry),
            "exit" => Ok(Kind::Exit),
            "success" => Ok(Kind::Success),
            "deny" => Ok(Kind::Deny),
            "failure" => Ok(Kind::Failure),
            "extract" => Ok(Kind::Extract),
            other => Err(FeedbackError::UnknownKind(other.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// NOMES ANTIGOS ⚠️️ Depreciados
// ═══════════════════════════════════════════════════════════════════════════════

/// Nomes antigos de ponto de chamada, mantidos por compatibilidade.
/// Cada um resolve para um único `Kind` semântico.
impl Kind {
    /// App desbloqueado
    #[deprecated(since = "2026.8.6", note = "use `Kind::Entry`")]
    pub const APP_UNLOCKED: Kind = Kind::Entry;

    /// Menu de contexto aberto
    #[deprecated(since = "2026.8.6", note = "use `Kind::Entry`")]
    pub const CONTEXT_MENU_OPENED: Kind = Kind::Entry;

    /// Copiado para a área de transferência
    #[deprecated(since = "2026.8.6", note = "use `Kind::Extract`")]
    pub const COPIED_TO_CLIPBOARD: Kind = Kind::Extract;

    /// Ação bem-sucedida (grafia histórica preservada)
    #[deprecated(since = "2026.8.6", note = "use `Kind::Success`")]
    pub const SUCESSFUL_ACTION: Kind = Kind::Success;

    /// Entrada incorreta
    #[deprecated(since = "2026.8.6", note = "use `Kind::Deny`")]
    pub const WRONG: Kind = Kind::Deny;

    /// Senha incorreta
    #[deprecated(since = "2026.8.6", note = "use `Kind::Deny`")]
    pub const WRONG_PASSWORD: Kind = Kind::Deny;

    /// Erro durante execução
    #[deprecated(since = "2026.8.6", note = "use `Kind::Failure`")]
    pub const ERROR: Kind = Kind::Failure;

    /// QR code lido
    #[deprecated(since = "2026.8.6", note = "use `Kind::Extract`")]
    pub const QR_CODE_SCANNED: Kind = Kind::Extract;

    /// Senha gerada
    #[deprecated(since = "2026.8.6", note = "use `Kind::Success`")]
    pub const PASSWORD_GENERATED: Kind = Kind::Success;
}

// ═══════════════════════════════════════════════════════════════════════════════
// EFEITOS DA PLATAFORMA
// ═══════════════════════════════════════════════════════════════════════════════

/// Resultado de uma notificação háptica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Warning,
    Error,
}

impl Outcome {
    /// Valor inteiro do `UINotificationFeedbackType` correspondente
    pub fn platform_code(&self) -> isize {
        match self {
            Outcome::Success => 0,
            Outcome::Warning => 1,
            Outcome::Error => 2,
        }
    }
}

/// Chamada de gerador da plataforma resolvida a partir de um [`Kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Pulso de impacto com intensidade padrão
    Impact,
    /// Pulso de mudança de seleção
    Selection,
    /// Notificação com resultado
    Notification(Outcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_effect_mapping() {
        assert_eq!(Kind::Entry.effect(), Effect::Impact);
        assert_eq!(Kind::Extract.effect(), Effect::Selection);
        assert_eq!(Kind::Success.effect(), Effect::Notification(Outcome::Success));
        assert_eq!(Kind::Deny.effect(), Effect::Notification(Outcome::Warning));
        assert_eq!(Kind::Failure.effect(), Effect::Notification(Outcome::Error));
        assert_eq!(Kind::Exit.effect(), Effect::Notification(Outcome::Warning));
    }

    #[test]
    fn test_kind_all_covers_every_variant() {
        assert_eq!(Kind::ALL.len(), 6);

        // Sem duplicatas
        for (i, a) in Kind::ALL.iter().enumerate() {
            for b in Kind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_kind_name_and_display() {
        for kind in Kind::ALL {
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(Kind::Deny.name(), "deny");
        assert_eq!(Kind::Extract.to_string(), "extract");
    }

    #[test]
    fn test_kind_from_str() {
        for kind in Kind::ALL {
            assert_eq!(kind.name().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn test_kind_from_str_unknown() {
        let err = "vibration".parse::<Kind>().unwrap_err();
        assert_eq!(err, FeedbackError::UnknownKind("vibration".to_string()));

        // Nomes são estritamente minúsculos
        assert!("Entry".parse::<Kind>().is_err());
        assert!("".parse::<Kind>().is_err());
    }

    #[test]
    fn test_kind_serde_names() {
        assert_eq!(serde_json::to_string(&Kind::Entry).unwrap(), "\"entry\"");
        assert_eq!(serde_json::to_string(&Kind::Deny).unwrap(), "\"deny\"");

        let kind: Kind = serde_json::from_str("\"extract\"").unwrap();
        assert_eq!(kind, Kind::Extract);
    }

    #[test]
    fn test_outcome_platform_code() {
        assert_eq!(Outcome::Success.platform_code(), 0);
        assert_eq!(Outcome::Warning.platform_code(), 1);
        assert_eq!(Outcome::Error.platform_code(), 2);
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_aliases() {
        assert_eq!(Kind::APP_UNLOCKED, Kind::Entry);
        assert_eq!(Kind::CONTEXT_MENU_OPENED, Kind::Entry);
        assert_eq!(Kind::COPIED_TO_CLIPBOARD, Kind::Extract);
        assert_eq!(Kind::SUCESSFUL_ACTION, Kind::Success);
        assert_eq!(Kind::WRONG, Kind::Deny);
        assert_eq!(Kind::WRONG_PASSWORD, Kind::Deny);
        assert_eq!(Kind::ERROR, Kind::Failure);
        assert_eq!(Kind::QR_CODE_SCANNED, Kind::Extract);
        assert_eq!(Kind::PASSWORD_GENERATED, Kind::Success);
    }
}
