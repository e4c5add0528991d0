//! Interface de capacidade háptica e driver de gravação
//!
//! > *"Trait no seam, implementação no módulo."*
//!
//! Os drivers concretos vivem em [`crate::platform`] (hardware, escolhido
//! em tempo de compilação) e aqui ([`RecordingDriver`], mock para testes).

use crate::types::Effect;

/// Interface de capacidade háptica.
///
/// Uma única operação: disparar um efeito. Fire-and-forget: sem retorno,
/// sem falha observável, sem estado exigido do driver.
pub trait FeedbackDriver {
    /// Dispara um efeito no hardware (ou registra, ou ignora).
    fn emit(&mut self, effect: Effect);
}

/// Driver de gravação (mock hardware).
///
/// Captura os efeitos emitidos em vez de acionar hardware, permitindo
/// testes e benchmarks sem dispositivo real.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDriver {
    /// Efeitos emitidos, em ordem
    pub emitted: Vec<Effect>,
}

impl RecordingDriver {
    /// Cria driver vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de efeitos emitidos
    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    /// Nenhum efeito emitido?
    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    /// Último efeito emitido
    pub fn last(&self) -> Option<&Effect> {
        self.emitted.last()
    }

    /// Descarta os efeitos gravados
    pub fn clear(&mut self) {
        self.emitted.clear();
    }
}

impl FeedbackDriver for RecordingDriver {
    fn emit(&mut self, effect: Effect) {
        self.emitted.push(effect);
    }
}
