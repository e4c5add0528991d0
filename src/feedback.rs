//! Dispatcher semântico de feedback háptico

use crate::driver::FeedbackDriver;
use crate::platform::PlatformDriver;
use crate::types::{Effect, Kind};

/// Dispatcher de feedback háptico.
///
/// Sem estado além do driver: chamadas repetidas são independentes e a
/// ordem entre elas é irrelevante. O driver padrão é o da plataforma
/// ([`PlatformDriver`]), zero-sized; um driver alternativo (por exemplo
/// [`crate::RecordingDriver`]) entra por [`HapticFeedback::with_driver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HapticFeedback<D: FeedbackDriver = PlatformDriver> {
    driver: D,
}

/// Nome curto de conveniência
pub type Haptic = HapticFeedback;

impl HapticFeedback {
    /// Cria dispatcher sobre o driver da plataforma
    pub fn new() -> Self {
        Self {
            driver: PlatformDriver::new(),
        }
    }
}

impl<D: FeedbackDriver> HapticFeedback<D> {
    /// Cria dispatcher sobre um driver específico
    pub fn with_driver(driver: D) -> Self {
        Self { driver }
    }

    /// Dispara um pulso de impacto com intensidade padrão.
    pub fn vibrate(&mut self) {
        self.driver.emit(Effect::Impact);
    }

    /// Toca o efeito correspondente ao `Kind`.
    ///
    /// Exatamente uma chamada de gerador por invocação; o mapeamento é
    /// [`Kind::effect`].
    pub fn play(&mut self, kind: Kind) {
        self.driver.emit(kind.effect());
    }

    /// Conveniência: encaminha para [`play`](Self::play).
    pub fn trigger(&mut self, kind: Kind) {
        self.play(kind);
    }

    /// Acesso ao driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CHAMADA ÚNICA — um dispatcher descartável por evento
// ═══════════════════════════════════════════════════════════════════════════════

/// Toca `kind` no driver da plataforma.
pub fn play(kind: Kind) {
    HapticFeedback::new().play(kind);
}

/// Conveniência: encaminha para [`play`].
pub fn trigger(kind: Kind) {
    play(kind);
}

/// Dispara um pulso de impacto no driver da plataforma.
pub fn vibrate() {
    HapticFeedback::new().vibrate();
}
