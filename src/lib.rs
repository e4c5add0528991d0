//! # 📳 vibra — Retorno Háptico Semântico
//!
//! Camada de conveniência sobre os geradores de feedback háptico do
//! sistema operacional. Traduz um [`Kind`] semântico (entrada, saída,
//! sucesso, negação, falha, extração) em uma de três chamadas de gerador
//! da plataforma: impacto, seleção ou notificação com resultado.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │             HapticFeedback<D>                  │
//! │    vibrate()   play(kind)   trigger(kind)      │
//! │                     ↓                          │
//! │          Kind::effect() → Effect               │
//! │                     ↓                          │
//! │  ┌──────────────────────────────────────────┐  │
//! │  │    FeedbackDriver — emit(effect)         │  │
//! │  └──────────────────────────────────────────┘  │
//! │        ↓                         ↓             │
//! │  PlatformDriver (iOS)     PlatformDriver       │
//! │  UIKit generators         (no-op, demais SOs)  │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! ## Mapeamento
//!
//! | Kind | Efeito |
//! |:-----|:-------|
//! | `entry` | pulso de impacto |
//! | `extract` | pulso de seleção |
//! | `success` | notificação com resultado *success* |
//! | `deny` | notificação com resultado *warning* |
//! | `failure` | notificação com resultado *error* |
//! | `exit` | notificação com resultado *warning* |
//!
//! ## Exemplo
//!
//! ```rust
//! use vibra::{HapticFeedback, Kind};
//!
//! let mut feedback = HapticFeedback::new();
//! feedback.vibrate();
//! feedback.play(Kind::Success);
//!
//! // Ou em chamada única, um dispatcher descartável por evento:
//! vibra::play(Kind::Deny);
//! ```
//!
//! ## Mock hardware
//!
//! O [`RecordingDriver`] captura os efeitos emitidos em vez de acionar
//! hardware, para testes e benchmarks sem dispositivo real:
//!
//! ```rust
//! use vibra::{Effect, HapticFeedback, Kind, Outcome, RecordingDriver};
//!
//! let mut feedback = HapticFeedback::with_driver(RecordingDriver::new());
//! feedback.play(Kind::Deny);
//! assert_eq!(
//!     feedback.driver().emitted,
//!     vec![Effect::Notification(Outcome::Warning)]
//! );
//! ```
//!
//! ## Características
//!
//! - **Sem estado**: cada chamada é independente; o driver de plataforma
//!   é zero-sized e um gerador é construído por chamada.
//! - **Despacho total**: todo [`Kind`] tem exatamente um efeito, sem
//!   braço default. O enum é fechado e o compilador garante
//!   exaustividade.
//! - **Capaz/incapaz em tempo de compilação**: iOS recebe os geradores
//!   do UIKit; qualquer outro alvo recebe um no-op com a mesma
//!   superfície, sem cercas de plataforma no código chamador.
//! - **Fire-and-forget**: disparar um efeito não tem retorno nem falha
//!   observável.

pub mod driver;
pub mod error;
pub mod feedback;
pub mod platform;
pub mod types;

pub use driver::{FeedbackDriver, RecordingDriver};
pub use error::{FeedbackError, FeedbackResult};
pub use feedback::{Haptic, HapticFeedback, play, trigger, vibrate};
pub use platform::PlatformDriver;
pub use types::{Effect, Kind, Outcome};
