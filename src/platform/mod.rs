//! Drivers de plataforma
//!
//! A escolha capaz/incapaz é resolvida em tempo de compilação: iOS expõe
//! os geradores de feedback do UIKit; qualquer outro alvo recebe um
//! driver no-op com a mesma superfície. O código chamador nunca cerca
//! chamadas por sistema operacional.

#[cfg(target_os = "ios")]
mod ios;
#[cfg(target_os = "ios")]
pub use ios::PlatformDriver;

#[cfg(not(target_os = "ios"))]
mod unsupported;
#[cfg(not(target_os = "ios"))]
pub use unsupported::PlatformDriver;
