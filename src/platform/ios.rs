//! Driver iOS — geradores de feedback do UIKit via objc2
//!
//! Um gerador por chamada: cada `emit` constrói o gerador Objective-C
//! correspondente, dispara uma vez e o descarta. Os três geradores
//! cobrem todo o enum [`Effect`]:
//!
//! - `UIImpactFeedbackGenerator` → `impactOccurred`
//! - `UISelectionFeedbackGenerator` → `selectionChanged`
//! - `UINotificationFeedbackGenerator` → `notificationOccurred:`

use objc2::rc::Retained;
use objc2::runtime::AnyObject;
use objc2::{class, msg_send};

use crate::driver::FeedbackDriver;
use crate::types::Effect;

/// Driver capaz: aciona os geradores do UIKit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlatformDriver;

impl PlatformDriver {
    /// Cria driver de plataforma
    pub fn new() -> Self {
        Self
    }
}

impl FeedbackDriver for PlatformDriver {
    fn emit(&mut self, effect: Effect) {
        unsafe {
            match effect {
                Effect::Impact => {
                    let generator: Retained<AnyObject> =
                        msg_send![class!(UIImpactFeedbackGenerator), new];
                    let _: () = msg_send![&*generator, impactOccurred];
                }
                Effect::Selection => {
                    let generator: Retained<AnyObject> =
                        msg_send![class!(UISelectionFeedbackGenerator), new];
                    let _: () = msg_send![&*generator, selectionChanged];
                }
                Effect::Notification(outcome) => {
                    let generator: Retained<AnyObject> =
                        msg_send![class!(UINotificationFeedbackGenerator), new];
                    let _: () =
                        msg_send![&*generator, notificationOccurred: outcome.platform_code()];
                }
            }
        }
    }
}
