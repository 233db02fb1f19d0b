use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::models::{Address, PaymentMethod};

/// How long the payment-success panel stays up before the flow moves on.
pub const CONFIRMATION_DISPLAY: Duration = Duration::from_millis(1800);
/// How long the order-placed screen stays up before returning to browsing.
pub const SUCCESS_REDIRECT: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    Browsing,
    Cart,
    AddressEntry,
    AddressValid(Address),
    PaymentPending {
        address: Address,
        method: PaymentMethod,
    },
    PaymentConfirmed {
        address: Address,
        method: PaymentMethod,
    },
    OrderRecorded {
        order_id: String,
    },
}

impl Stage {
    fn name(&self) -> &'static str {
        match self {
            Stage::Browsing => "browsing",
            Stage::Cart => "viewing cart",
            Stage::AddressEntry => "entering address",
            Stage::AddressValid(_) => "address valid",
            Stage::PaymentPending { .. } => "payment pending",
            Stage::PaymentConfirmed { .. } => "payment confirmed",
            Stage::OrderRecorded { .. } => "order recorded",
        }
    }
}

/// The checkout flow as an explicit machine, decoupled from any rendering.
/// Out-of-order calls fail with `InvalidTransition` and leave the stage
/// unchanged. The flow owns no timers; drivers honor the display-delay
/// constants and must guard their own teardown.
#[derive(Debug)]
pub struct CheckoutFlow {
    stage: Stage,
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self {
            stage: Stage::Browsing,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn view_cart(&mut self) -> AppResult<()> {
        match self.stage {
            Stage::Browsing => {
                self.stage = Stage::Cart;
                Ok(())
            }
            _ => Err(self.invalid("view cart")),
        }
    }

    /// An empty cart bounces straight back to browsing.
    pub fn begin_checkout(&mut self, cart_is_empty: bool) -> AppResult<()> {
        match self.stage {
            Stage::Cart => {
                self.stage = if cart_is_empty {
                    Stage::Browsing
                } else {
                    Stage::AddressEntry
                };
                Ok(())
            }
            _ => Err(self.invalid("begin checkout")),
        }
    }

    /// Re-runs the completeness gate; callable on every edit. Returns whether
    /// the proceed action is now enabled. An incomplete address drops the
    /// flow back to address entry.
    pub fn submit_address(&mut self, address: &Address) -> AppResult<bool> {
        match self.stage {
            Stage::AddressEntry | Stage::AddressValid(_) => {
                if address.is_complete() {
                    self.stage = Stage::AddressValid(address.clone());
                    Ok(true)
                } else {
                    self.stage = Stage::AddressEntry;
                    Ok(false)
                }
            }
            _ => Err(self.invalid("submit address")),
        }
    }

    pub fn can_proceed(&self) -> bool {
        matches!(self.stage, Stage::AddressValid(_))
    }

    /// Carries the validated address snapshot forward so it survives
    /// navigation.
    pub fn proceed_to_payment(&mut self, method: PaymentMethod) -> AppResult<()> {
        match &self.stage {
            Stage::AddressValid(address) => {
                self.stage = Stage::PaymentPending {
                    address: address.clone(),
                    method,
                };
                Ok(())
            }
            _ => Err(self.invalid("proceed to payment")),
        }
    }

    /// Trust-the-user payment assertion; there is no external verification
    /// and no failed-payment path.
    pub fn confirm_payment(&mut self) -> AppResult<()> {
        match &self.stage {
            Stage::PaymentPending { address, method } => {
                self.stage = Stage::PaymentConfirmed {
                    address: address.clone(),
                    method: *method,
                };
                Ok(())
            }
            _ => Err(self.invalid("confirm payment")),
        }
    }

    /// Address and method for the order recorder, available once payment is
    /// confirmed.
    pub fn confirmed(&self) -> Option<(&Address, PaymentMethod)> {
        match &self.stage {
            Stage::PaymentConfirmed { address, method } => Some((address, *method)),
            _ => None,
        }
    }

    pub fn order_recorded(&mut self, order_id: impl Into<String>) -> AppResult<()> {
        match self.stage {
            Stage::PaymentConfirmed { .. } => {
                self.stage = Stage::OrderRecorded {
                    order_id: order_id.into(),
                };
                Ok(())
            }
            _ => Err(self.invalid("record order")),
        }
    }

    pub fn finish(&mut self) -> AppResult<()> {
        match self.stage {
            Stage::OrderRecorded { .. } => {
                self.stage = Stage::Browsing;
                Ok(())
            }
            _ => Err(self.invalid("finish")),
        }
    }

    fn invalid(&self, action: &'static str) -> AppError {
        AppError::InvalidTransition {
            action,
            stage: self.stage.name(),
        }
    }
}
