use crate::entities::QuickOrder;
use crate::error::AppError;
use crate::records::Records;

/// Answer to the buy-or-cancel prompt of the quick purchase flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseDecision {
    Buy,
    Cancel,
}

impl PurchaseDecision {
    /// Parse `buy` / `cancel`, ignoring case and surrounding whitespace
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Some(Self::Buy),
            "cancel" => Some(Self::Cancel),
            _ => None,
        }
    }
}

pub struct QuickPurchaseService;

impl QuickPurchaseService {
    /// Add a game to `order`. Rejected picks are only traced; internal
    /// faults are also written to the error log.
    pub fn add_game(records: &Records, order: &mut QuickOrder, name: &str) -> Result<(), AppError> {
        order.add_game(name).inspect_err(|e| {
            if e.is_fault() {
                records.errors.append(e);
            } else {
                tracing::warn!(game = name, "Quick purchase game rejected: {e}");
            }
        })
    }

    /// Close the order. `Buy` appends exactly one history line and returns
    /// it; `Cancel` writes nothing.
    pub fn finish(
        records: &Records,
        order: &QuickOrder,
        decision: PurchaseDecision,
    ) -> Result<Option<String>, AppError> {
        match decision {
            PurchaseDecision::Buy => records
                .purchases
                .record(&order.client_name, order.total_price())
                .map(Some),
            PurchaseDecision::Cancel => {
                tracing::info!(client = %order.client_name, "Quick purchase cancelled");
                Ok(None)
            }
        }
    }
}
