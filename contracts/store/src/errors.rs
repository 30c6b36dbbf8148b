use soroban_sdk::contracterror;

/// Error codes for the store ledger contract.
///
/// Codes are stable: callers match on `Error(Contract, #N)`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the store administrator
    AccessDenied = 1,
    /// Product (or purchase record) does not exist
    NotFound = 2,
    /// Product has no stock left
    ZeroQuantity = 3,
    /// Buyer already holds an active purchase of this product
    DuplicatePurchase = 4,
    /// Buyer has no active purchase of this product to refund
    NoActivePurchase = 5,
    /// More than `REFUND_WINDOW` ledgers have passed since the purchase
    RefundWindowExpired = 6,
    /// Token transfer into or out of custody failed
    TransferFailed = 7,
    /// Product name is empty
    InvalidName = 8,
    /// Payment amount must be positive
    InvalidPayment = 9,
    /// Returning a unit would overflow the product's stock
    StockOverflow = 10,
}
