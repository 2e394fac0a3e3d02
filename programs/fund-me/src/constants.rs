pub const LEDGER_SEED: &[u8] = b"fund_ledger";

/// Smallest accepted deposit, in the mint's base units (5 tokens at 6 decimals).
pub const MINIMUM_DEPOSIT: u64 = 5_000_000;
