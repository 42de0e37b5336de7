// File: portal-common/src/models/mod.rs
pub mod benefit;
pub mod profile;
pub mod session;
pub mod wallet;

pub use benefit::{Benefit, RedemptionResult};
pub use profile::StudentProfile;
pub use session::{Role, Session};
pub use wallet::{LedgerEntry, WalletBalance};
