pub mod balance;

pub use balance::{BalanceReader, Erc20BalanceReader};
