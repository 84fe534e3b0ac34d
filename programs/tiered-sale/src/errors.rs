//! Error definitions for TieredSale.

use anchor_lang::prelude::*;

#[error_code]
pub enum SaleError {
    #[msg("Invalid configuration")]
    InvalidConfiguration,

    #[msg("Caller is not the sale owner")]
    NotOwner,

    #[msg("Sale is not active")]
    SaleNotActive,

    #[msg("Contribution must be greater than zero")]
    ZeroContribution,

    #[msg("Insufficient tokens left in the sale vault")]
    InsufficientSaleSupply,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid mint")]
    InvalidMint,

    #[msg("Beneficiary does not match sale config")]
    InvalidBeneficiary,

    #[msg("Recipient must be the payer - use buy_tokens to purchase for another wallet")]
    InvalidRecipient,
}
