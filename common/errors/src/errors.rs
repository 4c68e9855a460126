#![no_std]

pub static ERROR_INVALID_PARAMETER: &[u8] = b"Invalid parameter.";

pub static ERROR_ADDRESS_ZERO: &[u8] = b"Address zero.";

pub static ERROR_INVALID_TOKEN: &[u8] = b"Invalid token.";

pub static ERROR_NULL_AMOUNT: &[u8] = b"Null amount.";

pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Insufficient balance.";

pub static ERROR_AMOUNT_EXCEEDS_DEBT: &[u8] = b"Amount exceeds debt.";

pub static ERROR_NOT_ENOUGH_AVAILABLE_FUNDS: &[u8] = b"Not enough available funds.";

pub static ERROR_RESERVE_TOO_LOW: &[u8] = b"Reserve too low.";

pub static ERROR_NOT_LIQUIDABLE: &[u8] = b"Pod not liquidable.";

pub static ERROR_INVALID_POD: &[u8] = b"Invalid pod.";

pub static ERROR_POD_ALREADY_EXISTS: &[u8] = b"Pod already exists for this collateral.";

pub static ERROR_CALLER_NOT_ALLOWED: &[u8] = b"Caller not allowed.";

pub static ERROR_NOT_INITIALIZED: &[u8] = b"Not initialized.";

pub static ERROR_ALREADY_INITIALIZED: &[u8] = b"Already initialized.";

pub static ERROR_ALREADY_LISTED: &[u8] = b"Already listed.";

pub static ERROR_NOT_LISTED: &[u8] = b"Not listed.";

pub static ERROR_COLLATERAL_NOT_ALLOWED: &[u8] = b"Collateral not allowed.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Invalid price.";

pub static ERROR_NO_RENTED_AMOUNT: &[u8] = b"No rented amount.";

pub static ERROR_COLLATERAL_BLOCKED: &[u8] = b"Collateral blocked.";

pub static ERROR_MINT_AMOUNT_UNDER_MINIMUM: &[u8] = b"Mint amount under minimum.";
