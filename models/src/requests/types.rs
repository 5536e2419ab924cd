//! Enumerations that map onto fixed wire strings.

use std::fmt;

macro_rules! wire_display {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// STK push `TransactionType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StkPushTransactionType {
    CustomerPayBillOnline,
    CustomerBuyGoodsOnline,
}

impl StkPushTransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CustomerPayBillOnline => "CustomerPayBillOnline",
            Self::CustomerBuyGoodsOnline => "CustomerBuyGoodsOnline",
        }
    }
}

wire_display!(StkPushTransactionType);

/// C2B transaction `CommandID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum C2bCommandId {
    CustomerPayBillOnline,
    CustomerBuyGoodsOnline,
}

impl C2bCommandId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CustomerPayBillOnline => "CustomerPayBillOnline",
            Self::CustomerBuyGoodsOnline => "CustomerBuyGoodsOnline",
        }
    }
}

wire_display!(C2bCommandId);

/// B2C `CommandID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum B2cCommandId {
    /// Supports both registered and unregistered M-Pesa customers.
    SalaryPayment,
    /// Registered M-Pesa customers only.
    BusinessPayment,
    PromotionPayment,
}

impl B2cCommandId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SalaryPayment => "SalaryPayment",
            Self::BusinessPayment => "BusinessPayment",
            Self::PromotionPayment => "PromotionPayment",
        }
    }
}

wire_display!(B2cCommandId);

/// What M-Pesa does when the registered validation URL cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum C2bResponseType {
    Completed,
    Cancelled,
}

impl C2bResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

wire_display!(C2bResponseType);

/// `IdentifierType` for transaction status and account balance queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierType {
    Msisdn,
    TillNumber,
    Shortcode,
}

impl IdentifierType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Msisdn => "1",
            Self::TillNumber => "2",
            Self::Shortcode => "4",
        }
    }
}

wire_display!(IdentifierType);

/// `ReceiverIdentifierType` for reversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReversalReceiverType {
    /// The value Daraja documents for reversing a C2B payment.
    Default,
    Msisdn,
    TillNumber,
    Shortcode,
}

impl ReversalReceiverType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "11",
            Self::Msisdn => "1",
            Self::TillNumber => "2",
            Self::Shortcode => "4",
        }
    }
}

wire_display!(ReversalReceiverType);

/// Dynamic QR `TrxCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicQrTransactionType {
    /// Pay merchant (buy goods).
    BuyGoods,
    /// Withdraw cash at an agent till.
    WithdrawCash,
    Paybill,
    /// Send money to a mobile number.
    SendMoney,
    SendToBusiness,
}

impl DynamicQrTransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BuyGoods => "BG",
            Self::WithdrawCash => "WA",
            Self::Paybill => "PB",
            Self::SendMoney => "SM",
            Self::SendToBusiness => "SB",
        }
    }
}

wire_display!(DynamicQrTransactionType);
