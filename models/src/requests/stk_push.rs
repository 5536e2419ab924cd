use crate::requests::StkPushTransactionType;
use crate::timestamp::{current_daraja_timestamp, daraja_timestamp, lipa_na_mpesa_password};
use crate::ModelError;

use common::{RedactedSecret, SystemClock};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lipa na M-Pesa Online (STK push) request.
///
/// Prompts the customer's phone to authorize a payment to `BusinessShortCode`.
/// Build it with [`StkPushRequest::builder`] so the password and timestamp stay
/// consistent with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StkPushRequest {
    #[serde(rename = "BusinessShortCode")]
    pub business_short_code: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "TransactionType")]
    pub transaction_type: String,
    #[serde(rename = "Amount")]
    pub amount: String,
    #[serde(rename = "PartyA")]
    pub party_a: String,
    #[serde(rename = "PartyB")]
    pub party_b: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    #[serde(rename = "CallBackURL")]
    pub callback_url: String,
    #[serde(rename = "AccountReference")]
    pub account_reference: String,
    #[serde(rename = "TransactionDesc")]
    pub transaction_desc: String,
}

impl StkPushRequest {
    pub fn builder() -> StkPushRequestBuilder {
        StkPushRequestBuilder::default()
    }
}

/// Builder for [`StkPushRequest`].
///
/// `PartyA` defaults to the phone number and `PartyB` to the business
/// shortcode, which is what Daraja expects for a plain paybill prompt.
/// Without an explicit timestamp the current East Africa time is used.
#[derive(Debug, Default)]
pub struct StkPushRequestBuilder {
    business_short_code: Option<String>,
    pass_key: Option<RedactedSecret>,
    timestamp: Option<NaiveDateTime>,
    transaction_type: Option<StkPushTransactionType>,
    amount: Option<String>,
    phone_number: Option<String>,
    party_a: Option<String>,
    party_b: Option<String>,
    callback_url: Option<String>,
    account_reference: Option<String>,
    transaction_desc: Option<String>,
}

impl StkPushRequestBuilder {
    pub fn with_business_short_code(mut self, short_code: impl Into<String>) -> Self {
        self.business_short_code = Some(short_code.into());
        self
    }

    pub fn with_pass_key(mut self, pass_key: impl Into<String>) -> Self {
        self.pass_key = Some(RedactedSecret::new(pass_key));
        self
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_transaction_type(mut self, transaction_type: StkPushTransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn with_party_a(mut self, party_a: impl Into<String>) -> Self {
        self.party_a = Some(party_a.into());
        self
    }

    pub fn with_party_b(mut self, party_b: impl Into<String>) -> Self {
        self.party_b = Some(party_b.into());
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn with_account_reference(mut self, reference: impl Into<String>) -> Self {
        self.account_reference = Some(reference.into());
        self
    }

    pub fn with_transaction_desc(mut self, description: impl Into<String>) -> Self {
        self.transaction_desc = Some(description.into());
        self
    }

    /// Build the request, deriving `Password` and `Timestamp`.
    #[track_caller]
    pub fn build(self) -> Result<StkPushRequest, ModelError> {
        let business_short_code = required(self.business_short_code, "Business short code")?;

        let pass_key = self
            .pass_key
            .ok_or_else(|| ModelError::validation("Pass key is required"))?;
        if pass_key.is_empty() {
            return Err(ModelError::validation("Pass key cannot be empty"));
        }

        let transaction_type = self
            .transaction_type
            .ok_or_else(|| ModelError::validation("Transaction type is required"))?;
        let amount = required(self.amount, "Amount")?;
        let phone_number = required(self.phone_number, "Phone number")?;
        let callback_url = required(self.callback_url, "Callback URL")?;

        if !callback_url.starts_with("http://") && !callback_url.starts_with("https://") {
            return Err(ModelError::validation(format!(
                "Invalid callback URL format: {callback_url}"
            )));
        }

        let account_reference = required(self.account_reference, "Account reference")?;
        let transaction_desc = required(self.transaction_desc, "Transaction description")?;

        let timestamp = match self.timestamp {
            Some(at) => daraja_timestamp(at),
            None => current_daraja_timestamp(&SystemClock),
        };
        let password =
            lipa_na_mpesa_password(&business_short_code, pass_key.expose(), &timestamp);

        Ok(StkPushRequest {
            party_a: self.party_a.unwrap_or_else(|| phone_number.clone()),
            party_b: self
                .party_b
                .unwrap_or_else(|| business_short_code.clone()),
            business_short_code,
            password,
            timestamp,
            transaction_type: transaction_type.as_str().to_string(),
            amount,
            phone_number,
            callback_url,
            account_reference,
            transaction_desc,
        })
    }
}

#[track_caller]
fn required(value: Option<String>, field: &str) -> Result<String, ModelError> {
    match value {
        None => Err(ModelError::validation(format!("{field} is required"))),
        Some(value) if value.trim().is_empty() => {
            Err(ModelError::validation(format!("{field} cannot be empty")))
        }
        Some(value) => Ok(value),
    }
}
