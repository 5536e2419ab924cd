use crate::error::MpesaClientError;
use crate::mpesa_client::{MpesaClient, endpoints};

use models::{
    AccountBalanceRequest, AccountBalanceResponse, B2cRequest, B2cResponse, C2bRegisterRequest,
    C2bRegisterResponse, C2bRequest, C2bResponse, DynamicQrRequest, DynamicQrResponse,
    StkPushQueryRequest, StkPushQueryResponse, StkPushRequest, StkPushResponse,
    TransactionReversalRequest, TransactionReversalResponse, TransactionStatusRequest,
    TransactionStatusResponse,
};

impl MpesaClient {
    /// Prompt the customer's phone to authorize a payment.
    ///
    /// # Errors
    /// Returns [`MpesaClientError`] if the request cannot be sent, the gateway
    /// answers with anything but 200, or the body does not decode.
    pub async fn initiate_stk_push(
        &self,
        request: &StkPushRequest,
    ) -> Result<StkPushResponse, MpesaClientError> {
        self.execute(endpoints::STK_PUSH, request).await
    }

    pub async fn query_stk_push_status(
        &self,
        request: &StkPushQueryRequest,
    ) -> Result<StkPushQueryResponse, MpesaClientError> {
        self.execute(endpoints::STK_PUSH_QUERY, request).await
    }

    /// Register confirmation and validation callbacks for a shortcode.
    pub async fn register_c2b_urls(
        &self,
        request: &C2bRegisterRequest,
    ) -> Result<C2bRegisterResponse, MpesaClientError> {
        self.execute(endpoints::C2B_REGISTER_URL, request).await
    }

    /// Simulate a customer payment. Posted to the registration path.
    pub async fn initiate_c2b_transaction(
        &self,
        request: &C2bRequest,
    ) -> Result<C2bResponse, MpesaClientError> {
        self.execute(endpoints::C2B_TRANSACTION, request).await
    }

    pub async fn initiate_b2c_transaction(
        &self,
        request: &B2cRequest,
    ) -> Result<B2cResponse, MpesaClientError> {
        self.execute(endpoints::B2C_PAYMENT_REQUEST, request).await
    }

    pub async fn transaction_status(
        &self,
        request: &TransactionStatusRequest,
    ) -> Result<TransactionStatusResponse, MpesaClientError> {
        self.execute(endpoints::TRANSACTION_STATUS, request).await
    }

    pub async fn account_balance(
        &self,
        request: &AccountBalanceRequest,
    ) -> Result<AccountBalanceResponse, MpesaClientError> {
        self.execute(endpoints::ACCOUNT_BALANCE, request).await
    }

    pub async fn reverse_transaction(
        &self,
        request: &TransactionReversalRequest,
    ) -> Result<TransactionReversalResponse, MpesaClientError> {
        self.execute(endpoints::REVERSAL, request).await
    }

    pub async fn generate_dynamic_qr(
        &self,
        request: &DynamicQrRequest,
    ) -> Result<DynamicQrResponse, MpesaClientError> {
        self.execute(endpoints::DYNAMIC_QR, request).await
    }
}
