//! Port for completing a payment after a seat is booked.
//!
//! No real gateway is integrated; [`AcknowledgingPaymentGateway`] stands in
//! and accepts every request.

use async_trait::async_trait;
use tracing::info;

use crate::domain::{AdmissionNumber, Error};

/// Message returned when a payment is acknowledged.
pub const PAYMENT_COMPLETED_MESSAGE: &str = "Payment completed successfully";

/// Acknowledgement returned by a payment gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub message: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Complete the payment for the current booking.
    async fn complete_payment(
        &self,
        payer: Option<&AdmissionNumber>,
    ) -> Result<PaymentReceipt, Error>;
}

/// Gateway stub that acknowledges every payment.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcknowledgingPaymentGateway;

#[async_trait]
impl PaymentGateway for AcknowledgingPaymentGateway {
    async fn complete_payment(
        &self,
        payer: Option<&AdmissionNumber>,
    ) -> Result<PaymentReceipt, Error> {
        info!(payer = payer.map(AsRef::<str>::as_ref), "payment acknowledged");
        Ok(PaymentReceipt {
            message: PAYMENT_COMPLETED_MESSAGE.to_owned(),
        })
    }
}
