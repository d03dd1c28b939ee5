//! Mock checkout.
//!
//! There is no payment backend. Submitting the checkout form never fails
//! and yields a fixed confirmation line; clearing and refocusing the form
//! belongs to the rendering glue.

use serde::{Deserialize, Serialize};

/// Confirmation line shown after a submitted order request.
pub const CONFIRMATION_MESSAGE: &str =
    "Thank you! Your order request has been logged. We'll confirm via SMS.";

/// Raw checkout form fields supplied by the render surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Buyer first name; the glue refocuses this field after reset.
    pub first_name: String,
    /// Phone number for the SMS confirmation.
    pub phone: String,
}

/// Synthetic confirmation for a submitted order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReceipt {
    /// Feedback line for the form region.
    pub message: String,
}

/// Accept an order request.
///
/// Always succeeds; the request content is not validated or persisted.
#[must_use]
pub fn submit(_request: &OrderRequest) -> OrderReceipt {
    tracing::info!("order request logged");
    OrderReceipt {
        message: CONFIRMATION_MESSAGE.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_always_succeeds() {
        let receipt = submit(&OrderRequest::default());
        assert_eq!(receipt.message, CONFIRMATION_MESSAGE);
    }
}
