//! Cart creation for `StorefrontClient`.

use ridecart_pricing::{Attribute, CheckoutPlan};

use crate::error::StorefrontError;
use crate::queries::CART_CREATE_MUTATION;
use crate::types::{
    AttributeInput, BuyerIdentityInput, CartCreateData, CartCreateVariables, CartInput,
    CartLineInput,
};

use super::StorefrontClient;

/// Who is buying, forwarded so the hosted checkout is pre-filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyerIdentity {
    pub email: Option<String>,
    /// ISO 3166-1 alpha-2, e.g. `"AE"`.
    pub country_code: String,
}

impl StorefrontClient {
    /// Creates a remote cart from `plan` and returns its checkout URL.
    ///
    /// Sent exactly once. Each call may create a new cart on the backend,
    /// so a failure is surfaced for the user to retry.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Checkout`] with the first `userErrors` message,
    ///   or the first GraphQL error message.
    /// - [`StorefrontError::MissingCheckoutUrl`] when the mutation succeeds
    ///   without a checkout URL.
    /// - Transport, status and deserialization errors as-is.
    pub async fn submit_checkout(
        &self,
        plan: &CheckoutPlan,
        buyer: Option<&BuyerIdentity>,
    ) -> Result<String, StorefrontError> {
        let variables = CartCreateVariables {
            input: cart_input(plan, buyer),
        };
        let envelope = self
            .post_graphql::<_, CartCreateData>(CART_CREATE_MUTATION, variables, "cartCreate")
            .await?;

        if let Some(first) = envelope.errors.first() {
            return Err(StorefrontError::Checkout(first.message.clone()));
        }

        let payload = envelope
            .data
            .and_then(|d| d.cart_create)
            .ok_or_else(|| StorefrontError::Checkout("cartCreate returned no payload".into()))?;

        if let Some(first) = payload.user_errors.first() {
            tracing::warn!(
                field = ?first.field,
                message = %first.message,
                "cart rejected by storefront"
            );
            return Err(StorefrontError::Checkout(first.message.clone()));
        }

        let cart = payload.cart.ok_or(StorefrontError::MissingCheckoutUrl)?;
        let checkout_url = cart
            .checkout_url
            .filter(|u| !u.trim().is_empty())
            .ok_or(StorefrontError::MissingCheckoutUrl)?;

        tracing::info!(cart_id = %cart.id, lines = plan.lines.len(), "cart created");
        Ok(checkout_url)
    }
}

fn cart_input(plan: &CheckoutPlan, buyer: Option<&BuyerIdentity>) -> CartInput {
    CartInput {
        lines: plan
            .lines
            .iter()
            .map(|line| CartLineInput {
                merchandise_id: line.unit_ref.clone(),
                quantity: line.quantity,
                attributes: attribute_inputs(&line.attributes),
            })
            .collect(),
        attributes: attribute_inputs(&plan.cart_attributes),
        note: plan.note.clone(),
        buyer_identity: buyer.map(|b| BuyerIdentityInput {
            email: b.email.clone(),
            country_code: b.country_code.clone(),
        }),
    }
}

fn attribute_inputs(attributes: &[Attribute]) -> Vec<AttributeInput> {
    attributes
        .iter()
        .map(|a| AttributeInput {
            key: a.key.clone(),
            value: a.value.clone(),
        })
        .collect()
}
