//! Cart Commands
//!
//! Cart query and mutations. Every mutation answers with the updated cart
//! snapshot or a typed error; nothing here touches local UI state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::StorefrontClient;
use crate::error::StorefrontError;
use crate::models::{Cart, CartUserError};
use crate::optimistic::LinePatch;

// ========================
// Documents
// ========================

const CART_FRAGMENT: &str = r#"
  fragment CartApiQuery on Cart {
    id
    checkoutUrl
    totalQuantity
    discountCodes {
      code
      applicable
    }
    cost {
      subtotalAmount {
        amount
        currencyCode
      }
      totalAmount {
        amount
        currencyCode
      }
    }
    lines(first: 100) {
      edges {
        node {
          id
          quantity
          cost {
            amountPerQuantity {
              amount
              currencyCode
            }
            compareAtAmountPerQuantity {
              amount
              currencyCode
            }
            totalAmount {
              amount
              currencyCode
            }
          }
          merchandise {
            ... on ProductVariant {
              id
              title
              image {
                id
                url
                altText
                width
                height
              }
              product {
                title
                handle
              }
              selectedOptions {
                name
                value
              }
            }
          }
        }
      }
    }
  }
"#;

const CART_QUERY: &str = r#"
  query CartQuery($cartId: ID!, $country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
    cart(id: $cartId) {
      ...CartApiQuery
    }
  }
"#;

const CART_CREATE_MUTATION: &str = r#"
  mutation cartCreate($input: CartInput!, $country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
    cartCreate(input: $input) {
      cart { ...CartApiQuery }
      userErrors { code field message }
    }
  }
"#;

const CART_LINES_ADD_MUTATION: &str = r#"
  mutation cartLinesAdd($cartId: ID!, $lines: [CartLineInput!]!, $country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
    cartLinesAdd(cartId: $cartId, lines: $lines) {
      cart { ...CartApiQuery }
      userErrors { code field message }
    }
  }
"#;

const CART_LINES_UPDATE_MUTATION: &str = r#"
  mutation cartLinesUpdate($cartId: ID!, $lines: [CartLineUpdateInput!]!, $country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
    cartLinesUpdate(cartId: $cartId, lines: $lines) {
      cart { ...CartApiQuery }
      userErrors { code field message }
    }
  }
"#;

const CART_LINES_REMOVE_MUTATION: &str = r#"
  mutation cartLinesRemove($cartId: ID!, $lineIds: [ID!]!, $country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
    cartLinesRemove(cartId: $cartId, lineIds: $lineIds) {
      cart { ...CartApiQuery }
      userErrors { code field message }
    }
  }
"#;

const CART_DISCOUNT_CODES_UPDATE_MUTATION: &str = r#"
  mutation cartDiscountCodesUpdate($cartId: ID!, $discountCodes: [String!], $country: CountryCode, $language: LanguageCode)
  @inContext(country: $country, language: $language) {
    cartDiscountCodesUpdate(cartId: $cartId, discountCodes: $discountCodes) {
      cart { ...CartApiQuery }
      userErrors { code field message }
    }
  }
"#;

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineInput {
    pub merchandise_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLineUpdateInput {
    pub id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPayload {
    cart: Option<Cart>,
    #[serde(default)]
    user_errors: Vec<CartUserError>,
}

impl CartPayload {
    /// User errors take precedence over whatever cart came back
    pub fn into_cart(self) -> Result<Cart, StorefrontError> {
        if !self.user_errors.is_empty() {
            return Err(StorefrontError::UserErrors(self.user_errors));
        }
        self.cart.ok_or(StorefrontError::MissingData("cart"))
    }
}

#[derive(Deserialize)]
struct CartData {
    cart: Option<Cart>,
}

fn with_cart_fragment(document: &str) -> String {
    format!("{}\n{}", document, CART_FRAGMENT)
}

/// Run a cart mutation and unwrap its `{ cart, userErrors }` payload
async fn cart_mutation(
    client: &StorefrontClient,
    document: &str,
    field: &'static str,
    variables: serde_json::Value,
) -> Result<Cart, StorefrontError> {
    let mut data: HashMap<String, CartPayload> = client.query(&with_cart_fragment(document), variables).await?;
    data.remove(field).ok_or(StorefrontError::MissingData(field))?.into_cart()
}

// ========================
// Commands
// ========================

/// `Ok(None)` when the cart id is unknown or expired
pub async fn cart_fetch(client: &StorefrontClient, cart_id: &str) -> Result<Option<Cart>, StorefrontError> {
    let data: CartData = client.query(&with_cart_fragment(CART_QUERY), json!({ "cartId": cart_id })).await?;
    Ok(data.cart)
}

pub async fn cart_create(client: &StorefrontClient, lines: &[CartLineInput]) -> Result<Cart, StorefrontError> {
    cart_mutation(client, CART_CREATE_MUTATION, "cartCreate", json!({ "input": { "lines": lines } })).await
}

pub async fn cart_lines_add(client: &StorefrontClient, cart_id: &str, lines: &[CartLineInput]) -> Result<Cart, StorefrontError> {
    cart_mutation(client, CART_LINES_ADD_MUTATION, "cartLinesAdd", json!({ "cartId": cart_id, "lines": lines })).await
}

pub async fn cart_lines_update(client: &StorefrontClient, cart_id: &str, lines: &[CartLineUpdateInput]) -> Result<Cart, StorefrontError> {
    cart_mutation(client, CART_LINES_UPDATE_MUTATION, "cartLinesUpdate", json!({ "cartId": cart_id, "lines": lines })).await
}

pub async fn cart_lines_remove(client: &StorefrontClient, cart_id: &str, line_ids: &[String]) -> Result<Cart, StorefrontError> {
    cart_mutation(client, CART_LINES_REMOVE_MUTATION, "cartLinesRemove", json!({ "cartId": cart_id, "lineIds": line_ids })).await
}

pub async fn cart_discount_codes_update(client: &StorefrontClient, cart_id: &str, codes: &[String]) -> Result<Cart, StorefrontError> {
    cart_mutation(
        client,
        CART_DISCOUNT_CODES_UPDATE_MUTATION,
        "cartDiscountCodesUpdate",
        json!({ "cartId": cart_id, "discountCodes": codes }),
    )
    .await
}

// ========================
// Form Actions
// ========================

/// A cart form submission
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddLines(Vec<CartLineInput>),
    UpdateQuantity { line_id: String, quantity: u32 },
    RemoveLine { line_id: String },
    UpdateDiscountCodes(Vec<String>),
}

impl CartAction {
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddLines(_) => "LinesAdd",
            CartAction::UpdateQuantity { .. } => "LinesUpdate",
            CartAction::RemoveLine { .. } => "LinesRemove",
            CartAction::UpdateDiscountCodes(_) => "DiscountCodesUpdate",
        }
    }

    /// Local patch to show while this action is in flight.
    /// Setting a quantity of zero removes the line.
    pub fn optimistic_patch(&self) -> Option<(&str, LinePatch)> {
        match self {
            CartAction::UpdateQuantity { line_id, quantity: 0 } => Some((line_id.as_str(), LinePatch::Remove)),
            CartAction::UpdateQuantity { line_id, quantity } => Some((line_id.as_str(), LinePatch::SetQuantity(*quantity))),
            CartAction::RemoveLine { line_id } => Some((line_id.as_str(), LinePatch::Remove)),
            CartAction::AddLines(_) | CartAction::UpdateDiscountCodes(_) => None,
        }
    }

    /// Issue the matching mutation. Adding lines without a cart creates one.
    pub async fn perform(&self, client: &StorefrontClient, cart_id: Option<&str>) -> Result<Cart, StorefrontError> {
        let Some(cart_id) = cart_id else {
            return match self {
                CartAction::AddLines(lines) => cart_create(client, lines).await,
                _ => Err(StorefrontError::MissingData("cart id")),
            };
        };
        match self {
            CartAction::AddLines(lines) => cart_lines_add(client, cart_id, lines).await,
            CartAction::UpdateQuantity { line_id, quantity } => {
                let lines = [CartLineUpdateInput { id: line_id.clone(), quantity: *quantity }];
                cart_lines_update(client, cart_id, &lines).await
            }
            CartAction::RemoveLine { line_id } => cart_lines_remove(client, cart_id, &[line_id.clone()]).await,
            CartAction::UpdateDiscountCodes(codes) => cart_discount_codes_update(client, cart_id, codes).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::decode_response;

    #[test]
    fn test_optimistic_patch() {
        let update = CartAction::UpdateQuantity { line_id: "L1".into(), quantity: 3 };
        assert_eq!(update.optimistic_patch(), Some(("L1", LinePatch::SetQuantity(3))));

        let zero = CartAction::UpdateQuantity { line_id: "L1".into(), quantity: 0 };
        assert_eq!(zero.optimistic_patch(), Some(("L1", LinePatch::Remove)));

        let remove = CartAction::RemoveLine { line_id: "L2".into() };
        assert_eq!(remove.optimistic_patch(), Some(("L2", LinePatch::Remove)));

        assert_eq!(CartAction::UpdateDiscountCodes(vec![]).optimistic_patch(), None);
    }

    #[test]
    fn test_line_input_serializes_camel_case() {
        let input = CartLineInput { merchandise_id: "gid://shopify/ProductVariant/1".into(), quantity: 1 };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({ "merchandiseId": "gid://shopify/ProductVariant/1", "quantity": 1 })
        );
    }

    #[test]
    fn test_payload_user_errors() {
        let mut data: HashMap<String, CartPayload> = decode_response(
            r#"{"data":{"cartLinesUpdate":{"cart":null,"userErrors":[
                {"code":"INVALID","field":["lines","0","quantity"],"message":"Not enough stock"}
            ]}}}"#,
        )
        .unwrap();
        let payload = data.remove("cartLinesUpdate").unwrap();
        match payload.into_cart() {
            Err(StorefrontError::UserErrors(errors)) => assert_eq!(errors[0].message, "Not enough stock"),
            other => panic!("expected user errors, got {:?}", other),
        }
    }

    #[test]
    fn test_payload_cart() {
        let mut data: HashMap<String, CartPayload> = decode_response(
            r#"{"data":{"cartLinesRemove":{"cart":{"id":"c1","totalQuantity":0,"lines":{"edges":[]}},"userErrors":[]}}}"#,
        )
        .unwrap();
        let cart = data.remove("cartLinesRemove").unwrap().into_cart().unwrap();
        assert_eq!(cart.id, "c1");
        assert!(cart.line_list().is_empty());
    }

    #[test]
    fn test_payload_missing_cart() {
        let payload = CartPayload { cart: None, user_errors: Vec::new() };
        assert_eq!(payload.into_cart(), Err(StorefrontError::MissingData("cart")));
    }
}
