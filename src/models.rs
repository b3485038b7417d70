//! Storefront Models
//!
//! Data structures matching the Storefront API response shapes.

use serde::{Deserialize, Serialize};

/// GraphQL connection, accepting either `nodes` or `edges { node }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub nodes: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new(), edges: Vec::new() }
    }
}

impl<T> Connection<T> {
    /// Borrow the flattened node list
    pub fn nodes(&self) -> Vec<&T> {
        if self.nodes.is_empty() {
            self.edges.iter().map(|e| &e.node).collect()
        } else {
            self.nodes.iter().collect()
        }
    }

    pub fn into_nodes(self) -> Vec<T> {
        if self.nodes.is_empty() {
            self.edges.into_iter().map(|e| e.node).collect()
        } else {
            self.nodes
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.nodes.first().or_else(|| self.edges.first().map(|e| &e.node))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

impl Money {
    pub fn new(amount: &str, currency_code: &str) -> Self {
        Self { amount: amount.to_string(), currency_code: currency_code.to_string() }
    }

    pub fn is_zero(&self) -> bool {
        self.amount.chars().all(|c| c == '0' || c == '.' || c == '-')
    }

    /// Render as `$49.95`; with `without_trailing_zeros`, `$49.00` becomes `$49`.
    /// Amount strings are reformatted textually, never through floats.
    pub fn format(&self, without_trailing_zeros: bool) -> String {
        let raw = self.amount.trim();
        let (negative, raw) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));
        let whole = whole.trim_start_matches('0');
        let whole = if whole.is_empty() { "0" } else { whole };

        let mut cents: String = fraction.chars().take(2).collect();
        while cents.len() < 2 {
            cents.push('0');
        }

        let mut number = group_thousands(whole);
        if !(without_trailing_zeros && cents == "00") {
            number.push('.');
            number.push_str(&cents);
        }

        let sign = if negative { "-" } else { "" };
        match currency_symbol(&self.currency_code) {
            Some(symbol) => format!("{}{}{}", sign, symbol, number),
            None => format!("{}{} {}", sign, self.currency_code, number),
        }
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" | "CAD" | "AUD" | "NZD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

/// Variant as selected into product cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_true")]
    pub available_for_sale: bool,
    #[serde(default)]
    pub image: Option<Image>,
    pub price: Money,
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionHandle {
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub variants: Connection<ProductVariant>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub collections: Connection<CollectionHandle>,
}

impl Product {
    pub fn first_variant(&self) -> Option<&ProductVariant> {
        self.variants.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRef {
    pub title: String,
    pub handle: String,
}

/// Cart line merchandise (always a product variant)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchandise {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub product: Option<ProductRef>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineCost {
    #[serde(default)]
    pub amount_per_quantity: Option<Money>,
    #[serde(default)]
    pub compare_at_amount_per_quantity: Option<Money>,
    #[serde(default)]
    pub total_amount: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub quantity: u32,
    pub merchandise: Merchandise,
    #[serde(default)]
    pub cost: Option<CartLineCost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCost {
    #[serde(default)]
    pub subtotal_amount: Option<Money>,
    #[serde(default)]
    pub total_amount: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountCode {
    pub code: String,
    pub applicable: bool,
}

/// Read-only cart snapshot as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: String,
    #[serde(default)]
    pub checkout_url: String,
    #[serde(default)]
    pub total_quantity: u32,
    #[serde(default)]
    pub lines: Connection<CartLine>,
    #[serde(default)]
    pub cost: Option<CartCost>,
    #[serde(default)]
    pub discount_codes: Vec<DiscountCode>,
}

impl Cart {
    /// Lines in backend order
    pub fn line_list(&self) -> Vec<&CartLine> {
        self.lines.nodes()
    }

    pub fn line(&self, line_id: &str) -> Option<&CartLine> {
        self.line_list().into_iter().find(|line| line.id == line_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUserError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetafieldValue {
    pub value: String,
}

/// Collection with hero metafields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionHero {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description_html: Option<String>,
    #[serde(default)]
    pub heading: Option<MetafieldValue>,
    #[serde(default)]
    pub byline: Option<MetafieldValue>,
    #[serde(default)]
    pub cta: Option<MetafieldValue>,
}

impl CollectionHero {
    pub fn heading_text(&self) -> &str {
        self.heading.as_ref().map(|m| m.value.as_str()).unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub image: Option<Image>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_string(),
            quantity,
            merchandise: Merchandise {
                id: format!("variant-{}", id),
                title: "Default Title".to_string(),
                image: None,
                product: Some(ProductRef { title: format!("Product {}", id), handle: format!("product-{}", id) }),
                selected_options: Vec::new(),
            },
            cost: Some(CartLineCost {
                amount_per_quantity: Some(Money::new("10.0", "USD")),
                compare_at_amount_per_quantity: None,
                total_amount: Some(Money::new(&format!("{}.0", quantity * 10), "USD")),
            }),
        }
    }

    pub fn cart(lines: Vec<CartLine>) -> Cart {
        Cart {
            id: "gid://shopify/Cart/c1".to_string(),
            checkout_url: "https://checkout.example/c1".to_string(),
            total_quantity: lines.iter().map(|l| l.quantity).sum(),
            lines: Connection { nodes: lines, edges: Vec::new() },
            cost: Some(CartCost {
                subtotal_amount: Some(Money::new("20.0", "USD")),
                total_amount: Some(Money::new("20.0", "USD")),
            }),
            discount_codes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_format() {
        assert_eq!(Money::new("49.95", "USD").format(false), "$49.95");
        assert_eq!(Money::new("49.0", "USD").format(false), "$49.00");
        assert_eq!(Money::new("49.00", "USD").format(true), "$49");
        assert_eq!(Money::new("139.9", "EUR").format(true), "€139.90");
        assert_eq!(Money::new("1234567.5", "GBP").format(false), "£1,234,567.50");
        assert_eq!(Money::new("99.99", "COP").format(false), "COP 99.99");
        assert_eq!(Money::new("0", "USD").format(true), "$0");
        assert_eq!(Money::new("-5.5", "USD").format(false), "-$5.50");
    }

    #[test]
    fn test_money_is_zero() {
        assert!(Money::new("0.0", "USD").is_zero());
        assert!(!Money::new("0.01", "USD").is_zero());
    }

    #[test]
    fn test_connection_nodes_and_edges() {
        let nodes: Connection<u32> = serde_json::from_str(r#"{"nodes":[1,2,3]}"#).unwrap();
        assert_eq!(nodes.into_nodes(), vec![1, 2, 3]);

        let edges: Connection<u32> =
            serde_json::from_str(r#"{"edges":[{"node":4},{"node":5}]}"#).unwrap();
        assert_eq!(edges.first(), Some(&4));
        assert_eq!(edges.nodes(), vec![&4, &5]);
        assert_eq!(edges.into_nodes(), vec![4, 5]);

        let empty: Connection<u32> = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_connection_of_types_without_default() {
        let json = r#"{"nodes":[{"code":"SAVE10","applicable":true}]}"#;
        let codes: Connection<DiscountCode> = serde_json::from_str(json).unwrap();
        assert_eq!(codes.into_nodes()[0].code, "SAVE10");

        let empty: Connection<CartLine> = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_cart_deserialize() {
        let json = r#"{
            "id": "gid://shopify/Cart/c1",
            "checkoutUrl": "https://shop.example/checkouts/c1",
            "totalQuantity": 2,
            "lines": {"edges": [{"node": {
                "id": "L1",
                "quantity": 2,
                "merchandise": {
                    "id": "gid://shopify/ProductVariant/1",
                    "title": "Default Title",
                    "product": {"title": "Omega-3", "handle": "omega-3"}
                },
                "cost": {"totalAmount": {"amount": "99.9", "currencyCode": "USD"}}
            }}]},
            "discountCodes": [{"code": "SAVE10", "applicable": true}]
        }"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.total_quantity, 2);
        assert_eq!(cart.line("L1").map(|l| l.quantity), Some(2));
        assert!(cart.line("L2").is_none());
        assert_eq!(cart.discount_codes[0].code, "SAVE10");
    }

    #[test]
    fn test_product_first_variant() {
        let json = r#"{
            "id": "p1", "title": "Whey", "handle": "whey",
            "variants": {"nodes": [{"id": "v1", "price": {"amount": "49.95", "currencyCode": "USD"}}]}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        let variant = product.first_variant().unwrap();
        assert_eq!(variant.id, "v1");
        assert!(variant.available_for_sale);
    }
}
