//! Cart View Utilities
//!
//! Projection of the authoritative cart plus pending overrides into what
//! the cart components render.

use crate::models::{Cart, CartLine, DiscountCode, Money};
use crate::optimistic::{LinePhase, OptimisticOverrides};

/// Quantity stepper values for one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityControls {
    pub current: u32,
    pub previous: u32,
    pub next: u32,
    pub decrement_disabled: bool,
}

impl QuantityControls {
    pub fn new(current: u32) -> Self {
        Self {
            current,
            previous: current.saturating_sub(1),
            next: current + 1,
            decrement_disabled: current <= 1,
        }
    }
}

/// One line as rendered
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    pub line: CartLine,
    /// Optimistic quantity
    pub quantity: u32,
    /// Pending removal; hidden by style, still in the list
    pub hidden: bool,
    pub phase: LinePhase,
    pub controls: QuantityControls,
}

/// Lines in backend order with overrides applied
pub fn project_lines(cart: &Cart, overrides: &OptimisticOverrides) -> Vec<LineView> {
    cart.line_list()
        .into_iter()
        .map(|line| {
            let quantity = overrides.read_quantity(&line.id, line.quantity);
            LineView {
                quantity,
                hidden: overrides.is_removed(&line.id),
                phase: overrides.phase(&line.id),
                controls: QuantityControls::new(quantity),
                line: line.clone(),
            }
        })
        .collect()
}

/// Badge count including pending changes
pub fn visible_total_quantity(cart: &Cart, overrides: &OptimisticOverrides) -> u32 {
    if overrides.is_empty() {
        return cart.total_quantity;
    }
    project_lines(cart, overrides)
        .iter()
        .filter(|view| !view.hidden)
        .map(|view| view.quantity)
        .sum()
}

pub fn has_items(cart: Option<&Cart>) -> bool {
    cart.is_some_and(|c| c.total_quantity > 0)
}

/// Applicable codes only, first occurrence kept, backend order
pub fn applicable_discount_codes(codes: &[DiscountCode]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for code in codes.iter().filter(|c| c.applicable) {
        if !seen.contains(&code.code) {
            seen.push(code.code.clone());
        }
    }
    seen
}

/// Codes to submit when the discount form is sent with `entry` typed in
pub fn codes_with_entry(existing: &[String], entry: &str) -> Vec<String> {
    let mut codes: Vec<String> = Vec::with_capacity(existing.len() + 1);
    for code in existing.iter().map(|c| c.trim()).chain(std::iter::once(entry.trim())) {
        if !code.is_empty() && !codes.iter().any(|c| c.eq_ignore_ascii_case(code)) {
            codes.push(code.to_string());
        }
    }
    codes
}

/// Checkout link; none for an empty cart
pub fn checkout_url(cart: &Cart) -> Option<&str> {
    let url = cart.checkout_url.trim();
    (!url.is_empty() && cart.total_quantity > 0).then_some(url)
}

/// Variant title, shown only when it says something the product title does not
pub fn variant_subtitle(line: &CartLine) -> Option<&str> {
    let product_title = line.merchandise.product.as_ref().map(|p| p.title.as_str());
    let title = line.merchandise.title.as_str();
    (!title.is_empty() && Some(title) != product_title && title != "Default Title").then_some(title)
}

/// Regular line price (total for the line)
pub fn line_price(line: &CartLine) -> Option<&Money> {
    let cost = line.cost.as_ref()?;
    cost.amount_per_quantity.as_ref()?;
    cost.total_amount.as_ref()
}

pub fn subtotal(cart: &Cart) -> Option<&Money> {
    cart.cost.as_ref()?.subtotal_amount.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{cart, line};
    use crate::models::ProductRef;
    use crate::optimistic::LinePatch;

    fn code(code: &str, applicable: bool) -> DiscountCode {
        DiscountCode { code: code.to_string(), applicable }
    }

    #[test]
    fn test_quantity_controls() {
        let two = QuantityControls::new(2);
        assert_eq!((two.previous, two.next, two.decrement_disabled), (1, 3, false));

        let one = QuantityControls::new(1);
        assert_eq!((one.previous, one.next, one.decrement_disabled), (0, 2, true));

        let zero = QuantityControls::new(0);
        assert_eq!(zero.previous, 0);
        assert!(zero.decrement_disabled);
    }

    #[test]
    fn test_increment_steps_by_one() {
        let mut quantity = 1;
        for _ in 0..5 {
            let next = QuantityControls::new(quantity).next;
            assert_eq!(next, quantity + 1);
            quantity = next;
        }
    }

    #[test]
    fn test_project_lines_keeps_order_and_hides_removed() {
        let snapshot = cart(vec![line("L3", 1), line("L1", 2), line("L2", 4)]);
        let mut overrides = OptimisticOverrides::new();
        overrides.apply("L1", LinePatch::SetQuantity(1));
        overrides.apply("L2", LinePatch::Remove);

        let views = project_lines(&snapshot, &overrides);
        let ids: Vec<&str> = views.iter().map(|v| v.line.id.as_str()).collect();
        assert_eq!(ids, vec!["L3", "L1", "L2"]);

        assert_eq!(views[0].quantity, 1);
        assert_eq!(views[0].phase, LinePhase::Stable);
        assert_eq!(views[1].quantity, 1);
        assert_eq!(views[1].phase, LinePhase::PendingMutation);
        assert!(views[1].controls.decrement_disabled);
        assert!(views[2].hidden);
    }

    #[test]
    fn test_visible_total_quantity() {
        let snapshot = cart(vec![line("L1", 2), line("L2", 3)]);
        let mut overrides = OptimisticOverrides::new();
        assert_eq!(visible_total_quantity(&snapshot, &overrides), 5);

        overrides.apply("L1", LinePatch::SetQuantity(1));
        overrides.apply("L2", LinePatch::Remove);
        assert_eq!(visible_total_quantity(&snapshot, &overrides), 1);
    }

    #[test]
    fn test_applicable_discount_codes() {
        let codes = vec![
            code("SAVE10", true),
            code("EXPIRED", false),
            code("FREESHIP", true),
            code("SAVE10", true),
        ];
        assert_eq!(applicable_discount_codes(&codes), vec!["SAVE10", "FREESHIP"]);
        assert!(applicable_discount_codes(&[]).is_empty());
    }

    #[test]
    fn test_codes_with_entry() {
        let existing = vec!["SAVE10".to_string()];
        assert_eq!(codes_with_entry(&existing, " freeship "), vec!["SAVE10", "freeship"]);
        assert_eq!(codes_with_entry(&existing, "save10"), vec!["SAVE10"]);
        assert_eq!(codes_with_entry(&existing, "   "), vec!["SAVE10"]);
        assert!(codes_with_entry(&[], "").is_empty());
    }

    #[test]
    fn test_checkout_url() {
        let mut snapshot = cart(vec![line("L1", 1)]);
        assert_eq!(checkout_url(&snapshot), Some("https://checkout.example/c1"));
        assert_eq!(checkout_url(&cart(vec![])), None);
        snapshot.checkout_url = " ".to_string();
        assert_eq!(checkout_url(&snapshot), None);
    }

    #[test]
    fn test_has_items() {
        assert!(!has_items(None));
        assert!(!has_items(Some(&cart(vec![]))));
        assert!(has_items(Some(&cart(vec![line("L1", 1)]))));
    }

    #[test]
    fn test_variant_subtitle() {
        let mut l = line("L1", 1);
        assert_eq!(variant_subtitle(&l), None);

        l.merchandise.title = "60 Day Supply".to_string();
        assert_eq!(variant_subtitle(&l), Some("60 Day Supply"));

        l.merchandise.product = Some(ProductRef { title: "60 Day Supply".into(), handle: "x".into() });
        assert_eq!(variant_subtitle(&l), None);
    }

    #[test]
    fn test_line_price_requires_unit_price() {
        let mut l = line("L1", 2);
        assert_eq!(line_price(&l).map(|m| m.amount.as_str()), Some("20.0"));
        if let Some(cost) = l.cost.as_mut() {
            cost.amount_per_quantity = None;
        }
        assert_eq!(line_price(&l), None);
    }
}
