//! Cart Components
//!
//! Drawer and page renditions of the cart. Lines render from the store's
//! snapshot merged with pending optimistic overrides.

use leptos::html::Section;
use leptos::prelude::*;
use leptos_carousel::{Boundary, Direction, IndexCarousel};

use crate::cart_view::{
    applicable_discount_codes, checkout_url, codes_with_entry, has_items, line_price, project_lines, subtotal,
    variant_subtitle, visible_total_quantity, LineView,
};
use crate::commands::CartAction;
use crate::components::product_card::Stars;
use crate::content::{PromoProduct, CART_RECOMMENDED, CART_SLIDER, CART_UPSELL};
use crate::context::AppContext;
use crate::optimistic::LinePhase;
use crate::routes::{product_path, Page};
use crate::store::{use_storefront_store, StorefrontStateStoreFields};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartLayout {
    Page,
    Drawer,
}

/// Badge count including pending changes
pub fn use_cart_count() -> Memo<u32> {
    let store = use_storefront_store();
    Memo::new(move |_| {
        store.cart().with(|cart| match cart {
            Some(c) => store.overrides().with(|ov| visible_total_quantity(c, ov)),
            None => 0,
        })
    })
}

/// Full cart: header, details or empty state, promotions
#[component]
pub fn Cart(layout: CartLayout) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;
    let count = use_cart_count();
    let cart_has_items = Memo::new(move |_| store.cart().with(|cart| has_items(cart.as_ref())));

    let header = (layout == CartLayout::Drawer).then(|| {
        view! {
            <div class="cart-header">
                <h2>"Your Cart"</h2>
                <span class="cart-count">{move || count.get()}</span>
                <button class="cart-close" aria-label="Close cart" on:click=move |_| ctx.close_cart()>"×"</button>
            </div>
        }
    });

    view! {
        <div class=move || if layout == CartLayout::Drawer { "cart cart-drawer" } else { "cart cart-page" }>
            {header}
            <div class="cart-content">
                {move || store.cart_error().get().map(|err| view! {
                    <p class="cart-error" role="alert">{err.to_string()}</p>
                })}
                <Show
                    when=move || cart_has_items.get()
                    fallback=move || view! { <CartEmpty layout=layout /> }
                >
                    <CartDetails layout=layout />
                </Show>
                {(layout == CartLayout::Drawer).then(|| view! {
                    <CartSlider />
                    <CartRecommended />
                })}
            </div>
            {(layout == CartLayout::Drawer).then(|| view! {
                <div class="cart-footer">
                    <button class="btn-secondary" on:click=move |_| ctx.close_cart()>"Continue Shopping"</button>
                </div>
            })}
        </div>
    }
}

/// Lines, upsell row and summary for a non-empty cart
#[component]
pub fn CartDetails(layout: CartLayout) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let codes = Memo::new(move |_| {
        store.cart().with(|cart| cart.as_ref().map(|c| applicable_discount_codes(&c.discount_codes)).unwrap_or_default())
    });
    let subtotal_text = Memo::new(move |_| {
        store.cart().with(|cart| cart.as_ref().and_then(subtotal).map(|m| m.format(false)))
    });
    let checkout = Memo::new(move |_| {
        store.cart().with(|cart| cart.as_ref().and_then(|c| checkout_url(c).map(str::to_string)))
    });

    view! {
        <div class="cart-details">
            <CartLines layout=layout />
            <div class="cart-upsell">
                <h3>"Enhance Your Performance"</h3>
                <div class="cart-upsell-row">
                    {CART_UPSELL.iter().map(|(title, price)| view! {
                        <div class="cart-upsell-card">
                            <div class="cart-upsell-image"></div>
                            <h4>{*title}</h4>
                            <button class="btn-primary">{format!("Add to Cart · {}", price)}</button>
                        </div>
                    }).collect_view()}
                </div>
            </div>
            <CartSummary subtotal=subtotal_text>
                <CartDiscounts codes=codes />
                <CartCheckoutActions checkout_url=checkout />
            </CartSummary>
        </div>
    }
}

/// Line list in backend order; removed lines stay in the DOM, hidden
#[component]
pub fn CartLines(layout: CartLayout) -> impl IntoView {
    let store = use_storefront_store();
    let scroll_ref = NodeRef::<Section>::new();
    let (scrolled, set_scrolled) = signal(false);

    let lines = Memo::new(move |_| {
        store.cart().with(|cart| match cart {
            Some(c) => store.overrides().with(|ov| project_lines(c, ov)),
            None => Vec::new(),
        })
    });

    let on_scroll = move |_| {
        if let Some(el) = scroll_ref.get_untracked() {
            set_scrolled.set(el.scroll_top() > 0);
        }
    };

    let class = move || {
        let base = match layout {
            CartLayout::Page => "cart-lines cart-lines-page",
            CartLayout::Drawer => "cart-lines cart-lines-drawer",
        };
        if scrolled.get() { format!("{} scrolled", base) } else { base.to_string() }
    };

    view! {
        <section node_ref=scroll_ref aria-labelledby="cart-contents" class=class on:scroll=on_scroll>
            <ul class="cart-line-list">
                <For
                    each=move || lines.get()
                    key=|view| (view.line.id.clone(), view.quantity, view.hidden, view.phase)
                    children=move |view| view! { <CartLineItem view=view /> }
                />
            </ul>
        </section>
    }
}

#[component]
fn CartLineItem(view: LineView) -> impl IntoView {
    let Some(product) = view.line.merchandise.product.clone() else {
        return ().into_any();
    };
    let subtitle = variant_subtitle(&view.line).map(str::to_string);
    let price = line_price(&view.line).map(|m| m.format(true));
    let image = view.line.merchandise.image.clone().map(|img| {
        let alt = view.line.merchandise.title.clone();
        view! { <img class="cart-line-image" src=img.url alt=alt width="110" height="110" /> }
    });
    let pending = view.phase == LinePhase::PendingMutation;
    let display = if view.hidden { "none" } else { "flex" };

    view! {
        <li class=if pending { "cart-line pending" } else { "cart-line" } style:display=display>
            <div class="cart-line-media">{image}</div>
            <div class="cart-line-details">
                <a class="cart-line-title" href=product_path(&product.handle)>{product.title}</a>
                <p class="cart-line-variant">{subtitle}</p>
                <div class="cart-line-controls">
                    <QuantityAdjust view=view.clone() />
                    <RemoveButton line_id=view.line.id.clone() />
                    <span class="cart-line-price">{price}</span>
                </div>
            </div>
        </li>
    }
    .into_any()
}

#[component]
fn QuantityAdjust(view: LineView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let controls = view.controls;
    let dec_id = view.line.id.clone();
    let inc_id = view.line.id;

    view! {
        <div class="quantity-adjust">
            <button
                name="decrease-quantity"
                aria-label="Decrease quantity"
                value=controls.previous.to_string()
                disabled=controls.decrement_disabled
                on:click=move |_| ctx.submit(CartAction::UpdateQuantity {
                    line_id: dec_id.clone(),
                    quantity: controls.previous,
                })
            >
                "−"
            </button>
            <div class="quantity-value" data-test="item-quantity">{controls.current}</div>
            <button
                name="increase-quantity"
                aria-label="Increase quantity"
                value=controls.next.to_string()
                on:click=move |_| ctx.submit(CartAction::UpdateQuantity {
                    line_id: inc_id.clone(),
                    quantity: controls.next,
                })
            >
                "+"
            </button>
        </div>
    }
}

#[component]
fn RemoveButton(line_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    view! {
        <button
            class="cart-line-remove"
            on:click=move |_| ctx.submit(CartAction::RemoveLine { line_id: line_id.clone() })
        >
            "Remove"
        </button>
    }
}

/// Applied codes with a remove option, plus the entry form
#[component]
fn CartDiscounts(codes: Memo<Vec<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (entry, set_entry) = signal(String::new());

    let on_apply = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let next = codes.with_untracked(|existing| codes_with_entry(existing, &entry.get_untracked()));
        if next == codes.get_untracked() {
            return;
        }
        ctx.submit(CartAction::UpdateDiscountCodes(next));
        set_entry.set(String::new());
    };

    view! {
        <Show when=move || !codes.with(|c| c.is_empty())>
            <dl class="cart-discounts">
                <dt>"Discount(s)"</dt>
                <dd>
                    <button
                        class="discount-remove"
                        aria-label="Remove discount"
                        on:click=move |_| ctx.submit(CartAction::UpdateDiscountCodes(Vec::new()))
                    >
                        "×"
                    </button>
                    {move || codes.get().join(", ")}
                </dd>
            </dl>
        </Show>
        <form class="discount-form" on:submit=on_apply>
            <input
                type="text"
                name="discountCode"
                placeholder="Discount code"
                prop:value=move || entry.get()
                on:input=move |ev| set_entry.set(event_target_value(&ev))
            />
            <button type="submit">"Apply Discount"</button>
        </form>
    }
}

#[component]
fn CartSummary(subtotal: Memo<Option<String>>, children: Children) -> impl IntoView {
    view! {
        <div class="cart-summary">
            <div class="cart-summary-row">
                <span>"Subtotal"</span>
                <span>{move || subtotal.get().unwrap_or_else(|| "-".to_string())}</span>
            </div>
            <div class="cart-summary-row">
                <span>"Shipping"</span>
                <span>"Calculated at checkout"</span>
            </div>
            {children()}
        </div>
    }
}

/// Hand-off link to the hosted checkout
#[component]
fn CartCheckoutActions(checkout_url: Memo<Option<String>>) -> impl IntoView {
    move || {
        checkout_url.get().map(|url| view! {
            <div class="cart-checkout">
                <a class="btn-primary btn-block" href=url target="_self">"Continue to Checkout"</a>
            </div>
        })
    }
}

#[component]
pub fn CartEmpty(layout: CartLayout) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let on_continue = move |_| match layout {
        CartLayout::Drawer => ctx.close_cart(),
        CartLayout::Page => ctx.navigate(&ctx.route.get_untracked().href(Page::Home)),
    };

    view! {
        <div class="cart-empty">
            <p>"Looks like you haven't added anything yet, let's get you started!"</p>
            <button class="btn-primary" on:click=on_continue>"Continue shopping"</button>
            <h2>"Shop Best Sellers"</h2>
            <div class="promo-list">
                {CART_RECOMMENDED.iter().map(|p| view! { <PromoTile product=p /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn PromoTile(product: &'static PromoProduct) -> impl IntoView {
    view! {
        <div class="promo-tile">
            <img src=product.image alt=product.title />
            <div class="promo-tile-body">
                <div class="promo-tile-tags">
                    {product.tags.iter().map(|tag| view! { <span class="tag-pill">{*tag}</span> }).collect_view()}
                </div>
                <h3>{product.title}</h3>
                <p>{product.description}</p>
                <div class="promo-tile-footer">
                    <Stars />
                    <button class="btn-primary">{format!("Add · {}", product.price)}</button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CartRecommended() -> impl IntoView {
    view! {
        <div class="cart-recommended">
            <h3>"Recommended Products"</h3>
            {CART_RECOMMENDED.iter().map(|p| view! { <PromoTile product=p /> }).collect_view()}
        </div>
    }
}

/// Single-image slider that wraps in both directions
#[component]
fn CartSlider() -> impl IntoView {
    let (slider, set_slider) = signal(IndexCarousel::new(CART_SLIDER.len(), Boundary::Wrap));
    let current = move || &CART_SLIDER[slider.get().index()];

    view! {
        <div class="cart-slider">
            <div class="cart-slider-frame">
                <button
                    class="carousel-btn carousel-btn-left"
                    on:click=move |_| { set_slider.update(|s| { s.step(Direction::Left); }); }
                >
                    "‹"
                </button>
                <img src=move || current().image alt=move || current().title />
                <button
                    class="carousel-btn carousel-btn-right"
                    on:click=move |_| { set_slider.update(|s| { s.step(Direction::Right); }); }
                >
                    "›"
                </button>
            </div>
            <h3>{move || current().title}</h3>
            <p>{move || current().description}</p>
            <div class="cart-slider-meta">
                <div class="promo-tile-tags">
                    {move || current().tags.iter().map(|tag| view! { <span class="tag-pill">{*tag}</span> }).collect_view()}
                </div>
                <Stars />
            </div>
        </div>
    }
}
