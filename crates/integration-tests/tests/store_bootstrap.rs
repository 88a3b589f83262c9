//! One-shot bootstrap and order-history scenarios.

use rust_decimal::Decimal;

use starfruit_client::AuthSession;
use starfruit_core::OrderDraftUpdate;
use starfruit_integration_tests::{address, cart_item, order, product, TestContext};

// =============================================================================
// Bootstrap
// =============================================================================

#[tokio::test]
async fn test_bootstrap_populates_all_three_collections() {
    let mut ctx = TestContext::new();
    ctx.api.seed_cart(vec![cart_item("p1", 100, 80, 1)]);
    ctx.api.seed_wishlist(vec![product("p2", 50, 40)]);
    ctx.api.seed_addresses(vec![address("a1")]);

    ctx.store.bootstrap().await;

    assert_eq!(ctx.store.data().cart, vec![cart_item("p1", 100, 80, 1)]);
    assert_eq!(ctx.store.data().wishlist, vec![product("p2", 50, 40)]);
    assert_eq!(ctx.store.data().addresses, vec![address("a1")]);

    // Exactly one call to each fetch.
    assert_eq!(ctx.api.calls_to("get_cart"), 1);
    assert_eq!(ctx.api.calls_to("get_wishlist"), 1);
    assert_eq!(ctx.api.calls_to("get_addresses"), 1);
}

#[tokio::test]
async fn test_bootstrap_failure_in_one_does_not_block_others() {
    let mut ctx = TestContext::new();
    ctx.api.seed_cart(vec![cart_item("p1", 100, 80, 1)]);
    ctx.api.seed_addresses(vec![address("a1")]);
    ctx.api.fail_on("get_wishlist");

    ctx.store.bootstrap().await;

    assert_eq!(ctx.store.data().cart, vec![cart_item("p1", 100, 80, 1)]);
    assert!(ctx.store.data().wishlist.is_empty());
    assert_eq!(ctx.store.data().addresses, vec![address("a1")]);

    // Silent failure: nothing surfaced to the user.
    assert!(ctx.notifier.toasts().is_empty());
}

#[tokio::test]
async fn test_bootstrap_runs_at_most_once() {
    let mut ctx = TestContext::new();

    ctx.store.bootstrap().await;
    ctx.store.bootstrap().await;

    assert_eq!(ctx.api.calls_to("get_cart"), 1);
    assert_eq!(ctx.api.calls_to("get_wishlist"), 1);
    assert_eq!(ctx.api.calls_to("get_addresses"), 1);
}

#[tokio::test]
async fn test_bootstrap_is_noop_for_guests() {
    let mut ctx = TestContext::with_session(AuthSession::guest());

    ctx.store.bootstrap().await;

    assert_eq!(ctx.api.total_calls(), 0);
    assert_eq!(*ctx.store.data(), starfruit_core::UserData::default());
}

// =============================================================================
// Order history and draft
// =============================================================================

#[tokio::test]
async fn test_load_orders_appends_across_pages() {
    let mut ctx = TestContext::new();
    ctx.api.seed_order_page(1, vec![order("o1", 100)]);
    ctx.api.seed_order_page(2, vec![order("o2", 200)]);

    ctx.store.load_orders(1).await;
    ctx.store.load_orders(2).await;

    let ids: Vec<&str> = ctx
        .store
        .data()
        .orders
        .iter()
        .map(|o| o.id.as_str())
        .collect();
    assert_eq!(ids, vec!["o1", "o2"]);
}

#[tokio::test]
async fn test_load_orders_failure_is_silent() {
    let mut ctx = TestContext::new();
    ctx.api.fail_on("get_orders");

    ctx.store.load_orders(1).await;

    assert!(ctx.store.data().orders.is_empty());
    assert!(ctx.notifier.toasts().is_empty());
}

#[tokio::test]
async fn test_order_draft_merges_across_checkout_steps() {
    let mut ctx = TestContext::new();

    // Totals step, then address step; neither clobbers the other.
    ctx.store.update_order_draft(OrderDraftUpdate {
        items_total: Some(Decimal::from(200)),
        items_discount_total: Some(Decimal::from(160)),
        ..OrderDraftUpdate::default()
    });
    ctx.store.update_order_draft(OrderDraftUpdate {
        address: Some(address("a1")),
        ..OrderDraftUpdate::default()
    });

    let draft = &ctx.store.data().order_draft;
    assert_eq!(draft.items_total, Some(Decimal::from(200)));
    assert_eq!(draft.items_discount_total, Some(Decimal::from(160)));
    assert_eq!(draft.address, Some(address("a1")));
    assert_eq!(draft.order_id, None);
}
