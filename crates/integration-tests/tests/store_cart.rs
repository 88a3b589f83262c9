//! Cart mutation and pricing scenarios.
//!
//! Drives `UserDataStore` against the in-memory fake backend and asserts on
//! the resulting projection, toasts, and recorded API traffic.

use rust_decimal::Decimal;

use starfruit_core::QuantityChange;
use starfruit_integration_tests::{cart_item, product, ToastKind, TestContext};

// =============================================================================
// Snapshot replace
// =============================================================================

#[tokio::test]
async fn test_add_to_cart_applies_server_snapshot_and_toasts() {
    let mut ctx = TestContext::new();
    let shoes = product("p1", 100, 80);

    ctx.store.add_to_cart(&shoes).await;

    assert_eq!(ctx.store.data().cart, vec![cart_item("p1", 100, 80, 1)]);
    assert_eq!(
        ctx.notifier.messages(ToastKind::Success),
        vec!["Added to cart".to_string()]
    );
    assert_eq!(ctx.api.calls_to("add_to_cart"), 1);
}

#[tokio::test]
async fn test_add_to_cart_twice_increments_via_snapshot() {
    let mut ctx = TestContext::new();
    let shoes = product("p1", 100, 80);

    ctx.store.add_to_cart(&shoes).await;
    ctx.store.add_to_cart(&shoes).await;

    // The local projection is whatever the server returned, not a local +1.
    assert_eq!(ctx.store.data().cart, vec![cart_item("p1", 100, 80, 2)]);
}

#[tokio::test]
async fn test_remove_from_cart_names_the_product() {
    let mut ctx = TestContext::new();
    ctx.api.seed_cart(vec![cart_item("p1", 100, 80, 2)]);
    ctx.store.bootstrap().await;

    let line = ctx.store.data().cart[0].clone();
    ctx.store.remove_from_cart(&line).await;

    assert!(ctx.store.data().cart.is_empty());
    assert!(!ctx.store.is_loading());
    assert_eq!(
        ctx.notifier.messages(ToastKind::Success),
        vec!["product p1 removed from the cart".to_string()]
    );
}

// =============================================================================
// Quantity changes
// =============================================================================

#[tokio::test]
async fn test_increment_bumps_quantity_and_toasts_directionally() {
    let mut ctx = TestContext::new();
    ctx.api.seed_cart(vec![cart_item("p1", 100, 80, 1)]);
    ctx.store.bootstrap().await;

    let line = ctx.store.data().cart[0].clone();
    ctx.store
        .change_cart_quantity(&line, QuantityChange::Increment)
        .await;

    assert_eq!(ctx.store.data().cart, vec![cart_item("p1", 100, 80, 2)]);
    assert_eq!(
        ctx.notifier.messages(ToastKind::Success),
        vec!["Added another product p1 to the cart".to_string()]
    );
}

#[tokio::test]
async fn test_decrement_above_one_keeps_the_line() {
    let mut ctx = TestContext::new();
    ctx.api.seed_cart(vec![cart_item("p1", 100, 80, 3)]);
    ctx.store.bootstrap().await;

    let line = ctx.store.data().cart[0].clone();
    ctx.store
        .change_cart_quantity(&line, QuantityChange::Decrement)
        .await;

    assert_eq!(ctx.store.data().cart, vec![cart_item("p1", 100, 80, 2)]);
    assert_eq!(
        ctx.notifier.messages(ToastKind::Success),
        vec!["Removed one product p1 from the cart".to_string()]
    );
    assert_eq!(ctx.api.calls_to("change_cart_quantity"), 1);
    assert_eq!(ctx.api.calls_to("remove_from_cart"), 0);
}

#[tokio::test]
async fn test_decrement_at_quantity_one_routes_to_removal() {
    // Same scenario through both entry points must produce the same state.
    let mut decremented = TestContext::new();
    decremented.api.seed_cart(vec![cart_item("p1", 100, 80, 1)]);
    decremented.store.bootstrap().await;
    let line = decremented.store.data().cart[0].clone();
    decremented
        .store
        .change_cart_quantity(&line, QuantityChange::Decrement)
        .await;

    let mut removed = TestContext::new();
    removed.api.seed_cart(vec![cart_item("p1", 100, 80, 1)]);
    removed.store.bootstrap().await;
    let line = removed.store.data().cart[0].clone();
    removed.store.remove_from_cart(&line).await;

    assert_eq!(decremented.store.data(), removed.store.data());
    // The quantity-change endpoint is never hit; removal is.
    assert_eq!(decremented.api.calls_to("change_cart_quantity"), 0);
    assert_eq!(decremented.api.calls_to("remove_from_cart"), 1);
}

// =============================================================================
// Derived pricing
// =============================================================================

#[tokio::test]
async fn test_totals_and_discount_percent_scenario() {
    // cart = [{_id: "a", original: 100, discounted: 80, qty: 2}]
    let mut ctx = TestContext::new();
    ctx.api.seed_cart(vec![cart_item("a", 100, 80, 2)]);
    ctx.store.bootstrap().await;

    assert_eq!(ctx.store.total_original_price(), Decimal::from(200));
    assert_eq!(ctx.store.total_discounted_price(), Decimal::from(160));
    assert_eq!(ctx.store.discount_percent(), Decimal::from(20));
}

#[tokio::test]
async fn test_pricing_is_zero_on_empty_cart() {
    let ctx = TestContext::new();

    assert_eq!(ctx.store.total_original_price(), Decimal::ZERO);
    assert_eq!(ctx.store.total_discounted_price(), Decimal::ZERO);
    assert_eq!(ctx.store.discount_percent(), Decimal::ZERO);
}

// =============================================================================
// Failure paths
// =============================================================================

#[tokio::test]
async fn test_failed_removal_leaves_state_and_clears_loading() {
    let mut ctx = TestContext::new();
    ctx.api.seed_cart(vec![cart_item("p1", 100, 80, 2)]);
    ctx.store.bootstrap().await;
    ctx.api.fail_on("remove_from_cart");

    let line = ctx.store.data().cart[0].clone();
    ctx.store.remove_from_cart(&line).await;

    assert_eq!(ctx.store.data().cart, vec![cart_item("p1", 100, 80, 2)]);
    assert!(!ctx.store.is_loading());
    assert_eq!(ctx.notifier.messages(ToastKind::Error).len(), 1);
    assert!(ctx.notifier.messages(ToastKind::Success).is_empty());
}

#[tokio::test]
async fn test_failed_add_surfaces_one_failure_toast() {
    let mut ctx = TestContext::new();
    ctx.api.fail_on("add_to_cart");

    ctx.store.add_to_cart(&product("p1", 100, 80)).await;

    assert!(ctx.store.data().cart.is_empty());
    assert_eq!(ctx.notifier.messages(ToastKind::Error).len(), 1);
}
