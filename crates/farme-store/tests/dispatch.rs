use farme_commerce::prelude::*;
use farme_store::{Action, StoreState, UserProfile};

#[test]
fn shopper_session_over_builtin_catalog() {
    let catalog = Catalog::builtin();
    let mut store = StoreState::new(Currency::VND);

    for (id, quantity) in [("1", 2), ("10", 1), ("1", 3)] {
        let product = catalog.get(id).unwrap();
        let before = store.total_items();
        store
            .dispatch(Action::AddToCart(CartLine::from_product(product, quantity)))
            .unwrap();
        assert_eq!(store.total_items(), before + quantity);
    }

    assert_eq!(store.cart.line_count(), 2);
    assert_eq!(store.cart.line(&ProductId::new("1")).unwrap().quantity, 5);

    store
        .dispatch(Action::SignIn(UserProfile::new("u-7", "Minh")))
        .unwrap();
    assert!(store.is_authenticated());
}

#[test]
fn store_state_round_trips_through_json() {
    let catalog = Catalog::builtin();
    let mut store = StoreState::default();
    store
        .dispatch(Action::AddToCart(CartLine::from_product(catalog.get("7").unwrap(), 2)))
        .unwrap();

    let json = serde_json::to_string(&store).unwrap();
    let restored: StoreState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, store);
}
