//! # Tracing Setup
//!
//! Log lines are compact and carry structured fields instead of module
//! paths. Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle, loads, toggles, submits
//! RUST_LOG=debug cargo run    # plus payloads and every gesture
//! RUST_LOG=food_cart::session=debug,info cargo run
//! ```
//!
//! With `RUST_LOG=info` the demo prints roughly:
//!
//! ```text
//! INFO Actor started entity_type="Food"
//! INFO Loading food food_id=food_1 generation=1
//! INFO Food loaded food_id=food_1 unit_price="R$ 10,00" extras=2
//! INFO Favorite status resolved food_id=food_1 status=NotFavorite
//! INFO Favorite toggled food_id=food_1 target=Favorite seq=2
//! INFO Submitting order food_id=food_1 total=26.00
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
