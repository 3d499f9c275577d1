use super::*;

use vitrine_core::TestRuntime;

struct FixtureApi {
    result: Result<Vec<Product>, ApiError>,
}

impl CatalogApi for FixtureApi {
    fn get_related_products(&self, _product_id: u64) -> LocalBoxFuture<Result<Vec<Product>, ApiError>> {
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}

fn sample_product(id: u64) -> Product {
    Product {
        id,
        name: format!("product-{id}"),
        image: format!("https://cdn.example/p{id}.webp"),
        price: 10.0 * id as f64,
        original_price: None,
        rating: 4.0,
        review_count: 12,
        brand_id: 1,
        category_id: 2,
    }
}

#[test]
fn successful_fetch_fills_the_state() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let related = MutableState::new(Vec::new());

    let api = Rc::new(FixtureApi {
        result: Ok(vec![sample_product(1), sample_product(2)]),
    });
    load_related_products(&handle, api, 99, related.clone());

    handle.drain_ui();
    let loaded = related.get();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, 1);
}

#[test]
fn failed_fetch_degrades_to_an_empty_list() {
    let runtime = TestRuntime::new();
    let handle = runtime.handle();
    let related = MutableState::new(vec![sample_product(7)]);

    let api = Rc::new(FixtureApi {
        result: Err(ApiError::Transport("connection reset".into())),
    });
    load_related_products(&handle, api, 7, related.clone());

    handle.drain_ui();
    assert!(related.get().is_empty(), "failure must clear, not keep stale data");
}
