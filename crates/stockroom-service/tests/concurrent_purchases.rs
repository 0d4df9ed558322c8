use stockroom_service::commands::product::{add_product, find_product, NewProduct};
use stockroom_service::commands::sale::{purchase, purchase_history, top_selling};
use stockroom_service::error::ErrorCode;
use stockroom_service::init_tracing;
use stockroom_service::state::StoreState;

fn shelf(stock: i64) -> StoreState {
    let store = StoreState::default();
    add_product(
        &store,
        NewProduct {
            id: None,
            name: "Mouse".to_string(),
            unit_price_cents: 1_999,
            stock,
        },
    )
    .unwrap();
    store
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_purchases_never_oversell() {
    let store = shelf(50);

    let handles: Vec<_> = (0..40)
        .map(|i| {
            let store = store.clone();
            let query = if i % 2 == 0 { "1" } else { "mouse" };
            tokio::spawn(async move { purchase(&store, query, 3) })
        })
        .collect();

    let mut sold = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(dto) => sold += dto.quantity,
            Err(err) => {
                assert_eq!(err.code, ErrorCode::InsufficientStock);
                rejected += 1;
            }
        }
    }

    // 50 / 3 = 16 full purchases, 2 units left over
    assert_eq!(sold, 48);
    assert_eq!(rejected, 24);

    let mouse = find_product(&store, "Mouse").unwrap();
    assert_eq!(mouse.stock_quantity, 2);
    assert_eq!(mouse.units_sold, 48);
    assert_eq!(purchase_history(&store).unwrap().len(), 16);

    let top = top_selling(&store, None).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].units_sold, 48);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn receipt_numbers_are_unique_under_contention() {
    let store = shelf(1_000);

    let handles: Vec<_> = (0..64)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { purchase(&store, "Mouse", 1) })
        })
        .collect();

    let mut numbers = Vec::new();
    for handle in handles {
        numbers.push(handle.await.unwrap().unwrap().receipt_number);
    }
    numbers.sort_unstable();

    assert_eq!(numbers, (1..=64).collect::<Vec<u64>>());
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    assert!(!init_tracing());
}
