use resource_actor::ActorClient;
use storefront::config::StoreConfig;
use storefront::customer_actor::CustomerError;
use storefront::lifecycle::StoreSystem;
use storefront::model::*;
use storefront::order_actor::OrderError;
use storefront::product_actor::ProductError;

fn unseeded() -> StoreSystem {
    StoreSystem::new(StoreConfig {
        seed: false,
        ..Default::default()
    })
}

fn alice() -> CustomerCreate {
    CustomerCreate {
        name: "Alice".to_string(),
        email: Some("alice@example.com".to_string()),
    }
}

#[tokio::test]
async fn test_seeded_store() {
    let system = StoreSystem::new(StoreConfig::default());

    assert!(system.customer_client.list().await.unwrap().is_empty());
    assert_eq!(
        system.product_client.list().await.unwrap(),
        vec![Product::new(ProductId(0), "Product", 0.0, "Description")]
    );
    let order = system.order_client.get(OrderId(0)).await.unwrap();
    assert_eq!(order.customer_id, CustomerId(0));
    assert_eq!(order.order_items, (0..4).map(ProductId).collect::<Vec<_>>());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_for_missing_customer() {
    let system = StoreSystem::new(StoreConfig::default());

    let err = system
        .order_client
        .create_order(OrderCreate {
            customer_id: CustomerId(0),
            order_items: vec![],
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Customer with ID=0 does not exist.");
    assert_eq!(system.order_client.list().await.unwrap().len(), 1);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_with_repeated_product_gets_next_id() {
    let system = StoreSystem::new(StoreConfig::default());
    let customer = system.customer_client.create_customer(alice()).await.unwrap();
    assert_eq!(customer.id, CustomerId(0));

    let order = system
        .order_client
        .create_order(OrderCreate {
            customer_id: CustomerId(0),
            order_items: vec![ProductId(0); 3],
        })
        .await
        .unwrap();

    assert_eq!(order.order_id, OrderId(1));
    assert_eq!(order.order_items, vec![ProductId(0); 3]);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_for_missing_product_with_valid_customer() {
    let system = StoreSystem::new(StoreConfig::default());
    system.customer_client.create_customer(alice()).await.unwrap();

    let err = system
        .order_client
        .create_order(OrderCreate {
            customer_id: CustomerId(0),
            order_items: vec![ProductId(0), ProductId(7)],
        })
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::Product(ProductError::NotFound(ProductId(7))));
    assert_eq!(err.to_string(), "Product with ID=7 does not exist.");
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_partial_update() {
    let system = StoreSystem::new(StoreConfig::default());

    let update: ProductUpdate = serde_json::from_str(r#"{"price": 9.99}"#).unwrap();
    let product = system
        .product_client
        .update_product(ProductId(0), update)
        .await
        .unwrap();

    assert_eq!(product, Product::new(ProductId(0), "Product", 9.99, "Description"));
    assert_eq!(system.product_client.get(ProductId(0)).await.unwrap(), product);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_missing_customer() {
    let system = unseeded();

    let err = system
        .customer_client
        .update_customer(CustomerId(3), CustomerUpdate::default())
        .await
        .unwrap_err();

    assert_eq!(err, CustomerError::NotFound(CustomerId(3)));
    assert_eq!(err.to_string(), "Customer with ID=3 does not exist.");
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_get_after_create_returns_created_record() {
    let system = StoreSystem::new(StoreConfig::default());

    let product = system
        .product_client
        .create_product(ProductCreate {
            name: "Lamp".to_string(),
            price: 24.5,
            description: "Desk lamp".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(product, Product::new(ProductId(1), "Lamp", 24.5, "Desk lamp"));
    assert_eq!(system.product_client.get(product.id).await.unwrap(), product);

    let customer = system.customer_client.create_customer(alice()).await.unwrap();
    assert_eq!(
        customer,
        Customer::new(CustomerId(0), "Alice", Some("alice@example.com".to_string()))
    );
    assert_eq!(system.customer_client.get(customer.id).await.unwrap(), customer);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_order_then_get() {
    let system = StoreSystem::new(StoreConfig::default());

    system.order_client.delete(OrderId(0)).await.unwrap();

    let err = system.order_client.get(OrderId(0)).await.unwrap_err();
    assert_eq!(err, OrderError::NotFound(OrderId(0)));
    assert_eq!(err.to_string(), "Order with ID=0 does not exist.");
    assert!(system.order_client.list().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_absent_order_leaves_orders_unchanged() {
    let system = StoreSystem::new(StoreConfig::default());
    let before = system.order_client.list().await.unwrap();

    let err = system.order_client.delete(OrderId(42)).await.unwrap_err();

    assert_eq!(err, OrderError::NotFound(OrderId(42)));
    assert_eq!(err.to_string(), "Order with ID=42 does not exist.");
    assert_eq!(system.order_client.list().await.unwrap(), before);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_then_get() {
    let system = unseeded();
    let customer = system.customer_client.create_customer(alice()).await.unwrap();

    system.customer_client.delete(customer.id).await.unwrap();

    let err = system.customer_client.get(customer.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(system.customer_client.list().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_absent_leaves_collection_unchanged() {
    let system = StoreSystem::new(StoreConfig::default());
    let before = system.product_client.list().await.unwrap();

    let err = system.product_client.delete(ProductId(99)).await.unwrap_err();

    assert_eq!(err, ProductError::NotFound(ProductId(99)));
    assert_eq!(system.product_client.list().await.unwrap(), before);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ids_increase_and_are_not_reused() {
    let system = unseeded();
    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let customer = system
            .customer_client
            .create_customer(CustomerCreate {
                name: name.to_string(),
                email: None,
            })
            .await
            .unwrap();
        ids.push(customer.id);
    }
    assert_eq!(ids, vec![CustomerId(0), CustomerId(1), CustomerId(2)]);

    system.customer_client.delete(CustomerId(2)).await.unwrap();
    let next = system.customer_client.create_customer(alice()).await.unwrap();
    assert_eq!(next.id, CustomerId(3));

    let names: Vec<String> = system
        .customer_client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["a", "b", "Alice"]);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleting_referenced_customer_does_not_cascade() {
    let system = unseeded();
    let customer = system.customer_client.create_customer(alice()).await.unwrap();
    let order = system
        .order_client
        .create_order(OrderCreate {
            customer_id: customer.id,
            order_items: vec![],
        })
        .await
        .unwrap();

    system.customer_client.delete(customer.id).await.unwrap();

    assert_eq!(system.order_client.get(order.order_id).await.unwrap(), order);

    // Re-sending the dangling customer id is now rejected.
    let update = OrderUpdate {
        customer_id: Patch::Set(customer.id),
        ..Default::default()
    };
    let err = system
        .order_client
        .update_order(order.order_id, update)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::Customer(CustomerError::NotFound(customer.id)));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let system = unseeded();

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let client = system.customer_client.clone();
            tokio::spawn(async move {
                client
                    .create_customer(CustomerCreate {
                        name: format!("customer-{i}"),
                        email: None,
                    })
                    .await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort();
    assert_eq!(ids, (0..20).map(CustomerId).collect::<Vec<_>>());
    system.shutdown().await.unwrap();
}
