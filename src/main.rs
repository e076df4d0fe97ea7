use resource_actor::tracing::setup_tracing;
use resource_actor::ActorClient;
use storefront::config::StoreConfig;
use storefront::lifecycle::StoreSystem;
use storefront::model::{
    CustomerCreate, OrderCreate, OrderUpdate, Patch, ProductCreate, ProductId, ProductUpdate,
};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = StoreConfig::from_env()?;
    info!(?config, "Starting store");
    let system = StoreSystem::new(config);

    let customer = async {
        info!("Creating customer");
        system
            .customer_client
            .create_customer(CustomerCreate {
                name: "Alice".to_string(),
                email: Some("alice@example.com".to_string()),
            })
            .await
    }
    .instrument(tracing::info_span!("customer_creation"))
    .await?;
    info!(customer_id = %customer.id, "Customer created");

    let product = async {
        info!("Creating product");
        let product = system
            .product_client
            .create_product(ProductCreate {
                name: "Lamp".to_string(),
                price: 24.5,
                description: "Desk lamp".to_string(),
            })
            .await?;
        let update = ProductUpdate {
            price: Patch::Set(19.99),
            ..Default::default()
        };
        system.product_client.update_product(product.id, update).await
    }
    .instrument(tracing::info_span!("product_setup"))
    .await?;
    info!(product_id = %product.id, price = product.price, "Product ready");

    let span = tracing::info_span!("order_processing");
    async {
        let order = system
            .order_client
            .create_order(OrderCreate {
                customer_id: customer.id,
                order_items: vec![product.id, product.id],
            })
            .await?;
        info!(order_id = %order.order_id, items = order.order_items.len(), "Order created");

        let rejected = system
            .order_client
            .update_order(
                order.order_id,
                OrderUpdate {
                    order_items: Patch::Set(vec![product.id, ProductId(42)]),
                    ..Default::default()
                },
            )
            .await;
        if let Err(e) = rejected {
            error!(error = %e, "Order update rejected");
        }

        let orders = system.order_client.list().await?;
        info!(count = orders.len(), "Orders in store");
        Ok::<_, storefront::order_actor::OrderError>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
