use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::config::StoreConfig;
use crate::lifecycle::seed;
use crate::{customer_actor, order_actor, product_actor};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The running store: one actor per collection and a client for each.
///
/// Build it once and pass the clients (they are cheap to clone) to whatever serves
/// requests. There is no global state; two `StoreSystem`s are fully independent.
///
/// # Example
///
/// ```rust
/// use storefront::config::StoreConfig;
/// use storefront::lifecycle::StoreSystem;
/// use resource_actor::ActorClient;
///
/// #[tokio::main]
/// async fn main() {
///     let system = StoreSystem::new(StoreConfig::default());
///     let products = system.product_client.list().await.unwrap();
///     assert_eq!(products.len(), 1);
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct StoreSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl StoreSystem {
    /// Creates the three actors, seeds them if configured, and spawns them.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: StoreConfig) -> Self {
        let capacity = config.channel_capacity;
        let (customer_actor, customer_client) = customer_actor::new(capacity);
        let (mut product_actor, product_client) = product_actor::new(capacity);
        let (mut order_actor, order_client) = order_actor::new(capacity);

        if config.seed {
            product_actor.seed(seed::demo_products());
            order_actor.seed(seed::demo_orders());
        }

        let customer_handle = tokio::spawn(customer_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle =
            tokio::spawn(order_actor.run((customer_client.clone(), product_client.clone())));

        info!(capacity, seeded = config.seed, "Store started");

        Self {
            customer_client,
            product_client,
            order_client,
            handles: vec![customer_handle, product_handle, order_handle],
        }
    }

    /// Drops every client and waits for the actors to drain.
    ///
    /// The order actor holds clones of the customer and product clients, so those two
    /// actors stop only after it has.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down store...");
        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Store shutdown complete.");
        Ok(())
    }
}
