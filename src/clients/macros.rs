/// Generates the constructor and the typed `create_*` / `update_*` methods of a domain
/// client. Read and delete come from [`ActorClient`](resource_actor::ActorClient).
///
/// Framework errors are mapped with the error type's `From<FrameworkError>` impl, so a
/// hook error raised inside the actor comes back as the domain error it started as.
macro_rules! impl_client_methods {
    ($client:ident, $entity:ty, $create:ty, $update:ty, $error:ty, $snake:ident) => {
        paste::paste! {
            impl $client {
                pub fn new(inner: resource_actor::ResourceClient<$entity>) -> Self {
                    Self { inner }
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<create_ $snake>](&self, params: $create) -> Result<$entity, $error> {
                    tracing::debug!("Sending request");
                    self.inner.create(params).await.map_err(<$error>::from)
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<update_ $snake>](
                    &self,
                    id: <$entity as resource_actor::ActorEntity>::Id,
                    update: $update,
                ) -> Result<$entity, $error> {
                    tracing::debug!("Sending request");
                    self.inner.update(id, update).await.map_err(<$error>::from)
                }
            }
        }
    };
}
