use std::collections::HashMap;
use std::future::Future;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{CollectionBackendKind, CollectionConfig};
use crate::error::{Error, Result};
use crate::models::entity::{Entity, EntityId, Scoped};
use crate::services::memory_collection::MemoryCollectionApi;

/// Remote collection store: list/get/create/update/delete per collection.
///
/// Non-2xx answers surface as [`Error::RemoteCallFailed`]; a 404 on a
/// single-record fetch surfaces as [`Error::NotFound`].
pub trait CollectionApi: Clone + Send + Sync + 'static {
    fn list<T: Entity>(&self) -> impl Future<Output = Result<Vec<T>>> + Send;

    fn get<T: Entity>(&self, id: &EntityId) -> impl Future<Output = Result<T>> + Send;

    fn list_by<T: Scoped>(&self, value: &EntityId) -> impl Future<Output = Result<Vec<T>>> + Send;

    fn create<T: Entity>(&self, draft: &T::Draft) -> impl Future<Output = Result<T>> + Send;

    fn update<T: Entity>(&self, record: &T) -> impl Future<Output = Result<T>> + Send;

    fn delete<T: Entity>(&self, id: &EntityId) -> impl Future<Output = Result<()>> + Send;
}

/// JSON-over-HTTP client for a json-server style store.
#[derive(Clone)]
pub struct HttpCollectionApi {
    client: Client,
    base_url: Url,
    overrides: HashMap<String, Url>,
}

impl HttpCollectionApi {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self {
            client,
            base_url,
            overrides: HashMap::new(),
        }
    }

    pub fn from_config(client: Client, config: &CollectionConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            overrides: config.overrides.clone(),
        }
    }

    fn collection_url(&self, collection: &str) -> Result<Url> {
        if let Some(url) = self.overrides.get(collection) {
            return Ok(url.clone());
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Cannot use {} as a base URL", self.base_url)))?
            .pop_if_empty()
            .push(collection);
        Ok(url)
    }

    fn record_url(&self, collection: &str, id: &EntityId) -> Result<Url> {
        let mut url = self.collection_url(collection)?;
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Cannot use {} URL as a base", collection)))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }
}

/// Turns a transport error or a non-2xx answer into `RemoteCallFailed`.
fn ensure_success<T: Entity>(
    sent: reqwest::Result<Response>,
    id: Option<&EntityId>,
    action: &str,
) -> Result<Response> {
    let response = sent.map_err(|e| {
        Error::remote(T::KIND, id, None, format!("Failed to {}: {}", action, e))
    })?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::remote(
            T::KIND,
            id,
            Some(status.as_u16()),
            format!("Failed to {} ({})", action, status),
        ));
    }
    Ok(response)
}

async fn decode<T: Entity, R: DeserializeOwned>(
    response: Response,
    id: Option<&EntityId>,
    action: &str,
) -> Result<R> {
    let status = response.status().as_u16();
    response.json::<R>().await.map_err(|e| {
        Error::remote(
            T::KIND,
            id,
            Some(status),
            format!("Failed to {}: unreadable body: {}", action, e),
        )
    })
}

impl CollectionApi for HttpCollectionApi {
    async fn list<T: Entity>(&self) -> Result<Vec<T>> {
        let url = self.collection_url(T::COLLECTION)?;
        let action = format!("fetch {}", T::COLLECTION);
        tracing::debug!(%url, "GET collection");
        let response = ensure_success::<T>(self.client.get(url).send().await, None, &action)?;
        decode::<T, _>(response, None, &action).await
    }

    async fn get<T: Entity>(&self, id: &EntityId) -> Result<T> {
        let url = self.record_url(T::COLLECTION, id)?;
        let action = format!("fetch {}", T::KIND);
        tracing::debug!(%url, "GET record");
        let sent = self.client.get(url).send().await;
        if let Ok(response) = &sent {
            if response.status() == StatusCode::NOT_FOUND {
                return Err(Error::NotFound {
                    entity: T::KIND,
                    id: id.clone(),
                });
            }
        }
        let response = ensure_success::<T>(sent, Some(id), &action)?;
        decode::<T, _>(response, Some(id), &action).await
    }

    async fn list_by<T: Scoped>(&self, value: &EntityId) -> Result<Vec<T>> {
        let url = self.collection_url(T::COLLECTION)?;
        let action = format!("fetch {} by {}", T::COLLECTION, T::FOREIGN_KEY);
        tracing::debug!(%url, foreign_key = T::FOREIGN_KEY, %value, "GET scoped collection");
        let sent = self
            .client
            .get(url)
            .query(&[(T::FOREIGN_KEY, value.to_string())])
            .send()
            .await;
        let response = ensure_success::<T>(sent, None, &action)?;
        decode::<T, _>(response, None, &action).await
    }

    async fn create<T: Entity>(&self, draft: &T::Draft) -> Result<T> {
        let url = self.collection_url(T::COLLECTION)?;
        let action = format!("create {}", T::KIND);
        let response = ensure_success::<T>(self.client.post(url).json(draft).send().await, None, &action)?;
        decode::<T, _>(response, None, &action).await
    }

    async fn update<T: Entity>(&self, record: &T) -> Result<T> {
        let id = record.id();
        let url = self.record_url(T::COLLECTION, id)?;
        let action = format!("update {}", T::KIND);
        let response =
            ensure_success::<T>(self.client.put(url).json(record).send().await, Some(id), &action)?;
        decode::<T, _>(response, Some(id), &action).await
    }

    async fn delete<T: Entity>(&self, id: &EntityId) -> Result<()> {
        let url = self.record_url(T::COLLECTION, id)?;
        let action = format!("delete {}", T::KIND);
        ensure_success::<T>(self.client.delete(url).send().await, Some(id), &action)?;
        Ok(())
    }
}

/// Backend chosen at startup from `COLLECTION_BACKEND`.
#[derive(Clone)]
pub enum CollectionBackend {
    Http(HttpCollectionApi),
    Memory(MemoryCollectionApi),
}

impl CollectionBackend {
    pub fn from_config(client: Client, config: &CollectionConfig) -> Self {
        match config.backend {
            CollectionBackendKind::Http => {
                CollectionBackend::Http(HttpCollectionApi::from_config(client, config))
            }
            CollectionBackendKind::Memory => CollectionBackend::Memory(MemoryCollectionApi::new()),
        }
    }
}

impl CollectionApi for CollectionBackend {
    async fn list<T: Entity>(&self) -> Result<Vec<T>> {
        match self {
            CollectionBackend::Http(api) => api.list().await,
            CollectionBackend::Memory(api) => api.list().await,
        }
    }

    async fn get<T: Entity>(&self, id: &EntityId) -> Result<T> {
        match self {
            CollectionBackend::Http(api) => api.get(id).await,
            CollectionBackend::Memory(api) => api.get(id).await,
        }
    }

    async fn list_by<T: Scoped>(&self, value: &EntityId) -> Result<Vec<T>> {
        match self {
            CollectionBackend::Http(api) => api.list_by(value).await,
            CollectionBackend::Memory(api) => api.list_by(value).await,
        }
    }

    async fn create<T: Entity>(&self, draft: &T::Draft) -> Result<T> {
        match self {
            CollectionBackend::Http(api) => api.create::<T>(draft).await,
            CollectionBackend::Memory(api) => api.create::<T>(draft).await,
        }
    }

    async fn update<T: Entity>(&self, record: &T) -> Result<T> {
        match self {
            CollectionBackend::Http(api) => api.update(record).await,
            CollectionBackend::Memory(api) => api.update(record).await,
        }
    }

    async fn delete<T: Entity>(&self, id: &EntityId) -> Result<()> {
        match self {
            CollectionBackend::Http(api) => api.delete::<T>(id).await,
            CollectionBackend::Memory(api) => api.delete::<T>(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_append_collection_and_id() {
        let api = HttpCollectionApi::new(Client::new(), Url::parse("http://store.local/api/").unwrap());
        assert_eq!(
            api.collection_url("candidates").unwrap().as_str(),
            "http://store.local/api/candidates"
        );
        assert_eq!(
            api.record_url("candidates", &EntityId::Number(4)).unwrap().as_str(),
            "http://store.local/api/candidates/4"
        );
    }

    #[test]
    fn override_replaces_collection_url() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "evaluations".to_string(),
            Url::parse("http://localhost:3001/evaluations").unwrap(),
        );
        let config = CollectionConfig {
            backend: CollectionBackendKind::Http,
            base_url: Url::parse("http://store.local").unwrap(),
            overrides,
            request_timeout: std::time::Duration::from_secs(5),
        };
        let api = HttpCollectionApi::from_config(Client::new(), &config);
        assert_eq!(
            api.record_url("evaluations", &EntityId::from("x9")).unwrap().as_str(),
            "http://localhost:3001/evaluations/x9"
        );
        assert_eq!(
            api.collection_url("candidates").unwrap().as_str(),
            "http://store.local/candidates"
        );
    }
}
