use super::dto::{CategoryPageResponse, CategorySection, GridEntry, HomeResponse};
use super::error::CatalogServiceError;
use super::model::{Category, CategoryItem, ContentItem, CoverItem, SellingLink};
use crate::domain::listing::{group_by_key, interleave, shuffle, shuffle_groups};
use crate::infrastructure::repositories::{
    CategoryItemRepository, CategoryRepository, CoverItemRepository, SellingLinkRepository,
};
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

const SNAPSHOT_KEY: &str = "catalog";

/// Single-entry snapshot cache guarded by a generation counter.
///
/// A load that started before an invalidation must not be stored after it,
/// so callers read the generation before loading and store with
/// [`SnapshotCache::insert_if_current`].
pub struct SnapshotCache {
    cache: Cache<&'static str, Arc<CatalogSnapshot>>,
    generation: AtomicU64,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Cache::builder().max_capacity(1).time_to_live(ttl).build(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub async fn get(&self) -> Option<Arc<CatalogSnapshot>> {
        self.cache.get(&SNAPSHOT_KEY).await
    }

    /// Store `snapshot` unless the cache was invalidated since `generation`
    /// was read. Returns whether it was stored.
    pub async fn insert_if_current(&self, generation: u64, snapshot: Arc<CatalogSnapshot>) -> bool {
        if self.generation() != generation {
            return false;
        }
        self.cache.insert(SNAPSHOT_KEY, snapshot).await;

        // An invalidation may have landed between the check and the insert
        if self.generation() != generation {
            self.cache.invalidate(&SNAPSHOT_KEY).await;
            return false;
        }
        true
    }

    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cache.invalidate_all();
    }
}

/// Every row the public pages are built from, as fetched in one pass.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub categories: Vec<Category>,
    pub items: Vec<CategoryItem>,
    pub covers: Vec<CoverItem>,
    pub selling_links: Vec<SellingLink>,
}

impl CatalogSnapshot {
    /// Shuffle `items`, interleave the selling links and drop unrenderable banners.
    pub fn grid(&self, items: &[CategoryItem]) -> Vec<GridEntry> {
        interleave(&shuffle(items), &self.selling_links)
            .into_iter()
            .filter_map(GridEntry::from_slot)
            .collect()
    }

    /// One section per category, in category order, each with its own shuffled grid.
    pub fn sections(&self) -> Vec<CategorySection> {
        let mut groups = shuffle_groups(group_by_key(self.items.iter().cloned(), |item| {
            item.category_id
        }));

        self.categories
            .iter()
            .map(|category| {
                let items = groups.remove(&category.id).unwrap_or_default();
                let entries = interleave(&items, &self.selling_links)
                    .into_iter()
                    .filter_map(GridEntry::from_slot)
                    .collect();
                CategorySection {
                    category: category.clone(),
                    entries,
                }
            })
            .collect()
    }

    /// Category products win over cover products sharing a slug.
    pub fn find_product(&self, slug: &str) -> Option<ContentItem> {
        self.items
            .iter()
            .find(|item| item.slug.as_deref() == Some(slug))
            .cloned()
            .map(ContentItem::CategoryProduct)
            .or_else(|| {
                self.covers
                    .iter()
                    .find(|cover| cover.slug.as_deref() == Some(slug))
                    .cloned()
                    .map(ContentItem::CoverProduct)
            })
    }
}

pub struct CatalogService {
    category_repo: Arc<CategoryRepository>,
    item_repo: Arc<CategoryItemRepository>,
    cover_repo: Arc<CoverItemRepository>,
    selling_link_repo: Arc<SellingLinkRepository>,
    cache: Option<SnapshotCache>,
}

impl CatalogService {
    /// `cache_ttl` of zero disables snapshot caching.
    pub fn new(
        category_repo: Arc<CategoryRepository>,
        item_repo: Arc<CategoryItemRepository>,
        cover_repo: Arc<CoverItemRepository>,
        selling_link_repo: Arc<SellingLinkRepository>,
        cache_ttl: Duration,
    ) -> Self {
        let cache = if cache_ttl.is_zero() {
            None
        } else {
            Some(SnapshotCache::new(cache_ttl))
        };

        Self {
            category_repo,
            item_repo,
            cover_repo,
            selling_link_repo,
            cache,
        }
    }
}

#[async_trait]
pub trait CatalogServiceApi: Send + Sync {
    /// Shuffled cover carousel plus categories in creation order
    async fn home(&self) -> Result<HomeResponse, CatalogServiceError>;

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogServiceError>;

    /// Products of one category, shuffled and interleaved with selling links
    async fn category_page(&self, slug: &str) -> Result<CategoryPageResponse, CatalogServiceError>;

    async fn sections(&self) -> Result<Vec<CategorySection>, CatalogServiceError>;

    async fn find_product(&self, slug: &str) -> Result<ContentItem, CatalogServiceError>;

    /// Drop cached rows so the next read hits the database
    async fn invalidate(&self);
}

#[async_trait]
impl CatalogServiceApi for CatalogService {
    async fn home(&self) -> Result<HomeResponse, CatalogServiceError> {
        let snapshot = self.snapshot().await?;
        Ok(HomeResponse {
            covers: shuffle(&snapshot.covers),
            categories: snapshot.categories.clone(),
        })
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogServiceError> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.categories.clone())
    }

    async fn category_page(&self, slug: &str) -> Result<CategoryPageResponse, CatalogServiceError> {
        let snapshot = self.snapshot().await?;

        let category = snapshot
            .categories
            .iter()
            .find(|category| category.slug == slug)
            .cloned()
            .ok_or(CatalogServiceError::NotFound("Category"))?;

        let items: Vec<CategoryItem> = snapshot
            .items
            .iter()
            .filter(|item| item.category_id == Some(category.id))
            .cloned()
            .collect();

        tracing::debug!(
            category = %category.slug,
            items = items.len(),
            selling_links = snapshot.selling_links.len(),
            "Building category grid"
        );

        let entries = snapshot.grid(&items);
        Ok(CategoryPageResponse { category, entries })
    }

    async fn sections(&self) -> Result<Vec<CategorySection>, CatalogServiceError> {
        let snapshot = self.snapshot().await?;
        Ok(snapshot.sections())
    }

    async fn find_product(&self, slug: &str) -> Result<ContentItem, CatalogServiceError> {
        let snapshot = self.snapshot().await?;
        let product = snapshot
            .find_product(slug)
            .ok_or(CatalogServiceError::NotFound("Product"))?;
        tracing::debug!(slug, product_id = %product.id(), "Product resolved");
        Ok(product)
    }

    async fn invalidate(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate();
            tracing::info!(generation = cache.generation(), "Catalog cache invalidated");
        }
    }
}

impl CatalogService {
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>, CatalogServiceError> {
        let Some(cache) = &self.cache else {
            return Ok(Arc::new(self.load_snapshot().await?));
        };

        if let Some(snapshot) = cache.get().await {
            tracing::debug!("Catalog cache hit");
            return Ok(snapshot);
        }

        let generation = cache.generation();
        let snapshot = Arc::new(self.load_snapshot().await?);

        if cache.insert_if_current(generation, snapshot.clone()).await {
            tracing::debug!(
                categories = snapshot.categories.len(),
                items = snapshot.items.len(),
                covers = snapshot.covers.len(),
                selling_links = snapshot.selling_links.len(),
                "Catalog snapshot cached"
            );
        } else {
            tracing::debug!("Catalog invalidated during load; snapshot not cached");
        }

        Ok(snapshot)
    }

    async fn load_snapshot(&self) -> Result<CatalogSnapshot, CatalogServiceError> {
        let (categories, items, covers, selling_links) = tokio::try_join!(
            self.category_repo.list_all(),
            self.item_repo.list_all(),
            self.cover_repo.list_all(),
            self.selling_link_repo.list_all(),
        )
        .map_err(|e| CatalogServiceError::Dependency(e.to_string()))?;

        Ok(CatalogSnapshot {
            categories,
            items,
            covers,
            selling_links,
        })
    }
}
