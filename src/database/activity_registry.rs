use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::database::seed;
use crate::models::Activity;

/// In-memory activity store, keyed by activity name in insertion order.
///
/// The registry is owned by whoever constructs it (usually `main`, or a test)
/// and handed to request handlers behind an `Arc`. Nothing here is persisted.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let mut map = IndexMap::new();
        for (name, activity) in activities {
            // First definition wins so names stay unique.
            map.entry(name).or_insert(activity);
        }
        Self {
            activities: RwLock::new(map),
        }
    }

    /// Registry pre-filled with the fixed startup data set.
    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub async fn snapshot(&self) -> IndexMap<String, Activity> {
        self.activities.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Runs `f` against the named activity while holding the write lock.
    ///
    /// Returns `None` when no activity has that name. The lock covers the
    /// whole closure, so a check followed by a mutation inside `f` is atomic
    /// with respect to every other caller.
    pub async fn update<F, R>(&self, name: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut Activity) -> R,
    {
        let mut guard = self.activities.write().await;
        guard.get_mut(name).map(f)
    }
}
