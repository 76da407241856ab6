use crate::models::Post;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

// ============================================================================
// POST STORE - The in-memory collection and its id counter
// ============================================================================
/// Both the map and the counter live behind ONE `Mutex`, so an id is taken
/// and its post inserted as a single step.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug)]
pub struct PostStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    posts: HashMap<i64, Post>,
    next_id: i64,
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                posts: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// No operation leaves the map half-written, so a poisoned lock is still
    /// safe to keep using.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every post, in no particular order.
    pub fn list(&self) -> Vec<Post> {
        self.lock().posts.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<Post> {
        self.lock().posts.get(&id).cloned()
    }

    pub fn create(&self, body: String) -> Post {
        let mut inner = self.lock();

        let post = Post {
            id: inner.next_id,
            body,
        };
        inner.next_id += 1;
        inner.posts.insert(post.id, post.clone());

        post
    }

    /// Looks up `id` and stores the fetched record back as it was.
    ///
    /// The submitted body is NOT applied: callers get the current record
    /// unchanged, or `None` when `id` is absent.
    pub fn replace(&self, id: i64, _body: String) -> Option<Post> {
        let mut inner = self.lock();

        let post = inner.posts.get(&id).cloned()?;
        inner.posts.insert(post.id, post.clone());

        Some(post)
    }

    pub fn delete(&self, id: i64) -> Option<Post> {
        self.lock().posts.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.lock().posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
