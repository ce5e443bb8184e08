//! In-memory implementation of [`SocialStore`].
//!
//! [`InMemoryStore`] keeps posts and per-post comment lists in ordered maps.
//! Ids follow [`IdPolicy::GapReuse`]: post ids are drawn from the set of
//! live post ids, comment ids from the owning post's comment list only, so
//! two posts can each hold a comment with id 0.

use std::collections::BTreeMap;

use socials_core::{gap_reuse_id, Comment, CommentId, IdPolicy, Post, PostId};

use crate::error::StorageError;
use crate::traits::{CommentStore, PostStore, SocialStore};

/// In-memory implementation of [`SocialStore`].
///
/// A post's entry in `comments` exists only while it holds at least one
/// comment.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    posts: BTreeMap<PostId, String>,
    comments: BTreeMap<PostId, Vec<Comment>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn comments_mut(&mut self, post_id: PostId) -> Result<&mut Vec<Comment>, StorageError> {
        if !self.posts.contains_key(&post_id) {
            return Err(StorageError::PostNotFound(post_id.0));
        }
        Ok(self.comments.entry(post_id).or_default())
    }
}

impl PostStore for InMemoryStore {
    fn insert_post(&mut self, body: &str) -> Result<Post, StorageError> {
        let id = PostId(gap_reuse_id(self.posts.keys().map(|id| id.0)));
        self.posts.insert(id, body.to_string());
        Ok(Post::new(id, body))
    }

    fn get_post(&self, id: PostId) -> Result<Post, StorageError> {
        self.posts
            .get(&id)
            .map(|body| Post::new(id, body.clone()))
            .ok_or(StorageError::PostNotFound(id.0))
    }

    fn post_exists(&self, id: PostId) -> Result<bool, StorageError> {
        Ok(self.posts.contains_key(&id))
    }

    fn list_posts(&self) -> Result<Vec<Post>, StorageError> {
        Ok(self
            .posts
            .iter()
            .map(|(&id, body)| Post::new(id, body.clone()))
            .collect())
    }

    fn update_post(&mut self, id: PostId, body: &str) -> Result<Post, StorageError> {
        let stored = self
            .posts
            .get_mut(&id)
            .ok_or(StorageError::PostNotFound(id.0))?;
        *stored = body.to_string();
        Ok(Post::new(id, body))
    }

    fn delete_post(&mut self, id: PostId) -> Result<(), StorageError> {
        if !self.posts.contains_key(&id) {
            return Err(StorageError::PostNotFound(id.0));
        }
        if self.comments.contains_key(&id) {
            return Err(StorageError::IntegrityError {
                reason: format!("post {} still has comments", id),
            });
        }
        self.posts.remove(&id);
        Ok(())
    }
}

impl CommentStore for InMemoryStore {
    fn insert_comment(&mut self, post_id: PostId, comment: &str) -> Result<Comment, StorageError> {
        let list = self.comments_mut(post_id)?;
        let id = CommentId(gap_reuse_id(list.iter().map(|c| c.id.0)));
        let stored = Comment::new(id, post_id, comment);
        list.push(stored.clone());
        Ok(stored)
    }

    fn get_comment(
        &self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<Comment, StorageError> {
        self.comments
            .get(&post_id)
            .and_then(|list| list.iter().find(|c| c.id == comment_id))
            .cloned()
            .ok_or(StorageError::CommentNotFound {
                post: post_id.0,
                comment: comment_id.0,
            })
    }

    fn comment_exists(&self, comment_id: CommentId) -> Result<bool, StorageError> {
        Ok(self
            .comments
            .values()
            .flatten()
            .any(|c| c.id == comment_id))
    }

    fn find_comments_by_post(&self, post_id: PostId) -> Result<Vec<Comment>, StorageError> {
        Ok(self.comments.get(&post_id).cloned().unwrap_or_default())
    }

    fn list_comments(&self) -> Result<Vec<Comment>, StorageError> {
        Ok(self.comments.values().flatten().cloned().collect())
    }

    fn update_comment(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
        comment: &str,
    ) -> Result<Comment, StorageError> {
        let stored = self
            .comments
            .get_mut(&post_id)
            .and_then(|list| list.iter_mut().find(|c| c.id == comment_id))
            .ok_or(StorageError::CommentNotFound {
                post: post_id.0,
                comment: comment_id.0,
            })?;
        stored.comment = comment.to_string();
        Ok(stored.clone())
    }

    fn delete_comment(
        &mut self,
        post_id: PostId,
        comment_id: CommentId,
    ) -> Result<(), StorageError> {
        let not_found = StorageError::CommentNotFound {
            post: post_id.0,
            comment: comment_id.0,
        };
        let list = self.comments.get_mut(&post_id).ok_or(not_found)?;
        let before = list.len();
        list.retain(|c| c.id != comment_id);
        if list.len() == before {
            return Err(StorageError::CommentNotFound {
                post: post_id.0,
                comment: comment_id.0,
            });
        }
        if list.is_empty() {
            self.comments.remove(&post_id);
        }
        Ok(())
    }

    fn delete_comments_by_post(&mut self, post_id: PostId) -> Result<usize, StorageError> {
        Ok(self
            .comments
            .remove(&post_id)
            .map_or(0, |list| list.len()))
    }
}

impl SocialStore for InMemoryStore {
    fn id_policy(&self) -> IdPolicy {
        IdPolicy::GapReuse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_post_gets_id_zero() {
        let mut store = InMemoryStore::new();
        let post = store.insert_post("Test Post").unwrap();
        assert_eq!(post, Post::new(PostId(0), "Test Post"));
        assert_eq!(store.get_post(PostId(0)).unwrap().body, "Test Post");
    }

    #[test]
    fn test_post_ids_reuse_count_then_extend_past_max() {
        let mut store = InMemoryStore::new();
        for body in ["a", "b", "c"] {
            store.insert_post(body).unwrap();
        }

        // [0, 1, 2] -> delete 1 -> [0, 2]; count 2 is taken, so max + 1.
        store.delete_post(PostId(1)).unwrap();
        assert_eq!(store.insert_post("d").unwrap().id, PostId(3));

        // [0, 2, 3] -> delete 2 -> [0, 3]; count 2 is free.
        store.delete_post(PostId(2)).unwrap();
        assert_eq!(store.insert_post("e").unwrap().id, PostId(2));
    }

    #[test]
    fn test_list_posts_ordered_and_empty() {
        let mut store = InMemoryStore::new();
        assert!(store.list_posts().unwrap().is_empty());

        store.insert_post("alpha").unwrap();
        store.insert_post("beta").unwrap();
        let posts = store.list_posts().unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].body, "alpha");
        assert_eq!(posts[1].id, PostId(1));
    }

    #[test]
    fn test_update_and_missing_post() {
        let mut store = InMemoryStore::new();
        let post = store.insert_post("old").unwrap();
        let updated = store.update_post(post.id, "new").unwrap();
        assert_eq!(updated.id, post.id);
        assert_eq!(store.get_post(post.id).unwrap().body, "new");

        match store.update_post(PostId(42), "x").unwrap_err() {
            StorageError::PostNotFound(id) => assert_eq!(id, 42),
            other => panic!("expected PostNotFound, got: {:?}", other),
        }
        assert!(store.get_post(PostId(42)).is_err());
    }

    #[test]
    fn test_comment_ids_are_scoped_per_post() {
        let mut store = InMemoryStore::new();
        let p0 = store.insert_post("p0").unwrap();
        let p1 = store.insert_post("p1").unwrap();

        let c0 = store.insert_comment(p0.id, "first on p0").unwrap();
        let c1 = store.insert_comment(p1.id, "first on p1").unwrap();
        let c2 = store.insert_comment(p0.id, "second on p0").unwrap();

        assert_eq!(c0.id, CommentId(0));
        assert_eq!(c1.id, CommentId(0));
        assert_eq!(c2.id, CommentId(1));
        assert_eq!(store.find_comments_by_post(p0.id).unwrap().len(), 2);
        assert_eq!(store.list_comments().unwrap().len(), 3);
    }

    #[test]
    fn test_comment_on_missing_post_is_rejected() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.insert_comment(PostId(0), "nobody home"),
            Err(StorageError::PostNotFound(0))
        ));
        assert!(store.list_comments().unwrap().is_empty());
    }

    #[test]
    fn test_delete_comment_drops_empty_list() {
        let mut store = InMemoryStore::new();
        let post = store.insert_post("p").unwrap();
        let c = store.insert_comment(post.id, "c").unwrap();

        assert!(store.comment_exists(c.id).unwrap());
        store.delete_comment(post.id, c.id).unwrap();
        assert!(!store.comment_exists(c.id).unwrap());
        assert!(store.find_comments_by_post(post.id).unwrap().is_empty());

        // The post can now go without tripping the integrity check.
        store.delete_post(post.id).unwrap();
    }

    #[test]
    fn test_delete_post_with_comments_is_integrity_error() {
        let mut store = InMemoryStore::new();
        let post = store.insert_post("p").unwrap();
        store.insert_comment(post.id, "c").unwrap();

        assert!(matches!(
            store.delete_post(post.id),
            Err(StorageError::IntegrityError { .. })
        ));
        assert_eq!(store.delete_comments_by_post(post.id).unwrap(), 1);
        store.delete_post(post.id).unwrap();
        assert!(!store.post_exists(post.id).unwrap());
    }

    #[test]
    fn test_update_comment_requires_matching_post() {
        let mut store = InMemoryStore::new();
        let p0 = store.insert_post("p0").unwrap();
        let p1 = store.insert_post("p1").unwrap();
        let c = store.insert_comment(p0.id, "before").unwrap();

        assert!(matches!(
            store.update_comment(p1.id, c.id, "hijack"),
            Err(StorageError::CommentNotFound { post: 1, comment: 0 })
        ));
        assert_eq!(store.get_comment(p0.id, c.id).unwrap().comment, "before");

        let updated = store.update_comment(p0.id, c.id, "after").unwrap();
        assert_eq!(updated.comment, "after");
    }

    #[test]
    fn test_id_policy() {
        assert_eq!(InMemoryStore::new().id_policy(), IdPolicy::GapReuse);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            CreatePost,
            DeletePost(usize),
            CreateComment(usize),
            DeleteComment(usize, usize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                3 => Just(Op::CreatePost),
                1 => any::<usize>().prop_map(Op::DeletePost),
                3 => any::<usize>().prop_map(Op::CreateComment),
                1 => (any::<usize>(), any::<usize>()).prop_map(|(p, c)| Op::DeleteComment(p, c)),
            ]
        }

        fn pick<T: Copy>(items: &[T], n: usize) -> Option<T> {
            if items.is_empty() {
                None
            } else {
                Some(items[n % items.len()])
            }
        }

        proptest! {
            #[test]
            fn ids_unique_under_any_create_delete_sequence(ops in proptest::collection::vec(op(), 0..80)) {
                let mut store = InMemoryStore::new();
                for op in ops {
                    let post_ids: Vec<PostId> = store.list_posts().unwrap().iter().map(|p| p.id).collect();
                    match op {
                        Op::CreatePost => {
                            let post = store.insert_post("p").unwrap();
                            prop_assert!(!post_ids.contains(&post.id));
                        }
                        Op::DeletePost(n) => {
                            if let Some(id) = pick(&post_ids, n) {
                                store.delete_comments_by_post(id).unwrap();
                                store.delete_post(id).unwrap();
                                prop_assert!(store.find_comments_by_post(id).unwrap().is_empty());
                            }
                        }
                        Op::CreateComment(n) => {
                            if let Some(post_id) = pick(&post_ids, n) {
                                let before: Vec<CommentId> = store
                                    .find_comments_by_post(post_id)
                                    .unwrap()
                                    .iter()
                                    .map(|c| c.id)
                                    .collect();
                                let comment = store.insert_comment(post_id, "c").unwrap();
                                prop_assert!(!before.contains(&comment.id));
                            }
                        }
                        Op::DeleteComment(p, c) => {
                            if let Some(post_id) = pick(&post_ids, p) {
                                let ids: Vec<CommentId> = store
                                    .find_comments_by_post(post_id)
                                    .unwrap()
                                    .iter()
                                    .map(|c| c.id)
                                    .collect();
                                if let Some(comment_id) = pick(&ids, c) {
                                    store.delete_comment(post_id, comment_id).unwrap();
                                }
                            }
                        }
                    }

                    // Every stored comment still points at a live post.
                    for comment in store.list_comments().unwrap() {
                        prop_assert!(store.post_exists(comment.post_id).unwrap());
                    }
                }
            }
        }
    }
}
