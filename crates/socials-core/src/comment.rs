//! Comment records and the post/comments grouping used on the wire.
//!
//! A stored [`Comment`] carries its owning `post_id`. When rendered to
//! clients, comments are nested under their post as [`CommentView`]s inside a
//! [`PostComments`] grouping, so the post id is not repeated per comment.

use serde::{Deserialize, Serialize};

use crate::id::{CommentId, PostId};
use crate::post::Post;

/// A comment attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub comment: String,
}

impl Comment {
    pub fn new(id: CommentId, post_id: PostId, comment: impl Into<String>) -> Self {
        Comment {
            id,
            post_id,
            comment: comment.into(),
        }
    }

    /// Drops the post reference for nesting under a [`PostComments`].
    pub fn view(&self) -> CommentView {
        CommentView {
            id: self.id,
            comment: self.comment.clone(),
        }
    }
}

/// A comment as rendered inside its post's grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: CommentId,
    pub comment: String,
}

impl From<Comment> for CommentView {
    fn from(c: Comment) -> Self {
        CommentView {
            id: c.id,
            comment: c.comment,
        }
    }
}

/// A post together with (some of) its comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostComments {
    pub post: Post,
    pub comments: Vec<CommentView>,
}

impl PostComments {
    pub fn new(post: Post, comments: impl IntoIterator<Item = Comment>) -> Self {
        PostComments {
            post,
            comments: comments.into_iter().map(CommentView::from).collect(),
        }
    }

    /// Groups `comments` under each post they reference.
    ///
    /// Every post in `posts` yields one grouping, in the order given. When
    /// `skip_empty` is set, posts without any comment are left out. Comments
    /// whose post is not in `posts` are ignored.
    pub fn group(posts: Vec<Post>, comments: Vec<Comment>, skip_empty: bool) -> Vec<PostComments> {
        let mut groups: Vec<PostComments> = posts
            .into_iter()
            .map(|post| PostComments {
                post,
                comments: Vec::new(),
            })
            .collect();

        for comment in comments {
            if let Some(group) = groups.iter_mut().find(|g| g.post.id == comment.post_id) {
                group.comments.push(comment.into());
            }
        }

        if skip_empty {
            groups.retain(|g| !g.comments.is_empty());
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;

    fn posts() -> Vec<Post> {
        vec![
            Post::new(PostId(0), "first"),
            Post::new(PostId(1), "second"),
            Post::new(PostId(2), "third"),
        ]
    }

    #[test]
    fn group_keeps_post_order_and_comment_order() {
        let comments = vec![
            Comment::new(CommentId(0), PostId(2), "c"),
            Comment::new(CommentId(0), PostId(0), "a"),
            Comment::new(CommentId(1), PostId(0), "b"),
        ];
        let groups = PostComments::group(posts(), comments, false);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].comments.len(), 2);
        assert_eq!(groups[0].comments[0].comment, "a");
        assert_eq!(groups[0].comments[1].comment, "b");
        assert!(groups[1].comments.is_empty());
        assert_eq!(groups[2].comments[0].comment, "c");
    }

    #[test]
    fn group_can_skip_posts_without_comments() {
        let comments = vec![Comment::new(CommentId(4), PostId(1), "only")];
        let groups = PostComments::group(posts(), comments, true);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].post.id, PostId(1));
    }

    #[test]
    fn group_ignores_orphaned_comments() {
        let comments = vec![Comment::new(CommentId(0), PostId(9), "orphan")];
        let groups = PostComments::group(posts(), comments, true);
        assert!(groups.is_empty());
    }

    #[test]
    fn grouping_wire_shape() {
        let grouping = PostComments::new(
            Post::new(PostId(0), "Test Post"),
            vec![Comment::new(CommentId(0), PostId(0), "Test Comment")],
        );
        assert_json_snapshot!(grouping, @r###"
        {
          "post": {
            "id": 0,
            "body": "Test Post"
          },
          "comments": [
            {
              "id": 0,
              "comment": "Test Comment"
            }
          ]
        }
        "###);
    }
}
