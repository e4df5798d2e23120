//! Fixture seeding for the test database and local development.
//!
//! Two users, two posts by the first user, two comments and two likes by
//! the first user on the first post. Emails are randomly generated so the
//! seed can be re-run against a non-empty database.

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use sqlx::PgPool;
use tracing::info;

use momo_core::result::AppResult;
use momo_core::traits::Repository;
use momo_core::types::{PostId, UserId};
use momo_database::repositories::{
    CommentRepository, LikeRepository, PostRepository, UserRepository,
};
use momo_entity::{CommentDraft, LikeDraft, PostDraft, UserDraft};

use crate::password::PasswordHasher;

/// Password shared by every seeded user.
pub const SEED_PASSWORD: &str = "password";

/// What [`seed_fixtures`] inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub users: Vec<UserId>,
    pub posts: Vec<PostId>,
    pub comments: usize,
    pub likes: usize,
}

/// Insert the fixture rows and report their ids.
pub async fn seed_fixtures(pool: &PgPool) -> AppResult<SeedReport> {
    info!("Seeding fixtures");

    let users = UserRepository::new(pool.clone());
    let posts = PostRepository::new(pool.clone());
    let comments = CommentRepository::new(pool.clone());
    let likes = LikeRepository::new(pool.clone());

    let password_hash = PasswordHasher::new()
        .hash_password_blocking(SEED_PASSWORD.to_string())
        .await?;

    let mut user_ids = Vec::new();
    for name in ["Test User", "Test User 2"] {
        let email: String = SafeEmail().fake();
        let user = users
            .create(&UserDraft {
                name: name.to_string(),
                email,
                password_hash: password_hash.clone(),
            })
            .await?;
        user_ids.push(user.id);
    }
    let author = user_ids[0];

    let mut post_ids = Vec::new();
    for (title, content) in [
        ("Test Post", "Test Post Body"),
        ("Test Post 2", "Test Post Body 2"),
    ] {
        let post = posts
            .create(&PostDraft {
                title: title.to_string(),
                content: content.to_string(),
                user_id: author,
            })
            .await?;
        post_ids.push(post.id);
    }
    let first_post = post_ids[0];

    let mut comment_count = 0;
    for content in ["Test Comment Body", "Test Comment Body 2"] {
        comments
            .create(&CommentDraft {
                content: content.to_string(),
                user_id: author,
                post_id: first_post,
            })
            .await?;
        comment_count += 1;
    }

    let like = LikeDraft {
        user_id: author,
        post_id: first_post,
    };
    let mut like_count = 0;
    for _ in 0..2 {
        likes.create(&like).await?;
        like_count += 1;
    }

    let report = SeedReport {
        users: user_ids,
        posts: post_ids,
        comments: comment_count,
        likes: like_count,
    };
    info!(?report, "Fixtures seeded");
    Ok(report)
}
