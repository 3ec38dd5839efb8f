use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use ripple_api_schema::{likes, posts, users};

use crate::domain::repository::{LikeRepository, PostRepository, UserRepository};
use crate::domain::types::{Post, User};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            is_verified: Set(user.is_verified),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn mark_verified(&self, id: Uuid) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(id),
            is_verified: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark user verified")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        is_verified: model.is_verified,
    }
}

// ── Post repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPostRepository {
    pub db: DatabaseConnection,
}

impl PostRepository for DbPostRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Post>, ApiError> {
        let model = posts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find post by id")?;
        Ok(model.map(post_from_model))
    }

    async fn list_newest_first(&self) -> Result<Vec<Post>, ApiError> {
        let models = posts::Entity::find()
            .order_by_desc(posts::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list posts newest first")?;
        Ok(models.into_iter().map(post_from_model).collect())
    }

    async fn create(&self, post: &Post) -> Result<(), ApiError> {
        posts::ActiveModel {
            id: Set(post.id),
            author_id: Set(post.author_id),
            content: Set(post.content.clone()),
            created_at: Set(post.created_at),
        }
        .insert(&self.db)
        .await
        .context("create post")?;
        Ok(())
    }

    async fn update_content(&self, id: Uuid, content: &str) -> Result<(), ApiError> {
        posts::ActiveModel {
            id: Set(id),
            content: Set(content.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update post content")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        posts::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete post")?;
        Ok(())
    }
}

fn post_from_model(model: posts::Model) -> Post {
    Post {
        id: model.id,
        author_id: model.author_id,
        content: model.content,
        created_at: model.created_at,
    }
}

// ── Like repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLikeRepository {
    pub db: DatabaseConnection,
}

impl LikeRepository for DbLikeRepository {
    async fn count(&self, post_id: Uuid) -> Result<u64, ApiError> {
        use sea_orm::PaginatorTrait;
        let count = likes::Entity::find()
            .filter(likes::Column::PostId.eq(post_id))
            .count(&self.db)
            .await
            .context("count likes")?;
        Ok(count)
    }

    async fn exists(&self, post_id: Uuid, user_id: Uuid) -> Result<bool, ApiError> {
        let model = likes::Entity::find()
            .filter(likes::Column::PostId.eq(post_id))
            .filter(likes::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find like")?;
        Ok(model.is_some())
    }

    async fn insert(&self, post_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        likes::ActiveModel {
            post_id: Set(post_id),
            user_id: Set(user_id),
        }
        .insert(&self.db)
        .await
        .context("insert like")?;
        Ok(())
    }

    async fn delete(&self, post_id: Uuid, user_id: Uuid) -> Result<bool, ApiError> {
        let result = likes::Entity::delete_many()
            .filter(likes::Column::PostId.eq(post_id))
            .filter(likes::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete like")?;
        Ok(result.rows_affected > 0)
    }
}
