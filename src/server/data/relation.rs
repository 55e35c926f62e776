//! Membership tables pairing a subject user with an object (recipe or author).
//!
//! Favorite, ShoppingCart and Follow share one shape: a composite primary key of
//! (subject, object) and a creation timestamp. [`Membership`] describes that shape for an
//! entity so a single [`RelationRepository`] serves all three tables.

use std::{collections::HashSet, marker::PhantomData};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// A table of (subject, object) pairs unique per pair.
pub trait Membership: EntityTrait {
    /// Row inserted to mark a pair as present
    type Row: ActiveModelTrait<Entity = Self> + Send;

    /// Column holding the acting user
    fn subject_column() -> Self::Column;
    /// Column holding the recipe or author the user acts on
    fn object_column() -> Self::Column;
    fn new_row(subject_id: i32, object_id: i32) -> Self::Row;
}

impl Membership for entity::favorite::Entity {
    type Row = entity::favorite::ActiveModel;

    fn subject_column() -> Self::Column {
        entity::favorite::Column::UserId
    }

    fn object_column() -> Self::Column {
        entity::favorite::Column::RecipeId
    }

    fn new_row(subject_id: i32, object_id: i32) -> Self::Row {
        entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(subject_id),
            recipe_id: ActiveValue::Set(object_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
    }
}

impl Membership for entity::shopping_cart::Entity {
    type Row = entity::shopping_cart::ActiveModel;

    fn subject_column() -> Self::Column {
        entity::shopping_cart::Column::UserId
    }

    fn object_column() -> Self::Column {
        entity::shopping_cart::Column::RecipeId
    }

    fn new_row(subject_id: i32, object_id: i32) -> Self::Row {
        entity::shopping_cart::ActiveModel {
            user_id: ActiveValue::Set(subject_id),
            recipe_id: ActiveValue::Set(object_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
    }
}

impl Membership for entity::follow::Entity {
    type Row = entity::follow::ActiveModel;

    fn subject_column() -> Self::Column {
        entity::follow::Column::UserId
    }

    fn object_column() -> Self::Column {
        entity::follow::Column::AuthorId
    }

    fn new_row(subject_id: i32, object_id: i32) -> Self::Row {
        entity::follow::ActiveModel {
            user_id: ActiveValue::Set(subject_id),
            author_id: ActiveValue::Set(object_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
    }
}

pub struct RelationRepository<'a, C: ConnectionTrait, E: Membership> {
    db: &'a C,
    _entity: PhantomData<E>,
}

impl<'a, C: ConnectionTrait, E: Membership> RelationRepository<'a, C, E> {
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub async fn exists(&self, subject_id: i32, object_id: i32) -> Result<bool, DbErr> {
        let found = E::find()
            .select_only()
            .column(E::object_column())
            .filter(E::subject_column().eq(subject_id))
            .filter(E::object_column().eq(object_id))
            .into_tuple::<i32>()
            .one(self.db)
            .await?;

        Ok(found.is_some())
    }

    /// Inserts the pair
    ///
    /// Fails with a unique constraint violation if the pair is already present.
    pub async fn insert(&self, subject_id: i32, object_id: i32) -> Result<(), DbErr> {
        E::insert(E::new_row(subject_id, object_id))
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Deletes the pair, returning the number of rows removed
    pub async fn delete(&self, subject_id: i32, object_id: i32) -> Result<u64, DbErr> {
        let result = E::delete_many()
            .filter(E::subject_column().eq(subject_id))
            .filter(E::object_column().eq(object_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns the objects paired with the subject, highest ID first
    pub async fn object_ids(&self, subject_id: i32) -> Result<Vec<i32>, DbErr> {
        E::find()
            .select_only()
            .column(E::object_column())
            .filter(E::subject_column().eq(subject_id))
            .order_by_desc(E::object_column())
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Returns which of the provided objects are paired with the subject
    pub async fn present_among(
        &self,
        subject_id: i32,
        object_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        if object_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let present = E::find()
            .select_only()
            .column(E::object_column())
            .filter(E::subject_column().eq(subject_id))
            .filter(E::object_column().is_in(object_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(present.into_iter().collect())
    }
}
