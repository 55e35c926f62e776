//! Add and remove operations for the favorite, shopping cart and follow relations.
//!
//! A pair is either present or absent. `add` moves it from absent to present and `remove`
//! from present to absent; asking for the state a pair is already in is an error.

use std::{collections::HashSet, fmt, marker::PhantomData};

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::relation::{Membership, RelationRepository},
    error::{relation::RelationError, Error},
    service::is_unique_violation,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationKind {
    Favorite,
    ShoppingCart,
    Follow,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favorite => write!(f, "favorites"),
            Self::ShoppingCart => write!(f, "shopping cart"),
            Self::Follow => write!(f, "subscriptions"),
        }
    }
}

/// A membership table exposed as a toggle.
pub trait Toggle: Membership {
    const KIND: RelationKind;

    /// Rejects pairs which may never be added
    fn validate(_subject_id: i32, _object_id: i32) -> Result<(), RelationError> {
        Ok(())
    }
}

impl Toggle for entity::favorite::Entity {
    const KIND: RelationKind = RelationKind::Favorite;
}

impl Toggle for entity::shopping_cart::Entity {
    const KIND: RelationKind = RelationKind::ShoppingCart;
}

impl Toggle for entity::follow::Entity {
    const KIND: RelationKind = RelationKind::Follow;

    fn validate(subject_id: i32, object_id: i32) -> Result<(), RelationError> {
        if subject_id == object_id {
            return Err(RelationError::SelfFollow);
        }

        Ok(())
    }
}

fn already_present<E: Toggle>(object_id: i32) -> RelationError {
    RelationError::AlreadyPresent {
        kind: E::KIND,
        object_id,
    }
}

pub struct RelationService<'a, E: Toggle> {
    db: &'a DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<'a, E: Toggle> RelationService<'a, E> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Marks the pair as present
    ///
    /// # Returns
    /// - `Ok(())` - The pair was absent and has been added
    /// - `Err(Error::RelationError(RelationError::AlreadyPresent))` - The pair was already present,
    ///   including when a concurrent add won the race on the unique constraint
    /// - `Err(Error::RelationError(RelationError::SelfFollow))` - A user tried to follow themselves
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add(&self, subject_id: i32, object_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        Self::add_in(&txn, subject_id, object_id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Marks the pair as absent
    ///
    /// # Returns
    /// - `Ok(())` - The pair was present and has been removed
    /// - `Err(Error::RelationError(RelationError::NotPresent))` - The pair was already absent
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove(&self, subject_id: i32, object_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        Self::remove_in(&txn, subject_id, object_id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Same as [`Self::add`] on a connection or transaction owned by the caller
    pub async fn add_in<C: ConnectionTrait>(
        db: &C,
        subject_id: i32,
        object_id: i32,
    ) -> Result<(), Error> {
        E::validate(subject_id, object_id)?;

        if RelationRepository::<_, E>::new(db)
            .exists(subject_id, object_id)
            .await?
        {
            return Err(already_present::<E>(object_id).into());
        }

        Self::insert_in(db, subject_id, object_id).await
    }

    /// Same as [`Self::remove`] on a connection or transaction owned by the caller
    pub async fn remove_in<C: ConnectionTrait>(
        db: &C,
        subject_id: i32,
        object_id: i32,
    ) -> Result<(), Error> {
        let removed = RelationRepository::<_, E>::new(db)
            .delete(subject_id, object_id)
            .await?;

        if removed == 0 {
            return Err(RelationError::NotPresent {
                kind: E::KIND,
                object_id,
            }
            .into());
        }

        Ok(())
    }

    /// Inserts the pair without checking for it first
    ///
    /// A pair already stored, e.g. by a concurrent add, is rejected by the unique constraint
    /// and reported as `AlreadyPresent`.
    pub(crate) async fn insert_in<C: ConnectionTrait>(
        db: &C,
        subject_id: i32,
        object_id: i32,
    ) -> Result<(), Error> {
        match RelationRepository::<_, E>::new(db)
            .insert(subject_id, object_id)
            .await
        {
            Ok(()) => Ok(()),
            Err(err) if is_unique_violation(&err) => Err(already_present::<E>(object_id).into()),
            Err(err) => Err(err.into()),
        }
    }

    /// Whether the pair is present, always false for anonymous subjects
    pub async fn contains(&self, subject_id: Option<i32>, object_id: i32) -> Result<bool, Error> {
        let Some(subject_id) = subject_id else {
            return Ok(false);
        };

        Ok(RelationRepository::<_, E>::new(self.db)
            .exists(subject_id, object_id)
            .await?)
    }

    /// Returns which of the objects are paired with the subject, empty for anonymous subjects
    pub async fn present_among(
        &self,
        subject_id: Option<i32>,
        object_ids: &[i32],
    ) -> Result<HashSet<i32>, Error> {
        let Some(subject_id) = subject_id else {
            return Ok(HashSet::new());
        };

        Ok(RelationRepository::<_, E>::new(self.db)
            .present_among(subject_id, object_ids)
            .await?)
    }

    /// Returns the objects paired with the subject
    pub async fn object_ids(&self, subject_id: i32) -> Result<Vec<i32>, Error> {
        Ok(RelationRepository::<_, E>::new(self.db)
            .object_ids(subject_id)
            .await?)
    }
}
