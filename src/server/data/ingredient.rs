use migration::{Expr, ExprTrait, Func, LikeExpr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::db::IngredientModel;

/// Rows per insert statement when importing the catalog
const IMPORT_BATCH_SIZE: usize = 500;

pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, ingredient_id: i32) -> Result<Option<IngredientModel>, DbErr> {
        entity::prelude::Ingredient::find_by_id(ingredient_id)
            .one(self.db)
            .await
    }

    /// Lists ingredients ordered by name, optionally filtered by a case-insensitive name prefix
    pub async fn search(&self, name_prefix: Option<&str>) -> Result<Vec<IngredientModel>, DbErr> {
        let mut query = entity::prelude::Ingredient::find();

        if let Some(prefix) = name_prefix.filter(|p| !p.is_empty()) {
            let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));

            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::ingredient::Column::Name)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        query
            .order_by_asc(entity::ingredient::Column::Name)
            .order_by_asc(entity::ingredient::Column::MeasurementUnit)
            .all(self.db)
            .await
    }

    /// Returns which of the provided ingredient IDs exist
    pub async fn get_existing_ids(&self, ingredient_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ingredient::find()
            .select_only()
            .column(entity::ingredient::Column::Id)
            .filter(entity::ingredient::Column::Id.is_in(ingredient_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Inserts catalog entries, skipping (name, measurement_unit) pairs which already exist
    ///
    /// Returns the number of rows inserted.
    pub async fn insert_many_ignoring_existing(
        &self,
        ingredients: Vec<(String, String)>, // (name, measurement_unit)
    ) -> Result<u64, DbErr> {
        let mut inserted = 0;

        for batch in ingredients.chunks(IMPORT_BATCH_SIZE) {
            let models = batch.iter().map(|(name, measurement_unit)| {
                entity::ingredient::ActiveModel {
                    name: ActiveValue::Set(name.clone()),
                    measurement_unit: ActiveValue::Set(measurement_unit.clone()),
                    ..Default::default()
                }
            });

            inserted += entity::prelude::Ingredient::insert_many(models)
                .on_conflict(
                    OnConflict::columns([
                        entity::ingredient::Column::Name,
                        entity::ingredient::Column::MeasurementUnit,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }
}

/// Escapes LIKE wildcards so user input only matches literally
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
