pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::TEST_PASSWORD,
        fixtures::{recipe::factory as recipe_factory, user::factory as user_factory},
        test_setup_with_recipe_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}
