use foodgram_test_utils::prelude::*;

use crate::model::user::CreateUserDto;

mod login;

fn registration(username: &str, email: &str) -> CreateUserDto {
    CreateUserDto {
        email: email.to_string(),
        username: username.to_string(),
        first_name: "Alice".to_string(),
        last_name: "Smith".to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}
