use foodgram_test_utils::prelude::*;

mod set_password;
