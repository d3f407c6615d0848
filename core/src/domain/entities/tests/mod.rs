mod token_tests;
mod user_tests;
