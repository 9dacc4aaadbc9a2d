mod account_tests;
mod auth_tests;
