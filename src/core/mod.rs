pub mod classifier;
pub mod config;
pub mod helpers;
pub mod validator;
pub mod word_bank;
