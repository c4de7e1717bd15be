pub mod utils;

mod state_tests;
mod viewmodel_tests;
