pub mod miniapp;
