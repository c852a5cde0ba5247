#![allow(dead_code)]

pub mod mock_log_provider;
