pub mod gateway;
pub mod memory_store;
pub mod storage;
pub mod validation;
