pub mod details;
pub mod list;
pub mod test_result;
