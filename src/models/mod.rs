pub mod daily;
pub mod monthly;
pub mod profile;
pub mod quarterly;
pub mod sheet;
pub mod user;
pub mod weekly;
