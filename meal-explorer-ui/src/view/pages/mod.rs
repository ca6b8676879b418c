pub mod areas;
pub mod categories;
pub mod contact;
pub mod detail;
pub mod ingredients;
pub mod meals;
pub mod search;
