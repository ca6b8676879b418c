pub mod loading;
pub mod navigation;
