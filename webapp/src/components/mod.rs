pub mod cards;
pub mod navigation;
