pub mod animatable;
pub mod ease;
pub mod transition;
