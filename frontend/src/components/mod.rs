pub mod calendar;
pub mod day_modal;
pub mod header;
pub mod icons;
pub mod legend;
