//! Daybook: a daily journal with a live word count and a zoomable theme.

pub mod app;
pub mod ui;
