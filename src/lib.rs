pub mod astro;
pub mod calendar;
pub mod fetch;
pub mod parse;
pub mod table;
