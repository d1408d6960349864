//! The primary components provided by `partial_date`.

mod input;
mod partial_date;

#[doc(inline)]
pub use input::Input;
#[doc(inline)]
pub use partial_date::PartialDate;
