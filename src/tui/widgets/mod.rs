//! Reusable widgets for the TUI

pub mod input;
pub mod toast;

pub use input::{TextInput, TextInputWidget};
pub use toast::{Toast, ToastKind, ToastQueue, ToastWidget};
