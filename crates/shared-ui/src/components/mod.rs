pub mod badge;
pub mod button;
pub mod checkbox;
pub mod form;
pub mod form_select;
pub mod input;
pub mod panel;
pub mod textarea;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use checkbox::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use panel::*;
pub use textarea::*;
pub use toast::*;
