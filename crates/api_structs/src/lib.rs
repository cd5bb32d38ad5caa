mod event;
mod notification;
mod opportunity;
mod status;

pub mod dtos {
    pub use crate::event::dtos::*;
    pub use crate::notification::dtos::*;
    pub use crate::opportunity::dtos::*;
}

pub use crate::event::api::*;
pub use crate::notification::api::*;
pub use crate::opportunity::api::*;
pub use crate::status::api::*;
