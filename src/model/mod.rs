mod award;
mod champion;
mod event;
mod house;
mod registration;
mod result;
mod standing;
mod student;

pub use award::*;
pub use champion::*;
pub use event::*;
pub use house::*;
pub use registration::*;
pub use result::*;
pub use standing::*;
pub use student::*;
