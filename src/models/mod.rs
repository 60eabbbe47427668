pub mod angle;
pub mod record;
pub mod shower;
pub mod time;

pub use record::*;
pub use shower::*;
pub use time::*;
