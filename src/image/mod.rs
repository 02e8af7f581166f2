pub mod array;
pub mod io;

pub use self::array::{Array, CanvasArray};
pub use self::io::{parse_format, write_json_file};
