mod logging;
pub use logging::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};

mod tensor;
pub use tensor::*;

mod vec2;
pub use vec2::*;

// re-exported so downstream crates can reach the facade through base::log
pub use log;
