mod handlers;
mod parser;

pub use handlers::{handle_authenticate, handle_register};
pub use parser::{LoginRequest, RegisterRequest, parse_login, parse_register, read_request_line};
