// Ports - boundary between the caller and the library

pub mod provided;
pub mod required;

pub use provided::*;
pub use required::*;
